//! Tone scheduling for Morse playback.
//!
//! Turns a dot/dash string into a timeline of tone and silence segments. The
//! schedule is pure data; playing it is the job of a tone sink.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::transform::morse::{DASH, DOT, LETTER_GAP};

pub const DEFAULT_UNIT: Duration = Duration::from_millis(80);
pub const DEFAULT_FREQUENCY_HZ: u32 = 600;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ToneSettingsError {
    #[error("tone unit must be between 10ms and 1s")]
    InvalidUnit,

    #[error("tone frequency must be between 100Hz and 4000Hz")]
    InvalidFrequency,
}

/// Timing and pitch of generated tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneSettings {
    unit: Duration,
    frequency_hz: u32,
}

impl ToneSettings {
    /// # Errors
    ///
    /// Returns `ToneSettingsError` when the unit or frequency is outside a playable range.
    pub fn new(unit: Duration, frequency_hz: u32) -> Result<Self, ToneSettingsError> {
        if unit < Duration::from_millis(10) || unit > Duration::from_secs(1) {
            return Err(ToneSettingsError::InvalidUnit);
        }
        if !(100..=4000).contains(&frequency_hz) {
            return Err(ToneSettingsError::InvalidFrequency);
        }
        Ok(Self { unit, frequency_hz })
    }

    #[must_use]
    pub fn unit(&self) -> Duration {
        self.unit
    }

    #[must_use]
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    Tone,
    Silence,
}

/// One contiguous stretch of tone or silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToneSegment {
    pub kind: SegmentKind,
    pub offset: Duration,
    pub duration: Duration,
}

/// Timeline for one symbol string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneSchedule {
    frequency_hz: u32,
    segments: Vec<ToneSegment>,
    total: Duration,
}

impl ToneSchedule {
    /// Build the timeline for a string over `{'.', '-', ' '}`.
    ///
    /// - dot: tone of 1 unit, then 1 unit of silence
    /// - dash: tone of 3 units, then 1 unit of silence
    /// - space: 3 more units of silence
    ///
    /// Any other character is ignored.
    #[must_use]
    pub fn from_symbols(symbols: &str, settings: ToneSettings) -> Self {
        let unit = settings.unit();
        let mut schedule = Self {
            frequency_hz: settings.frequency_hz(),
            segments: Vec::new(),
            total: Duration::ZERO,
        };

        for symbol in symbols.chars() {
            match symbol {
                DOT => {
                    schedule.push(SegmentKind::Tone, unit);
                    schedule.push(SegmentKind::Silence, unit);
                }
                DASH => {
                    schedule.push(SegmentKind::Tone, unit * 3);
                    schedule.push(SegmentKind::Silence, unit);
                }
                LETTER_GAP => schedule.push(SegmentKind::Silence, unit * 3),
                _ => {}
            }
        }

        schedule
    }

    fn push(&mut self, kind: SegmentKind, duration: Duration) {
        self.segments.push(ToneSegment {
            kind,
            offset: self.total,
            duration,
        });
        self.total += duration;
    }

    #[must_use]
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    #[must_use]
    pub fn segments(&self) -> &[ToneSegment] {
        &self.segments
    }

    /// Audible segments only, in order.
    pub fn tones(&self) -> impl Iterator<Item = &ToneSegment> {
        self.segments
            .iter()
            .filter(|segment| segment.kind == SegmentKind::Tone)
    }

    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.total
    }

    #[must_use]
    pub fn has_tones(&self) -> bool {
        self.tones().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_dash_lasts_six_units() {
        let schedule = ToneSchedule::from_symbols(".-", ToneSettings::default());
        assert_eq!(schedule.total_duration(), Duration::from_millis(480));
        assert_eq!(schedule.segments().len(), 4);
        assert_eq!(schedule.tones().count(), 2);
    }

    #[test]
    fn offsets_are_cumulative() {
        let schedule = ToneSchedule::from_symbols(".-", ToneSettings::default());
        let offsets: Vec<_> = schedule
            .segments()
            .iter()
            .map(|s| s.offset.as_millis())
            .collect();
        assert_eq!(offsets, vec![0, 80, 160, 400]);
    }

    #[test]
    fn gap_adds_three_units_of_silence() {
        let settings = ToneSettings::default();
        let without = ToneSchedule::from_symbols("..", settings).total_duration();
        let with = ToneSchedule::from_symbols(". .", settings).total_duration();
        assert_eq!(with - without, Duration::from_millis(240));
    }

    #[test]
    fn sos_timeline() {
        // 6 dots * 2u + 3 dashes * 4u + 2 gaps * 3u = 30u
        let schedule = ToneSchedule::from_symbols("... --- ...", ToneSettings::default());
        assert_eq!(schedule.total_duration(), DEFAULT_UNIT * 30);
        assert_eq!(schedule.frequency_hz(), 600);
    }

    #[test]
    fn other_characters_are_ignored() {
        let schedule = ToneSchedule::from_symbols("x/", ToneSettings::default());
        assert!(!schedule.has_tones());
        assert_eq!(schedule.total_duration(), Duration::ZERO);
    }

    #[test]
    fn settings_validate_ranges() {
        assert_eq!(
            ToneSettings::new(Duration::from_millis(1), 600),
            Err(ToneSettingsError::InvalidUnit)
        );
        assert_eq!(
            ToneSettings::new(DEFAULT_UNIT, 20),
            Err(ToneSettingsError::InvalidFrequency)
        );
        assert!(ToneSettings::new(Duration::from_millis(120), 800).is_ok());
    }
}
