use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use gdpt_core::signal::{ToneSchedule, ToneSettings};

use crate::Clock;
use crate::error::SignalError;

/// Audio backend that renders a tone schedule.
///
/// `start` must return promptly; the sink plays the schedule on its own time.
pub trait ToneSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `SignalError::Unavailable` if the backend cannot produce sound.
    fn start(&self, schedule: &ToneSchedule) -> Result<(), SignalError>;

    /// Silence whatever is playing. Idempotent.
    fn stop(&self);
}

/// Sink that drops everything, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl ToneSink for SilentSink {
    fn start(&self, _schedule: &ToneSchedule) -> Result<(), SignalError> {
        Ok(())
    }

    fn stop(&self) {}
}

/// Plays Morse symbol strings through a single exclusive oscillator.
///
/// A play request while a previous schedule is still sounding is rejected,
/// never queued. The player frees itself once the clock passes the end of
/// the schedule.
#[derive(Clone)]
pub struct SignalPlayer {
    sink: Arc<dyn ToneSink>,
    settings: ToneSettings,
    clock: Clock,
    busy_until: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl SignalPlayer {
    #[must_use]
    pub fn new(sink: Arc<dyn ToneSink>, settings: ToneSettings, clock: Clock) -> Self {
        Self {
            sink,
            settings,
            clock,
            busy_until: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn settings(&self) -> ToneSettings {
        self.settings
    }

    /// Schedule `symbols` (`.`, `-`, space) for playback now.
    ///
    /// # Errors
    ///
    /// - `SignalError::Busy` while another schedule is sounding
    /// - `SignalError::EmptySequence` if there is nothing audible
    /// - `SignalError::Unavailable` if the sink fails to start
    pub fn play(&self, symbols: &str) -> Result<ToneSchedule, SignalError> {
        self.play_at(symbols, self.clock.now())
    }

    /// Like [`play`](Self::play) with an explicit start instant.
    ///
    /// # Errors
    ///
    /// Same as [`play`](Self::play).
    pub fn play_at(&self, symbols: &str, now: DateTime<Utc>) -> Result<ToneSchedule, SignalError> {
        let mut busy_until = self.busy_until.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(until) = *busy_until {
            if now < until {
                debug!(%until, "signal rejected: player busy");
                return Err(SignalError::Busy);
            }
            *busy_until = None;
        }

        let schedule = ToneSchedule::from_symbols(symbols, self.settings);
        if !schedule.has_tones() {
            return Err(SignalError::EmptySequence);
        }

        let length = chrono::Duration::from_std(schedule.total_duration())
            .map_err(|e| SignalError::Unavailable(e.to_string()))?;
        let until = now
            .checked_add_signed(length)
            .ok_or_else(|| SignalError::Unavailable("schedule ends out of range".into()))?;

        if let Err(err) = self.sink.start(&schedule) {
            warn!(error = %err, "tone sink failed to start");
            return Err(err);
        }

        *busy_until = Some(until);
        debug!(
            segments = schedule.segments().len(),
            duration_ms = schedule.total_duration().as_millis(),
            "signal playing"
        );
        Ok(schedule)
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.is_busy_at(self.clock.now())
    }

    #[must_use]
    pub fn is_busy_at(&self, now: DateTime<Utc>) -> bool {
        self.busy_until
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some_and(|until| now < until)
    }

    /// Stop playback and release the oscillator immediately.
    pub fn cancel(&self) {
        let mut busy_until = self.busy_until.lock().unwrap_or_else(PoisonError::into_inner);
        if busy_until.take().is_some() {
            debug!("signal cancelled");
        }
        self.sink.stop();
    }
}
