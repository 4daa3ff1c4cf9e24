use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::content::topics;

/// A skill domain that groups lesson content and a question pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicKey {
    Morse,
    Semaphore,
    Cipher,
    FirstAid,
    Knots,
    TrailSigns,
    Doctrine,
}

impl TopicKey {
    /// Every topic in dashboard order.
    pub const ALL: [TopicKey; 7] = [
        TopicKey::Morse,
        TopicKey::Semaphore,
        TopicKey::Cipher,
        TopicKey::FirstAid,
        TopicKey::Knots,
        TopicKey::TrailSigns,
        TopicKey::Doctrine,
    ];

    /// Stable string key used in routes, config files and seed ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TopicKey::Morse => "morse",
            TopicKey::Semaphore => "semaphore",
            TopicKey::Cipher => "cipher",
            TopicKey::FirstAid => "first_aid",
            TopicKey::Knots => "knots",
            TopicKey::TrailSigns => "trail_signs",
            TopicKey::Doctrine => "doctrine",
        }
    }

    /// Display metadata from the static registry.
    #[must_use]
    pub fn config(self) -> &'static TopicConfig {
        topics::config_for(self)
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown topic key: {raw}")]
pub struct TopicParseError {
    pub raw: String,
}

impl FromStr for TopicKey {
    type Err = TopicParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        TopicKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| TopicParseError { raw: s.to_owned() })
    }
}

/// Dashboard grouping for topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    Signals,
    Scouting,
    Doctrine,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Signals, Section::Scouting, Section::Doctrine];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Section::Signals => "Truyền tin",
            Section::Scouting => "Kỹ năng trại",
            Section::Doctrine => "Phật pháp",
        }
    }
}

/// Read-only display metadata for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicConfig {
    pub key: TopicKey,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color_class: &'static str,
    pub section: Section,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_strings() {
        for key in TopicKey::ALL {
            assert_eq!(key.as_str().parse::<TopicKey>().unwrap(), key);
        }
    }

    #[test]
    fn parsing_accepts_dashes_and_case() {
        assert_eq!("First-Aid".parse::<TopicKey>().unwrap(), TopicKey::FirstAid);
        assert!("astronomy".parse::<TopicKey>().is_err());
    }

    #[test]
    fn every_topic_has_registry_entry() {
        for key in TopicKey::ALL {
            assert_eq!(key.config().key, key);
        }
    }
}
