use crate::model::{Section, TopicConfig, TopicKey};

pub static TOPICS: [TopicConfig; 7] = [
    TopicConfig {
        key: TopicKey::Morse,
        label: "Morse",
        description: "Tích, te và cách nghe tín hiệu âm thanh.",
        icon: "📡",
        color_class: "topic--morse",
        section: Section::Signals,
    },
    TopicConfig {
        key: TopicKey::Semaphore,
        label: "Semaphore",
        description: "Truyền tin bằng hai cờ theo góc tay.",
        icon: "🚩",
        color_class: "topic--semaphore",
        section: Section::Signals,
    },
    TopicConfig {
        key: TopicKey::Cipher,
        label: "Mật thư",
        description: "Dời chữ, thay số, đảo ngược và Pigpen.",
        icon: "🔐",
        color_class: "topic--cipher",
        section: Section::Signals,
    },
    TopicConfig {
        key: TopicKey::FirstAid,
        label: "Cứu thương",
        description: "Sơ cứu vết thương, bong gân, ngất xỉu.",
        icon: "⛑️",
        color_class: "topic--first-aid",
        section: Section::Scouting,
    },
    TopicConfig {
        key: TopicKey::Knots,
        label: "Gút dây",
        description: "Các nút dây căn bản dùng khi cắm trại.",
        icon: "🪢",
        color_class: "topic--knots",
        section: Section::Scouting,
    },
    TopicConfig {
        key: TopicKey::TrailSigns,
        label: "Dấu đi đường",
        description: "Ký hiệu chỉ đường trong trò chơi lớn.",
        icon: "🧭",
        color_class: "topic--trail",
        section: Section::Scouting,
    },
    TopicConfig {
        key: TopicKey::Doctrine,
        label: "Phật pháp",
        description: "Giáo lý căn bản cho đoàn sinh.",
        icon: "☸️",
        color_class: "topic--doctrine",
        section: Section::Doctrine,
    },
];

/// Registry entry for `key`.
#[must_use]
pub fn config_for(key: TopicKey) -> &'static TopicConfig {
    // TOPICS is listed in TopicKey::ALL order
    &TOPICS[TopicKey::ALL
        .iter()
        .position(|candidate| *candidate == key)
        .unwrap_or_default()]
}

/// Topics belonging to a dashboard section, in registry order.
pub fn in_section(section: Section) -> impl Iterator<Item = &'static TopicConfig> {
    TOPICS.iter().filter(move |config| config.section == section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_key_order() {
        for (config, key) in TOPICS.iter().zip(TopicKey::ALL) {
            assert_eq!(config.key, key);
        }
    }

    #[test]
    fn signals_section_holds_three_topics() {
        assert_eq!(in_section(Section::Signals).count(), 3);
        assert_eq!(in_section(Section::Doctrine).count(), 1);
    }
}
