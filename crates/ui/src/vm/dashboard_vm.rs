use gdpt_core::model::{Section, TopicKey};
use services::TopicSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub key: TopicKey,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color_class: &'static str,
    pub count_label: String,
    pub can_quiz: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub title: &'static str,
    pub cards: Vec<TopicCardVm>,
}

#[must_use]
pub fn map_topic_card(summary: &TopicSummary) -> TopicCardVm {
    let config = summary.config;
    let count_label = if summary.has_quiz() {
        format!("{} câu hỏi", summary.question_count)
    } else {
        "Chưa có câu hỏi".to_string()
    };
    TopicCardVm {
        key: config.key,
        label: config.label,
        description: config.description,
        icon: config.icon,
        color_class: config.color_class,
        count_label,
        can_quiz: summary.has_quiz(),
    }
}

#[must_use]
pub fn map_dashboard_sections(sections: &[(Section, Vec<TopicSummary>)]) -> Vec<SectionVm> {
    sections
        .iter()
        .map(|(section, topics)| SectionVm {
            title: section.label(),
            cards: topics.iter().map(map_topic_card).collect(),
        })
        .collect()
}
