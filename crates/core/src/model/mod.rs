mod ids;
mod question;
mod result;
mod settings;
mod topic;

pub use ids::QuestionId;
pub use question::{
    OPTION_COUNT, Question, QuestionDraft, QuestionError, ValidatedQuestion, option_label,
};
pub use result::{DEFAULT_PASS_THRESHOLD, QuizResult};
pub use settings::{DEFAULT_SAMPLE_SIZE, QuizPolicy, QuizSettings, SettingsError};
pub use topic::{Section, TopicConfig, TopicKey, TopicParseError};
