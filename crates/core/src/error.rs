use thiserror::Error;

use crate::model::{QuestionError, SettingsError, TopicParseError};
use crate::signal::ToneSettingsError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Topic(#[from] TopicParseError),
    #[error(transparent)]
    Tone(#[from] ToneSettingsError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuizSettings, TopicKey};

    fn parse_settings(topic: &str, sample_size: u32) -> Result<(TopicKey, QuizSettings), Error> {
        let topic = topic.parse::<TopicKey>()?;
        let settings = QuizSettings::new(sample_size, 50)?;
        Ok((topic, settings))
    }

    #[test]
    fn layer_errors_convert_with_question_mark() {
        assert!(parse_settings("knots", 10).is_ok());
        assert!(matches!(parse_settings("astronomy", 10), Err(Error::Topic(_))));
        assert!(matches!(parse_settings("knots", 0), Err(Error::Settings(_))));
    }
}
