use gdpt_core::model::{QuizResult, TopicKey, option_label};
use services::{AnswerFeedback, QuizError, QuizPhase, QuizService, QuizSession};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Next,
}

/// How an option button is drawn after the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Idle,
    Correct,
    Wrong,
    Muted,
}

impl OptionTone {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            OptionTone::Idle => "quiz-option",
            OptionTone::Correct => "quiz-option quiz-option--correct",
            OptionTone::Wrong => "quiz-option quiz-option--wrong",
            OptionTone::Muted => "quiz-option quiz-option--muted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: char,
    pub text: String,
    pub tone: OptionTone,
}

pub struct QuizVm {
    session: QuizSession,
    feedback: Option<AnswerFeedback>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            feedback: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.session.current_question().map(|q| q.text())
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.session.current_question().and_then(|q| q.image_url())
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "Câu {} / {}",
            self.session.current_index() + 1,
            self.session.total()
        )
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Điểm: {}", self.session.score())
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.session.is_last() {
            "Xem kết quả"
        } else {
            "Câu tiếp"
        }
    }

    #[must_use]
    pub fn options(&self) -> Vec<OptionVm> {
        let Some(question) = self.session.current_question() else {
            return Vec::new();
        };
        question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let tone = match &self.feedback {
                    None => OptionTone::Idle,
                    Some(feedback) if index == feedback.correct_answer => OptionTone::Correct,
                    Some(feedback) if index == feedback.selected => OptionTone::Wrong,
                    Some(_) => OptionTone::Muted,
                };
                OptionVm {
                    index,
                    label: option_label(index),
                    text: text.clone(),
                    tone,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.session.result()
    }

    /// Apply one user intent to the session.
    ///
    /// # Errors
    ///
    /// Returns the session's `QuizError` unchanged; the vm is not modified.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<QuizPhase, QuizError> {
        match intent {
            QuizIntent::Select(index) => {
                let feedback = self.session.submit_answer(index)?;
                self.feedback = Some(feedback);
            }
            QuizIntent::Next => {
                self.session.advance()?;
                self.feedback = None;
            }
        }
        Ok(self.session.phase())
    }
}

/// Headline shown on the result screen.
#[must_use]
pub fn result_message(result: &QuizResult) -> &'static str {
    if result.passed {
        "Chúc mừng! Em đã đạt."
    } else {
        "Chưa đạt, hãy ôn lại và thử lần nữa."
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyQuiz` when the topic has no questions.
/// Returns `ViewError::Unknown` for other failures.
pub async fn start_quiz(service: &QuizService, topic: TopicKey) -> Result<QuizVm, ViewError> {
    let session = service
        .start_quiz(topic)
        .await
        .map_err(|_| ViewError::Unknown)?;
    if session.phase() == QuizPhase::Empty {
        return Err(ViewError::EmptyQuiz);
    }
    Ok(QuizVm::new(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdpt_core::model::{DEFAULT_PASS_THRESHOLD, QuestionDraft, QuestionId};

    fn vm() -> QuizVm {
        let questions = (0..2)
            .map(|i| {
                QuestionDraft::new(TopicKey::Cipher, format!("Q{i}"), ["a", "b", "c", "d"], 2)
                    .validate(TopicKey::Cipher)
                    .unwrap()
                    .assign_id(QuestionId::new(format!("cipher-{i}")))
            })
            .collect();
        QuizVm::new(QuizSession::new(TopicKey::Cipher, questions, DEFAULT_PASS_THRESHOLD))
    }

    #[test]
    fn options_are_idle_until_answered() {
        let vm = vm();
        let options = vm.options();
        assert_eq!(options.len(), 4);
        assert!(options.iter().all(|o| o.tone == OptionTone::Idle));
        assert_eq!(options[3].label, 'D');
        assert_eq!(vm.progress_label(), "Câu 1 / 2");
    }

    #[test]
    fn wrong_pick_marks_both_options() {
        let mut vm = vm();
        vm.apply(QuizIntent::Select(0)).unwrap();
        let tones: Vec<_> = vm.options().iter().map(|o| o.tone).collect();
        assert_eq!(
            tones,
            vec![
                OptionTone::Wrong,
                OptionTone::Muted,
                OptionTone::Correct,
                OptionTone::Muted
            ]
        );
    }

    #[test]
    fn next_clears_feedback_and_finishes() {
        let mut vm = vm();
        vm.apply(QuizIntent::Select(2)).unwrap();
        assert_eq!(vm.next_label(), "Câu tiếp");
        vm.apply(QuizIntent::Next).unwrap();
        assert!(vm.feedback().is_none());

        vm.apply(QuizIntent::Select(2)).unwrap();
        assert_eq!(vm.next_label(), "Xem kết quả");
        assert_eq!(vm.apply(QuizIntent::Next), Ok(QuizPhase::Result));

        let result = vm.result().unwrap();
        assert_eq!(result.percentage, 100);
        assert_eq!(result_message(&result), "Chúc mừng! Em đã đạt.");
    }

    #[test]
    fn misuse_leaves_vm_untouched() {
        let mut vm = vm();
        assert_eq!(vm.apply(QuizIntent::Next), Err(QuizError::NotAnswered));
        vm.apply(QuizIntent::Select(1)).unwrap();
        assert_eq!(vm.apply(QuizIntent::Select(2)), Err(QuizError::AlreadyAnswered));
        assert_eq!(vm.feedback().map(|f| f.selected), Some(1));
    }
}
