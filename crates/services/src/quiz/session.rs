use serde::Serialize;
use tracing::info;

use gdpt_core::model::{OPTION_COUNT, Question, QuizResult, TopicKey};

use crate::error::QuizError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where a session is in its answer/advance cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizPhase {
    /// The topic had no questions; nothing can be answered.
    Empty,
    AwaitingAnswer,
    Answered,
    Result,
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

/// What the UI needs to mark the chosen and the correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub correct_answer: usize,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz attempt over a fixed, already-sampled list of questions.
///
/// Every operation either moves the session forward or returns a `QuizError`
/// and leaves it untouched.
#[derive(Debug, Clone)]
pub struct QuizSession {
    topic: TopicKey,
    questions: Vec<Question>,
    answers: Vec<Option<usize>>,
    current: usize,
    score: u32,
    pass_threshold: u8,
    phase: QuizPhase,
}

impl QuizSession {
    #[must_use]
    pub fn new(topic: TopicKey, questions: Vec<Question>, pass_threshold: u8) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::Empty
        } else {
            QuizPhase::AwaitingAnswer
        };
        Self {
            topic,
            answers: vec![None; questions.len()],
            questions,
            current: 0,
            score: 0,
            pass_threshold,
            phase,
        }
    }

    #[must_use]
    pub fn topic(&self) -> TopicKey {
        self.topic
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based position of the question on screen.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::AwaitingAnswer | QuizPhase::Answered => self.questions.get(self.current),
            QuizPhase::Empty | QuizPhase::Result => None,
        }
    }

    /// Option picked for the current question, if any.
    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Per-question picks, in session order.
    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn pass_threshold(&self) -> u8 {
        self.pass_threshold
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Result
    }

    /// Record the pick for the current question.
    ///
    /// # Errors
    ///
    /// - `QuizError::NoQuestions` for an empty session
    /// - `QuizError::AlreadyAnswered` if the current question has a pick
    /// - `QuizError::Finished` once the result is showing
    /// - `QuizError::AnswerOutOfRange` if `selected` is not an option index
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerFeedback, QuizError> {
        match self.phase {
            QuizPhase::Empty => return Err(QuizError::NoQuestions),
            QuizPhase::Answered => return Err(QuizError::AlreadyAnswered),
            QuizPhase::Result => return Err(QuizError::Finished),
            QuizPhase::AwaitingAnswer => {}
        }
        if selected >= OPTION_COUNT {
            return Err(QuizError::AnswerOutOfRange { index: selected });
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(QuizError::NoQuestions);
        };

        let is_correct = question.is_correct(selected);
        let feedback = AnswerFeedback {
            selected,
            correct_answer: question.correct_answer(),
            is_correct,
            explanation: question.explanation().map(str::to_owned),
        };

        if is_correct {
            self.score += 1;
        }
        self.answers[self.current] = Some(selected);
        self.phase = QuizPhase::Answered;
        Ok(feedback)
    }

    /// Move to the next question, or to the result after the last one.
    ///
    /// # Errors
    ///
    /// - `QuizError::NotAnswered` while the current question has no pick
    /// - `QuizError::NoQuestions` for an empty session
    /// - `QuizError::Finished` once the result is showing
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        match self.phase {
            QuizPhase::Empty => Err(QuizError::NoQuestions),
            QuizPhase::AwaitingAnswer => Err(QuizError::NotAnswered),
            QuizPhase::Result => Err(QuizError::Finished),
            QuizPhase::Answered if self.is_last() => {
                self.phase = QuizPhase::Result;
                let result = self.score_snapshot();
                info!(
                    topic = %self.topic,
                    score = result.score,
                    total = result.total,
                    percentage = result.percentage,
                    passed = result.passed,
                    "quiz finished"
                );
                Ok(self.phase)
            }
            QuizPhase::Answered => {
                self.current += 1;
                self.phase = QuizPhase::AwaitingAnswer;
                Ok(self.phase)
            }
        }
    }

    /// Final result, available only once the session is finished.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.is_finished().then(|| self.score_snapshot())
    }

    /// Score so far against the full session length.
    #[must_use]
    pub fn score_snapshot(&self) -> QuizResult {
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        QuizResult::compute(self.score, total, self.pass_threshold)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use gdpt_core::model::{DEFAULT_PASS_THRESHOLD, QuestionDraft, QuestionId};

    // Every question's correct answer is option B.
    fn session(count: usize) -> QuizSession {
        let questions = (0..count)
            .map(|i| {
                QuestionDraft::new(TopicKey::Knots, format!("Q{i}"), ["a", "b", "c", "d"], 1)
                    .with_explanation(format!("why {i}"))
                    .validate(TopicKey::Knots)
                    .unwrap()
                    .assign_id(QuestionId::new(format!("knots-{i}")))
            })
            .collect();
        QuizSession::new(TopicKey::Knots, questions, DEFAULT_PASS_THRESHOLD)
    }

    fn play(session: &mut QuizSession, picks: &[usize]) {
        for pick in picks {
            session.submit_answer(*pick).unwrap();
            session.advance().unwrap();
        }
    }

    #[test]
    fn three_of_five_passes() {
        let mut s = session(5);
        play(&mut s, &[1, 1, 1, 0, 2]);
        let result = s.result().unwrap();
        assert_eq!((result.score, result.total, result.percentage), (3, 5, 60));
        assert!(result.passed);
    }

    #[test]
    fn two_of_five_fails() {
        let mut s = session(5);
        play(&mut s, &[1, 1, 0, 0, 0]);
        let result = s.result().unwrap();
        assert_eq!(result.percentage, 40);
        assert!(!result.passed);
    }

    #[test]
    fn feedback_reports_correct_option_and_explanation() {
        let mut s = session(2);
        let feedback = s.submit_answer(3).unwrap();
        assert_eq!(
            feedback,
            AnswerFeedback {
                selected: 3,
                correct_answer: 1,
                is_correct: false,
                explanation: Some("why 0".into()),
            }
        );
        assert_eq!(s.selected_answer(), Some(3));
    }

    #[test]
    fn double_submit_keeps_score() {
        let mut s = session(3);
        s.submit_answer(1).unwrap();
        let err = s.submit_answer(1).unwrap_err();
        assert_eq!(err, QuizError::AlreadyAnswered);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn out_of_range_answer_changes_nothing() {
        let mut s = session(3);
        let err = s.submit_answer(4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(s.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(s.selected_answer(), None);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut s = session(2);
        assert_eq!(s.advance(), Err(QuizError::NotAnswered));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn last_answer_leads_to_result() {
        let mut s = session(2);
        s.submit_answer(1).unwrap();
        assert_eq!(s.advance(), Ok(QuizPhase::AwaitingAnswer));
        assert!(s.is_last());
        assert!(s.result().is_none());
        s.submit_answer(1).unwrap();
        assert_eq!(s.advance(), Ok(QuizPhase::Result));
        assert!(s.current_question().is_none());
        assert_eq!(s.submit_answer(0), Err(QuizError::Finished));
        assert_eq!(s.advance(), Err(QuizError::Finished));
        assert_eq!(s.result().unwrap().percentage, 100);
    }

    #[test]
    fn empty_session_rejects_everything() {
        let mut s = session(0);
        assert_eq!(s.phase(), QuizPhase::Empty);
        assert_eq!(s.submit_answer(0), Err(QuizError::NoQuestions));
        assert_eq!(s.advance(), Err(QuizError::NoQuestions));
        assert!(s.result().is_none());
        assert_eq!(s.score_snapshot().percentage, 0);
    }

    #[test]
    fn snapshot_counts_unanswered_questions() {
        let mut s = session(4);
        s.submit_answer(1).unwrap();
        let snapshot = s.score_snapshot();
        assert_eq!((snapshot.score, snapshot.total, snapshot.percentage), (1, 4, 25));
    }
}
