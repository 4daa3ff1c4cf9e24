mod plan;
mod service;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::{ErrorKind, QuizError};
pub use plan::sample_questions;
pub use service::QuizService;
pub use session::{AnswerFeedback, QuizPhase, QuizSession};
