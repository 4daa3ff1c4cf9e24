mod dashboard;
mod lesson;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::HomeView;
pub use lesson::LessonView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
