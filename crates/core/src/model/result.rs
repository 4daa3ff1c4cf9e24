use serde::Serialize;

/// Pass threshold applied when no configuration overrides it.
pub const DEFAULT_PASS_THRESHOLD: u8 = 50;

/// Final score of a quiz attempt, surfaced to the dashboard.
///
/// A pure function of `score`, `total` and the pass threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub passed: bool,
}

impl QuizResult {
    /// `percentage = round(score / total * 100)`, halves rounded up.
    ///
    /// An empty quiz scores 0% and does not pass.
    #[must_use]
    pub fn compute(score: u32, total: u32, pass_threshold: u8) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            let score = u64::from(score.min(total));
            let total = u64::from(total);
            // (2 * score * 100 + total) / (2 * total) == floor(score * 100 / total + 0.5)
            u32::try_from((score * 200 + total) / (total * 2)).unwrap_or(100)
        };

        Self {
            score,
            total,
            percentage,
            passed: total > 0 && percentage >= u32::from(pass_threshold),
        }
    }
}
