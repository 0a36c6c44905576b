use serde::{Deserialize, Serialize};

/// Local record of a finished round, persisted in `scores.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub keyword: String,
    /// Seconds from the first frame of play to submission
    pub time: f64,
    pub correct_count: usize,
    pub total_errors: usize,
}

impl ScoreRecord {
    pub fn is_perfect(&self) -> bool {
        self.correct_count == self.total_errors
    }
}
