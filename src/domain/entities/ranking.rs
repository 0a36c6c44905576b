use serde::{Deserialize, Serialize};

/// Number of rankings kept in storage
pub const MAX_RANKINGS: usize = 10;

/// Longest nickname accepted on the ranking board
pub const MAX_NICKNAME_CHARS: usize = 20;

/// Stored ranking row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub id: i64,
    pub nickname: String,
    pub keyword: String,
    /// Seconds taken to find every falsified sentence
    pub elapsed_time: f64,
    /// RFC 3339 timestamp of the submission
    pub created_at: String,
}

/// Ranking submission before it is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRanking {
    pub nickname: String,
    pub keyword: String,
    pub elapsed_time: f64,
}

impl NewRanking {
    pub fn new(nickname: impl Into<String>, keyword: impl Into<String>, elapsed_time: f64) -> Self {
        Self {
            nickname: nickname.into(),
            keyword: keyword.into(),
            elapsed_time,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        let nickname = self.nickname.trim();
        if nickname.is_empty() {
            return Err("Nickname is required");
        }
        if nickname.chars().count() > MAX_NICKNAME_CHARS {
            return Err("Nickname must be at most 20 characters");
        }
        if self.keyword.trim().is_empty() {
            return Err("Keyword is required");
        }
        if !self.elapsed_time.is_finite() || self.elapsed_time < 0.0 {
            return Err("Elapsed time must be a non-negative number");
        }
        Ok(())
    }
}
