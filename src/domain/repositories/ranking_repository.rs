use async_trait::async_trait;

use crate::domain::entities::{NewRanking, Ranking};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Ranking repository trait
#[async_trait]
pub trait RankingRepository: Send + Sync {
    /// Store a ranking and trim storage to the fastest `MAX_RANKINGS` rows.
    ///
    /// Returns `None` when the new row was slower than a full board and got
    /// trimmed by the same insert.
    async fn insert(&self, ranking: &NewRanking) -> Result<Option<Ranking>, RepositoryError>;

    /// Fastest rankings first, at most `limit` rows
    async fn top(&self, limit: usize) -> Result<Vec<Ranking>, RepositoryError>;

    /// Number of stored rows
    async fn count(&self) -> Result<usize, RepositoryError>;
}
