use std::sync::Arc;

use crate::domain::entities::{Ranking, MAX_RANKINGS};
use crate::domain::repositories::{RankingRepository, RepositoryError};

/// List rankings use case
pub struct ListRankings<R: RankingRepository> {
    ranking_repo: Arc<R>,
}

impl<R: RankingRepository> ListRankings<R> {
    pub fn new(ranking_repo: Arc<R>) -> Self {
        Self { ranking_repo }
    }

    /// Fastest `MAX_RANKINGS` entries, ascending by elapsed time
    pub async fn execute(&self) -> Result<Vec<Ranking>, RepositoryError> {
        self.ranking_repo.top(MAX_RANKINGS).await
    }
}
