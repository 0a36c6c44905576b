use std::sync::Arc;

use crate::domain::entities::{NewRanking, Ranking};
use crate::domain::repositories::{RankingRepository, RepositoryError};

/// Submit ranking input
pub struct SubmitRankingInput {
    pub nickname: String,
    pub keyword: String,
    pub elapsed_time: f64,
}

/// Submit ranking use case
pub struct SubmitRanking<R: RankingRepository> {
    ranking_repo: Arc<R>,
}

impl<R: RankingRepository> SubmitRanking<R> {
    pub fn new(ranking_repo: Arc<R>) -> Self {
        Self { ranking_repo }
    }

    /// Stored row, or `None` when it did not make the top rankings
    pub async fn execute(
        &self,
        input: SubmitRankingInput,
    ) -> Result<Option<Ranking>, SubmitRankingError> {
        let ranking = NewRanking::new(input.nickname, input.keyword, input.elapsed_time);
        ranking
            .validate()
            .map_err(|e| SubmitRankingError::Validation(e.to_string()))?;

        let stored = self.ranking_repo.insert(&ranking).await?;

        match &stored {
            Some(r) => tracing::info!(
                "Ranking submitted: {} ({}) {:.1}s",
                r.nickname,
                r.keyword,
                r.elapsed_time
            ),
            None => tracing::info!(
                "Ranking from {} ({:.1}s) is slower than the board, not kept",
                ranking.nickname.trim(),
                ranking.elapsed_time
            ),
        }

        Ok(stored)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitRankingError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRankings {
        rows: Mutex<Vec<Ranking>>,
    }

    #[async_trait]
    impl RankingRepository for InMemoryRankings {
        async fn insert(&self, ranking: &NewRanking) -> Result<Option<Ranking>, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let stored = Ranking {
                id: rows.len() as i64 + 1,
                nickname: ranking.nickname.clone(),
                keyword: ranking.keyword.clone(),
                elapsed_time: ranking.elapsed_time,
                created_at: "2026-01-01T00:00:00+00:00".to_string(),
            };
            rows.push(stored.clone());
            Ok(Some(stored))
        }

        async fn top(&self, limit: usize) -> Result<Vec<Ranking>, RepositoryError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().take(limit).cloned().collect())
        }

        async fn count(&self) -> Result<usize, RepositoryError> {
            Ok(self.rows.lock().unwrap().len())
        }
    }

    #[tokio::test]
    async fn test_submit_valid_ranking() {
        let repo = Arc::new(InMemoryRankings::default());
        let use_case = SubmitRanking::new(repo.clone());

        let stored = use_case
            .execute(SubmitRankingInput {
                nickname: "neo".to_string(),
                keyword: "과학적 원리".to_string(),
                elapsed_time: 12.3,
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.id, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_ranking_is_not_stored() {
        let repo = Arc::new(InMemoryRankings::default());
        let use_case = SubmitRanking::new(repo.clone());

        let result = use_case
            .execute(SubmitRankingInput {
                nickname: String::new(),
                keyword: "과학적 원리".to_string(),
                elapsed_time: 12.3,
            })
            .await;

        assert!(matches!(result, Err(SubmitRankingError::Validation(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
