use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{NewRanking, Ranking, MAX_RANKINGS};
use crate::domain::repositories::{RankingRepository, RepositoryError};

/// Convert timestamp to ISO 8601 string
fn timestamp_to_rfc3339(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string())
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

/// SQLite implementation of RankingRepository
pub struct SqliteRankingRepository {
    pool: SqlitePool,
}

impl SqliteRankingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the rankings table if it does not exist yet
    pub async fn init_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS rankings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nickname TEXT NOT NULL,
                keyword TEXT NOT NULL,
                elapsed_time REAL NOT NULL,
                created_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_rankings_elapsed ON rankings (elapsed_time, id)",
        )
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    fn row_to_ranking(row: &sqlx::sqlite::SqliteRow) -> Ranking {
        use sqlx::Row;

        Ranking {
            id: row.get("id"),
            nickname: row.get("nickname"),
            keyword: row.get("keyword"),
            elapsed_time: row.get("elapsed_time"),
            created_at: timestamp_to_rfc3339(row.get::<i64, _>("created_at")),
        }
    }
}

#[async_trait]
impl RankingRepository for SqliteRankingRepository {
    async fn insert(&self, ranking: &NewRanking) -> Result<Option<Ranking>, RepositoryError> {
        let now = chrono::Utc::now().timestamp();
        let nickname = ranking.nickname.trim();
        let keyword = ranking.keyword.trim();

        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let result = sqlx::query(
            "INSERT INTO rankings (nickname, keyword, elapsed_time, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(nickname)
        .bind(keyword)
        .bind(ranking.elapsed_time)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        let id = result.last_insert_rowid();

        // Keep only the fastest rows; earlier submissions win ties
        let trimmed = sqlx::query(
            r#"
            DELETE FROM rankings WHERE id NOT IN (
                SELECT id FROM rankings ORDER BY elapsed_time ASC, id ASC LIMIT ?
            )
            "#,
        )
        .bind(MAX_RANKINGS as i64)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        let survived: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rankings WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        if trimmed.rows_affected() > 0 {
            tracing::debug!("Trimmed {} ranking rows", trimmed.rows_affected());
        }

        if survived == 0 {
            return Ok(None);
        }

        Ok(Some(Ranking {
            id,
            nickname: nickname.to_string(),
            keyword: keyword.to_string(),
            elapsed_time: ranking.elapsed_time,
            created_at: timestamp_to_rfc3339(now),
        }))
    }

    async fn top(&self, limit: usize) -> Result<Vec<Ranking>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM rankings ORDER BY elapsed_time ASC, id ASC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.iter().map(Self::row_to_ranking).collect())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rankings")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database;

    async fn repo() -> SqliteRankingRepository {
        let pool = database::connect("sqlite::memory:").await.unwrap();
        let repo = SqliteRankingRepository::new(pool);
        repo.init_schema().await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let repo = repo().await;
        let stored = repo
            .insert(&NewRanking::new(" neo ", "과학적 원리", 31.5))
            .await
            .unwrap()
            .expect("first ranking is kept");

        assert_eq!(stored.nickname, "neo");
        let top = repo.top(MAX_RANKINGS).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0], stored);
    }

    #[tokio::test]
    async fn test_storage_keeps_ten_fastest() {
        let repo = repo().await;
        for i in 0..15 {
            // 15.0, 14.0, ..., 1.0: later submissions are faster
            let elapsed = (15 - i) as f64;
            repo.insert(&NewRanking::new(format!("p{}", i), "역사", elapsed))
                .await
                .unwrap();
            assert!(repo.count().await.unwrap() <= MAX_RANKINGS);
        }

        let top = repo.top(100).await.unwrap();
        assert_eq!(top.len(), MAX_RANKINGS);
        let times: Vec<f64> = top.iter().map(|r| r.elapsed_time).collect();
        assert_eq!(times, (1..=10).map(|t| t as f64).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_slow_submission_is_dropped_when_board_full() {
        let repo = repo().await;
        for i in 0..MAX_RANKINGS {
            repo.insert(&NewRanking::new(format!("p{}", i), "역사", i as f64))
                .await
                .unwrap();
        }

        let slow = repo.insert(&NewRanking::new("slow", "역사", 999.0)).await.unwrap();
        assert!(slow.is_none());

        let fast = repo.insert(&NewRanking::new("fast", "역사", 0.5)).await.unwrap();
        assert_eq!(fast.map(|r| r.nickname), Some("fast".to_string()));

        let top = repo.top(MAX_RANKINGS).await.unwrap();
        assert_eq!(top.len(), MAX_RANKINGS);
        assert!(top.iter().all(|r| r.nickname != "slow"));
    }

    #[tokio::test]
    async fn test_ties_keep_earlier_submission() {
        let repo = repo().await;
        for i in 0..MAX_RANKINGS {
            repo.insert(&NewRanking::new(format!("p{}", i), "역사", 10.0))
                .await
                .unwrap();
        }
        let late = repo.insert(&NewRanking::new("late", "역사", 10.0)).await.unwrap();
        assert!(late.is_none());

        let top = repo.top(MAX_RANKINGS).await.unwrap();
        assert_eq!(top.first().unwrap().nickname, "p0");
        assert!(top.iter().all(|r| r.nickname != "late"));
    }
}
