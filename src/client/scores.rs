//! Local `scores.json` persistence

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, error, warn};

use crate::domain::entities::ScoreRecord;

/// Pretty-printed JSON array of score records on disk
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files read as an empty list
    pub async fn load(&self) -> Vec<ScoreRecord> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(records) => records,
                Err(e) => {
                    warn!("Failed to parse {}, starting fresh: {}", self.path.display(), e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Score file {} not found, starting fresh", self.path.display());
                Vec::new()
            }
            Err(e) => {
                error!("Failed to read {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    pub async fn save(&self, records: &[ScoreRecord]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        // Write atomically
        let temp_path = self.path.with_extension("tmp");
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(&temp_path, &content).await?;
        fs::rename(&temp_path, &self.path).await?;

        debug!("Saved {} scores to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Append one record and return the new total
    pub async fn append(&self, record: ScoreRecord) -> io::Result<usize> {
        let mut records = self.load().await;
        records.push(record);
        self.save(&records).await?;
        Ok(records.len())
    }
}
