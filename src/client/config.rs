use std::path::PathBuf;

/// Terminal client settings, read from `FH_*` environment variables
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub scores_path: PathBuf,
    /// Ranking submissions are skipped without a nickname
    pub nickname: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            scores_path: PathBuf::from("data/scores.json"),
            nickname: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("FH_API_URL").unwrap_or(defaults.api_url),
            scores_path: std::env::var("FH_SCORES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.scores_path),
            nickname: std::env::var("FH_NICKNAME")
                .ok()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        }
    }
}
