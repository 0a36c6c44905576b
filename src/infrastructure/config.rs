/// Server configuration, read from the environment (after `.env` is loaded)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// SQLite URL of the rankings database
    pub database_url: String,
    /// Try Ollama even when `OLLAMA_BASE_URL` is unset
    pub enable_llm: bool,
    /// Try AWS Bedrock (requires the `bedrock` feature)
    pub bedrock_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            database_url: "sqlite:./data/rankings.db".to_string(),
            enable_llm: false,
            bedrock_enabled: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default.port),
            database_url: std::env::var("DATABASE_URL")
                .or_else(|_| std::env::var("DB_PATH"))
                .unwrap_or(default.database_url),
            enable_llm: std::env::var("ENABLE_LLM").is_ok()
                || std::env::var("OLLAMA_BASE_URL").is_ok(),
            bedrock_enabled: std::env::var("AWS_BEDROCK_ENABLED").is_ok()
                || std::env::var("AWS_ACCESS_KEY_ID").is_ok(),
        }
    }

    /// Configuration for tests: in-memory database, no LLM
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            ..Default::default()
        }
    }
}
