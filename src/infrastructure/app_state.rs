use std::sync::Arc;

use crate::infrastructure::config::ServerConfig;
use crate::infrastructure::database;
use crate::infrastructure::database::repositories::SqliteRankingRepository;
use crate::infrastructure::services::{LlmService, OllamaConfig, OllamaService, QuizGenerator};
#[cfg(feature = "bedrock")]
use crate::infrastructure::services::{BedrockConfig, BedrockService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Ranking repository
    pub ranking_repo: Arc<SqliteRankingRepository>,

    /// Keyword/problem generator (offline when no LLM is available)
    pub quiz_generator: QuizGenerator,
}

impl AppState {
    /// Build state from configuration, probing LLM backends
    pub async fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let llm_service = Self::init_llm_service(config).await;
        Self::with_llm(config, llm_service).await
    }

    /// Build state with an explicit LLM service (`None` = offline content)
    pub async fn with_llm(
        config: &ServerConfig,
        llm_service: Option<Arc<dyn LlmService>>,
    ) -> anyhow::Result<Self> {
        let db_url = database::normalize_url(&config.database_url);

        if let Some(parent) = database::file_path(&db_url)
            .and_then(|p| std::path::Path::new(p).parent())
            .filter(|p| !p.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        tracing::info!("Connecting to database: {}", db_url);
        let db = database::connect(&db_url).await?;

        let ranking_repo = Arc::new(SqliteRankingRepository::new(db));
        ranking_repo.init_schema().await?;

        let quiz_generator = QuizGenerator::new(llm_service);
        if quiz_generator.is_online() {
            tracing::info!("Quiz content generated by the LLM service");
        } else {
            tracing::info!("Quiz content served from the built-in set");
        }

        Ok(Self {
            ranking_repo,
            quiz_generator,
        })
    }

    /// Pick an LLM backend.
    /// Priority: AWS Bedrock > Ollama > None
    async fn init_llm_service(config: &ServerConfig) -> Option<Arc<dyn LlmService>> {
        #[cfg(feature = "bedrock")]
        {
            if config.bedrock_enabled {
                let service = BedrockService::new(BedrockConfig::default()).await;
                if service.health_check().await {
                    tracing::info!("AWS Bedrock LLM service initialized and available");
                    return Some(Arc::new(service));
                }
                tracing::warn!("AWS Bedrock configured but not available - trying Ollama");
            }
        }
        #[cfg(not(feature = "bedrock"))]
        {
            if config.bedrock_enabled {
                tracing::warn!("AWS Bedrock requested but the `bedrock` feature is not compiled in");
            }
        }

        if !config.enable_llm {
            tracing::info!("LLM service not configured - serving built-in quiz content");
            return None;
        }

        let service = match OllamaService::new(OllamaConfig::default()) {
            Ok(service) => service,
            Err(e) => {
                tracing::error!("Failed to create Ollama client: {}", e);
                return None;
            }
        };

        if service.health_check().await {
            tracing::info!("Ollama LLM service initialized and available");
            Some(Arc::new(service))
        } else {
            tracing::warn!("Ollama configured but not available - serving built-in quiz content");
            None
        }
    }
}
