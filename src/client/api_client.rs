//! HTTP client for the quiz backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::domain::entities::{KeywordList, NewRanking, Problem, Ranking};

/// Generating a problem can take the LLM a while
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Operations the game needs from the backend
#[async_trait]
pub trait QuizBackend: Send + Sync {
    async fn keywords(&self) -> Result<KeywordList, ClientError>;

    async fn problem(&self, keyword: &str) -> Result<Problem, ClientError>;

    async fn submit_ranking(&self, ranking: &NewRanking) -> Result<(), ClientError>;

    async fn rankings(&self) -> Result<Vec<Ranking>, ClientError>;
}

#[derive(Serialize)]
struct ProblemRequest<'a> {
    keyword: &'a str,
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl QuizBackend for HttpBackend {
    async fn keywords(&self) -> Result<KeywordList, ClientError> {
        let url = self.url("/api/keywords");
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::read_json(response).await
    }

    async fn problem(&self, keyword: &str) -> Result<Problem, ClientError> {
        let url = self.url("/api/problem");
        debug!("POST {} (keyword: {})", url, keyword);
        let response = self
            .client
            .post(&url)
            .json(&ProblemRequest { keyword })
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn submit_ranking(&self, ranking: &NewRanking) -> Result<(), ClientError> {
        let url = self.url("/api/rankings");
        debug!("POST {} ({} {:.2}s)", url, ranking.nickname, ranking.elapsed_time);
        let response = self.client.post(&url).json(ranking).send().await?;
        let _: serde_json::Value = Self::read_json(response).await?;
        Ok(())
    }

    async fn rankings(&self) -> Result<Vec<Ranking>, ClientError> {
        let url = self.url("/api/rankings");
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::read_json(response).await
    }
}
