//! Quiz Generator
//!
//! Turns LLM output into keyword lists and problems. Every LLM failure is
//! logged and absorbed here: keywords fall back to a fixed list, problems come
//! back empty.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{error, info};

use super::llm_service::{LlmError, LlmService};
use super::offline;
use super::prompts;
use crate::domain::entities::{KeywordList, Problem};

const KEYWORDS_TEMPERATURE: f32 = 0.7;
const PROBLEM_TEMPERATURE: f32 = 0.3;

/// Quiz content generator backed by an optional LLM service
#[derive(Clone)]
pub struct QuizGenerator {
    llm_service: Option<Arc<dyn LlmService>>,
}

impl QuizGenerator {
    pub fn new(llm_service: Option<Arc<dyn LlmService>>) -> Self {
        Self { llm_service }
    }

    /// Generator serving built-in content only
    pub fn offline() -> Self {
        Self::new(None)
    }

    pub fn is_online(&self) -> bool {
        self.llm_service.is_some()
    }

    /// Generate menu keywords, substituting the fallback list on failure
    pub async fn generate_keywords(&self) -> KeywordList {
        let Some(llm) = &self.llm_service else {
            return offline::offline_keywords();
        };

        let result = Self::invoke_json::<KeywordList>(
            llm.as_ref(),
            prompts::KEYWORDS_SYSTEM_PROMPT,
            &prompts::keywords_user_prompt(),
            KEYWORDS_TEMPERATURE,
        )
        .await
        .and_then(|list| {
            if list.is_empty() {
                Err(LlmError::InvalidResponse("Empty keyword list".to_string()))
            } else {
                Ok(list)
            }
        });

        match result {
            Ok(list) => {
                info!("[generate_keywords]: {:?}", list.keywords);
                list
            }
            Err(e) => {
                error!("[generate_keywords] error: {}", e);
                offline::fallback_keywords()
            }
        }
    }

    /// Generate a problem for `keyword`; returns an empty problem on failure
    pub async fn generate_problem(&self, keyword: &str) -> Problem {
        let Some(llm) = &self.llm_service else {
            return offline::sample_problem();
        };

        match Self::invoke_json::<Problem>(
            llm.as_ref(),
            prompts::PROBLEM_SYSTEM_PROMPT,
            &prompts::problem_user_prompt(keyword),
            PROBLEM_TEMPERATURE,
        )
        .await
        {
            Ok(problem) => {
                info!(
                    "[generate_problem]: keyword={} subject={} sentences={}/{}",
                    keyword,
                    problem.subject,
                    problem.right_text.len(),
                    problem.wrong_text.len()
                );
                problem
            }
            Err(e) => {
                error!("[generate_problem] error: {}", e);
                Problem::default()
            }
        }
    }

    async fn invoke_json<T: DeserializeOwned>(
        llm: &dyn LlmService,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<T, LlmError> {
        let raw = llm.invoke(system_prompt, user_prompt, temperature).await?;
        let json = extract_json(&raw)
            .ok_or_else(|| LlmError::InvalidResponse("No JSON object in response".to_string()))?;
        serde_json::from_str(json).map_err(|e| LlmError::InvalidResponse(e.to_string()))
    }
}

/// Locate the JSON object in an LLM answer.
///
/// Accepts a bare object, a fenced ```json block, or an object embedded in
/// prose (outermost braces).
pub fn extract_json(text: &str) -> Option<&str> {
    let trimmed = text.trim();

    let body = match trimmed.find("```") {
        Some(fence_start) => {
            let after_fence = &trimmed[fence_start + 3..];
            // Skip the info string ("json") up to the end of the line
            let content_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
            let content = &after_fence[content_start..];
            match content.find("```") {
                Some(end) => &content[..end],
                None => content,
            }
        }
        None => trimmed,
    };

    let start = body.find('{')?;
    let end = body.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&body[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::services::MockLlmService;

    fn generator(response: &str) -> QuizGenerator {
        QuizGenerator::new(Some(Arc::new(MockLlmService::new(response))))
    }

    #[test]
    fn test_extract_json_bare() {
        assert_eq!(extract_json(r#" {"a": 1} "#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_extract_json_fenced() {
        let text = "Here you go:\n```json\n{\"keywords\": [\"a\"]}\n```\nEnjoy";
        assert_eq!(extract_json(text), Some("{\"keywords\": [\"a\"]}"));
    }

    #[test]
    fn test_extract_json_embedded_in_prose() {
        let text = "Result: {\"x\": {\"y\": 2}} done";
        assert_eq!(extract_json(text), Some("{\"x\": {\"y\": 2}}"));
    }

    #[test]
    fn test_extract_json_missing() {
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("} backwards {"), None);
    }

    #[tokio::test]
    async fn test_generate_keywords_parses_llm_output() {
        let gen = generator("```json\n{\"keywords\": [\"화산\", \"르네상스\"]}\n```");
        let list = gen.generate_keywords().await;
        assert_eq!(list.keywords, vec!["화산", "르네상스"]);
    }

    #[tokio::test]
    async fn test_generate_keywords_falls_back_on_error() {
        let gen = QuizGenerator::new(Some(Arc::new(MockLlmService::failing("down"))));
        assert_eq!(gen.generate_keywords().await, offline::fallback_keywords());

        let gen = generator("I cannot help with that");
        assert_eq!(gen.generate_keywords().await, offline::fallback_keywords());

        let gen = generator(r#"{"keywords": []}"#);
        assert_eq!(gen.generate_keywords().await, offline::fallback_keywords());
    }

    #[tokio::test]
    async fn test_generate_problem_parses_llm_output() {
        let gen = generator(
            r#"{"category": "역사", "subject": "조선", "story_idea": "훈민정음",
                "right_text": ["세종이 만들었다."], "wrong_text": ["태조가 만들었다."]}"#,
        );
        let problem = gen.generate_problem("역사").await;
        assert_eq!(problem.subject, "조선");
        assert_eq!(problem.right_text, vec!["세종이 만들었다."]);
        assert_eq!(problem.wrong_text, vec!["태조가 만들었다."]);
    }

    #[tokio::test]
    async fn test_generate_problem_returns_empty_on_error() {
        let gen = QuizGenerator::new(Some(Arc::new(MockLlmService::failing("down"))));
        assert!(gen.generate_problem("역사").await.is_empty());

        let gen = generator(r#"{"right_text": "not a list"}"#);
        assert!(gen.generate_problem("역사").await.is_empty());
    }

    #[tokio::test]
    async fn test_offline_generator_serves_builtin_content() {
        let gen = QuizGenerator::offline();
        assert!(!gen.is_online());
        assert_eq!(gen.generate_keywords().await.keywords.len(), 5);

        let problem = gen.generate_problem("아무거나").await;
        assert_eq!(problem.right_text.len(), 15);
        assert_eq!(problem.wrong_text.len(), 15);
    }
}
