use crate::domain::entities::KeywordList;
use crate::infrastructure::services::QuizGenerator;

/// Generate keywords use case
pub struct GenerateKeywords {
    generator: QuizGenerator,
}

impl GenerateKeywords {
    pub fn new(generator: QuizGenerator) -> Self {
        Self { generator }
    }

    /// Never fails: generation errors resolve to the fallback keyword list
    pub async fn execute(&self) -> KeywordList {
        self.generator.generate_keywords().await
    }
}
