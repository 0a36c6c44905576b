use crate::domain::entities::Problem;
use crate::infrastructure::services::QuizGenerator;

/// Generate problem input
pub struct GenerateProblemInput {
    pub keyword: Option<String>,
}

/// Generate problem use case
pub struct GenerateProblem {
    generator: QuizGenerator,
}

impl GenerateProblem {
    pub fn new(generator: QuizGenerator) -> Self {
        Self { generator }
    }

    pub async fn execute(&self, input: GenerateProblemInput) -> Result<Problem, GenerateProblemError> {
        let keyword = input
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(GenerateProblemError::MissingKeyword)?;

        Ok(self.generator.generate_problem(keyword).await)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateProblemError {
    #[error("keyword is required")]
    MissingKeyword,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_keyword_is_rejected() {
        let use_case = GenerateProblem::new(QuizGenerator::offline());

        for keyword in [None, Some(String::new()), Some("   ".to_string())] {
            let result = use_case.execute(GenerateProblemInput { keyword }).await;
            assert!(matches!(result, Err(GenerateProblemError::MissingKeyword)));
        }
    }

    #[tokio::test]
    async fn test_offline_problem_is_returned() {
        let use_case = GenerateProblem::new(QuizGenerator::offline());
        let problem = use_case
            .execute(GenerateProblemInput {
                keyword: Some("과학적 원리".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(problem.right_text.len(), 15);
    }
}
