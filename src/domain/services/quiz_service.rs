//! Quiz service - builds a playable round from a generated problem
//!
//! A round shows `right_text` with a random subset of sentences swapped for
//! their falsified counterparts from `wrong_text`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::entities::Problem;

/// Falsified sentences per round
pub const ERROR_COUNT: usize = 5;

/// Sentences a player may have selected at once
pub const MAX_SELECTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("Problem has no sentences")]
    Empty,
    #[error("Sentence lists differ in length: {right} right, {wrong} wrong")]
    LengthMismatch { right: usize, wrong: usize },
    #[error("Need at least {needed} sentences, got {actual}")]
    TooFewSentences { needed: usize, actual: usize },
}

/// Playable round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    /// Sentences as shown to the player
    pub sentences: Vec<String>,
    /// Sorted indices of the falsified sentences
    pub error_indices: Vec<usize>,
}

impl Quiz {
    pub fn total_errors(&self) -> usize {
        self.error_indices.len()
    }

    pub fn is_error(&self, index: usize) -> bool {
        self.error_indices.binary_search(&index).is_ok()
    }
}

/// Sample `count` distinct indices from `0..len`, sorted ascending
pub fn sample_error_indices(len: usize, count: usize, seed: Option<u64>) -> Vec<usize> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut indices = rand::seq::index::sample(&mut rng, len, count.min(len)).into_vec();
    indices.sort_unstable();
    indices
}

/// Build a round from a problem, falsifying `ERROR_COUNT` sentences
pub fn build_quiz(problem: &Problem, seed: Option<u64>) -> Result<Quiz, QuizError> {
    let right = problem.right_text.len();
    let wrong = problem.wrong_text.len();

    if right == 0 && wrong == 0 {
        return Err(QuizError::Empty);
    }
    if right != wrong {
        return Err(QuizError::LengthMismatch { right, wrong });
    }
    if right < ERROR_COUNT {
        return Err(QuizError::TooFewSentences {
            needed: ERROR_COUNT,
            actual: right,
        });
    }

    let error_indices = sample_error_indices(right, ERROR_COUNT, seed);
    let mut sentences = problem.right_text.clone();
    for &idx in &error_indices {
        sentences[idx] = problem.wrong_text[idx].clone();
    }

    Ok(Quiz {
        sentences,
        error_indices,
    })
}

/// Number of selected indices that hit a falsified sentence
pub fn count_correct(selected: &[usize], error_indices: &[usize]) -> usize {
    selected
        .iter()
        .filter(|&&idx| error_indices.contains(&idx))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(n: usize) -> Problem {
        Problem {
            category: "과학".to_string(),
            subject: "양자".to_string(),
            story_idea: "큐비트".to_string(),
            right_text: (0..n).map(|i| format!("right {}", i)).collect(),
            wrong_text: (0..n).map(|i| format!("wrong {}", i)).collect(),
        }
    }

    #[test]
    fn test_sample_is_sorted_and_distinct() {
        let indices = sample_error_indices(15, 5, Some(7));
        assert_eq!(indices.len(), 5);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        assert!(indices.iter().all(|&i| i < 15));
    }

    #[test]
    fn test_sample_is_deterministic_with_seed() {
        assert_eq!(
            sample_error_indices(15, 5, Some(42)),
            sample_error_indices(15, 5, Some(42))
        );
    }

    #[test]
    fn test_sample_caps_count_at_len() {
        assert_eq!(sample_error_indices(3, 5, Some(1)), vec![0, 1, 2]);
        assert!(sample_error_indices(0, 5, Some(1)).is_empty());
    }

    #[test]
    fn test_build_quiz_swaps_exactly_sampled_sentences() {
        let p = problem(15);
        let quiz = build_quiz(&p, Some(3)).unwrap();

        assert_eq!(quiz.sentences.len(), 15);
        assert_eq!(quiz.total_errors(), ERROR_COUNT);
        for (i, sentence) in quiz.sentences.iter().enumerate() {
            if quiz.is_error(i) {
                assert_eq!(sentence, &format!("wrong {}", i));
            } else {
                assert_eq!(sentence, &format!("right {}", i));
            }
        }
    }

    #[test]
    fn test_build_quiz_rejects_bad_problems() {
        assert_eq!(build_quiz(&Problem::default(), None), Err(QuizError::Empty));

        let mut p = problem(15);
        p.wrong_text.pop();
        assert_eq!(
            build_quiz(&p, None),
            Err(QuizError::LengthMismatch {
                right: 15,
                wrong: 14
            })
        );

        assert_eq!(
            build_quiz(&problem(4), None),
            Err(QuizError::TooFewSentences {
                needed: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn test_build_quiz_with_exactly_five_sentences() {
        let quiz = build_quiz(&problem(5), None).unwrap();
        assert_eq!(quiz.error_indices, vec![0, 1, 2, 3, 4]);
        assert!(quiz.sentences.iter().all(|s| s.starts_with("wrong")));
    }

    #[test]
    fn test_count_correct() {
        assert_eq!(count_correct(&[1, 2, 9], &[2, 4, 9]), 2);
        assert_eq!(count_correct(&[], &[2, 4, 9]), 0);
        assert_eq!(count_correct(&[0, 1], &[]), 0);
    }
}
