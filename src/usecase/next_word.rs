use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::error::GameError;
use crate::repository::GameRepository;

/// Picks the next word to show and a candidate translation for it.
pub struct NextWordUseCase {
    repository: Arc<GameRepository>,
}

impl NextWordUseCase {
    pub fn new(repository: Arc<GameRepository>) -> Self {
        Self { repository }
    }

    /// A random word other than `current_word`, paired with a random
    /// translation from the whole list (not necessarily the right one).
    pub fn execute(&self, current_word: &str) -> Result<(String, String), GameError> {
        let words = self.repository.words()?;
        let mut rng = rand::thread_rng();

        let candidates: Vec<_> = words.iter().filter(|w| w.text != current_word).collect();
        let word = candidates
            .choose(&mut rng)
            .ok_or(GameError::NoCandidates)?
            .text
            .clone();
        let translation = words
            .choose(&mut rng)
            .ok_or(GameError::NoCandidates)?
            .translation
            .clone();

        Ok((word, translation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::loaded_repository;

    #[tokio::test]
    async fn never_repeats_current_word() {
        let repository = loaded_repository(&[("one", "uno"), ("two", "dos")]).await;
        let next_word = NextWordUseCase::new(repository);
        for _ in 0..20 {
            let (word, translation) = next_word.execute("one").unwrap();
            assert_eq!(word, "two");
            assert!(translation == "uno" || translation == "dos");
        }
    }

    #[tokio::test]
    async fn single_word_equal_to_current_has_no_candidate() {
        let repository = loaded_repository(&[("one", "uno")]).await;
        let next_word = NextWordUseCase::new(repository);
        assert!(matches!(
            next_word.execute("one"),
            Err(GameError::NoCandidates)
        ));
    }
}
