use std::sync::Arc;

use crate::error::GameError;
use crate::repository::GameRepository;

/// Judges a player's buzz.
pub struct BuzzUseCase {
    repository: Arc<GameRepository>,
}

impl BuzzUseCase {
    pub fn new(repository: Arc<GameRepository>) -> Self {
        Self { repository }
    }

    /// True if `player_translation` is the translation of `word`.
    pub fn execute(&self, word: &str, player_translation: &str) -> Result<bool, GameError> {
        let words = self.repository.words()?;
        let entry = words
            .iter()
            .find(|w| w.text == word)
            .ok_or_else(|| GameError::UnknownWord {
                word: word.to_string(),
            })?;
        Ok(entry.translation == player_translation)
    }
}
