use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::repository::GameRepository;

/// Picks the next candidate translation for the word on screen.
///
/// After enough tries the right translation is forced in, so a round can't
/// go on forever with wrong candidates.
pub struct NextTranslationUseCase {
    repository: Arc<GameRepository>,
    min_tries: u32,
    max_tries: u32,
}

impl NextTranslationUseCase {
    pub fn new(repository: Arc<GameRepository>, config: &GameConfig) -> Self {
        Self {
            repository,
            min_tries: config.right_answer_min_tries,
            max_tries: config.right_answer_max_tries.max(config.right_answer_min_tries + 1),
        }
    }

    pub fn execute(
        &self,
        word: &str,
        current_translation: &str,
        try_count: u32,
    ) -> Result<String, GameError> {
        let words = self.repository.words()?;
        let mut rng = rand::thread_rng();

        let right_answer_required = try_count > rng.gen_range(self.min_tries..self.max_tries);
        if right_answer_required {
            let right = &words
                .iter()
                .find(|w| w.text == word)
                .ok_or_else(|| GameError::UnknownWord {
                    word: word.to_string(),
                })?
                .translation;
            if right != current_translation {
                return Ok(right.clone());
            }
        }

        let candidates: Vec<_> = words
            .iter()
            .filter(|w| w.translation != current_translation)
            .collect();
        candidates
            .choose(&mut rng)
            .map(|w| w.translation.clone())
            .ok_or(GameError::NoCandidates)
    }
}
