use std::sync::Arc;

use crate::error::GameError;
use crate::repository::GameRepository;

/// Loads the word list into the repository cache.
pub struct FetchWordsUseCase {
    repository: Arc<GameRepository>,
}

impl FetchWordsUseCase {
    pub fn new(repository: Arc<GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<(), GameError> {
        self.repository.fetch_words().await?;
        Ok(())
    }
}
