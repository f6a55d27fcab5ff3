//! Game rules, one use case per action.

mod buzz;
mod fetch_words;
mod next_translation;
mod next_word;

pub use buzz::BuzzUseCase;
pub use fetch_words::FetchWordsUseCase;
pub use next_translation::NextTranslationUseCase;
pub use next_word::NextWordUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::repository::{GameRepository, RepositoryError, Word, WordApi};

    pub struct FixedApi(pub Vec<Word>);

    #[async_trait]
    impl WordApi for FixedApi {
        async fn words(&self) -> Result<Vec<Word>, RepositoryError> {
            Ok(self.0.clone())
        }
    }

    pub async fn loaded_repository(words: &[(&str, &str)]) -> Arc<GameRepository> {
        let words = words.iter().map(|(w, t)| Word::new(*w, *t)).collect();
        let repository = Arc::new(GameRepository::new(Arc::new(FixedApi(words))));
        repository.fetch_words().await.unwrap();
        repository
    }
}
