//! Word list retrieval and in-memory cache.

mod api;
mod error;

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub use api::{HttpWordApi, WordApi};
pub use error::RepositoryError;

/// A word and its translation, as served by the word list host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    #[serde(rename = "text_eng")]
    pub text: String,
    #[serde(rename = "text_spa")]
    pub translation: String,
}

impl Word {
    pub fn new(text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translation: translation.into(),
        }
    }
}

/// Caches the word list fetched from a [`WordApi`].
///
/// Readers get a cheap `Arc` snapshot; a refetch swaps the whole list.
pub struct GameRepository {
    api: Arc<dyn WordApi>,
    cache: RwLock<Option<Arc<Vec<Word>>>>,
}

impl GameRepository {
    pub fn new(api: Arc<dyn WordApi>) -> Self {
        Self {
            api,
            cache: RwLock::new(None),
        }
    }

    /// Fetch the word list and replace the cached one.
    ///
    /// # Errors
    /// Returns the fetch error, or [`RepositoryError::Empty`] for an empty
    /// list. The previous cache is kept on error.
    pub async fn fetch_words(&self) -> Result<(), RepositoryError> {
        let words = self.api.words().await?;
        if words.is_empty() {
            return Err(RepositoryError::Empty);
        }
        tracing::info!(count = words.len(), "Word list cached");
        *self.cache.write() = Some(Arc::new(words));
        Ok(())
    }

    /// The cached word list.
    pub fn words(&self) -> Result<Arc<Vec<Word>>, RepositoryError> {
        self.cache
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or(RepositoryError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedApi(Vec<Word>);

    #[async_trait]
    impl WordApi for FixedApi {
        async fn words(&self) -> Result<Vec<Word>, RepositoryError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn word_uses_wire_field_names() {
        let json = r#"[{"text_eng":"dog","text_spa":"perro"}]"#;
        let words: Vec<Word> = serde_json::from_str(json).unwrap();
        assert_eq!(words, vec![Word::new("dog", "perro")]);
    }

    #[test]
    fn words_before_fetch_is_not_loaded() {
        let repository = GameRepository::new(Arc::new(FixedApi(vec![])));
        assert!(matches!(repository.words(), Err(RepositoryError::NotLoaded)));
        assert!(!repository.is_loaded());
    }

    #[tokio::test]
    async fn empty_list_is_rejected() {
        let repository = GameRepository::new(Arc::new(FixedApi(vec![])));
        assert!(matches!(
            repository.fetch_words().await,
            Err(RepositoryError::Empty)
        ));
        assert!(!repository.is_loaded());
    }
}
