//! Errors raised by the game use cases.

use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum GameError {
    /// Word list could not be fetched or isn't loaded
    #[error("Word list unavailable: {0}")]
    Repository(#[from] RepositoryError),

    /// Asked about a word the list doesn't contain
    #[error("Word '{word}' is not in the word list")]
    UnknownWord { word: String },

    /// Every word was filtered out
    #[error("No candidate left to pick from")]
    NoCandidates,
}

impl GameError {
    pub fn is_network(&self) -> bool {
        matches!(self, GameError::Repository(err) if err.is_network())
    }
}
