use thiserror::Error;

/// Errors that can occur while fetching or reading the word list.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Transport-level failure talking to the word list host
    #[error("Word list request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Host answered with a non-success status
    #[error("Word list request returned status {status}")]
    Status { status: u16 },

    /// Body wasn't a word list
    #[error("Failed to decode word list: {0}")]
    Decode(#[from] serde_json::Error),

    /// `words()` called before a successful fetch
    #[error("Word list not loaded yet")]
    NotLoaded,

    /// Host returned an empty list
    #[error("Word list is empty")]
    Empty,
}

impl RepositoryError {
    /// Transport problems the player can retry, as opposed to bugs or bad data.
    pub fn is_network(&self) -> bool {
        matches!(self, RepositoryError::Http(_) | RepositoryError::Status { .. })
    }
}
