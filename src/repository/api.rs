//! Remote word list source.

use std::time::Duration;

use async_trait::async_trait;

use super::error::RepositoryError;
use super::Word;
use crate::config::WordsConfig;

/// Source of the full word list.
#[async_trait]
pub trait WordApi: Send + Sync {
    async fn words(&self) -> Result<Vec<Word>, RepositoryError>;
}

/// Fetches the word list as JSON over HTTP.
pub struct HttpWordApi {
    client: reqwest::Client,
    url: String,
}

impl HttpWordApi {
    pub fn new(config: &WordsConfig) -> Result<Self, RepositoryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WordApi for HttpWordApi {
    async fn words(&self) -> Result<Vec<Word>, RepositoryError> {
        tracing::debug!(url = %self.url, "Fetching word list");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        let words: Vec<Word> = serde_json::from_slice(&body)?;
        tracing::debug!(count = words.len(), "Word list fetched");
        Ok(words)
    }
}
