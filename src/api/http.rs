//! HTTP implementation of the word services

use super::{ApiError, WordApi};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Random five-letter word generator
pub const DEFAULT_WORD_URL: &str = "https://random-word-api.herokuapp.com/word?length=5";

/// Dictionary lookup base; the word is appended to it
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// `WordApi` backed by two JSON endpoints
///
/// - the word endpoint answers `["crane"]`
/// - the dictionary answers an array of entries for known words and an error
///   object (with a 404 status) for unknown ones
pub struct HttpWordApi {
    client: Client,
    word_url: String,
    dictionary_url: String,
}

impl HttpWordApi {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// initialization failure).
    pub fn new(
        word_url: impl Into<String>,
        dictionary_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            word_url: word_url.into(),
            dictionary_url: dictionary_url.into(),
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        // Unknown words come back as 404 with a JSON body; only the body's
        // shape is inspected.
        tracing::trace!(url, status = response.status().as_u16(), "word service replied");

        response.json::<Value>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl WordApi for HttpWordApi {
    async fn random_word(&self) -> Result<String, ApiError> {
        let body = self.get_json(&self.word_url).await?;

        match body {
            Value::Array(items) => match items.into_iter().next() {
                Some(Value::String(word)) => Ok(word),
                other => Err(ApiError::UnexpectedPayload {
                    url: self.word_url.clone(),
                    detail: format!("expected a word as first element, got {other:?}"),
                }),
            },
            other => Err(ApiError::UnexpectedPayload {
                url: self.word_url.clone(),
                detail: format!("expected an array, got {other}"),
            }),
        }
    }

    async fn exists(&self, word: &str) -> Result<bool, ApiError> {
        let url = format!("{}{}", self.dictionary_url, word);
        let body = self.get_json(&url).await?;
        Ok(body.is_array())
    }
}
