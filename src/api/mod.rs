//! Remote word services
//!
//! The game talks to two services: one hands out random five-letter words,
//! the other answers whether a word is in the dictionary. Both are reached
//! through [`WordApi`] so the session can be exercised against fakes.

mod http;

pub use http::{DEFAULT_DICTIONARY_URL, DEFAULT_WORD_URL, HttpWordApi};

use async_trait::async_trait;
use thiserror::Error;

/// Failures talking to a word service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response from {url}: {detail}")]
    UnexpectedPayload { url: String, detail: String },
}

/// The two remote collaborators of the game
#[async_trait]
pub trait WordApi: Send + Sync {
    /// Ask the generator for a random candidate word
    ///
    /// The candidate is returned as received; callers validate its shape.
    async fn random_word(&self) -> Result<String, ApiError>;

    /// Ask the dictionary whether `word` exists
    async fn exists(&self, word: &str) -> Result<bool, ApiError>;
}

