//! Secret word selection
//!
//! Draws random candidates until one passes the dictionary check.

use crate::api::{ApiError, WordApi};
use crate::core::Word;
use thiserror::Error;

/// How many candidates to draw before giving up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    /// `None` keeps drawing forever
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    /// Draw until a word is accepted
    pub const UNBOUNDED: Self = Self { max_attempts: None };

    #[must_use]
    pub const fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// Whether another candidate may be drawn after `drawn` so far
    const fn allows(self, drawn: u32) -> bool {
        match self.max_attempts {
            Some(max) => drawn < max,
            None => true,
        }
    }
}

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no dictionary word found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Fetch a secret word the dictionary knows
///
/// Candidates that are not five ASCII letters, that the generator returned
/// in an unexpected shape, or that the dictionary does not recognize are
/// discarded and another one is drawn. Transport and decode failures are not
/// retried.
///
/// # Errors
///
/// Returns `WordSourceError::Api` as soon as a request fails or a body cannot
/// be decoded, and `WordSourceError::Exhausted` when a bounded policy runs
/// out of attempts.
pub async fn fetch_secret_word<A>(api: &A, policy: RetryPolicy) -> Result<Word, WordSourceError>
where
    A: WordApi + ?Sized,
{
    let mut attempt: u32 = 0;

    while policy.allows(attempt) {
        attempt = attempt.saturating_add(1);

        let candidate = match api.random_word().await {
            Ok(candidate) => candidate,
            Err(ApiError::UnexpectedPayload { detail, .. }) => {
                tracing::debug!(attempt, detail, "word service sent no candidate");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match Word::new(candidate.as_str()) {
            Ok(word) => {
                if api.exists(word.text()).await? {
                    tracing::info!(word = %word, attempt, "secret word chosen");
                    return Ok(word);
                }
                tracing::debug!(candidate, attempt, "candidate not in dictionary");
            }
            Err(e) => {
                tracing::debug!(candidate, attempt, error = %e, "candidate is not a valid word");
            }
        }
    }

    Err(WordSourceError::Exhausted { attempts: attempt })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpWordApi;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Serves candidates from a queue; the dictionary knows `known`
    struct ScriptedApi {
        candidates: Mutex<VecDeque<Result<String, ApiError>>>,
        known: Vec<&'static str>,
        lookups: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn new(candidates: &[&str], known: &[&'static str]) -> Self {
            Self {
                candidates: Mutex::new(candidates.iter().map(|c| Ok((*c).to_string())).collect()),
                known: known.to_vec(),
                lookups: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WordApi for ScriptedApi {
        async fn random_word(&self) -> Result<String, ApiError> {
            self.candidates
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("zzzzz".to_string()))
        }

        async fn exists(&self, word: &str) -> Result<bool, ApiError> {
            self.lookups.lock().unwrap().push(word.to_string());
            Ok(self.known.iter().any(|k| *k == word))
        }
    }

    #[tokio::test]
    async fn first_known_candidate_wins() {
        let api = ScriptedApi::new(&["crane"], &["crane"]);
        let word = fetch_secret_word(&api, RetryPolicy::UNBOUNDED).await.unwrap();

        assert_eq!(word.text(), "crane");
        assert_eq!(*api.lookups.lock().unwrap(), vec!["crane"]);
    }

    #[tokio::test]
    async fn unknown_candidates_are_retried() {
        let api = ScriptedApi::new(&["xqzvt", "qwrty", "slate"], &["slate"]);
        let word = fetch_secret_word(&api, RetryPolicy::UNBOUNDED).await.unwrap();

        assert_eq!(word.text(), "slate");
        assert_eq!(api.lookups.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn malformed_candidates_skip_dictionary() {
        let api = ScriptedApi::new(&["toolong", "ab1de", "Pride"], &["pride"]);
        let word = fetch_secret_word(&api, RetryPolicy::UNBOUNDED).await.unwrap();

        assert_eq!(word.text(), "pride");
        assert_eq!(*api.lookups.lock().unwrap(), vec!["pride"]);
    }

    #[tokio::test]
    async fn bounded_policy_gives_up() {
        let api = ScriptedApi::new(&["xqzvt", "qwrty", "slate"], &["slate"]);
        let err = fetch_secret_word(&api, RetryPolicy::bounded(2))
            .await
            .unwrap_err();

        assert!(matches!(err, WordSourceError::Exhausted { attempts: 2 }));
        assert_eq!(api.lookups.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn shapeless_replies_are_retried() {
        let api = ScriptedApi::new(&["crane"], &["crane"]);
        api.candidates
            .lock()
            .unwrap()
            .push_front(Err(ApiError::UnexpectedPayload {
                url: "test://word".to_string(),
                detail: "expected an array".to_string(),
            }));

        let word = fetch_secret_word(&api, RetryPolicy::UNBOUNDED).await.unwrap();

        assert_eq!(word.text(), "crane");
        assert_eq!(*api.lookups.lock().unwrap(), vec!["crane"]);
    }

    #[tokio::test]
    async fn shapeless_replies_count_as_attempts() {
        let api = ScriptedApi::new(&[], &["crane"]);
        for _ in 0..3 {
            api.candidates
                .lock()
                .unwrap()
                .push_back(Err(ApiError::UnexpectedPayload {
                    url: "test://word".to_string(),
                    detail: "empty array".to_string(),
                }));
        }

        let err = fetch_secret_word(&api, RetryPolicy::bounded(2))
            .await
            .unwrap_err();

        assert!(matches!(err, WordSourceError::Exhausted { attempts: 2 }));
        assert!(api.lookups.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn busy_generator_then_word() {
        let mut server = mockito::Server::new_async().await;
        let busy = server
            .mock("GET", "/word")
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"busy"}"#)
            .expect(1)
            .create_async()
            .await;
        server
            .mock("GET", "/word")
            .with_header("content-type", "application/json")
            .with_body(r#"["crane"]"#)
            .create_async()
            .await;
        server
            .mock("GET", "/entries/en/crane")
            .with_header("content-type", "application/json")
            .with_body(r#"[{"word":"crane"}]"#)
            .create_async()
            .await;

        let api = HttpWordApi::new(
            format!("{}/word", server.url()),
            format!("{}/entries/en/", server.url()),
            Some(Duration::from_secs(5)),
        )
        .unwrap();
        let word = fetch_secret_word(&api, RetryPolicy::UNBOUNDED).await.unwrap();

        assert_eq!(word.text(), "crane");
        busy.assert_async().await;
    }

    #[tokio::test]
    async fn transport_failure_is_not_retried() {
        let api = HttpWordApi::new(
            "http://127.0.0.1:1/word".to_string(),
            "http://127.0.0.1:1/entries/en/".to_string(),
            Some(Duration::from_secs(5)),
        )
        .unwrap();

        let err = fetch_secret_word(&api, RetryPolicy::UNBOUNDED)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WordSourceError::Api(ApiError::Transport { .. })
        ));
    }

    #[tokio::test]
    async fn zero_attempts_draws_nothing() {
        let api = ScriptedApi::new(&["crane"], &["crane"]);
        let err = fetch_secret_word(&api, RetryPolicy::bounded(0))
            .await
            .unwrap_err();

        assert!(matches!(err, WordSourceError::Exhausted { attempts: 0 }));
        assert_eq!(api.candidates.lock().unwrap().len(), 1);
    }

    #[test]
    fn largest_bound_still_terminates() {
        let policy = RetryPolicy::bounded(u32::MAX);
        assert!(policy.allows(u32::MAX - 1));
        assert!(!policy.allows(u32::MAX));
        assert!(RetryPolicy::UNBOUNDED.allows(u32::MAX));
    }
}
