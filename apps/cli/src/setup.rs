//! API token setup flow.
//!
//! A stored token is trusted as-is (it was validated when saved); only a
//! freshly entered token is checked against the live service before use.

use std::future::Future;
use std::pin::Pin;

use anyhow::bail;
use covergrab_steamgriddb::{Client, TokenStore};
use tracing::{debug, warn};

use crate::prompts::TextPrompt;

/// Validates a candidate token against the artwork service.
pub trait KeyValidator {
    fn validate(&self, token: &str) -> Pin<Box<dyn Future<Output = bool> + Send + '_>>;
}

/// Real validator: builds a client and probes the fixed grids endpoint.
pub struct ApiKeyValidator;

impl KeyValidator for ApiKeyValidator {
    fn validate(&self, token: &str) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        let token = token.to_string();
        Box::pin(async move {
            match Client::new(&token) {
                Ok(client) => client.validate_key().await,
                Err(_) => false,
            }
        })
    }
}

/// Returns a usable API token.
///
/// Loads the stored token if present; otherwise prompts for one, validates
/// it, and saves it. An invalid or empty entry is fatal — there is no retry
/// loop. A failed save is reported but the in-memory token is still used
/// for this run.
pub async fn obtain_token(
    store: &TokenStore,
    prompt: &dyn TextPrompt,
    validator: &dyn KeyValidator,
    non_interactive: bool,
) -> anyhow::Result<String> {
    if let Some(token) = store.load() {
        debug!(path = %store.path().display(), "using stored API token");
        return Ok(token);
    }

    if non_interactive {
        bail!(
            "no API token at {} and prompting is disabled",
            store.path().display()
        );
    }

    println!("Could not find an API key.");
    println!("You need a SteamGridDB API key to use this tool.");
    println!(
        "You can get one with your Steam account at \
         https://www.steamgriddb.com/profile/preferences/api\n"
    );

    let token = prompt.text("Enter your SteamGridDB API key")?;
    let token = token.trim().to_string();
    if token.is_empty() {
        bail!("no API key entered");
    }

    if !validator.validate(&token).await {
        bail!("API key is invalid");
    }

    println!("API key is valid, saving...");
    if let Err(e) = store.save(&token) {
        warn!(error = %e, path = %store.path().display(), "failed to save API token");
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Scripted text prompt; panics if consulted more than scripted.
    struct ScriptedText {
        answers: Mutex<Vec<String>>,
        asked: Mutex<usize>,
    }

    impl ScriptedText {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: Mutex::new(answers.iter().rev().map(|s| s.to_string()).collect()),
                asked: Mutex::new(0),
            }
        }

        fn times_asked(&self) -> usize {
            *self.asked.lock().unwrap()
        }
    }

    impl TextPrompt for ScriptedText {
        fn text(&self, _prompt: &str) -> anyhow::Result<String> {
            *self.asked.lock().unwrap() += 1;
            Ok(self
                .answers
                .lock()
                .unwrap()
                .pop()
                .expect("prompt consulted more often than scripted"))
        }
    }

    /// Validator with a fixed verdict, recording what it was asked.
    struct StubValidator {
        verdict: bool,
        seen: Mutex<Vec<String>>,
    }

    impl StubValidator {
        fn new(verdict: bool) -> Self {
            Self {
                verdict,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn validation_count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    impl KeyValidator for StubValidator {
        fn validate(&self, token: &str) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
            self.seen.lock().unwrap().push(token.to_string());
            let verdict = self.verdict;
            Box::pin(async move { verdict })
        }
    }

    fn store_in(dir: &std::path::Path) -> TokenStore {
        TokenStore::new(dir.join("apikey.txt"))
    }

    #[tokio::test]
    async fn stored_token_is_used_without_prompting() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        store.save("stored-token").unwrap();

        let prompt = ScriptedText::new(&[]);
        let validator = StubValidator::new(false); // would fail if consulted

        let token = obtain_token(&store, &prompt, &validator, false)
            .await
            .unwrap();

        assert_eq!(token, "stored-token");
        assert_eq!(prompt.times_asked(), 0);
        assert_eq!(validator.validation_count(), 0);
    }

    #[tokio::test]
    async fn entered_token_is_validated_and_saved() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        let prompt = ScriptedText::new(&["fresh-token"]);
        let validator = StubValidator::new(true);

        let token = obtain_token(&store, &prompt, &validator, false)
            .await
            .unwrap();

        assert_eq!(token, "fresh-token");
        assert_eq!(validator.validation_count(), 1);
        assert_eq!(store.load(), Some("fresh-token".to_string()));
    }

    #[tokio::test]
    async fn empty_entry_is_fatal_without_validation() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        let prompt = ScriptedText::new(&["   "]);
        let validator = StubValidator::new(true);

        let result = obtain_token(&store, &prompt, &validator, false).await;

        assert!(result.is_err());
        assert_eq!(validator.validation_count(), 0);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn invalid_token_is_fatal_and_not_saved() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        let prompt = ScriptedText::new(&["bad-token"]);
        let validator = StubValidator::new(false);

        let result = obtain_token(&store, &prompt, &validator, false).await;

        assert!(result.is_err());
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn non_interactive_without_token_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        let prompt = ScriptedText::new(&[]);
        let validator = StubValidator::new(true);

        let result = obtain_token(&store, &prompt, &validator, true).await;

        assert!(result.is_err());
        assert_eq!(prompt.times_asked(), 0);
    }

    #[tokio::test]
    async fn save_failure_still_yields_token() {
        let tmp = tempfile::tempdir().unwrap();
        // Parent "directory" is a plain file, so saving must fail.
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        let store = TokenStore::new(blocker.join("apikey.txt"));

        let prompt = ScriptedText::new(&["fresh-token"]);
        let validator = StubValidator::new(true);

        let token = obtain_token(&store, &prompt, &validator, false)
            .await
            .unwrap();
        assert_eq!(token, "fresh-token");
    }
}
