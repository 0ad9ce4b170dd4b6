//! One-shot affirmation fetch against the remote endpoint.
//!
//! The endpoint historically returned either a JSON object with
//! `affirmation`/`author` fields or a bare plain-text affirmation, so the
//! parser attempts JSON first and falls back to the raw body.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// Authors equal to this sentinel are cleared before display.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Shown in place of an affirmation when the fetch fails. Not retried
/// automatically; the user refreshes by running the command again.
pub const ERROR_AFFIRMATION: &str =
    "Couldn't fetch an affirmation. Check your connection and try again.";

static AGENT: Lazy<ureq::Agent> = Lazy::new(ureq::Agent::new);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affirmation {
    pub text: String,
    pub author: String,
    /// False when the fetch failed; the share/author line is hidden then.
    pub can_share: bool,
}

impl Affirmation {
    fn fallback() -> Self {
        Self {
            text: ERROR_AFFIRMATION.to_string(),
            author: String::new(),
            can_share: false,
        }
    }
}

#[derive(Debug)]
pub struct AffirmationsApi {
    base_url: String,
}

impl AffirmationsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetches today's affirmation. Any transport or HTTP error collapses to
    /// the fixed error text with sharing disabled.
    pub fn fetch(&self) -> Affirmation {
        match self.get_affirmation() {
            Ok(body) => parse_affirmation_body(&body),
            Err(err) => {
                log::warn!("Affirmation fetch failed: {err:#}");
                Affirmation::fallback()
            }
        }
    }

    fn get_affirmation(&self) -> anyhow::Result<String> {
        let url = format!("{}/affirmations", self.base_url.trim_end_matches('/'));
        let body = AGENT.get(&url).call()?.into_string()?;
        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct AffirmationPayload {
    affirmation: String,
    author: String,
}

fn parse_affirmation_body(body: &str) -> Affirmation {
    match serde_json::from_str::<AffirmationPayload>(body) {
        Ok(payload) => {
            let author = if payload.author == UNKNOWN_AUTHOR {
                String::new()
            } else {
                payload.author
            };
            Affirmation {
                text: payload.affirmation,
                author,
                can_share: true,
            }
        }
        // Older servers reply with the affirmation as plain text.
        Err(_) => Affirmation {
            text: body.trim().to_string(),
            author: String::new(),
            can_share: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_parses_both_fields() {
        let parsed =
            parse_affirmation_body(r#"{"affirmation": "You are enough.", "author": "A. Poet"}"#);
        assert_eq!(parsed.text, "You are enough.");
        assert_eq!(parsed.author, "A. Poet");
        assert!(parsed.can_share);
    }

    #[test]
    fn unknown_author_is_cleared() {
        let parsed =
            parse_affirmation_body(r#"{"affirmation": "Keep going.", "author": "Unknown"}"#);
        assert_eq!(parsed.text, "Keep going.");
        assert_eq!(parsed.author, "");
        assert!(parsed.can_share);
    }

    #[test]
    fn plain_text_body_is_the_whole_affirmation() {
        let parsed = parse_affirmation_body("  Today is a fresh start.\n");
        assert_eq!(parsed.text, "Today is a fresh start.");
        assert_eq!(parsed.author, "");
        assert!(parsed.can_share);
    }

    #[test]
    fn json_missing_fields_falls_back_to_raw_body() {
        let parsed = parse_affirmation_body(r#"{"quote": "wrong shape"}"#);
        assert_eq!(parsed.text, r#"{"quote": "wrong shape"}"#);
        assert!(parsed.can_share);
    }

    #[test]
    fn fetch_failure_collapses_to_the_error_card() {
        // Port 9 is discard; the connection refusal exercises the error path.
        let api = AffirmationsApi::new("http://127.0.0.1:9");
        let affirmation = api.fetch();
        assert_eq!(affirmation.text, ERROR_AFFIRMATION);
        assert_eq!(affirmation.author, "");
        assert!(!affirmation.can_share);
    }
}
