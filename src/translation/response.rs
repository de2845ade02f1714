//! Typed model of the Youdao translation response body.
//!
//! Every field the service may omit is optional or defaults to empty, so a
//! sparse body is state to render, not an error to raise.

use serde::Deserialize;

/// Parsed JSON body of one translation exchange.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateResponse {
    /// `"0"` on success; other values map through the error table. The
    /// service omits the field entirely when it is down.
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
    /// Candidate translations, primary first.
    #[serde(default)]
    pub translation: Vec<String>,
    /// Dictionary section, present for single-word queries.
    pub basic: Option<Basic>,
    /// Web phrase section.
    #[serde(default)]
    pub web: Vec<WebEntry>,
    /// Pronunciation audio URL for the translated text.
    #[serde(rename = "tSpeakUrl")]
    pub t_speak_url: Option<String>,
    /// Echo of the original query, used for display.
    pub query: Option<String>,
}

impl TranslateResponse {
    /// The primary translation candidate, when the service produced any.
    pub fn primary(&self) -> Option<&str> {
        self.translation.first().map(String::as_str)
    }
}

/// The `basic` dictionary block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Basic {
    #[serde(default)]
    pub explains: Vec<String>,
}

/// One `web` block entry: a related phrase and its renderings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebEntry {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Vec<String>,
}
