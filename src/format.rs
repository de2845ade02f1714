//! Result list construction from translation responses.
//!
//! The formatter turns one translation outcome into the ordered list of
//! rows the launcher renders. Error outcomes collapse into a single
//! explanatory row; a successful response fans out into translation,
//! dictionary, and web-definition rows whose follow-up actions depend on
//! the configured [`Variant`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::actions::{METHOD_COPY, METHOD_OPEN_URL, METHOD_SPEAK};
use crate::record::RecordStore;
use crate::rpc::DisplayItem;
use crate::translation::{TranslateError, TranslateResponse, describe};

/// Icon bundled with the plugin, referenced by every row.
pub const ICON_PATH: &str = "Img/youdao.ico";

/// Youdao web-dictionary search prefix; the activated query is appended.
pub const DICT_URL: &str = "https://www.youdao.com/w/";

/// The error code the service uses for success.
const SUCCESS_CODE: &str = "0";

/// Selects between the plugin's two behaviors.
///
/// The variants differ in what activating the translation row does and in
/// when a lookup gets recorded; everything else is shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// The primary row opens the web dictionary; a pronunciation link is
    /// offered when the service provides one. Recording happens as soon as
    /// a translation is shown.
    Browser,
    /// The primary row copies the translation (recording it first); a
    /// second row speaks the source text aloud. Recording is deferred until
    /// the user actually copies.
    #[default]
    Clipboard,
}

/// Builds display rows from queries and translation outcomes.
pub struct ResultFormatter {
    variant: Variant,
    records: RecordStore,
}

impl ResultFormatter {
    pub const fn new(variant: Variant, records: RecordStore) -> Self {
        Self { variant, records }
    }

    /// The single row shown before the user has typed anything.
    pub fn placeholder() -> Vec<DisplayItem> {
        vec![item(
            "Start typing to translate between Chinese and English",
            "Powered by the Youdao translation API",
        )]
    }

    /// Maps one translation outcome to the rows the host will render.
    ///
    /// First match wins on the error path; on success the translation,
    /// dictionary, and web sections append independently.
    pub fn format(
        &self,
        query: &str,
        outcome: Result<TranslateResponse, TranslateError>,
    ) -> Vec<DisplayItem> {
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                crate::status!("translation request failed: {e}");
                return vec![item(
                    "Network request failed",
                    "Check your internet connection",
                )];
            }
        };

        let Some(code) = response
            .error_code
            .as_deref()
            .filter(|code| !code.is_empty())
        else {
            return vec![item(
                "Translation service unavailable",
                "Try again once the service recovers",
            )];
        };

        if code != SUCCESS_CODE {
            return vec![item(describe(code), &format!("errorCode={code}"))];
        }

        self.success_rows(query, &response)
    }

    fn success_rows(&self, query: &str, response: &TranslateResponse) -> Vec<DisplayItem> {
        let mut items = Vec::new();

        if let Some(primary) = response.primary() {
            match self.variant {
                Variant::Browser => {
                    self.try_record(query, primary);
                    items.push(item(primary, "Youdao Translate").with_action(
                        METHOD_OPEN_URL,
                        vec![query.to_string(), DICT_URL.to_string()],
                    ));
                }
                Variant::Clipboard => {
                    items.push(item(primary, "Copy to clipboard and record").with_action(
                        METHOD_COPY,
                        vec![query.to_string(), primary.to_string()],
                    ));
                    items.push(
                        item(query, "Speak the source text")
                            .with_action(METHOD_SPEAK, vec![query.to_string()]),
                    );
                }
            }
        }

        if self.variant == Variant::Browser
            && let Some(speak_url) = response
                .t_speak_url
                .as_deref()
                .filter(|url| !url.is_empty())
        {
            items.push(
                item("Fetch pronunciation", "Opens in the browser - Youdao Translate")
                    .with_action(METHOD_OPEN_URL, vec![speak_url.to_string()]),
            );
        }

        // The service echoes the query for display; fall back to what the
        // user typed when the echo is missing.
        let echo = response
            .query
            .as_deref()
            .filter(|echo| !echo.is_empty())
            .unwrap_or(query);

        if let Some(basic) = &response.basic {
            for explain in &basic.explains {
                items.push(item(explain, &format!("{echo} - dictionary")).with_action(
                    METHOD_OPEN_URL,
                    vec![query.to_string(), DICT_URL.to_string()],
                ));
            }
        }

        for entry in &response.web {
            let joined = entry.value.join(",");
            let title = match self.variant {
                Variant::Browser => joined,
                // Clipboard web rows carry the primary translation as their
                // title; joined values stand in when the translation list
                // is empty.
                Variant::Clipboard => response.primary().map_or(joined, ToString::to_string),
            };
            items.push(
                item(&title, &format!("{} - web definition", entry.key)).with_action(
                    METHOD_OPEN_URL,
                    vec![query.to_string(), DICT_URL.to_string()],
                ),
            );
        }

        items
    }

    fn try_record(&self, query: &str, translation: &str) {
        if let Err(e) = self.records.record(query, translation) {
            crate::warn!("failed to record translation: {e:#}");
        }
    }
}

fn item(title: &str, sub_title: &str) -> DisplayItem {
    DisplayItem::new(
        title.to_string(),
        sub_title.to_string(),
        ICON_PATH.to_string(),
    )
}
