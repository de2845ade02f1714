//! Youdao API error codes and their user-facing messages.

/// Error codes documented for the Youdao translation API and the message
/// shown for each. `"0"` is success and never reaches this table.
pub const ERROR_INFO: &[(&str, &str)] = &[
    ("20", "Text too long to translate"),
    ("30", "Unable to produce a usable translation"),
    ("40", "Unsupported language type"),
    ("50", "Invalid API key"),
    ("60", "No dictionary result"),
];

/// Fallback message for codes missing from the table.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Looks up the human-readable message for a non-zero error code.
pub fn describe(code: &str) -> &'static str {
    ERROR_INFO
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(UNKNOWN_ERROR, |(_, message)| *message)
}
