mod client;
mod error_codes;
mod response;

pub use client::{ClientConfig, TRANSLATE_ENDPOINT, TranslateError, USER_AGENT, YoudaoClient};
pub use error_codes::{ERROR_INFO, UNKNOWN_ERROR, describe};
pub use response::{Basic, TranslateResponse, WebEntry};
