use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;

use super::TranslateResponse;

/// Fixed endpoint of the Youdao demo translation API.
pub const TRANSLATE_ENDPOINT: &str = "https://aidemo.youdao.com/trans";

/// Static user agent sent with every request; the endpoint rejects bare
/// library agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/67.0.3396.99 Safari/537.36";

/// Connection settings for the translation client.
///
/// Everything the client needs arrives at construction; there is no
/// ambient session state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Translation endpoint URL.
    pub endpoint: String,
    /// User agent installed on the underlying HTTP client.
    pub user_agent: String,
    /// Proxy URL applied to all requests, e.g. `http://127.0.0.1:7890`.
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: TRANSLATE_ENDPOINT.to_string(),
            user_agent: USER_AGENT.to_string(),
            proxy: None,
        }
    }
}

/// Failure of one translation exchange.
///
/// The taxonomy stays coarse: the launcher renders every kind as the same
/// network-failure row, and only stderr diagnostics see the cause.
/// Body-decode failures surface as `Network` because reqwest folds them
/// into its error type.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("translation endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// HTTP client for the Youdao translation API.
#[derive(Debug)]
pub struct YoudaoClient {
    client: Client,
    endpoint: String,
}

impl YoudaoClient {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Fails only on malformed configuration, such as an unparsable proxy
    /// URL; no connection is attempted here.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .with_context(|| format!("Invalid proxy URL: {proxy}"))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Performs one `q=<query>&from=Auto&to=Auto` exchange and parses the
    /// JSON body.
    ///
    /// The connection is scoped to this call and released on every exit
    /// path. There is no timeout and no retry; one keystroke batch in the
    /// launcher maps to at most one request.
    pub async fn translate(&self, query: &str) -> Result<TranslateResponse, TranslateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CACHE_CONTROL, "no-cache")
            .form(&[("q", query), ("from", "Auto"), ("to", "Auto")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status));
        }

        Ok(response.json::<TranslateResponse>().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, TRANSLATE_ENDPOINT);
        assert!(YoudaoClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_rejects_malformed_proxy() {
        let config = ClientConfig {
            proxy: Some("not a proxy url".to_string()),
            ..ClientConfig::default()
        };

        let result = YoudaoClient::new(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("proxy"));
    }

    #[test]
    fn test_status_error_names_the_code() {
        let err = TranslateError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("500"));
    }
}
