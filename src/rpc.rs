//! JSON-RPC wire schema shared with the launcher host.
//!
//! Wox-style hosts invoke the plugin binary with a single JSON document,
//! either as the first command-line argument or on stdin, and parse one
//! JSON document back from stdout. Result-list keys are PascalCase on the
//! wire (`Title`, `SubTitle`, `IcoPath`, `JsonRPCAction`) because that is
//! what the host's renderer expects.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};

/// Upper bound on a request read from stdin. A well-behaved host sends a
/// few hundred bytes; the cap only guards against a runaway pipe.
const MAX_REQUEST_SIZE: usize = 64 * 1024;

/// A request from the launcher host.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// `"query"` or one of the action method names.
    pub method: String,
    /// Positional string arguments for the method.
    #[serde(default)]
    pub parameters: Vec<String>,
}

/// The response envelope printed to stdout for a `query` request.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub result: Vec<DisplayItem>,
}

impl JsonRpcResponse {
    pub const fn new(result: Vec<DisplayItem>) -> Self {
        Self { result }
    }
}

/// A deferred action bound to a display item, executed by a follow-up
/// invocation of the plugin if the user selects the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRpcAction {
    pub method: String,
    pub parameters: Vec<String>,
}

/// One row in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisplayItem {
    pub title: String,
    pub sub_title: String,
    pub ico_path: String,
    /// Omitted from the wire entirely when the item is informational only.
    #[serde(rename = "JsonRPCAction", skip_serializing_if = "Option::is_none")]
    pub action: Option<JsonRpcAction>,
}

impl DisplayItem {
    /// Creates an informational item with no follow-up action.
    pub const fn new(title: String, sub_title: String, ico_path: String) -> Self {
        Self {
            title,
            sub_title,
            ico_path,
            action: None,
        }
    }

    /// Attaches a follow-up action to the item.
    pub fn with_action(mut self, method: &str, parameters: Vec<String>) -> Self {
        self.action = Some(JsonRpcAction {
            method: method.to_string(),
            parameters,
        });
        self
    }
}

/// Parses the host's request envelope.
pub fn parse_request(raw: &str) -> Result<JsonRpcRequest> {
    serde_json::from_str(raw).context("Malformed JSON-RPC request from host")
}

/// Reads the raw request, preferring the command-line argument and falling
/// back to stdin when the host pipes the document instead.
pub fn read_request(arg: Option<&str>) -> Result<String> {
    arg.map_or_else(read_stdin, |raw| Ok(raw.to_string()))
}

#[allow(clippy::significant_drop_tightening)]
fn read_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];
    let mut stdin = io::stdin().lock();

    loop {
        let bytes_read = stdin
            .read(&mut chunk)
            .context("Failed to read request from stdin")?;

        if bytes_read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);

        if buffer.len() > MAX_REQUEST_SIZE {
            bail!("Error: Request exceeds maximum allowed size (64 KiB).");
        }
    }

    String::from_utf8(buffer).context("Request is not valid UTF-8")
}
