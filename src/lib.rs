//! # ydict - Youdao translation plugin for quick launchers
//!
//! `ydict` is a launcher plugin that queries the Youdao online translation
//! service and returns a selectable result list in the JSON-RPC format that
//! Wox-style quick launchers expect. The host runs the binary once per
//! request, passing one JSON-RPC document; the plugin answers on stdout and
//! keeps stderr for diagnostics.
//!
//! ## Invocation
//!
//! ```bash
//! # What the launcher host sends while the user types (query)
//! ydict '{"method": "query", "parameters": ["hello"]}'
//!
//! # What it sends when the user activates an item (action)
//! ydict '{"method": "copy2clipboard", "parameters": ["hello", "你好"]}'
//!
//! # The request can also arrive on stdin
//! echo '{"method": "query", "parameters": ["hello"]}' | ydict
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/ydict/config.toml`; every field is
//! optional:
//!
//! ```toml
//! [plugin]
//! variant = "clipboard"   # "clipboard" (copy + speak) or "browser"
//! record_file = "/home/me/words.csv"
//!
//! [api]
//! endpoint = "https://aidemo.youdao.com/trans"
//! proxy = "http://127.0.0.1:7890"
//! ```

/// System action execution (open URL, copy to clipboard, speak).
pub mod actions;

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management and option resolution.
pub mod config;

/// Result list construction from translation responses.
pub mod format;

/// stderr diagnostics and the quiet flag.
pub mod output;

/// XDG-style path utilities for configuration and data.
pub mod paths;

/// Plugin entry points and request orchestration.
pub mod plugin;

/// Append-only CSV log of queried words.
pub mod record;

/// JSON-RPC wire schema shared with the launcher host.
pub mod rpc;

/// Translation client for the Youdao HTTP API.
pub mod translation;
