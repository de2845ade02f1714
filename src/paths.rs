//! Where the plugin keeps its files.
//!
//! Launcher hosts run the binary from the plugin's install directory, so
//! nothing durable can live next to the executable; the config file and
//! the word record resolve through XDG base directories instead.

use std::path::PathBuf;

/// Subdirectory name under each XDG base directory.
const APP_DIR: &str = "ydict";

/// Directory holding `config.toml`: `$XDG_CONFIG_HOME/ydict`, falling
/// back to `~/.config/ydict`.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Directory holding the record CSV by default: `$XDG_DATA_HOME/ydict`,
/// falling back to `~/.local/share/ydict`. The record is durable user
/// data, not a cache.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

// A plugin with no home directory has nowhere to put anything, hence
// the panic.
#[allow(clippy::expect_used)]
fn xdg_dir(env_key: &str, home_fallback: &[&str]) -> PathBuf {
    std::env::var(env_key).map_or_else(
        |_| {
            let mut dir = dirs::home_dir().expect("Failed to determine home directory");
            for segment in home_fallback {
                dir.push(segment);
            }
            dir.join(APP_DIR)
        },
        |xdg| PathBuf::from(xdg).join(APP_DIR),
    )
}
