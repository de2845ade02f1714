use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::format::Variant;
use crate::paths;
use crate::translation::ClientConfig;

/// File name of the translation record inside the data directory.
const RECORD_FILE_NAME: &str = "record.csv";

/// Plugin behavior settings in the `[plugin]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginSection {
    /// Which result/action variant to run.
    pub variant: Option<Variant>,
    /// Where the translation record CSV lives.
    pub record_file: Option<PathBuf>,
}

/// Translation service settings in the `[api]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    /// Override for the translation endpoint URL.
    pub endpoint: Option<String>,
    /// Override for the User-Agent header sent with requests.
    pub user_agent: Option<String>,
    /// HTTP(S) proxy URL for outbound requests.
    pub proxy: Option<String>,
}

/// On-disk shape of `config.toml`.
///
/// Every key is optional; a missing file behaves exactly like an empty
/// one, so the plugin works with no configuration at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Plugin behavior settings.
    #[serde(default)]
    pub plugin: PluginSection,
    /// Translation service settings.
    #[serde(default)]
    pub api: ApiSection,
}

/// Everything the plugin needs at runtime, with no optional fields left.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// The variant that drives formatting and actions.
    pub variant: Variant,
    /// The CSV file that accumulates translation records.
    pub record_file: PathBuf,
    /// Settings for the HTTP client.
    pub client: ClientConfig,
}

/// Command-line overrides that outrank the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Variant override.
    pub variant: Option<Variant>,
}

/// Merges CLI overrides over config-file values over built-in defaults.
///
/// Infallible: every key has a built-in default, so a bare `ydict` with
/// no config file still resolves.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> PluginConfig {
    let variant = options
        .variant
        .or(config_file.plugin.variant)
        .unwrap_or_default();

    let record_file = match &config_file.plugin.record_file {
        Some(path) => path.clone(),
        None => paths::data_dir().join(RECORD_FILE_NAME),
    };

    let defaults = ClientConfig::default();
    let client = ClientConfig {
        endpoint: config_file
            .api
            .endpoint
            .clone()
            .unwrap_or(defaults.endpoint),
        user_agent: config_file
            .api
            .user_agent
            .clone()
            .unwrap_or(defaults.user_agent),
        proxy: config_file.api.proxy.clone(),
    };

    PluginConfig {
        variant,
        record_file,
        client,
    }
}

/// Loads and saves the plugin's TOML config file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Points at `config.toml` under the plugin's config directory
    /// (`$XDG_CONFIG_HOME/ydict` or `~/.config/ydict`).
    pub fn new() -> Self {
        Self::with_path(paths::config_dir().join("config.toml"))
    }

    /// Points at an explicit config file instead of the XDG location.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let path = &self.config_path;
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Treats a missing or unreadable file as empty, so the plugin still
    /// answers queries with defaults.
    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        let path = &self.config_path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
