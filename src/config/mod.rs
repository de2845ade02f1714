mod manager;

pub use manager::{
    ApiSection, ConfigFile, ConfigManager, PluginConfig, PluginSection, ResolveOptions,
    resolve_config,
};
