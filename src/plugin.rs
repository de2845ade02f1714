//! Request orchestration: one host request in, one response out.
//!
//! [`YoudaoPlugin`] wires the HTTP client, the formatter, and the action
//! dispatcher together from a resolved [`PluginConfig`]. [`run`] is the
//! whole invocation: read the request, execute it, print the reply.

use anyhow::{Context, Result};

use crate::actions::ActionDispatcher;
use crate::config::{ConfigManager, PluginConfig, ResolveOptions, resolve_config};
use crate::format::{ResultFormatter, Variant};
use crate::record::RecordStore;
use crate::rpc::{self, DisplayItem, JsonRpcResponse};
use crate::translation::YoudaoClient;

/// The one method that produces a result list; everything else is an
/// action callback.
const QUERY_METHOD: &str = "query";

/// The assembled plugin: client, formatter, and dispatcher.
pub struct YoudaoPlugin {
    client: YoudaoClient,
    formatter: ResultFormatter,
    dispatcher: ActionDispatcher,
}

impl YoudaoPlugin {
    /// Builds the plugin from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed, for
    /// example when the configured proxy URL is invalid.
    pub fn new(config: &PluginConfig) -> Result<Self> {
        let client = YoudaoClient::new(&config.client)?;
        let records = RecordStore::new(config.record_file.clone());
        let formatter = ResultFormatter::new(config.variant, records.clone());
        let dispatcher = ActionDispatcher::new(records);
        Ok(Self {
            client,
            formatter,
            dispatcher,
        })
    }

    /// Answers one query request.
    ///
    /// An empty or whitespace-only query shows the placeholder without
    /// calling the service. Translation failures render as rows rather
    /// than errors, so the host always gets a result list.
    pub async fn query(&self, param: &str) -> Vec<DisplayItem> {
        let query = param.trim();
        if query.is_empty() {
            return ResultFormatter::placeholder();
        }
        let outcome = self.client.translate(query).await;
        self.formatter.format(query, outcome)
    }

    /// Executes one action callback.
    pub fn dispatch(&self, method: &str, parameters: &[String]) -> Result<()> {
        self.dispatcher.dispatch(method, parameters)
    }
}

/// Options for one plugin invocation.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Raw request document from the command line, if any.
    pub request: Option<String>,
    /// Variant override from the command line.
    pub variant: Option<Variant>,
}

/// Reads one request, executes it, and prints the response to stdout.
pub async fn run(options: RunOptions) -> Result<()> {
    let raw = rpc::read_request(options.request.as_deref())?;
    let request = rpc::parse_request(&raw)?;

    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();
    let resolve = ResolveOptions {
        variant: options.variant,
    };
    let config = resolve_config(&resolve, &config_file);

    let plugin = YoudaoPlugin::new(&config)?;

    match request.method.as_str() {
        QUERY_METHOD => {
            let param = request
                .parameters
                .first()
                .map(String::as_str)
                .unwrap_or_default();
            let items = plugin.query(param).await;
            let response = JsonRpcResponse::new(items);
            println!(
                "{}",
                serde_json::to_string(&response).context("Failed to serialize response")?
            );
        }
        method => plugin.dispatch(method, &request.parameters)?,
    }

    Ok(())
}
