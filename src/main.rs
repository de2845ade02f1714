use anyhow::Result;
use clap::Parser;

use ydict_plugin::cli::Args;
use ydict_plugin::output;
use ydict_plugin::plugin::{self, RunOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::set_quiet(args.quiet);

    let options = RunOptions {
        request: args.request,
        variant: args.variant,
    };
    plugin::run(options).await?;

    Ok(())
}
