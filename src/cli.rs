use clap::Parser;

use crate::format::Variant;

#[derive(Parser, Debug)]
#[command(name = "ydict")]
#[command(about = "Youdao translation plugin for launcher hosts")]
#[command(version)]
pub struct Args {
    /// JSON-RPC request document (reads from stdin if not provided)
    pub request: Option<String>,

    /// Override the configured result/action variant
    #[arg(short = 'v', long, value_enum)]
    pub variant: Option<Variant>,

    /// Suppress status messages on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
