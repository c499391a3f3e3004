//! CLI Arguments
//!
//! Command-line surface of the `pairscope` binary.

use clap::Parser;

/// pairscope - unified currency-pair tables across exchange listings
#[derive(Parser, Debug)]
#[command(
    name = "pairscope",
    version = env!("CARGO_PKG_VERSION"),
    about = "Load currency pairs from configured exchanges into one unified table"
)]
pub struct CliApp {
    /// Filename of global config (without extension)
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    pub config: String,

    /// Dump results into the terminal
    #[arg(short, long)]
    pub terminal: bool,

    /// Directory containing config files
    #[arg(long, value_name = "DIR", default_value = "settings")]
    pub settings_dir: String,
}
