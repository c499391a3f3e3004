//! pairscope - unified currency-pair tables across exchange listings
//!
//! Wiring: CLI arguments → TOML config → file logging → aggregator over the
//! registered exchange adapters → terminal echo (optional) → CSV dump.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pairscope::adapters::{BinanceSource, CliApp, ConsoleSink, CsvSink, OkexSource};
use pairscope::application::PairAggregator;
use pairscope::config::{load_config, ConfigError, LoggingSection};
use pairscope::ports::TableSink;

#[tokio::main]
async fn main() -> Result<()> {
    let app = CliApp::parse();

    let config_path = Path::new(&app.settings_dir).join(format!("{}.toml", app.config));
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => {
            // Missing config is a user mistake, not a crash: say what was
            // expected and return cleanly.
            fmt().with_env_filter(EnvFilter::new("error")).init();
            tracing::error!(
                "No such config: {}. Please, add it or choose `--config default`",
                config_path.display()
            );
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to load configuration"),
    };

    let log_path = init_logging(&config.logging).context("Failed to initialize logging")?;
    tracing::info!(
        "Script args: {:?}. Global config: {:?}. Log file: {}",
        app,
        config,
        log_path.display()
    );
    tracing::debug!("Provider config: {:?}", config.provider);

    let binance = BinanceSource::new().context("Failed to create Binance client")?;
    let okex = OkexSource::new().context("Failed to create Okex client")?;
    let aggregator = PairAggregator::new(config.provider.exchanges.clone())
        .register(Box::new(binance))
        .register(Box::new(okex));

    let table = aggregator.load_pairs(config.provider.only_traded).await?;
    tracing::info!(
        "Loaded pairs. Total exchanges: {}, data shape: {:?}",
        aggregator.exchanges().len(),
        table.shape()
    );

    if app.terminal {
        ConsoleSink::stdout()
            .write(&table)
            .context("Failed to dump table into terminal")?;
    }

    let dump_path =
        Path::new(&config.dumps.directory).join(format!("{}.csv", config.dumps.filename));
    tracing::debug!("Will dump into {}", dump_path.display());
    CsvSink::new(&dump_path)
        .write(&table)
        .context("Failed to dump table")?;

    Ok(())
}

/// Route all run logging to a timestamped file under the configured
/// directory. `RUST_LOG` overrides the configured level.
fn init_logging(config: &LoggingSection) -> Result<PathBuf> {
    let filename = format!("{}_{}.txt", config.filename, chrono::Utc::now().timestamp());
    let path = Path::new(&config.directory).join(filename);
    std::fs::create_dir_all(&config.directory)?;
    let file = std::fs::File::create(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();

    Ok(path)
}
