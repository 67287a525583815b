//! # labelwise Main Entry Point

use std::sync::{Arc, Mutex};

use anyhow::Result;
use labelwise::{
    cmd_args::CommandLineArgs,
    config::{self, AnalyzerConfig},
    repl::io::{TerminalEventStream, TerminalRenderStream},
    AppController,
};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cmd_args = CommandLineArgs::parse();

    let log_path = config::get_log_path();
    if let Err(e) = init_tracing_subscriber(&log_path, cmd_args.verbose()) {
        eprintln!("warning: logging disabled, cannot use {log_path}: {e}");
    }

    let config = AnalyzerConfig::from_args(&cmd_args);
    if !config.has_api_key() {
        let names = config::API_KEY_ENV_VARS.join(" or ");
        tracing::warn!("No API key configured ({names})");
        eprintln!("warning: no API key found in {names}; requests will likely be rejected");
    }
    tracing::info!("Starting with endpoint {} and model {}", config.endpoint, config.model);

    let mut app = AppController::with_io_streams(
        Arc::new(config),
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run().await
}

/// Log to a file; the terminal belongs to the UI
fn init_tracing_subscriber(log_path: &str, verbose: bool) -> Result<()> {
    let file = config::open_log_file(log_path)?;
    let default_level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_env(config::LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("rustls=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
}
