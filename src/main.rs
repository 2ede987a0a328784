use anyhow::Result;
use clap::Parser;
use hellomd::{
    app::config::Config,
    cli::{self, Cli},
};
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbose flag and config override
    let cli = Cli::parse();

    if let Some(ref config_dir) = cli.config {
        hellomd::util::paths::set_config_dir_override(Some(config_dir.clone()));
    }

    // Get logs directory (creates if needed); never the document output directory
    let logs_dir = hellomd::util::paths::resolve_logs_dir();
    std::fs::create_dir_all(&logs_dir).ok();

    // Daily rotating JSON log file
    let file_appender = tracing_appender::rolling::daily(&logs_dir, "hellomd.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let log_level = if cli.verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::from_level(
                    log_level,
                )),
        )
        .init();

    tracing::info!("Starting hellomd");
    tracing::trace!("CLI arguments: {:?}", cli);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {:#}", e);
            Config::default()
        }
    };
    tracing::debug!("Config loaded: {:?}", config);

    let command = cli.command.unwrap_or_default();
    let exit_code = cli::handler::handle_command(command, &config);

    // Flush buffered log lines before exiting
    drop(guard);
    std::process::exit(exit_code);
}
