//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use notikit::NotificationCodec;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;

    // Flags win over the config file
    let output_format = cli.output.or(config.output_format).unwrap_or_default();
    let codec_config = config.codec_config(cli.os_version);
    debug!(
        config = %config_path.display(),
        os_version = codec_config.platform.os_version,
        "configuration loaded"
    );

    let ctx = commands::Context {
        codec: NotificationCodec::from_config(&codec_config),
        output_format,
        verbose: cli.verbose,
        config_path,
    };

    match cli.command {
        Commands::Decode(args) => commands::decode::execute(&ctx, args),
        Commands::Encode(args) => commands::encode::execute(&ctx, args),
        Commands::Roundtrip(args) => commands::roundtrip::execute(&ctx, &args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(format!("notikit={level}").parse()?))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
