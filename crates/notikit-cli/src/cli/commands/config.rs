//! `notikit config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::{print_structured, OutputFormat};

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Path => show_path(ctx),
        ConfigCommands::Init { force } => init_config(ctx, force),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load_from(&ctx.config_path)?;
    let capabilities = ctx.codec.capabilities();

    match ctx.output_format {
        OutputFormat::Pretty => {
            println!("{}", "Current Configuration:".bold());
            println!();
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!("  {} {}", "platform.os_version:".bold(), config.platform.os_version);
            println!();
            println!(
                "  {} {} (os {})",
                "effective profile:".bold(),
                capabilities.profile().to_string().cyan(),
                capabilities.os_version()
            );
        }
        format => print_structured(format, &config)?,
    }

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}

fn init_config(ctx: &Context, force: bool) -> Result<()> {
    let path = &ctx.config_path;

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}\n\
             Use --force to overwrite it.",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!("{} wrote {}", "Success:".green().bold(), path.display());

    Ok(())
}
