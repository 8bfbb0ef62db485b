//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Decode, encode and round-trip notification mappings
///
/// Reads the JSON mappings a cross-platform bridge sends for notification
/// requests, categories and actions, and shows the native objects they
/// describe.
#[derive(Parser, Debug)]
#[command(name = "notikit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Target OS major version (overrides the config file)
    #[arg(long, env = "NOTIKIT_OS_VERSION", global = true)]
    pub os_version: Option<u32>,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, env = "NOTIKIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a mapping into a native descriptor
    Decode(DecodeArgs),

    /// Produce the external mapping for a request or a native record
    Encode(EncodeArgs),

    /// Check that a request survives encode/decode unchanged
    Roundtrip(InputArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

/// Input source shared by all data commands
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON file to read, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

// ============================================================================
// Decode command
// ============================================================================

#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(subcommand)]
    pub kind: DecodeKind,
}

#[derive(Subcommand, Debug)]
pub enum DecodeKind {
    /// Decode a notification request
    Request(InputArgs),

    /// Decode a notification category
    Category(InputArgs),

    /// Decode an array of notification categories
    Categories(InputArgs),

    /// Decode a notification action
    Action(InputArgs),
}

// ============================================================================
// Encode command
// ============================================================================

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub kind: EncodeKind,
}

#[derive(Subcommand, Debug)]
pub enum EncodeKind {
    /// Decode a request mapping and print its normalized form
    Request(InputArgs),

    /// Project a delivered-notification record (`date` plus a `request` as printed by `decode request -o json`)
    Delivered(InputArgs),

    /// Project a notification-response record (`notification`, `action_identifier`, `user_text`)
    Response(InputArgs),
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Show the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
