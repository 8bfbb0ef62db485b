//! # notikit-cli
//!
//! Command-line front end for the notification descriptor codec.
//!
//! ## Features
//!
//! - **Decode**: requests, categories and actions from JSON files or stdin
//! - **Encode**: normalized request mappings, delivered notifications, responses
//! - **Round-trip**: check a request survives encode/decode unchanged
//! - **Multiple output formats**: Pretty, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
