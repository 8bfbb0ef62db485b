//! Command implementations.

pub mod config;
pub mod decode;
pub mod encode;
pub mod roundtrip;

use anyhow::{Context as _, Result};
use notikit::serde_json::{self, Map, Value};
use notikit::NotificationCodec;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Codec built once from the resolved platform
    pub codec: NotificationCodec,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,

    /// Config file in use
    pub config_path: PathBuf,
}

/// Read a JSON document from a file, or from stdin when `path` is `-`.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };

    serde_json::from_str(&content).with_context(|| format!("{} is not valid JSON", display_name(path)))
}

/// Read a JSON object.
pub fn read_object(path: &Path) -> Result<Map<String, Value>> {
    match read_json(path)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!(
            "{} must contain a JSON object, found {}",
            display_name(path),
            notikit::fields::type_name(&other)
        ),
    }
}

/// Human name of an input source.
pub fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}
