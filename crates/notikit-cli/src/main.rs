//! notikit - notification mapping tool
//!
//! Decode, encode and round-trip notification mappings from the shell.

use anyhow::Result;

fn main() -> Result<()> {
    notikit_cli::run()
}
