//! `notikit roundtrip` - Check that a request survives encode/decode.

use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Serialize;

use super::{display_name, read_object, Context};
use crate::cli::args::InputArgs;
use crate::output::{print_structured, OutputFormat};

#[derive(Serialize)]
struct RoundtripReport<'a> {
    identifier: &'a str,
    profile: String,
    lossless: bool,
    encoded: &'a notikit::serde_json::Map<String, notikit::serde_json::Value>,
}

pub fn execute(ctx: &Context, args: &InputArgs) -> Result<()> {
    let map = read_object(&args.input)?;
    let name = display_name(&args.input);

    let request = ctx
        .codec
        .decode_request(&map)
        .with_context(|| format!("failed to decode request from {name}"))?;
    let encoded = ctx.codec.encode_request(&request);
    let decoded = ctx
        .codec
        .decode_request(&encoded)
        .with_context(|| format!("encoded form of {name} no longer decodes"))?;

    if decoded != request {
        anyhow::bail!(
            "round-trip changed request `{}`\n  before: {:?}\n  after:  {:?}",
            request.identifier,
            request,
            decoded
        );
    }

    match ctx.output_format {
        OutputFormat::Pretty => {
            println!(
                "{} request {} is lossless under the {} profile",
                "OK".green().bold(),
                request.identifier.cyan(),
                ctx.codec.capabilities().profile()
            );
            if ctx.verbose {
                println!("{}", notikit::serde_json::to_string_pretty(&encoded)?);
            }
        }
        format => print_structured(
            format,
            &RoundtripReport {
                identifier: &request.identifier,
                profile: ctx.codec.capabilities().profile().to_string(),
                lossless: true,
                encoded: &encoded,
            },
        )?,
    }

    Ok(())
}
