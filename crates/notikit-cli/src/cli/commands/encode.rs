//! `notikit encode` - Produce external mappings.

use anyhow::{Context as _, Result};
use notikit::serde_json;
use notikit::{DeliveredNotification, NotificationResponse};

use super::{display_name, read_json, read_object, Context};
use crate::cli::args::{EncodeArgs, EncodeKind};
use crate::output::print_structured;

pub fn execute(ctx: &Context, args: EncodeArgs) -> Result<()> {
    let mapping = match args.kind {
        EncodeKind::Request(input) => {
            let map = read_object(&input.input)?;
            let request = ctx
                .codec
                .decode_request(&map)
                .with_context(|| format!("failed to decode request from {}", display_name(&input.input)))?;
            ctx.codec.encode_request(&request)
        }
        EncodeKind::Delivered(input) => {
            let notification: DeliveredNotification = serde_json::from_value(read_json(&input.input)?)
                .with_context(|| {
                    format!(
                        "{} is not a delivered-notification record",
                        display_name(&input.input)
                    )
                })?;
            ctx.codec.encode_delivered_notification(&notification)
        }
        EncodeKind::Response(input) => {
            let response: NotificationResponse = serde_json::from_value(read_json(&input.input)?)
                .with_context(|| {
                    format!("{} is not a notification-response record", display_name(&input.input))
                })?;
            ctx.codec.encode_response(&response)
        }
    };

    // Mappings are JSON by nature, so pretty output is JSON too
    print_structured(ctx.output_format, &mapping)
}
