//! `notikit decode` - Decode mappings into native descriptors.

use anyhow::{Context as _, Result};
use colored::Colorize;
use notikit::chrono::Utc;
use notikit::{
    option_mask, NotificationActionDescriptor, NotificationCategoryDescriptor,
    NotificationRequestDescriptor, NotificationSound, NotificationTrigger, WireTag,
};
use std::collections::BTreeSet;

use super::{display_name, read_json, read_object, Context};
use crate::cli::args::{DecodeArgs, DecodeKind};
use crate::output::{print_structured, OutputFormat};

pub fn execute(ctx: &Context, args: DecodeArgs) -> Result<()> {
    match args.kind {
        DecodeKind::Request(input) => {
            let map = read_object(&input.input)?;
            let request = ctx
                .codec
                .decode_request(&map)
                .with_context(|| format!("failed to decode request from {}", display_name(&input.input)))?;

            match ctx.output_format {
                OutputFormat::Pretty => print_request(&request),
                format => print_structured(format, &request)?,
            }
        }
        DecodeKind::Category(input) => {
            let map = read_object(&input.input)?;
            let category = ctx
                .codec
                .decode_category(&map)
                .with_context(|| format!("failed to decode category from {}", display_name(&input.input)))?;

            match ctx.output_format {
                OutputFormat::Pretty => print_category(&category),
                format => print_structured(format, &category)?,
            }
        }
        DecodeKind::Categories(input) => {
            let value = read_json(&input.input)?;
            let items = value.as_array().ok_or_else(|| {
                anyhow::anyhow!("{} must contain a JSON array of categories", display_name(&input.input))
            })?;
            let categories = ctx.codec.decode_categories(items).with_context(|| {
                format!("failed to decode categories from {}", display_name(&input.input))
            })?;

            match ctx.output_format {
                OutputFormat::Pretty => {
                    for (i, category) in categories.iter().enumerate() {
                        if i > 0 {
                            println!();
                        }
                        print_category(category);
                    }
                }
                format => print_structured(format, &categories)?,
            }
        }
        DecodeKind::Action(input) => {
            let map = read_object(&input.input)?;
            let action = ctx
                .codec
                .decode_action(&map)
                .with_context(|| format!("failed to decode action from {}", display_name(&input.input)))?;

            match ctx.output_format {
                OutputFormat::Pretty => print_action(&action, ""),
                format => print_structured(format, &action)?,
            }
        }
    }

    Ok(())
}

fn print_request(request: &NotificationRequestDescriptor) {
    println!("{} {}", "Request:".bold(), request.identifier.cyan().bold());

    print_text("title", &request.title);
    print_text("subtitle", &request.subtitle);
    print_text("body", &request.body);
    if let Some(badge) = request.badge {
        println!("  {} {}", "badge:".bold(), badge);
    }

    let sound = match &request.sound {
        NotificationSound::Default => "default".to_string(),
        NotificationSound::Silent => "silent".dimmed().to_string(),
        NotificationSound::Named { name } => name.clone(),
        NotificationSound::Critical { name, volume } => format!(
            "{} {} at {:.0}%",
            "critical".red().bold(),
            name.as_deref().unwrap_or("default"),
            volume * 100.0
        ),
    };
    println!("  {} {}", "sound:".bold(), sound);

    print_text("category", &request.category_identifier);
    print_text("thread", &request.thread_identifier);
    println!("  {} {}", "interruption:".bold(), request.interruption_level.to_string().yellow());

    match &request.trigger {
        None => println!("  {} {}", "trigger:".bold(), "immediate".green()),
        Some(NotificationTrigger::Calendar(trigger)) => {
            let kind = if trigger.repeats { "repeating calendar" } else { "calendar" };
            println!(
                "  {} {} at {}",
                "trigger:".bold(),
                kind.green(),
                trigger.fire_date.to_rfc3339()
            );
            if trigger.repeats {
                let components: Vec<String> = trigger
                    .matching_components(&Utc)
                    .into_iter()
                    .map(|(unit, value)| format!("{unit}={value}"))
                    .collect();
                println!(
                    "    {} {} {}",
                    "matches:".bold(),
                    components.join(" "),
                    format!("(mask {})", option_mask(&trigger.effective_units())).dimmed()
                );
            }
        }
        Some(NotificationTrigger::TimeInterval(trigger)) => {
            let kind = if trigger.repeats { "every" } else { "after" };
            println!("  {} {} {}s", "trigger:".bold(), kind.green(), trigger.seconds);
        }
    }

    if !request.user_info.is_empty() {
        let keys: Vec<&str> = request.user_info.keys().map(String::as_str).collect();
        println!("  {} {}", "userInfo:".bold(), keys.join(", ").dimmed());
    }
}

fn print_category(category: &NotificationCategoryDescriptor) {
    println!("{} {}", "Category:".bold(), category.identifier.cyan().bold());
    if !category.options.is_empty() {
        println!(
            "  {} {} {}",
            "options:".bold(),
            join_tags(&category.options),
            format!("(mask {})", category.options_mask()).dimmed()
        );
    }

    if category.actions.is_empty() {
        println!("  {}", "(no actions)".dimmed());
    }
    for action in &category.actions {
        print_action(action, "  ");
    }
}

fn print_action(action: &NotificationActionDescriptor, indent: &str) {
    println!(
        "{indent}{} {} {}",
        "Action:".bold(),
        action.identifier.cyan(),
        format!("\"{}\"", action.title).dimmed()
    );
    if !action.options.is_empty() {
        println!(
            "{indent}  {} {} {}",
            "options:".bold(),
            join_tags(&action.options),
            format!("(mask {})", action.options_mask()).dimmed()
        );
    }
    if let Some(text_input) = &action.text_input {
        let button = if text_input.button_title.is_empty() {
            "(platform default)"
        } else {
            text_input.button_title.as_str()
        };
        println!("{indent}  {} button {}", "text input:".bold(), button);
        if !text_input.placeholder.is_empty() {
            println!("{indent}  {} {}", "placeholder:".bold(), text_input.placeholder);
        }
    }
}

fn print_text(label: &str, value: &str) {
    if !value.is_empty() {
        println!("  {} {}", format!("{label}:").bold(), value);
    }
}

fn join_tags<T: WireTag>(set: &BTreeSet<T>) -> String {
    set.iter().map(|t| t.tag()).collect::<Vec<_>>().join(", ")
}
