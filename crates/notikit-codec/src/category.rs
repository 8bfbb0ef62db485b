//! Category and action decoding.

use notikit_core::{
    ActionOption, CategoryOption, NotificationActionDescriptor, NotificationCategoryDescriptor,
    Result, TextInputOptions,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::fields::{as_object, FieldReader};
use crate::keys;

/// Decode an action mapping.
pub fn decode_action(input: &Map<String, Value>) -> Result<NotificationActionDescriptor> {
    decode_action_at(&FieldReader::new(input))
}

fn decode_action_at(fields: &FieldReader<'_>) -> Result<NotificationActionDescriptor> {
    let identifier = fields.required_str(&[keys::IDENTIFIER, keys::ID])?;
    let title = fields.required_str(&[keys::TITLE])?;

    let text_input = match fields.optional_object(keys::TEXT_INPUT)? {
        Some(text_input) => {
            let path = fields.path_of(keys::TEXT_INPUT);
            let text_fields = FieldReader::nested(text_input, &path);
            Some(TextInputOptions {
                button_title: text_fields.str_or_empty(keys::BUTTON_TITLE)?,
                placeholder: text_fields.str_or_empty(keys::PLACEHOLDER)?,
            })
        }
        None => None,
    };

    let options = fields.option_set::<ActionOption>(keys::OPTIONS)?;

    Ok(NotificationActionDescriptor {
        identifier,
        title,
        options,
        text_input,
    })
}

/// Decode a category mapping, including its actions.
///
/// The category identifier is checked before any action; actions are
/// checked in order, so the first failing action is the one reported.
pub fn decode_category(input: &Map<String, Value>) -> Result<NotificationCategoryDescriptor> {
    decode_category_at(&FieldReader::new(input))
}

fn decode_category_at(fields: &FieldReader<'_>) -> Result<NotificationCategoryDescriptor> {
    let identifier = fields.required_str(&[keys::IDENTIFIER, keys::ID])?;

    let actions = match fields.optional_array(keys::ACTIONS)? {
        Some(items) => {
            let mut actions = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let path = format!("{}[{i}]", fields.path_of(keys::ACTIONS));
                let map = as_object(&path, item)?;
                actions.push(decode_action_at(&FieldReader::nested(map, &path))?);
            }
            actions
        }
        None => Vec::new(),
    };

    let options = fields.option_set::<CategoryOption>(keys::OPTIONS)?;

    debug!(
        identifier = %identifier,
        actions = actions.len(),
        "decoded notification category"
    );

    Ok(NotificationCategoryDescriptor {
        identifier,
        actions,
        options,
    })
}

/// Decode the array handed to category registration.
pub fn decode_categories(input: &[Value]) -> Result<Vec<NotificationCategoryDescriptor>> {
    input
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("[{i}]");
            let map = as_object(&path, item)?;
            decode_category_at(&FieldReader::nested(map, &path))
        })
        .collect()
}
