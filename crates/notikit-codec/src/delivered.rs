//! Projections of delivered notifications and responses.
//!
//! Field mapping:
//!
//! | key                | source                                   | omitted when          |
//! |--------------------|------------------------------------------|-----------------------|
//! | `identifier`       | request identifier                       | never                 |
//! | `date`             | delivery date, ISO-8601 UTC              | never                 |
//! | `title`            | content title                            | empty                 |
//! | `subtitle`         | content subtitle                         | empty                 |
//! | `body`             | content body                             | empty                 |
//! | `badge`            | content badge                            | unset                 |
//! | `sound`            | sound file name                          | no named sound        |
//! | `category`         | category identifier                      | empty                 |
//! | `thread-id`        | thread identifier                        | empty                 |
//! | `userInfo`         | user info payload                        | empty                 |
//! | `interruptionLevel`| interruption level tag                   | baseline profile      |
//! | `actionIdentifier` | chosen action (responses only)           | never                 |
//! | `userText`         | text input (responses only)              | not a text response   |
//!
//! Trigger details are not projected: once delivered, only the date matters.

use notikit_core::{DeliveredNotification, NotificationResponse, WireTag};
use serde_json::{Map, Value};

use crate::config::PlatformCapabilities;
use crate::keys;
use crate::request::{format_date, insert_non_empty};

/// Encode a delivered notification.
pub fn encode_delivered_notification(
    notification: &DeliveredNotification,
    capabilities: PlatformCapabilities,
) -> Map<String, Value> {
    let request = &notification.request;
    let mut out = Map::new();

    out.insert(keys::IDENTIFIER.into(), request.identifier.clone().into());
    out.insert(keys::DATE.into(), format_date(&notification.date).into());
    insert_non_empty(&mut out, keys::TITLE, &request.title);
    insert_non_empty(&mut out, keys::SUBTITLE, &request.subtitle);
    insert_non_empty(&mut out, keys::BODY, &request.body);
    if let Some(badge) = request.badge {
        out.insert(keys::BADGE.into(), badge.into());
    }
    if let Some(sound) = request.sound.name() {
        out.insert(keys::SOUND.into(), sound.into());
    }
    insert_non_empty(&mut out, keys::CATEGORY, &request.category_identifier);
    insert_non_empty(&mut out, keys::DELIVERED_THREAD_ID, &request.thread_identifier);
    if !request.user_info.is_empty() {
        out.insert(keys::USER_INFO.into(), Value::Object(request.user_info.clone()));
    }
    if capabilities.supports_interruption_levels() {
        out.insert(
            keys::INTERRUPTION_LEVEL.into(),
            request.interruption_level.tag().into(),
        );
    }

    out
}

/// Encode a notification response: the delivered notification plus the
/// user's action.
pub fn encode_response(
    response: &NotificationResponse,
    capabilities: PlatformCapabilities,
) -> Map<String, Value> {
    let mut out = encode_delivered_notification(&response.notification, capabilities);

    out.insert(
        keys::ACTION_IDENTIFIER.into(),
        response.action_identifier.clone().into(),
    );
    if let Some(text) = &response.user_text {
        out.insert(keys::USER_TEXT.into(), text.clone().into());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use notikit_core::{
        action_identifiers, InterruptionLevel, NotificationRequestDescriptor, NotificationSound,
    };
    use serde_json::json;

    fn delivered() -> DeliveredNotification {
        let mut request = NotificationRequestDescriptor::new("n1")
            .with_title("Package shipped")
            .with_body("Arrives Thursday");
        request.thread_identifier = "orders".into();
        request.category_identifier = "ORDER".into();
        request.sound = NotificationSound::Named {
            name: "bell.caf".into(),
        };
        request.interruption_level = InterruptionLevel::Passive;

        DeliveredNotification {
            date: Utc.with_ymd_and_hms(2025, 5, 4, 12, 0, 0).unwrap(),
            request,
        }
    }

    #[test]
    fn test_encode_delivered_notification() {
        let encoded = encode_delivered_notification(&delivered(), PlatformCapabilities::modern());
        assert_eq!(
            Value::Object(encoded),
            json!({
                "identifier": "n1",
                "date": "2025-05-04T12:00:00Z",
                "title": "Package shipped",
                "body": "Arrives Thursday",
                "sound": "bell.caf",
                "category": "ORDER",
                "thread-id": "orders",
                "interruptionLevel": "passive"
            })
        );
    }

    #[test]
    fn test_missing_subtitle_is_omitted() {
        let encoded = encode_delivered_notification(&delivered(), PlatformCapabilities::modern());
        assert!(!encoded.contains_key("subtitle"));
        assert!(!encoded.contains_key("badge"));
        assert!(!encoded.contains_key("userInfo"));
    }

    #[test]
    fn test_baseline_omits_interruption_level() {
        let encoded =
            encode_delivered_notification(&delivered(), PlatformCapabilities::for_os_version(13));
        assert!(!encoded.contains_key("interruptionLevel"));
    }

    #[test]
    fn test_encode_text_response() {
        let response = NotificationResponse {
            notification: delivered(),
            action_identifier: "reply".into(),
            user_text: Some("on my way".into()),
        };
        let encoded = encode_response(&response, PlatformCapabilities::modern());
        assert_eq!(encoded["identifier"], "n1");
        assert_eq!(encoded["actionIdentifier"], "reply");
        assert_eq!(encoded["userText"], "on my way");
    }

    #[test]
    fn test_encode_default_action_response() {
        let response = NotificationResponse {
            notification: delivered(),
            action_identifier: action_identifiers::DEFAULT.into(),
            user_text: None,
        };
        assert!(response.is_default_action());
        let encoded = encode_response(&response, PlatformCapabilities::modern());
        assert_eq!(encoded["actionIdentifier"], action_identifiers::DEFAULT);
        assert!(!encoded.contains_key("userText"));
    }
}
