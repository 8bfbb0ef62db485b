use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NotificationRequestDescriptor;

/// A notification the system has shown to the user.
///
/// Produced by the platform notification center; the codec only encodes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveredNotification {
    /// Delivery date
    pub date: DateTime<Utc>,

    /// The request that produced the notification
    pub request: NotificationRequestDescriptor,
}

impl DeliveredNotification {
    /// Request identifier
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.request.identifier
    }
}

/// The user's reaction to a delivered notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResponse {
    /// The notification acted upon
    pub notification: DeliveredNotification,

    /// Identifier of the chosen action, or one of [`action_identifiers`]
    pub action_identifier: String,

    /// Text entered in a text-input action
    #[serde(default)]
    pub user_text: Option<String>,
}

impl NotificationResponse {
    /// Returns true if the user opened the notification itself
    #[must_use]
    pub fn is_default_action(&self) -> bool {
        self.action_identifier == action_identifiers::DEFAULT
    }

    /// Returns true if the user dismissed the notification
    #[must_use]
    pub fn is_dismiss_action(&self) -> bool {
        self.action_identifier == action_identifiers::DISMISS
    }
}

/// Action identifiers reported by the platform for built-in interactions
pub mod action_identifiers {
    /// User opened the notification
    pub const DEFAULT: &str = "com.apple.UNNotificationDefaultActionIdentifier";
    /// User dismissed the notification (needs `customDismissAction`)
    pub const DISMISS: &str = "com.apple.UNNotificationDismissActionIdentifier";
}
