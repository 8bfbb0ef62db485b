use serde::{Deserialize, Serialize};

use super::{option_mask, ActionOption, ActionOptions, CategoryOptions};

/// A named set of interactive buttons attachable to a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCategoryDescriptor {
    /// Category identifier referenced by requests
    pub identifier: String,

    /// Buttons, in display order
    #[serde(default)]
    pub actions: Vec<NotificationActionDescriptor>,

    /// Display options
    #[serde(default)]
    pub options: CategoryOptions,
}

impl NotificationCategoryDescriptor {
    /// Create a category without actions
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            actions: Vec::new(),
            options: CategoryOptions::new(),
        }
    }

    /// Find an action by identifier
    #[must_use]
    pub fn action(&self, identifier: &str) -> Option<&NotificationActionDescriptor> {
        self.actions.iter().find(|a| a.identifier == identifier)
    }

    /// Platform `UNNotificationCategoryOptions` mask
    #[must_use]
    pub fn options_mask(&self) -> u64 {
        option_mask(&self.options)
    }
}

/// A single notification button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationActionDescriptor {
    /// Reported back as the response's action identifier
    pub identifier: String,

    /// Button label
    pub title: String,

    /// Behavior flags
    #[serde(default)]
    pub options: ActionOptions,

    /// Present for text-input actions
    #[serde(default)]
    pub text_input: Option<TextInputOptions>,
}

impl NotificationActionDescriptor {
    /// Create a plain action
    #[must_use]
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            options: ActionOptions::new(),
            text_input: None,
        }
    }

    /// Returns true if the action asks the user for text
    #[must_use]
    pub const fn is_text_input(&self) -> bool {
        self.text_input.is_some()
    }

    /// Returns true if the action opens the app
    #[must_use]
    pub fn launches_app(&self) -> bool {
        self.options.contains(&ActionOption::Foreground)
    }

    /// Platform `UNNotificationActionOptions` mask
    #[must_use]
    pub fn options_mask(&self) -> u64 {
        option_mask(&self.options)
    }
}

/// Text field configuration of a text-input action.
///
/// Empty strings leave the platform defaults in place (the localized
/// "Send" button title and no placeholder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInputOptions {
    /// Title of the send button
    #[serde(default)]
    pub button_title: String,

    /// Placeholder shown in the empty field
    #[serde(default)]
    pub placeholder: String,
}
