//! Wire keys of the external mapping.

/// Identifier of a request, category or action
pub const IDENTIFIER: &str = "identifier";
/// Alias of [`IDENTIFIER`] sent by the JavaScript layer
pub const ID: &str = "id";

/// Title of a request or action
pub const TITLE: &str = "title";
/// Secondary line under the title
pub const SUBTITLE: &str = "subtitle";
/// Main message text
pub const BODY: &str = "body";
/// App icon badge number
pub const BADGE: &str = "badge";
/// Sound file name
pub const SOUND: &str = "sound";
/// Deliver without any sound
pub const IS_SILENT: &str = "isSilent";
/// Play a critical alert sound
pub const IS_CRITICAL: &str = "isCritical";
/// Critical alert volume in `0.0..=1.0`
pub const CRITICAL_SOUND_VOLUME: &str = "criticalSoundVolume";
/// Category identifier of a request
pub const CATEGORY: &str = "category";
/// Thread identifier of a request
pub const THREAD_ID: &str = "threadId";
/// Free-form payload passed through unchanged
pub const USER_INFO: &str = "userInfo";
/// Interruption level tag
pub const INTERRUPTION_LEVEL: &str = "interruptionLevel";

/// Calendar trigger date, ISO-8601 or epoch milliseconds
pub const FIRE_DATE: &str = "fireDate";
/// Whether the trigger repeats
pub const REPEATS: &str = "repeats";
/// Calendar units matched by a repeating calendar trigger
pub const REPEATS_COMPONENT: &str = "repeatsComponent";
/// Time interval trigger delay in seconds
pub const TIME_INTERVAL: &str = "timeInterval";

/// Actions of a category
pub const ACTIONS: &str = "actions";
/// Option set of a category or action
pub const OPTIONS: &str = "options";
/// Text-input settings of an action
pub const TEXT_INPUT: &str = "textInput";
/// Send button title of a text-input action
pub const BUTTON_TITLE: &str = "buttonTitle";
/// Placeholder of a text-input field
pub const PLACEHOLDER: &str = "placeholder";

/// Delivery date of a delivered notification
pub const DATE: &str = "date";
/// Thread identifier as reported for delivered notifications
pub const DELIVERED_THREAD_ID: &str = "thread-id";
/// Identifier of the action the user chose
pub const ACTION_IDENTIFIER: &str = "actionIdentifier";
/// Text entered in a text-input response
pub const USER_TEXT: &str = "userText";
