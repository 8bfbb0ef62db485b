use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{CalendarUnit, CalendarUnits, InterruptionLevel};

/// Shortest interval the platform accepts for a repeating time-interval trigger
pub const MIN_REPEATING_INTERVAL_SECS: f64 = 60.0;

/// Volume used for critical sounds when none is given
pub const DEFAULT_CRITICAL_VOLUME: f64 = 1.0;

/// A scheduled, not-yet-delivered notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequestDescriptor {
    /// Unique request identifier
    pub identifier: String,

    /// Short description of the reason for the alert
    #[serde(default)]
    pub title: String,

    /// Secondary description
    #[serde(default)]
    pub subtitle: String,

    /// Message body
    #[serde(default)]
    pub body: String,

    /// App icon badge number
    #[serde(default)]
    pub badge: Option<u32>,

    /// Sound played on delivery
    #[serde(default)]
    pub sound: NotificationSound,

    /// Registered category this notification belongs to (empty = none)
    #[serde(default)]
    pub category_identifier: String,

    /// Thread used to group notifications (empty = none)
    #[serde(default)]
    pub thread_identifier: String,

    /// Arbitrary application payload
    #[serde(default)]
    pub user_info: Map<String, Value>,

    /// Urgency tier
    #[serde(default)]
    pub interruption_level: InterruptionLevel,

    /// When to deliver; `None` delivers immediately
    #[serde(default)]
    pub trigger: Option<NotificationTrigger>,
}

impl NotificationRequestDescriptor {
    /// Create an immediate request with empty content
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: String::new(),
            subtitle: String::new(),
            body: String::new(),
            badge: None,
            sound: NotificationSound::Default,
            category_identifier: String::new(),
            thread_identifier: String::new(),
            user_info: Map::new(),
            interruption_level: InterruptionLevel::default(),
            trigger: None,
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the trigger
    #[must_use]
    pub fn with_trigger(mut self, trigger: NotificationTrigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Returns true if the notification repeats
    #[must_use]
    pub fn repeats(&self) -> bool {
        self.trigger.as_ref().is_some_and(NotificationTrigger::repeats)
    }

    /// Returns true if the request belongs to a category
    #[must_use]
    pub fn has_category(&self) -> bool {
        !self.category_identifier.is_empty()
    }
}

/// Sound configuration of a notification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NotificationSound {
    /// Platform default sound
    #[default]
    Default,
    /// No sound
    Silent,
    /// Sound file bundled with the app
    Named {
        /// File name
        name: String,
    },
    /// Critical alert sound, played even when muted
    Critical {
        /// Bundled file name; the default critical sound when absent
        name: Option<String>,
        /// Volume between 0.0 and 1.0
        volume: f64,
    },
}

impl NotificationSound {
    /// Name of the sound file, if one is set
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name } => Some(name),
            Self::Critical { name, .. } => name.as_deref(),
            Self::Default | Self::Silent => None,
        }
    }

    /// Returns true for critical sounds
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critical { .. })
    }
}

/// Delivery condition of a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NotificationTrigger {
    /// Fires at an absolute date, optionally repeating on calendar components
    Calendar(CalendarTrigger),
    /// Fires after a relative number of seconds
    TimeInterval(TimeIntervalTrigger),
}

impl NotificationTrigger {
    /// Returns true if the trigger repeats
    #[must_use]
    pub const fn repeats(&self) -> bool {
        match self {
            Self::Calendar(t) => t.repeats,
            Self::TimeInterval(t) => t.repeats,
        }
    }
}

/// Calendar-based trigger.
///
/// A non-repeating trigger matches every component of `fire_date`. A repeating
/// trigger matches only the components in `units`, so `{hour, minute}` fires
/// daily at the same time. An empty unit set stands for [`default_units`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarTrigger {
    /// First (or only) delivery date
    pub fire_date: DateTime<Utc>,

    /// Whether the trigger repeats
    #[serde(default)]
    pub repeats: bool,

    /// Components matched when repeating
    #[serde(default)]
    pub units: CalendarUnits,
}

/// The full date, without the weekday
pub fn default_units() -> CalendarUnits {
    [
        CalendarUnit::Year,
        CalendarUnit::Month,
        CalendarUnit::Day,
        CalendarUnit::Hour,
        CalendarUnit::Minute,
        CalendarUnit::Second,
    ]
    .into_iter()
    .collect()
}

impl CalendarTrigger {
    /// One-shot trigger at `fire_date`
    #[must_use]
    pub fn at(fire_date: DateTime<Utc>) -> Self {
        Self {
            fire_date,
            repeats: false,
            units: default_units(),
        }
    }

    /// Repeating trigger matching `units` of `fire_date`
    #[must_use]
    pub fn repeating(fire_date: DateTime<Utc>, units: CalendarUnits) -> Self {
        Self {
            fire_date,
            repeats: true,
            units,
        }
    }

    /// Unit set with the empty-set default applied
    #[must_use]
    pub fn effective_units(&self) -> CalendarUnits {
        if self.units.is_empty() {
            default_units()
        } else {
            self.units.clone()
        }
    }

    /// Date components handed to the platform, evaluated in `tz`
    pub fn matching_components<Tz: TimeZone>(&self, tz: &Tz) -> Vec<(CalendarUnit, i64)> {
        let local = self.fire_date.with_timezone(tz);
        let units = if self.repeats {
            self.effective_units()
        } else {
            default_units()
        };

        units
            .into_iter()
            .map(|unit| {
                let value = match unit {
                    CalendarUnit::Year => i64::from(local.year()),
                    CalendarUnit::Month => i64::from(local.month()),
                    CalendarUnit::Day => i64::from(local.day()),
                    CalendarUnit::Weekday => i64::from(local.weekday().number_from_sunday()),
                    CalendarUnit::Hour => i64::from(local.hour()),
                    CalendarUnit::Minute => i64::from(local.minute()),
                    CalendarUnit::Second => i64::from(local.second()),
                };
                (unit, value)
            })
            .collect()
    }
}

/// Relative time trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeIntervalTrigger {
    /// Seconds until delivery
    pub seconds: f64,

    /// Whether the trigger repeats every `seconds`
    #[serde(default)]
    pub repeats: bool,
}

impl TimeIntervalTrigger {
    /// One-shot trigger after `seconds`
    #[must_use]
    pub const fn after(seconds: f64) -> Self {
        Self {
            seconds,
            repeats: false,
        }
    }
}
