use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A platform enum with a stable wire tag and raw platform value.
///
/// `ALL` is the exhaustive lookup table: decoding walks it, so a variant
/// missing from the table can never be decoded.
pub trait WireTag: Sized + Copy + Ord + 'static {
    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// External string tag
    fn tag(self) -> &'static str;

    /// Raw value used by the platform API
    fn raw_value(self) -> u64;

    /// Look up a variant by its string tag
    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.tag() == tag)
    }

    /// Look up a variant by its raw platform value
    fn from_raw(raw: u64) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.raw_value() == raw)
    }
}

/// Combined platform mask of an option set
pub fn option_mask<T: WireTag>(set: &BTreeSet<T>) -> u64 {
    set.iter().fold(0, |mask, option| mask | option.raw_value())
}

/// Urgency tier controlling how the system presents a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterruptionLevel {
    /// Added to the list without lighting the screen or playing a sound
    Passive,
    /// Presented immediately (platform default)
    #[default]
    Active,
    /// Breaks through focus modes
    TimeSensitive,
    /// Bypasses the mute switch and do-not-disturb
    Critical,
}

impl WireTag for InterruptionLevel {
    const ALL: &'static [Self] = &[
        Self::Passive,
        Self::Active,
        Self::TimeSensitive,
        Self::Critical,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::Passive => "passive",
            Self::Active => "active",
            Self::TimeSensitive => "timeSensitive",
            Self::Critical => "critical",
        }
    }

    fn raw_value(self) -> u64 {
        match self {
            Self::Passive => 0,
            Self::Active => 1,
            Self::TimeSensitive => 2,
            Self::Critical => 3,
        }
    }
}

/// Calendar component matched by a repeating calendar trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalendarUnit {
    /// Calendar year
    Year,
    /// Month of the year
    Month,
    /// Day of the month
    Day,
    /// Day of the week (1 = Sunday)
    #[serde(rename = "dayOfWeek")]
    Weekday,
    /// Hour of the day
    Hour,
    /// Minute of the hour
    Minute,
    /// Second of the minute
    Second,
}

impl WireTag for CalendarUnit {
    const ALL: &'static [Self] = &[
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Weekday,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Weekday => "dayOfWeek",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    // NSCalendarUnit bits
    fn raw_value(self) -> u64 {
        match self {
            Self::Year => 1 << 2,
            Self::Month => 1 << 3,
            Self::Day => 1 << 4,
            Self::Hour => 1 << 5,
            Self::Minute => 1 << 6,
            Self::Second => 1 << 7,
            Self::Weekday => 1 << 9,
        }
    }
}

/// Set of calendar units
pub type CalendarUnits = BTreeSet<CalendarUnit>;

/// Behavior flags of a notification action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionOption {
    /// Device must be unlocked before the action runs
    AuthenticationRequired,
    /// Action is shown with destructive styling
    Destructive,
    /// Action launches the app into the foreground
    Foreground,
}

impl WireTag for ActionOption {
    const ALL: &'static [Self] = &[Self::AuthenticationRequired, Self::Destructive, Self::Foreground];

    fn tag(self) -> &'static str {
        match self {
            Self::AuthenticationRequired => "authenticationRequired",
            Self::Destructive => "destructive",
            Self::Foreground => "foreground",
        }
    }

    fn raw_value(self) -> u64 {
        match self {
            Self::AuthenticationRequired => 1 << 0,
            Self::Destructive => 1 << 1,
            Self::Foreground => 1 << 2,
        }
    }
}

/// Set of action options
pub type ActionOptions = BTreeSet<ActionOption>;

/// Display flags of a notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryOption {
    /// Deliver dismiss actions to the app
    CustomDismissAction,
    /// Allow the category in CarPlay
    AllowInCarPlay,
    /// Show the title when previews are hidden
    HiddenPreviewsShowTitle,
    /// Show the subtitle when previews are hidden
    HiddenPreviewsShowSubtitle,
    /// Allow Siri to announce the notification
    AllowAnnouncement,
}

impl WireTag for CategoryOption {
    const ALL: &'static [Self] = &[
        Self::CustomDismissAction,
        Self::AllowInCarPlay,
        Self::HiddenPreviewsShowTitle,
        Self::HiddenPreviewsShowSubtitle,
        Self::AllowAnnouncement,
    ];

    fn tag(self) -> &'static str {
        match self {
            Self::CustomDismissAction => "customDismissAction",
            Self::AllowInCarPlay => "allowInCarPlay",
            Self::HiddenPreviewsShowTitle => "hiddenPreviewsShowTitle",
            Self::HiddenPreviewsShowSubtitle => "hiddenPreviewsShowSubtitle",
            Self::AllowAnnouncement => "allowAnnouncement",
        }
    }

    fn raw_value(self) -> u64 {
        match self {
            Self::CustomDismissAction => 1 << 0,
            Self::AllowInCarPlay => 1 << 1,
            Self::HiddenPreviewsShowTitle => 1 << 2,
            Self::HiddenPreviewsShowSubtitle => 1 << 3,
            Self::AllowAnnouncement => 1 << 4,
        }
    }
}

/// Set of category options
pub type CategoryOptions = BTreeSet<CategoryOption>;

macro_rules! display_tag {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.tag())
                }
            }
        )*
    };
}

display_tag!(InterruptionLevel, CalendarUnit, ActionOption, CategoryOption);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_table_consistent<T: WireTag + std::fmt::Debug>() {
        for &variant in T::ALL {
            assert_eq!(T::from_tag(variant.tag()), Some(variant));
            assert_eq!(T::from_raw(variant.raw_value()), Some(variant));
        }
    }

    #[test]
    fn test_lookup_tables_are_consistent() {
        assert_table_consistent::<InterruptionLevel>();
        assert_table_consistent::<CalendarUnit>();
        assert_table_consistent::<ActionOption>();
        assert_table_consistent::<CategoryOption>();
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(InterruptionLevel::from_tag("bogus"), None);
        assert_eq!(InterruptionLevel::from_tag("TimeSensitive"), None);
        assert_eq!(InterruptionLevel::from_raw(4), None);
        assert_eq!(CalendarUnit::from_tag("weekday"), None);
    }

    #[test]
    fn test_option_mask() {
        let options: ActionOptions = [ActionOption::Foreground, ActionOption::Destructive]
            .into_iter()
            .collect();
        assert_eq!(option_mask(&options), 0b110);

        let units: CalendarUnits = [CalendarUnit::Hour, CalendarUnit::Weekday].into_iter().collect();
        assert_eq!(option_mask(&units), 32 | 512);

        assert_eq!(option_mask(&CategoryOptions::new()), 0);
    }

    #[test]
    fn test_display_uses_wire_tag() {
        assert_eq!(InterruptionLevel::TimeSensitive.to_string(), "timeSensitive");
        assert_eq!(CalendarUnit::Weekday.to_string(), "dayOfWeek");
        assert_eq!(InterruptionLevel::default(), InterruptionLevel::Active);
    }
}
