use chrono::{DateTime, Utc};
use notikit_core::{
    CalendarTrigger, CalendarUnit, CalendarUnits, InterruptionLevel, NotificationRequestDescriptor,
    NotificationSound, NotificationTrigger, TimeIntervalTrigger, WireTag, MIN_REPEATING_INTERVAL_SECS,
};
use proptest::prelude::*;
use serde_json::{Map, Value};

use crate::{decode_request, encode_request, keys, PlatformCapabilities};

/// First and last second of the four-digit-year range, as Unix seconds.
const FIRST_SECOND: i64 = -62_167_219_200;
const LAST_SECOND: i64 = 253_402_300_799;

/// Generates any JSON value, nested a few levels deep.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(".{0,8}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn arb_user_info() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(".{0,8}", arb_json(), 0..4).prop_map(|map| map.into_iter().collect())
}

fn arb_sound() -> impl Strategy<Value = NotificationSound> {
    prop_oneof![
        Just(NotificationSound::Default),
        Just(NotificationSound::Silent),
        ".{0,12}".prop_map(|name| NotificationSound::Named { name }),
        (prop::option::of(".{0,12}"), 0.0f64..=1.0)
            .prop_map(|(name, volume)| NotificationSound::Critical { name, volume }),
    ]
}

/// Generates a fire date anywhere in years 0000..=9999, down to the nanosecond.
fn arb_fire_date() -> impl Strategy<Value = DateTime<Utc>> {
    (FIRST_SECOND..=LAST_SECOND, 0u32..1_000_000_000).prop_map(|(secs, nanos)| {
        DateTime::from_timestamp(secs, nanos).unwrap()
    })
}

/// Generates a unit set, including the empty set and the full table.
fn arb_units() -> impl Strategy<Value = CalendarUnits> {
    prop::sample::subsequence(CalendarUnit::ALL, 0..=CalendarUnit::ALL.len())
        .prop_map(|units| units.into_iter().collect())
}

/// Generates epoch milliseconds, half of them inside the four-digit-year range.
fn arb_epoch_millis() -> impl Strategy<Value = i64> {
    prop_oneof![any::<i64>(), FIRST_SECOND * 1000..=LAST_SECOND * 1000 + 999]
}

fn arb_trigger() -> impl Strategy<Value = NotificationTrigger> {
    prop_oneof![
        (arb_fire_date(), any::<bool>(), arb_units()).prop_map(|(fire_date, repeats, units)| {
            NotificationTrigger::Calendar(CalendarTrigger {
                fire_date,
                repeats,
                units,
            })
        }),
        (1.0e-3f64..1.0e9, any::<bool>()).prop_map(|(seconds, repeats)| {
            NotificationTrigger::TimeInterval(TimeIntervalTrigger {
                seconds,
                repeats: repeats && seconds >= MIN_REPEATING_INTERVAL_SECS,
            })
        }),
    ]
}

/// Generates a request descriptor that decoding can produce.
fn arb_request() -> impl Strategy<Value = NotificationRequestDescriptor> {
    (
        ".{1,16}",
        (".{0,16}", ".{0,16}", ".{0,16}"),
        any::<Option<u32>>(),
        arb_sound(),
        (".{0,12}", ".{0,12}"),
        arb_user_info(),
        prop::sample::select(InterruptionLevel::ALL),
        prop::option::of(arb_trigger()),
    )
        .prop_map(
            |(identifier, (title, subtitle, body), badge, sound, (category, thread), user_info, level, trigger)| {
                NotificationRequestDescriptor {
                    identifier,
                    title,
                    subtitle,
                    body,
                    badge,
                    sound,
                    category_identifier: category,
                    thread_identifier: thread,
                    user_info,
                    interruption_level: level,
                    trigger,
                }
            },
        )
}

proptest! {
    /// Encoding then decoding under the modern profile is the identity.
    #[test]
    fn prop_request_roundtrip_modern(request in arb_request()) {
        let capabilities = PlatformCapabilities::modern();
        let encoded = encode_request(&request, capabilities);
        let decoded = decode_request(&encoded, capabilities);
        prop_assert_eq!(decoded, Ok(request), "encoded form: {:?}", encoded);
    }

    /// The baseline profile has no interruption level, so only the default survives.
    #[test]
    fn prop_request_roundtrip_baseline(request in arb_request()) {
        let capabilities = PlatformCapabilities::for_os_version(14);
        let mut request = request;
        request.interruption_level = InterruptionLevel::default();

        let encoded = encode_request(&request, capabilities);
        prop_assert!(!encoded.contains_key(keys::INTERRUPTION_LEVEL));
        let decoded = decode_request(&encoded, capabilities);
        prop_assert_eq!(decoded, Ok(request), "encoded form: {:?}", encoded);
    }

    /// A numeric fire date either decodes to a request that survives
    /// re-encoding, or is rejected as an invalid `fireDate`.
    #[test]
    fn prop_numeric_fire_date_roundtrips_or_is_rejected(millis in arb_epoch_millis()) {
        let capabilities = PlatformCapabilities::modern();
        let mut input = Map::new();
        input.insert(keys::IDENTIFIER.into(), "a".into());
        input.insert(keys::FIRE_DATE.into(), millis.into());

        match decode_request(&input, capabilities) {
            Ok(request) => {
                let encoded = encode_request(&request, capabilities);
                prop_assert_eq!(decode_request(&encoded, capabilities), Ok(request));
            }
            Err(err) => prop_assert_eq!(err.field(), keys::FIRE_DATE),
        }
    }
}
