//! Notification request decoding and encoding.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use notikit_core::{
    CalendarTrigger, CalendarUnit, CalendarUnits, CodecError, InterruptionLevel,
    NotificationRequestDescriptor, NotificationSound, NotificationTrigger, Result,
    TimeIntervalTrigger, WireTag, DEFAULT_CRITICAL_VOLUME, MIN_REPEATING_INTERVAL_SECS,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::PlatformCapabilities;
use crate::fields::{type_name, FieldReader};
use crate::keys;

/// Years an encoded fire date can represent as a four-digit ISO-8601 year
const FIRE_DATE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Decode a request mapping.
///
/// Required fields are validated first, then typed optional fields, then
/// trigger consistency, then enum-tagged fields.
pub fn decode_request(
    input: &Map<String, Value>,
    capabilities: PlatformCapabilities,
) -> Result<NotificationRequestDescriptor> {
    let fields = FieldReader::new(input);

    let identifier = fields.required_str(&[keys::IDENTIFIER, keys::ID])?;

    let title = fields.str_or_empty(keys::TITLE)?;
    let subtitle = fields.str_or_empty(keys::SUBTITLE)?;
    let body = fields.str_or_empty(keys::BODY)?;
    let badge = fields.optional_u32(keys::BADGE)?;
    let sound = decode_sound(&fields)?;
    let category_identifier = fields.str_or_empty(keys::CATEGORY)?;
    let thread_identifier = fields.str_or_empty(keys::THREAD_ID)?;
    let user_info = fields
        .optional_object(keys::USER_INFO)?
        .cloned()
        .unwrap_or_default();

    let trigger = decode_trigger(&fields)?;
    let interruption_level = decode_interruption_level(&fields, capabilities)?;

    debug!(
        identifier = %identifier,
        scheduled = trigger.is_some(),
        "decoded notification request"
    );

    Ok(NotificationRequestDescriptor {
        identifier,
        title,
        subtitle,
        body,
        badge,
        sound,
        category_identifier,
        thread_identifier,
        user_info,
        interruption_level,
        trigger,
    })
}

fn decode_sound(fields: &FieldReader<'_>) -> Result<NotificationSound> {
    let name = fields.optional_str(keys::SOUND)?;
    let silent = fields.optional_bool(keys::IS_SILENT)?.unwrap_or(false);
    let critical = fields.optional_bool(keys::IS_CRITICAL)?.unwrap_or(false);
    let volume = fields.optional_f64(keys::CRITICAL_SOUND_VOLUME)?;

    if let Some(volume) = volume {
        if !(0.0..=1.0).contains(&volume) {
            return Err(CodecError::invalid_field(
                fields.path_of(keys::CRITICAL_SOUND_VOLUME),
                format!("must be between 0.0 and 1.0, found {volume}"),
            ));
        }
    }

    match (critical, silent) {
        (true, true) => Err(CodecError::invalid_field(
            fields.path_of(keys::IS_SILENT),
            "cannot be combined with isCritical",
        )),
        (true, false) => Ok(NotificationSound::Critical {
            name,
            volume: volume.unwrap_or(DEFAULT_CRITICAL_VOLUME),
        }),
        (false, true) => {
            if name.is_some() {
                debug!("silent notification, ignoring sound name");
            }
            Ok(NotificationSound::Silent)
        }
        (false, false) => {
            if volume.is_some() {
                debug!("criticalSoundVolume without isCritical, ignoring");
            }
            Ok(name.map_or(NotificationSound::Default, |name| NotificationSound::Named { name }))
        }
    }
}

fn decode_fire_date(fields: &FieldReader<'_>) -> Result<Option<DateTime<Utc>>> {
    let field = || fields.path_of(keys::FIRE_DATE);

    let date = match fields.get(keys::FIRE_DATE) {
        None => return Ok(None),
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|e| CodecError::invalid_field(field(), format!("expected an ISO-8601 date: {e}")))?,
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| {
                CodecError::invalid_field(field(), format!("expected epoch milliseconds, found {n}"))
            })?,
        Some(other) => {
            return Err(CodecError::invalid_field(
                field(),
                format!(
                    "expected a date string or epoch milliseconds, found {}",
                    type_name(other)
                ),
            ))
        }
    };

    if !FIRE_DATE_YEARS.contains(&date.year()) {
        return Err(CodecError::invalid_field(
            field(),
            format!("year {} is outside 0000..=9999", date.year()),
        ));
    }

    Ok(Some(date))
}

fn decode_trigger(fields: &FieldReader<'_>) -> Result<Option<NotificationTrigger>> {
    let fire_date = decode_fire_date(fields)?;
    let interval = fields.optional_f64(keys::TIME_INTERVAL)?;
    let repeats = fields.optional_bool(keys::REPEATS)?.unwrap_or(false);

    if fire_date.is_some() && interval.is_some() {
        return Err(CodecError::invalid_field(
            fields.path_of(keys::TIME_INTERVAL),
            "cannot be combined with fireDate",
        ));
    }

    if let Some(seconds) = interval {
        if seconds <= 0.0 {
            return Err(CodecError::invalid_field(
                fields.path_of(keys::TIME_INTERVAL),
                format!("must be greater than zero, found {seconds}"),
            ));
        }
        if repeats && seconds < MIN_REPEATING_INTERVAL_SECS {
            return Err(CodecError::invalid_field(
                fields.path_of(keys::TIME_INTERVAL),
                format!("repeating intervals must be at least {MIN_REPEATING_INTERVAL_SECS} seconds"),
            ));
        }
    }

    if repeats && fire_date.is_none() && interval.is_none() {
        return Err(CodecError::invalid_field(
            fields.path_of(keys::REPEATS),
            "requires fireDate or timeInterval",
        ));
    }

    let units: CalendarUnits = fields.option_set::<CalendarUnit>(keys::REPEATS_COMPONENT)?;

    Ok(match (fire_date, interval) {
        (Some(fire_date), _) => Some(NotificationTrigger::Calendar(CalendarTrigger {
            fire_date,
            repeats,
            units,
        })),
        (None, Some(seconds)) => {
            if !units.is_empty() {
                debug!("repeatsComponent only applies to fireDate triggers, ignoring");
            }
            Some(NotificationTrigger::TimeInterval(TimeIntervalTrigger { seconds, repeats }))
        }
        (None, None) => None,
    })
}

fn decode_interruption_level(
    fields: &FieldReader<'_>,
    capabilities: PlatformCapabilities,
) -> Result<InterruptionLevel> {
    if !capabilities.supports_interruption_levels() {
        if fields.get(keys::INTERRUPTION_LEVEL).is_some() {
            debug!(
                os_version = capabilities.os_version(),
                "platform has no interruption levels, ignoring interruptionLevel"
            );
        }
        return Ok(InterruptionLevel::default());
    }

    Ok(fields
        .optional_tag(keys::INTERRUPTION_LEVEL)?
        .unwrap_or_default())
}

/// Encode a request into the mapping [`decode_request`] reads.
pub fn encode_request(
    request: &NotificationRequestDescriptor,
    capabilities: PlatformCapabilities,
) -> Map<String, Value> {
    let mut out = Map::new();

    out.insert(keys::IDENTIFIER.into(), request.identifier.clone().into());
    insert_non_empty(&mut out, keys::TITLE, &request.title);
    insert_non_empty(&mut out, keys::SUBTITLE, &request.subtitle);
    insert_non_empty(&mut out, keys::BODY, &request.body);
    if let Some(badge) = request.badge {
        out.insert(keys::BADGE.into(), badge.into());
    }
    encode_sound(&mut out, &request.sound);
    insert_non_empty(&mut out, keys::CATEGORY, &request.category_identifier);
    insert_non_empty(&mut out, keys::THREAD_ID, &request.thread_identifier);
    if !request.user_info.is_empty() {
        out.insert(keys::USER_INFO.into(), Value::Object(request.user_info.clone()));
    }
    if capabilities.supports_interruption_levels() {
        out.insert(
            keys::INTERRUPTION_LEVEL.into(),
            request.interruption_level.tag().into(),
        );
    }

    match &request.trigger {
        Some(NotificationTrigger::Calendar(trigger)) => {
            out.insert(keys::FIRE_DATE.into(), format_date(&trigger.fire_date).into());
            out.insert(keys::REPEATS.into(), trigger.repeats.into());
            if !trigger.units.is_empty() {
                let units: Map<String, Value> = trigger
                    .units
                    .iter()
                    .map(|unit| (unit.tag().to_string(), Value::Bool(true)))
                    .collect();
                out.insert(keys::REPEATS_COMPONENT.into(), Value::Object(units));
            }
        }
        Some(NotificationTrigger::TimeInterval(trigger)) => {
            out.insert(keys::TIME_INTERVAL.into(), trigger.seconds.into());
            out.insert(keys::REPEATS.into(), trigger.repeats.into());
        }
        None => {}
    }

    out
}

fn encode_sound(out: &mut Map<String, Value>, sound: &NotificationSound) {
    match sound {
        NotificationSound::Default => {}
        NotificationSound::Silent => {
            out.insert(keys::IS_SILENT.into(), true.into());
        }
        NotificationSound::Named { name } => {
            out.insert(keys::SOUND.into(), name.clone().into());
        }
        NotificationSound::Critical { name, volume } => {
            out.insert(keys::IS_CRITICAL.into(), true.into());
            if let Some(name) = name {
                out.insert(keys::SOUND.into(), name.clone().into());
            }
            out.insert(keys::CRITICAL_SOUND_VOLUME.into(), (*volume).into());
        }
    }
}

/// Insert `value` under `key` unless it is empty
pub(crate) fn insert_non_empty(out: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        out.insert(key.to_string(), value.into());
    }
}

/// ISO-8601 in UTC, keeping sub-second precision
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
