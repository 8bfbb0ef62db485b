//! Fail-closed accessors over a JSON mapping.
//!
//! `null` is read as absent, matching how the bridge layer serializes
//! `undefined`. Any other type mismatch is an [`CodecError::InvalidField`]
//! naming the full path of the field.

use notikit_core::{option_mask, CodecError, Result, WireTag};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Reader over one mapping, tracking its position in the input
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    map: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> FieldReader<'a> {
    /// Reader over a top-level mapping
    #[must_use]
    pub const fn new(map: &'a Map<String, Value>) -> Self {
        Self { map, path: "" }
    }

    /// Reader over a nested mapping located at `path`
    #[must_use]
    pub const fn nested(map: &'a Map<String, Value>, path: &'a str) -> Self {
        Self { map, path }
    }

    /// Full path of `key` inside this mapping
    #[must_use]
    pub fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    /// Non-null value under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// Required non-empty string, looked up under `keys` in order.
    ///
    /// Errors always name the first key, which is the canonical one.
    pub fn required_str(&self, keys: &[&str]) -> Result<String> {
        let canonical = keys.first().copied().unwrap_or_default();
        let value = keys
            .iter()
            .find_map(|key| self.get(key))
            .ok_or_else(|| CodecError::invalid_field(self.path_of(canonical), "required field is missing"))?;

        match value {
            Value::String(s) if s.is_empty() => Err(CodecError::invalid_field(
                self.path_of(canonical),
                "must not be empty",
            )),
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch(self.path_of(canonical), "a string", other)),
        }
    }

    /// Optional string
    pub fn optional_str(&self, key: &str) -> Result<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(mismatch(self.path_of(key), "a string", other)),
        }
    }

    /// Optional string defaulting to empty
    pub fn str_or_empty(&self, key: &str) -> Result<String> {
        Ok(self.optional_str(key)?.unwrap_or_default())
    }

    /// Optional boolean
    pub fn optional_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(mismatch(self.path_of(key), "a boolean", other)),
        }
    }

    /// Optional non-negative integer that fits in `u32`
    pub fn optional_u32(&self, key: &str) -> Result<Option<u32>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| {
                    CodecError::invalid_field(
                        self.path_of(key),
                        format!("expected a non-negative integer, found {n}"),
                    )
                }),
            Some(other) => Err(mismatch(self.path_of(key), "a non-negative integer", other)),
        }
    }

    /// Optional finite number
    pub fn optional_f64(&self, key: &str) -> Result<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()).map(Some).ok_or_else(|| {
                CodecError::invalid_field(self.path_of(key), format!("expected a finite number, found {n}"))
            }),
            Some(other) => Err(mismatch(self.path_of(key), "a number", other)),
        }
    }

    /// Optional nested mapping
    pub fn optional_object(&self, key: &str) -> Result<Option<&'a Map<String, Value>>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(mismatch(self.path_of(key), "an object", other)),
        }
    }

    /// Optional array
    pub fn optional_array(&self, key: &str) -> Result<Option<&'a Vec<Value>>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(other) => Err(mismatch(self.path_of(key), "an array", other)),
        }
    }

    /// Optional enum tag, decoded through `T`'s lookup table
    pub fn optional_tag<T: WireTag>(&self, key: &str) -> Result<Option<T>> {
        self.get(key)
            .map(|value| decode_tag(&self.path_of(key), value))
            .transpose()
    }

    /// Optional option set; absent reads as the empty set
    pub fn option_set<T: WireTag>(&self, key: &str) -> Result<BTreeSet<T>> {
        self.get(key)
            .map_or_else(|| Ok(BTreeSet::new()), |value| decode_option_set(&self.path_of(key), value))
    }
}

/// Name of a JSON value's type, for error messages
#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(field: String, expected: &str, found: &Value) -> CodecError {
    CodecError::invalid_field(field, format!("expected {expected}, found {}", type_name(found)))
}

/// Decode a single enum tag given as a string or a raw integer
pub fn decode_tag<T: WireTag>(field: &str, value: &Value) -> Result<T> {
    match value {
        Value::String(tag) => {
            T::from_tag(tag).ok_or_else(|| CodecError::unknown_enum_value(field, tag.as_str()))
        }
        Value::Number(n) => n
            .as_u64()
            .and_then(T::from_raw)
            .ok_or_else(|| CodecError::unknown_enum_value(field, n.to_string())),
        other => Err(mismatch(field.to_string(), "a string or integer tag", other)),
    }
}

/// Decode an option set.
///
/// Accepts an object of boolean flags (`{"foreground": true}`), an array of
/// string or raw tags (`["foreground", 2]`), or a raw combined mask (`6`).
/// Unknown tags fail even when their flag is `false`, and so does a mask with
/// bits outside the table.
pub fn decode_option_set<T: WireTag>(field: &str, value: &Value) -> Result<BTreeSet<T>> {
    let mut set = BTreeSet::new();

    match value {
        Value::Object(flags) => {
            for (tag, flag) in flags {
                let option =
                    T::from_tag(tag).ok_or_else(|| CodecError::unknown_enum_value(field, tag.as_str()))?;
                match flag {
                    Value::Bool(true) => {
                        set.insert(option);
                    }
                    Value::Bool(false) | Value::Null => {}
                    other => return Err(mismatch(format!("{field}.{tag}"), "a boolean", other)),
                }
            }
        }
        Value::Array(tags) => {
            for (i, item) in tags.iter().enumerate() {
                match item {
                    Value::String(_) | Value::Number(_) => {
                        set.insert(decode_tag(field, item)?);
                    }
                    other => {
                        return Err(mismatch(format!("{field}[{i}]"), "a string or integer tag", other))
                    }
                }
            }
        }
        Value::Number(n) => {
            let mask = n
                .as_u64()
                .ok_or_else(|| CodecError::unknown_enum_value(field, n.to_string()))?;
            set.extend(T::ALL.iter().copied().filter(|option| mask & option.raw_value() != 0));
            if option_mask(&set) != mask {
                return Err(CodecError::unknown_enum_value(field, n.to_string()));
            }
        }
        other => return Err(mismatch(field.to_string(), "an object, array or mask", other)),
    }

    Ok(set)
}

/// Interpret a JSON value as a mapping, naming `field` on failure
pub fn as_object<'a>(field: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| mismatch(field.to_string(), "an object", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notikit_core::{ActionOption, InterruptionLevel};
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test input must be an object"),
        }
    }

    #[test]
    fn test_required_str_aliases() {
        let map = object(json!({"id": "abc"}));
        let reader = FieldReader::new(&map);
        assert_eq!(reader.required_str(&["identifier", "id"]).unwrap(), "abc");

        let map = object(json!({"identifier": "x", "id": "y"}));
        let reader = FieldReader::new(&map);
        assert_eq!(reader.required_str(&["identifier", "id"]).unwrap(), "x");
    }

    #[test]
    fn test_required_str_failures_name_canonical_key() {
        let map = object(json!({"id": 7}));
        let err = FieldReader::new(&map)
            .required_str(&["identifier", "id"])
            .unwrap_err();
        assert_eq!(err.field(), "identifier");
        assert!(err.to_string().contains("found number"));

        let map = object(json!({"identifier": null}));
        let err = FieldReader::new(&map)
            .required_str(&["identifier", "id"])
            .unwrap_err();
        assert!(err.to_string().contains("missing"));

        let map = object(json!({"identifier": ""}));
        assert!(FieldReader::new(&map).required_str(&["identifier"]).is_err());
    }

    #[test]
    fn test_null_is_absent() {
        let map = object(json!({"title": null, "badge": null}));
        let reader = FieldReader::new(&map);
        assert_eq!(reader.optional_str("title").unwrap(), None);
        assert_eq!(reader.optional_u32("badge").unwrap(), None);
    }

    #[test]
    fn test_type_mismatch_fails_closed() {
        let map = object(json!({"title": 1, "badge": -1, "repeats": "yes", "userInfo": []}));
        let reader = FieldReader::new(&map);
        assert!(reader.optional_str("title").is_err());
        assert!(reader.optional_u32("badge").is_err());
        assert!(reader.optional_bool("repeats").is_err());
        assert!(reader.optional_object("userInfo").is_err());
    }

    #[test]
    fn test_nested_paths() {
        let map = object(json!({"foreground": 1}));
        let reader = FieldReader::nested(&map, "actions[2].options");
        assert_eq!(reader.path_of("foreground"), "actions[2].options.foreground");
    }

    #[test]
    fn test_decode_tag_string_and_raw() {
        let level: InterruptionLevel = decode_tag("interruptionLevel", &json!("critical")).unwrap();
        assert_eq!(level, InterruptionLevel::Critical);

        let level: InterruptionLevel = decode_tag("interruptionLevel", &json!(0)).unwrap();
        assert_eq!(level, InterruptionLevel::Passive);

        let err = decode_tag::<InterruptionLevel>("interruptionLevel", &json!(9)).unwrap_err();
        assert_eq!(err, CodecError::unknown_enum_value("interruptionLevel", "9"));

        let err = decode_tag::<InterruptionLevel>("interruptionLevel", &json!(true)).unwrap_err();
        assert!(!err.is_enum_error());
    }

    #[test]
    fn test_option_set_forms() {
        let from_flags: BTreeSet<ActionOption> = decode_option_set(
            "options",
            &json!({"foreground": true, "destructive": false}),
        )
        .unwrap();
        let from_tags: BTreeSet<ActionOption> =
            decode_option_set("options", &json!(["foreground"])).unwrap();
        assert_eq!(from_flags, from_tags);
        assert_eq!(from_flags.len(), 1);
    }

    #[test]
    fn test_option_set_raw_values() {
        let expected = BTreeSet::from([ActionOption::AuthenticationRequired, ActionOption::Foreground]);

        let from_raw: BTreeSet<ActionOption> =
            decode_option_set("options", &json!(["authenticationRequired", 4])).unwrap();
        assert_eq!(from_raw, expected);

        let from_mask: BTreeSet<ActionOption> = decode_option_set("options", &json!(5)).unwrap();
        assert_eq!(from_mask, expected);

        let empty: BTreeSet<ActionOption> = decode_option_set("options", &json!(0)).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_option_set_rejects_unknown_tags() {
        let err = decode_option_set::<ActionOption>("options", &json!({"bogus": false})).unwrap_err();
        assert_eq!(err, CodecError::unknown_enum_value("options", "bogus"));

        let err = decode_option_set::<ActionOption>("options", &json!(["foreground", 3])).unwrap_err();
        assert_eq!(err, CodecError::unknown_enum_value("options", "3"));

        let err = decode_option_set::<ActionOption>("options", &json!(["foreground", true])).unwrap_err();
        assert_eq!(err.field(), "options[1]");

        let err = decode_option_set::<ActionOption>("options", &json!(9)).unwrap_err();
        assert_eq!(err, CodecError::unknown_enum_value("options", "9"));

        let err = decode_option_set::<ActionOption>("options", &json!(-1)).unwrap_err();
        assert!(err.is_enum_error());

        let err =
            decode_option_set::<ActionOption>("options", &json!({"foreground": "yes"})).unwrap_err();
        assert_eq!(err.field(), "options.foreground");
    }
}
