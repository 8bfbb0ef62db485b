use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while decoding an external mapping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A required field is missing, or a field has the wrong type or an
    /// out-of-range value
    #[error("invalid field `{field}`: {reason}")]
    InvalidField {
        /// Path of the offending field (e.g. `actions[0].title`)
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// An enumerated tag is not in the supported set
    #[error("unknown value `{value}` for field `{field}`")]
    UnknownEnumValue {
        /// Path of the offending field
        field: String,
        /// The tag as it appeared in the input
        value: String,
    },
}

impl CodecError {
    /// Build an [`CodecError::InvalidField`]
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Build an [`CodecError::UnknownEnumValue`]
    pub fn unknown_enum_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Path of the field the error refers to
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidField { field, .. } | Self::UnknownEnumValue { field, .. } => field,
        }
    }

    /// Returns true if the error came from an enum lookup
    #[must_use]
    pub const fn is_enum_error(&self) -> bool {
        matches!(self, Self::UnknownEnumValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        let err = CodecError::invalid_field("identifier", "required field is missing");
        assert_eq!(
            err.to_string(),
            "invalid field `identifier`: required field is missing"
        );
        assert_eq!(err.field(), "identifier");
        assert!(!err.is_enum_error());

        let err = CodecError::unknown_enum_value("interruptionLevel", "bogus");
        assert_eq!(
            err.to_string(),
            "unknown value `bogus` for field `interruptionLevel`"
        );
        assert!(err.is_enum_error());
    }
}
