//! Notification descriptor codec.
//!
//! Translates JSON mappings sent by a cross-platform bridge into native
//! notification objects, and projects native objects back into mappings.
//!
//! # Contract
//!
//! - Decoding fails with [`CodecError::InvalidField`] when a required field is
//!   missing or any field has the wrong type; unknown keys are ignored.
//! - Enum tags are looked up in exhaustive tables; an unknown tag fails with
//!   [`CodecError::UnknownEnumValue`].
//! - Encoding is total. `decode_request(encode_request(d)) == d` for every
//!   field the configured platform supports.
//!
//! # Example
//!
//! ```rust,ignore
//! use notikit_codec::{NotificationCodec, PlatformCapabilities};
//! use serde_json::json;
//!
//! let codec = NotificationCodec::new(PlatformCapabilities::modern());
//! let request = codec.decode_request_value(&json!({
//!     "identifier": "abc",
//!     "interruptionLevel": "timeSensitive",
//! }))?;
//! let mapping = codec.encode_request(&request);
//! ```

#![doc(html_root_url = "https://docs.rs/notikit-codec/1.0.0")]

mod category;
mod codec;
pub mod config;
mod delivered;
pub mod fields;
pub mod keys;
mod request;

#[cfg(test)]
mod roundtrip_tests;

pub use category::{decode_action, decode_categories, decode_category};
pub use codec::NotificationCodec;
pub use config::{CodecConfig, PlatformCapabilities, PlatformConfig, PlatformProfile};
pub use delivered::{encode_delivered_notification, encode_response};
pub use request::{decode_request, encode_request};

pub use notikit_core::{CodecError, Result};
