//! Typed conversion between JSON mappings and native notification objects.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use notikit::{NotificationCodec, PlatformCapabilities};
//! use notikit::serde_json::json;
//!
//! fn main() -> notikit::Result<()> {
//!     let codec = NotificationCodec::new(PlatformCapabilities::modern());
//!
//!     let request = codec.decode_request_value(&json!({
//!         "identifier": "standup",
//!         "title": "Standup",
//!         "fireDate": "2025-03-12T09:55:00.000Z",
//!         "repeats": true,
//!         "repeatsComponent": {"hour": true, "minute": true},
//!     }))?;
//!
//!     println!("Trigger: {:?}", request.trigger);
//!     println!("Mapping: {:?}", codec.encode_request(&request));
//!
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/notikit/1.0.0")]

// Re-export the object model
pub use notikit_core::*;

// Re-export the codec
pub use notikit_codec::{
    config, fields, keys, CodecConfig, NotificationCodec, PlatformCapabilities, PlatformConfig,
    PlatformProfile,
};

pub use chrono;
pub use serde_json;
