//! Native notification object model for notikit.
//!
//! This crate provides the foundational types shared by the codec and the CLI:
//!
//! - **Types**: Strongly-typed mirrors of the platform notification objects
//!   (requests, categories, actions, delivered notifications, responses)
//! - **Tags**: Exhaustive lookup tables between wire tags and platform enums
//! - **Errors**: The two codec failure kinds, see [`CodecError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use notikit_core::{InterruptionLevel, NotificationRequestDescriptor};
//!
//! let mut request = NotificationRequestDescriptor::new("reminder-1").with_title("Stand up");
//! request.interruption_level = InterruptionLevel::TimeSensitive;
//! ```

#![doc(html_root_url = "https://docs.rs/notikit-core/1.0.0")]

mod error;
pub mod types;

pub use error::{CodecError, Result};
pub use types::*;
