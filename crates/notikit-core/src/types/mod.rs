mod category;
mod common;
mod delivered;
mod request;

pub use category::*;
pub use common::*;
pub use delivered::*;
pub use request::*;
