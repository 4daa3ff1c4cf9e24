#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod geometry;
pub mod model;
pub mod signal;
pub mod time;
pub mod transform;

pub use error::Error;
pub use time::{Clock, ManualClock};
