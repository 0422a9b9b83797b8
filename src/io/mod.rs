//! Dataset infrastructure.
//!
//! - [`carmen`]: CARMEN-style log reading (FLASER records)

pub mod carmen;

pub use carmen::{LogError, read_log};
