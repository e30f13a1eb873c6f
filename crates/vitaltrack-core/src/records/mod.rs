//! In-memory record stores.
//!
//! Form submissions that fail validation are dropped without an error; the
//! add operations report the created entry so callers may ignore it.

mod medications;
mod vitals_log;

pub use medications::*;
pub use vitals_log::*;
