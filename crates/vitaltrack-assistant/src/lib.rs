//! Scripted health assistant.
//!
//! Keyword-matched symptom advice and a canned skin check driven by a
//! capture-device port. No model inference takes place.

pub mod capture;
pub mod chat;
pub mod responses;

pub use capture::*;
pub use chat::*;
pub use responses::*;
