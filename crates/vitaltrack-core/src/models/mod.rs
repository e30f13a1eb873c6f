//! Domain models for the vitaltrack system.

mod adherence;
mod medicine;
mod profile;
mod suggestion;
mod vitals;

pub use adherence::*;
pub use medicine::*;
pub use profile::*;
pub use suggestion::*;
pub use vitals::*;
