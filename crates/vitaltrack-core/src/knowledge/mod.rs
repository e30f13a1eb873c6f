//! Static knowledge tables: disease food guides and emergency contacts.

mod diseases;
mod emergency;

pub use diseases::*;
pub use emergency::*;
