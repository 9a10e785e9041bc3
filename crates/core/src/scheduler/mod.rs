//! Task scheduling types
//!
//! Static descriptions of the periodic tasks. Execution is handled by the
//! firmware crate using Embassy.

pub mod types;

pub use types::*;
