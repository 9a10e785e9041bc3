//! Parameter management types
//!
//! Named integer parameters addressed as `group.name`. Lookups by name
//! happen once at startup; afterwards consumers hold a [`ParamId`] and
//! read or write through it.

pub mod error;
pub mod storage;

pub use error::ParameterError;
pub use storage::{ParamFlags, ParamId, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
