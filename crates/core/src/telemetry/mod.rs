//! Log variable store
//!
//! Named `u32` telemetry variables published by drivers and read by
//! consumers through a [`LogId`] resolved once at startup.

pub mod store;

pub use store::{LogError, LogId, LogStore, MAX_LOG_VARS};
