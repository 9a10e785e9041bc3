//! Store access traits
//!
//! `ParamAccess` and `LogAccess` are the two operations the selector needs
//! from the parameter and log subsystems: resolve a handle by name, then
//! write or read through it. Both are implemented for any `SharedState`
//! wrapping the matching store.

use super::sync::SharedState;
use crate::parameters::{ParamId, ParameterError, ParameterStore};
use crate::telemetry::{LogId, LogStore};

/// Parameter subsystem access
pub trait ParamAccess {
    /// Resolve a parameter handle by group and name
    fn param_id(&self, group: &str, name: &str) -> Option<ParamId>;

    /// Write an integer value through a resolved handle
    fn set_param_int(&self, id: ParamId, value: i32) -> Result<(), ParameterError>;
}

/// Log subsystem access
pub trait LogAccess {
    /// Resolve a log variable handle by group and name
    fn log_id(&self, group: &str, name: &str) -> Option<LogId>;

    /// Read an unsigned value through a resolved handle
    ///
    /// Returns 0 for a handle the store does not know.
    fn log_uint(&self, id: LogId) -> u32;
}

impl<S: SharedState<ParameterStore>> ParamAccess for S {
    fn param_id(&self, group: &str, name: &str) -> Option<ParamId> {
        self.with(|store| store.var_id(group, name))
    }

    fn set_param_int(&self, id: ParamId, value: i32) -> Result<(), ParameterError> {
        self.with_mut(|store| store.set_int(id, value))
    }
}

impl<S: SharedState<LogStore>> LogAccess for S {
    fn log_id(&self, group: &str, name: &str) -> Option<LogId> {
        self.with(|store| store.var_id(group, name))
    }

    fn log_uint(&self, id: LogId) -> u32 {
        self.with(|store| store.get_uint(id).unwrap_or(0))
    }
}
