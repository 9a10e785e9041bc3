//! Log Variable Store
//!
//! Fixed-capacity table of named unsigned log variables. The producer
//! (typically a driver) registers and updates a variable; any number of
//! consumers read it.

use crate::parameters::storage::is_valid_name;
use heapless::Vec;

/// Maximum number of log variables
pub const MAX_LOG_VARS: usize = 32;

/// Errors from log store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogError {
    /// Group or name is empty or too long
    InvalidName,
    /// Store is full
    StoreFull,
    /// Handle does not refer to a registered variable
    UnknownId,
}

impl core::fmt::Display for LogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LogError::InvalidName => write!(f, "invalid log variable name"),
            LogError::StoreFull => write!(f, "log store full"),
            LogError::UnknownId => write!(f, "unknown log variable id"),
        }
    }
}

/// Opaque handle to a registered log variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogId(u16);

impl LogId {
    /// Position of the variable in registration order
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct LogVar {
    group: &'static str,
    name: &'static str,
    value: u32,
}

/// Store of named log variables
pub struct LogStore {
    vars: Vec<LogVar, MAX_LOG_VARS>,
}

impl LogStore {
    /// Create a new empty log store
    pub const fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Register a log variable starting at zero
    ///
    /// Registering an existing variable returns its id and keeps its value.
    pub fn register(
        &mut self,
        group: &'static str,
        name: &'static str,
    ) -> Result<LogId, LogError> {
        if !is_valid_name(group) || !is_valid_name(name) {
            return Err(LogError::InvalidName);
        }

        if let Some(id) = self.var_id(group, name) {
            return Ok(id);
        }

        let id = LogId(self.vars.len() as u16);
        self.vars
            .push(LogVar {
                group,
                name,
                value: 0,
            })
            .map_err(|_| LogError::StoreFull)?;
        Ok(id)
    }

    /// Resolve a log variable handle by group and name
    pub fn var_id(&self, group: &str, name: &str) -> Option<LogId> {
        self.vars
            .iter()
            .position(|v| v.group == group && v.name == name)
            .map(|index| LogId(index as u16))
    }

    /// Read the current value
    pub fn get_uint(&self, id: LogId) -> Option<u32> {
        self.vars.get(id.index()).map(|v| v.value)
    }

    /// Publish a new value
    pub fn set_uint(&mut self, id: LogId, value: u32) -> Result<(), LogError> {
        let var = self.vars.get_mut(id.index()).ok_or(LogError::UnknownId)?;
        var.value = value;
        Ok(())
    }

    /// Number of registered variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}
