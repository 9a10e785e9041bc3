//! Parameter Store
//!
//! Fixed-capacity store of named integer parameters. Values live in RAM
//! only and start from their registered defaults on every boot.
//!
//! Entries sit in a `heapless::Vec` in registration order, so a `ParamId`
//! is the entry index. Name lookup scans linearly; consumers do it once at
//! startup and keep the id.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::Vec;

/// Maximum length of a parameter group or name
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 32;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter is read-only (cannot be modified through `set_int`)
        const READ_ONLY = 0b00000001;
    }
}

/// Opaque handle to a registered parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParamId(u16);

impl ParamId {
    /// Position of the parameter in registration order
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct ParamEntry {
    group: &'static str,
    name: &'static str,
    value: i32,
    flags: ParamFlags,
}

/// Parameter store for runtime configuration
pub struct ParameterStore {
    entries: Vec<ParamEntry, MAX_PARAMS>,
}

pub(crate) fn is_valid_name(part: &str) -> bool {
    !part.is_empty() && part.len() <= PARAM_NAME_LEN
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a new parameter with default value and flags
    ///
    /// If the parameter already exists its current value and flags are
    /// kept and the existing id is returned.
    pub fn register(
        &mut self,
        group: &'static str,
        name: &'static str,
        default_value: i32,
        flags: ParamFlags,
    ) -> Result<ParamId, ParameterError> {
        if !is_valid_name(group) || !is_valid_name(name) {
            return Err(ParameterError::InvalidName);
        }

        if let Some(id) = self.var_id(group, name) {
            return Ok(id);
        }

        let id = ParamId(self.entries.len() as u16);
        self.entries
            .push(ParamEntry {
                group,
                name,
                value: default_value,
                flags,
            })
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(id)
    }

    /// Resolve a parameter handle by group and name
    pub fn var_id(&self, group: &str, name: &str) -> Option<ParamId> {
        self.entries
            .iter()
            .position(|e| e.group == group && e.name == name)
            .map(|index| ParamId(index as u16))
    }

    /// Get parameter value
    pub fn get_int(&self, id: ParamId) -> Option<i32> {
        self.entries.get(id.index()).map(|e| e.value)
    }

    /// Set parameter value
    pub fn set_int(&mut self, id: ParamId, value: i32) -> Result<(), ParameterError> {
        let entry = self
            .entries
            .get_mut(id.index())
            .ok_or(ParameterError::UnknownId)?;

        if entry.flags.contains(ParamFlags::READ_ONLY) {
            return Err(ParameterError::ReadOnly);
        }

        entry.value = value;
        Ok(())
    }

    /// Get parameter count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
