//! Selector startup errors

use core::fmt;

use crate::parameters::ParameterError;

/// Failures at selector startup
///
/// All mean the lighthouse driver is not present or was built without the
/// expected parameter/log entry. None is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectorError {
    /// Method parameter is not registered
    ParamNotFound {
        group: &'static str,
        name: &'static str,
    },
    /// Active base station log variable is not registered
    LogNotFound {
        group: &'static str,
        name: &'static str,
    },
    /// Method parameter rejected the initial write
    ParamNotWritable {
        group: &'static str,
        name: &'static str,
        error: ParameterError,
    },
}

impl SelectorError {
    /// Diagnostic text for the startup failure
    pub const fn describe(&self) -> &'static str {
        match self {
            SelectorError::ParamNotFound { .. } => "Unable to get Lighthouse Method parameter",
            SelectorError::LogNotFound { .. } => {
                "Unable to get Lighthouse active basestation log item"
            }
            SelectorError::ParamNotWritable { .. } => "Unable to set Lighthouse Method parameter",
        }
    }
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::ParamNotFound { group, name }
            | SelectorError::LogNotFound { group, name } => {
                write!(f, "{} ({}.{})", self.describe(), group, name)
            }
            SelectorError::ParamNotWritable { group, name, error } => {
                write!(f, "{} ({}.{}): {}", self.describe(), group, name, error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_writable() {
        extern crate std;
        use std::string::ToString;

        let err = SelectorError::ParamNotWritable {
            group: "lighthouse",
            name: "method",
            error: ParameterError::ReadOnly,
        };
        assert_eq!(
            err.to_string(),
            "Unable to set Lighthouse Method parameter (lighthouse.method): parameter is read-only"
        );
    }
}
