//! Core types for periodic tasks

use crate::lighthouse::UPDATE_PERIOD_MS;

/// Task metadata registered at compile-time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskMetadata {
    /// Human-readable task name for logging and debugging
    pub name: &'static str,

    /// Wake period in milliseconds
    pub period_ms: u64,

    /// Priority hint (0-255, higher = more important)
    ///
    /// Embassy does not enforce task priorities; this is for reporting only.
    pub priority: u8,
}

impl TaskMetadata {
    /// Nominal rate in Hz, rounded down
    #[inline]
    pub const fn rate_hz(&self) -> u32 {
        if self.period_ms == 0 {
            return 0;
        }
        (1000 / self.period_ms) as u32
    }
}

/// Lighthouse method selector task
pub const METHOD_SELECT_TASK: TaskMetadata = TaskMetadata {
    name: "lighthouse_method",
    period_ms: UPDATE_PERIOD_MS,
    priority: 5,
};
