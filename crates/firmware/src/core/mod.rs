//! Core firmware infrastructure
//!
//! Logging macros, the Embassy shared-state implementation and the global
//! stores. Pure logic lives in `lighthouse_select_core`.

pub mod logging;
pub mod stores;
pub mod traits;

// Re-export pure types from lighthouse_select_core
pub use lighthouse_select_core::lighthouse;
pub use lighthouse_select_core::parameters;
pub use lighthouse_select_core::scheduler;
pub use lighthouse_select_core::telemetry;
