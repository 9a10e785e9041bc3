//! Shared state traits and the Embassy implementation.
//!
//! The trait and the mock live in `lighthouse_select_core`; this module adds
//! `EmbassyState<T>` for stores shared between Embassy tasks.

pub mod sync;

pub use lighthouse_select_core::traits::{LogAccess, MockState, ParamAccess, SharedState};
pub use sync::EmbassyState;
