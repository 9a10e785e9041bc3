//! RP2350 Platform Embassy Tasks
//!
//! Tasks here use `#[embassy_executor::task]`, which needs the Embassy
//! runtime available only with the `pico2_w` feature.
//!
//! ## Available Tasks
//!
//! - `method_select_task` - 16 ms lighthouse estimator method selection

pub mod method_select;

pub use method_select::method_select_task;
