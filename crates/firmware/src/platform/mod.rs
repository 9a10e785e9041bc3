//! Platform layer
//!
//! All target-specific code lives here and is only built with `pico2_w`.

#[cfg(feature = "pico2_w")]
pub mod rp2350;
