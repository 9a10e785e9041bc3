#![cfg_attr(not(test), no_std)]

//! lighthouse_select_firmware - Embassy firmware for lighthouse method selection
//!
//! This crate wraps the core selector logic in an Embassy task and provides
//! the global parameter/log stores it runs against.
//!
//! # Modules
//!
//! - [`core`]: Logging macros, shared state and global stores
//! - [`subsystems`]: Lighthouse selector startup and iteration
//! - [`platform`]: RP2350 Embassy tasks (`pico2_w` feature)

// Core systems; logging macros are exported at crate root
pub mod core;

// Subsystems
pub mod subsystems;

// Platform-specific tasks
pub mod platform;
