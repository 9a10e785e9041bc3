//! lighthouse_select_core - Pure no_std logic for lighthouse method selection
//!
//! This crate contains the platform-agnostic pieces of the lighthouse
//! estimator method selector. Everything here can be tested on host
//! without Embassy or any target feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No feature gates apart from optional `defmt::Format` derives
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Store access injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Shared state and store access abstractions
//! - [`parameters`]: Named integer parameter store
//! - [`telemetry`]: Named log variable store
//! - [`lighthouse`]: Method selection (popcount, `Method`, `MethodSelector`)
//! - [`scheduler`]: Task metadata

#![no_std]

pub mod lighthouse;
pub mod parameters;
pub mod scheduler;
pub mod telemetry;
pub mod traits;
