//! Core traits for platform-agnostic store access.
//!
//! This module provides trait abstractions that decouple the selector logic
//! from the synchronization primitive guarding the stores.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    MethodSelector                        │
//! │                         │                                │
//! │                         ▼                                │
//! │   ┌───────────────────────┐  ┌───────────────────────┐   │
//! │   │ ParamAccess           │  │ LogAccess             │   │
//! │   │ + param_id()          │  │ + log_id()            │   │
//! │   │ + set_param_int()     │  │ + log_uint()          │   │
//! │   └───────────────────────┘  └───────────────────────┘   │
//! │                         │                                │
//! │                         ▼                                │
//! │              SharedState<ParameterStore / LogStore>      │
//! │          ┌──────────────┴───────────────┐                │
//! │          ▼                              ▼                │
//! │   EmbassyState<T> (firmware)     MockState<T> (tests)    │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod access;
pub mod sync;

pub use access::{LogAccess, ParamAccess};
pub use sync::{MockState, SharedState};
