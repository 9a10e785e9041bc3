//! Vehicle subsystems

pub mod lighthouse;
