//! Lighthouse estimator method selection
//!
//! The lighthouse positioning system can derive a position two ways:
//! crossing beams from two or more base stations, or sweep angles from a
//! single one. The selector watches the driver's active base station
//! bitmask and writes the matching method to the `lighthouse.method`
//! parameter.
//!
//! The driver only reads the parameter when processing received sweeps and
//! keeps no state between methods, so switching needs no hysteresis.

pub mod error;
pub mod method;
pub mod selector;

pub use error::SelectorError;
pub use method::{popcount, select_method, Method};
pub use selector::{MethodSelector, Transition};

/// Parameter and log group owned by the lighthouse driver
pub const LIGHTHOUSE_GROUP: &str = "lighthouse";

/// Parameter selecting the position estimator method
pub const METHOD_PARAM: &str = "method";

/// Log variable holding the active base station bitmask
pub const ACTIVE_MAP_LOG: &str = "bsActive";

/// Selector update period in milliseconds
///
/// Base stations (V1 and V2) refresh at 60 Hz; running faster gains nothing.
pub const UPDATE_PERIOD_MS: u64 = 16;
