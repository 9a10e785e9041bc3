//! Estimator method and base station counting

use core::fmt;

/// Position estimator method
///
/// Discriminants are the values the lighthouse driver expects in its
/// `method` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Method {
    /// Intersect beams from two or more base stations
    CrossingBeam = 0,
    /// Use sweep angles, works with a single base station
    SweepAngle = 1,
}

impl Method {
    /// Method to use with `count` base stations in view
    pub const fn from_active_count(count: u32) -> Self {
        if count > 1 {
            Method::CrossingBeam
        } else {
            Method::SweepAngle
        }
    }

    /// Parameter value for this method
    pub const fn param_value(self) -> i32 {
        self as i32
    }

    /// Decode a parameter value
    pub const fn from_param_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Method::CrossingBeam),
            1 => Some(Method::SweepAngle),
            _ => None,
        }
    }

    /// Human-readable name used in transition notices
    pub const fn describe(self) -> &'static str {
        match self {
            Method::CrossingBeam => "crossing beam method",
            Method::SweepAngle => "sweep angle method",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Number of set bits in `mask`
///
/// Shifts one bit at a time. Active maps only have a handful of low bits
/// set, so the loop ends after a few iterations.
pub const fn popcount(mut mask: u32) -> u32 {
    let mut count = 0;
    while mask != 0 {
        count += mask & 1;
        mask >>= 1;
    }
    count
}

/// Method for an active base station bitmask
pub const fn select_method(active_map: u32) -> Method {
    Method::from_active_count(popcount(active_map))
}
