//! Presentation timestamp type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoder-domain presentation timestamp (PTS).
///
/// A signed 64-bit time value supplied by the producer with each caption
/// payload, indicating when the associated video should display. The HAL
/// does not interpret the value; it is forwarded as received.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Pts(i64);

impl Pts {
    /// Creates a PTS from a raw decoder time value.
    pub const fn new(value: i64) -> Self {
        Pts(value)
    }

    /// Returns the raw time value.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Pts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Pts {
    fn from(value: i64) -> Self {
        Pts(value)
    }
}

impl From<Pts> for i64 {
    fn from(pts: Pts) -> i64 {
        pts.0
    }
}
