//! Decode sequence counter type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decode sequence number disambiguating which start/stop session a data or
/// lifecycle event belongs to.
///
/// Values cycle through a fixed 65536-slot ring: the counter advances by one
/// on every successful start and stop transition and wraps from 65535 back
/// to 0. Because of the wraparound there is no meaningful ordering between
/// two sequence numbers; only equality is provided.
///
/// # Examples
///
/// ```
/// use ccreader_types::DecodeSequence;
///
/// let seq = DecodeSequence::new(65535);
/// assert_eq!(seq.next(), DecodeSequence::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DecodeSequence(u16);

impl DecodeSequence {
    /// The initial sequence value of a freshly constructed controller.
    pub const ZERO: DecodeSequence = DecodeSequence(0);

    /// Creates a sequence number from a raw counter value.
    pub const fn new(value: u16) -> Self {
        DecodeSequence(value)
    }

    /// Returns the raw counter value (0-65535).
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns the next sequence number in the ring, wrapping 65535 to 0.
    #[must_use]
    pub const fn next(&self) -> Self {
        DecodeSequence(self.0.wrapping_add(1))
    }
}

impl fmt::Display for DecodeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for DecodeSequence {
    fn from(value: u16) -> Self {
        DecodeSequence(value)
    }
}

impl From<DecodeSequence> for u16 {
    fn from(seq: DecodeSequence) -> u16 {
        seq.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_increment() {
        let seq = DecodeSequence::ZERO;
        assert_eq!(seq.next().as_u16(), 1);
        assert_eq!(seq.next().next().as_u16(), 2);
    }

    #[test]
    fn test_wraparound() {
        let seq = DecodeSequence::new(65535);
        assert_eq!(seq.next(), DecodeSequence::ZERO);
    }

    #[test]
    fn test_full_ring() {
        let mut seq = DecodeSequence::ZERO;
        for _ in 0..65536 {
            seq = seq.next();
        }
        assert_eq!(seq, DecodeSequence::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(DecodeSequence::new(42).to_string(), "42");
    }
}
