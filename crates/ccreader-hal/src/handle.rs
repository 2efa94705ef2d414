//! Opaque video decoder handle.

use std::fmt;

/// Raw decoder handle type as exchanged with the firmware.
pub type RawDecoderHandle = u64;

/// Opaque handle naming one physical video decoder instance.
///
/// The handle is supplied by the caller at start time and resolved to a
/// hardware CC port by the platform; this layer never dereferences it. The
/// caller must keep the underlying decoder valid until stop returns.
///
/// # Examples
///
/// ```
/// use ccreader_hal::DecoderHandle;
///
/// let handle = DecoderHandle::from_raw(0x1001).unwrap();
/// assert_eq!(handle.as_raw(), 0x1001);
///
/// // Zero is the null handle and is rejected
/// assert!(DecoderHandle::from_raw(0).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecoderHandle {
    raw: RawDecoderHandle,
}

impl DecoderHandle {
    /// The null decoder handle.
    pub const NULL: Self = Self { raw: 0 };

    /// Creates a decoder handle from a raw value.
    ///
    /// Returns `None` if the raw value is 0 (null handle). Use the `NULL`
    /// constant for explicitly null handles.
    pub fn from_raw(raw: RawDecoderHandle) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self { raw })
        }
    }

    /// Creates a decoder handle from a raw value, including null.
    pub const fn from_raw_unchecked(raw: RawDecoderHandle) -> Self {
        Self { raw }
    }

    /// Returns the raw handle value.
    pub const fn as_raw(&self) -> RawDecoderHandle {
        self.raw
    }

    /// Returns true if this is the null handle.
    pub const fn is_null(&self) -> bool {
        self.raw == 0
    }

    /// Returns true if this is a valid (non-null) handle.
    pub const fn is_valid(&self) -> bool {
        self.raw != 0
    }
}

impl fmt::Debug for DecoderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decoder(0x{:016x})", self.raw)
    }
}

impl fmt::Display for DecoderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.raw)
    }
}

impl Default for DecoderHandle {
    fn default() -> Self {
        Self::NULL
    }
}
