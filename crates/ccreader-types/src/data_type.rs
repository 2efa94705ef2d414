//! Closed caption data type classification.

use crate::RawCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of closed caption payload carried in a delivery.
///
/// The discriminants match the raw codes used by the decoder firmware
/// (`CLOSEDCAPTION_DATA_TYPE_*`), so values can round-trip across a C shim.
///
/// # Examples
///
/// ```
/// use ccreader_types::CcDataType;
///
/// let ty = CcDataType::from_raw(1).unwrap();
/// assert_eq!(ty, CcDataType::Cea708);
/// assert_eq!(ty.as_raw(), 1);
///
/// // Out-of-range codes are rejected
/// assert!(CcDataType::from_raw(3).is_err());
/// ```
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CcDataType {
    /// CEA-608 standard closed captions (legacy line-21).
    Cea608 = 0,
    /// CEA-708 standard closed captions (digital).
    Cea708 = 1,
    /// CEA-608 Extended Data Services (XDS) metadata.
    Xds = 2,
}

impl CcDataType {
    /// Creates a data type from its raw firmware code.
    ///
    /// # Errors
    ///
    /// Returns an error for codes outside the defined range, including the
    /// firmware's out-of-range sentinel.
    pub const fn from_raw(raw: i32) -> Result<Self, RawCodeError> {
        match raw {
            0 => Ok(CcDataType::Cea608),
            1 => Ok(CcDataType::Cea708),
            2 => Ok(CcDataType::Xds),
            other => Err(RawCodeError::InvalidDataType(other)),
        }
    }

    /// Returns the raw firmware code for this data type.
    pub const fn as_raw(&self) -> i32 {
        *self as i32
    }

    /// Returns true if this payload kind carries caption text rather than
    /// XDS metadata.
    pub const fn is_caption_text(&self) -> bool {
        matches!(self, CcDataType::Cea608 | CcDataType::Cea708)
    }
}

impl fmt::Display for CcDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CcDataType::Cea608 => "CEA-608",
            CcDataType::Cea708 => "CEA-708",
            CcDataType::Xds => "XDS",
        };
        write!(f, "{}", s)
    }
}

impl TryFrom<i32> for CcDataType {
    type Error = RawCodeError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        CcDataType::from_raw(raw)
    }
}

impl From<CcDataType> for i32 {
    fn from(ty: CcDataType) -> i32 {
        ty.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_raw() {
        assert_eq!(CcDataType::from_raw(0), Ok(CcDataType::Cea608));
        assert_eq!(CcDataType::from_raw(1), Ok(CcDataType::Cea708));
        assert_eq!(CcDataType::from_raw(2), Ok(CcDataType::Xds));
    }

    #[test]
    fn test_from_raw_out_of_range() {
        // 3 is the firmware's CLOSEDCAPTION_DATA_TYPE_MAX sentinel
        assert!(CcDataType::from_raw(3).is_err());
        assert!(CcDataType::from_raw(-1).is_err());
    }

    #[test]
    fn test_round_trip() {
        for ty in [CcDataType::Cea608, CcDataType::Cea708, CcDataType::Xds] {
            assert_eq!(CcDataType::from_raw(ty.as_raw()), Ok(ty));
        }
    }

    #[test]
    fn test_is_caption_text() {
        assert!(CcDataType::Cea608.is_caption_text());
        assert!(CcDataType::Cea708.is_caption_text());
        assert!(!CcDataType::Xds.is_caption_text());
    }

    #[test]
    fn test_display() {
        assert_eq!(CcDataType::Cea708.to_string(), "CEA-708");
        assert_eq!(CcDataType::Xds.to_string(), "XDS");
    }
}
