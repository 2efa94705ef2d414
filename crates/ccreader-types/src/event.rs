//! Decode lifecycle events.

use crate::RawCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle event reported to the consumer's lifecycle sink.
///
/// Two raw encodings exist in the field: the legacy reader interface used
/// sparse event codes (`CONTENT_PRESENTING_EVENT` = 0x05,
/// `PRESENTATION_SHUTDOWN_EVENT` = 0x08), while the current firmware
/// interface numbers the events densely from zero. Both are supported for
/// round-tripping; the dense encoding is the canonical one.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CcEvent {
    /// Closed caption decoding started; content is presenting.
    ContentPresenting = 0,
    /// Closed caption decoding stopped; presentation shut down.
    PresentationShutdown = 1,
}

impl CcEvent {
    /// Legacy raw code for [`CcEvent::ContentPresenting`].
    pub const LEGACY_CONTENT_PRESENTING: i32 = 0x05;

    /// Legacy raw code for [`CcEvent::PresentationShutdown`].
    pub const LEGACY_PRESENTATION_SHUTDOWN: i32 = 0x08;

    /// Creates an event from its canonical (dense) raw code.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown codes.
    pub const fn from_raw(raw: i32) -> Result<Self, RawCodeError> {
        match raw {
            0 => Ok(CcEvent::ContentPresenting),
            1 => Ok(CcEvent::PresentationShutdown),
            other => Err(RawCodeError::InvalidEvent(other)),
        }
    }

    /// Creates an event from the legacy sparse event code.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown codes.
    pub const fn from_legacy_raw(raw: i32) -> Result<Self, RawCodeError> {
        match raw {
            Self::LEGACY_CONTENT_PRESENTING => Ok(CcEvent::ContentPresenting),
            Self::LEGACY_PRESENTATION_SHUTDOWN => Ok(CcEvent::PresentationShutdown),
            other => Err(RawCodeError::InvalidEvent(other)),
        }
    }

    /// Returns the canonical raw code for this event.
    pub const fn as_raw(&self) -> i32 {
        *self as i32
    }

    /// Returns the legacy sparse raw code for this event.
    pub const fn as_legacy_raw(&self) -> i32 {
        match self {
            CcEvent::ContentPresenting => Self::LEGACY_CONTENT_PRESENTING,
            CcEvent::PresentationShutdown => Self::LEGACY_PRESENTATION_SHUTDOWN,
        }
    }
}

impl fmt::Display for CcEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CcEvent::ContentPresenting => "CONTENT_PRESENTING",
            CcEvent::PresentationShutdown => "PRESENTATION_SHUTDOWN",
        };
        write!(f, "{}", s)
    }
}

impl TryFrom<i32> for CcEvent {
    type Error = RawCodeError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        CcEvent::from_raw(raw)
    }
}

impl From<CcEvent> for i32 {
    fn from(event: CcEvent) -> i32 {
        event.as_raw()
    }
}
