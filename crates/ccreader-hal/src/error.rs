//! Closed caption error types and status handling.
//!
//! This module provides safe error handling for the caption delivery
//! controller, converting raw closed caption status codes into Rust's
//! Result type.

use std::fmt;
use thiserror::Error;

/// Closed caption status codes matching the firmware C API.
///
/// These values correspond to `closedCaption_status_t` in the firmware
/// header files.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CcStatus {
    Ok = 0,
    InvalidParam = 1,
    FailedToStartDecoding = 2,
    NotRegistered = 3,
    AlreadyRegistered = 4,
    AlreadyStarted = 5,
    NotStarted = 6,
}

impl CcStatus {
    /// Creates a CcStatus from a raw i32 value.
    ///
    /// Returns `None` for codes outside the defined range.
    pub fn from_raw(status: i32) -> Option<Self> {
        match status {
            0 => Some(CcStatus::Ok),
            1 => Some(CcStatus::InvalidParam),
            2 => Some(CcStatus::FailedToStartDecoding),
            3 => Some(CcStatus::NotRegistered),
            4 => Some(CcStatus::AlreadyRegistered),
            5 => Some(CcStatus::AlreadyStarted),
            6 => Some(CcStatus::NotStarted),
            _ => None,
        }
    }

    /// Returns the raw status code.
    pub const fn as_raw(&self) -> i32 {
        *self as i32
    }

    /// Returns true if the status indicates success.
    pub fn is_success(&self) -> bool {
        *self == CcStatus::Ok
    }

    /// Returns true if the status indicates an error.
    pub fn is_error(&self) -> bool {
        *self != CcStatus::Ok
    }

    /// Converts to a Result, returning Ok(()) for success.
    pub fn into_result(self) -> CcResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(CcError::from_status(self))
        }
    }
}

impl fmt::Display for CcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CcStatus::Ok => "CLOSEDCAPTION_STATUS_OK",
            CcStatus::InvalidParam => "CLOSEDCAPTION_STATUS_INVALID_PARAM",
            CcStatus::FailedToStartDecoding => "CLOSEDCAPTION_STATUS_FAILED_TO_START_DECODING",
            CcStatus::NotRegistered => "CLOSEDCAPTION_STATUS_NOT_REGISTERED",
            CcStatus::AlreadyRegistered => "CLOSEDCAPTION_STATUS_ALREADY_REGISTERED",
            CcStatus::AlreadyStarted => "CLOSEDCAPTION_STATUS_ALREADY_STARTED",
            CcStatus::NotStarted => "CLOSEDCAPTION_STATUS_NOT_STARTED",
        };
        write!(f, "{}", s)
    }
}

/// Error type for caption delivery controller operations.
#[derive(Debug, Clone, Error)]
pub enum CcError {
    /// Malformed caller input; recoverable by correcting arguments.
    #[error("Invalid parameter: {message}")]
    InvalidParam { message: String },

    /// A sink pair is already registered for this controller.
    #[error("Callbacks already registered")]
    AlreadyRegistered,

    /// No sink pair has been registered for this controller.
    #[error("Callbacks not registered")]
    NotRegistered,

    /// Decoding has already been started.
    #[error("Decoding already started")]
    AlreadyStarted,

    /// Decoding has not been started.
    #[error("Decoding not started")]
    NotStarted,

    /// The underlying decoder port rejected engagement.
    #[error("Failed to start decoding: {message}")]
    StartFailed { message: String },

    /// Internal error.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CcError {
    /// Creates an error from a firmware status code.
    pub fn from_status(status: CcStatus) -> Self {
        match status {
            CcStatus::Ok => {
                // This shouldn't happen, but handle it gracefully
                CcError::Internal {
                    message: "from_status called with success status".to_string(),
                }
            }
            CcStatus::InvalidParam => CcError::InvalidParam {
                message: format!("firmware returned {}", status),
            },
            CcStatus::FailedToStartDecoding => CcError::StartFailed {
                message: format!("firmware returned {}", status),
            },
            CcStatus::NotRegistered => CcError::NotRegistered,
            CcStatus::AlreadyRegistered => CcError::AlreadyRegistered,
            CcStatus::AlreadyStarted => CcError::AlreadyStarted,
            CcStatus::NotStarted => CcError::NotStarted,
        }
    }

    /// Creates an invalid parameter error with a message.
    pub fn invalid_param(message: impl Into<String>) -> Self {
        CcError::InvalidParam {
            message: message.into(),
        }
    }

    /// Creates a start failure error with a message.
    pub fn start_failed(message: impl Into<String>) -> Self {
        CcError::StartFailed {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CcError::Internal {
            message: message.into(),
        }
    }

    /// Returns the firmware status code for this error.
    ///
    /// Returns `None` for [`CcError::Internal`], which has no counterpart
    /// in the C status enum.
    pub fn status(&self) -> Option<CcStatus> {
        match self {
            CcError::InvalidParam { .. } => Some(CcStatus::InvalidParam),
            CcError::AlreadyRegistered => Some(CcStatus::AlreadyRegistered),
            CcError::NotRegistered => Some(CcStatus::NotRegistered),
            CcError::AlreadyStarted => Some(CcStatus::AlreadyStarted),
            CcError::NotStarted => Some(CcStatus::NotStarted),
            CcError::StartFailed { .. } => Some(CcStatus::FailedToStartDecoding),
            CcError::Internal { .. } => None,
        }
    }

    /// Returns true if this error is retryable.
    ///
    /// Only a start failure may succeed on retry (the decoder may become
    /// available); state-precondition violations require the caller to
    /// change state first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CcError::StartFailed { .. })
    }
}

/// Result type for caption delivery controller operations.
pub type CcResult<T> = Result<T, CcError>;

/// Extension trait for converting raw status codes.
pub trait CcStatusExt {
    /// Converts a raw status code to a Result.
    fn to_result(self) -> CcResult<()>;
}

impl CcStatusExt for i32 {
    fn to_result(self) -> CcResult<()> {
        match CcStatus::from_raw(self) {
            Some(status) => status.into_result(),
            None => Err(CcError::internal(format!(
                "unknown status code {} from firmware",
                self
            ))),
        }
    }
}
