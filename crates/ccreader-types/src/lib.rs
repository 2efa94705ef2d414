//! Common closed caption types for the CC Data Reader HAL.
//!
//! This crate provides type-safe representations of the primitives shared
//! between the caption delivery controller and its consumers:
//!
//! - [`CcDataType`]: CEA-608 / CEA-708 / XDS payload classification
//! - [`CcEvent`]: decode lifecycle events (presenting / shutdown)
//! - [`Pts`]: decoder-domain presentation timestamps
//! - [`DecodeSequence`]: the wrapping decode-session counter

mod data_type;
mod event;
mod pts;
mod sequence;

pub use data_type::CcDataType;
pub use event::CcEvent;
pub use pts::Pts;
pub use sequence::DecodeSequence;

/// Common error type for raw-code conversion failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RawCodeError {
    #[error("invalid closed caption data type code: {0}")]
    InvalidDataType(i32),

    #[error("invalid closed caption event code: {0}")]
    InvalidEvent(i32),
}
