//! Safe Rust surface over the closed caption decoder port.
//!
//! This crate implements the caption delivery controller: the layer that
//! takes raw CEA-608 / CEA-708 / XDS byte payloads extracted by the
//! platform from a video decoder's side-channel and forwards them to a
//! registered consumer, together with decode lifecycle notifications.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`handle`]: the opaque type-safe decoder handle
//! - [`error`]: error types and firmware status handling
//! - [`sink`]: consumer-implemented sink traits and the borrowed payload view
//! - [`port`]: the engagement boundary to the platform's CC extraction
//! - [`controller`]: the registration/lifecycle state machine and dispatch
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ccreader_hal::{CaptionController, CcResult, DecoderHandle};
//!
//! fn run(controller: &CaptionController<impl ccreader_hal::DecoderPort>,
//!        renderer: Arc<Renderer>) -> CcResult<()> {
//!     controller.register(renderer.clone(), renderer)?;
//!     let decoder = DecoderHandle::from_raw(0x1001).unwrap();
//!     controller.start(decoder)?;
//!     // ... platform delivers CC data on its own thread ...
//!     controller.stop()?;
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod error;
pub mod handle;
pub mod port;
pub mod sink;

// Re-export commonly used types
pub use controller::CaptionController;
pub use error::{CcError, CcResult, CcStatus, CcStatusExt};
pub use handle::{DecoderHandle, RawDecoderHandle};
pub use port::DecoderPort;
pub use sink::{CaptionPayload, CaptionSink, LifecycleSink};

pub use ccreader_types::{CcDataType, CcEvent, DecodeSequence, Pts};
