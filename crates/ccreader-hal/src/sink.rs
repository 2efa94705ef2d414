//! Consumer-implemented sink interfaces and the borrowed payload view.

use crate::handle::DecoderHandle;
use ccreader_types::{CcDataType, CcEvent, DecodeSequence, Pts};

/// Borrowed view of one unit of closed caption data.
///
/// The view is only valid for the duration of a single
/// [`CaptionSink::on_cc_data`] invocation; the lifetime parameter makes
/// that window a compile-time fact. Sinks that need the bytes afterwards
/// must copy them out before returning.
#[derive(Debug, Clone, Copy)]
pub struct CaptionPayload<'a> {
    data_type: CcDataType,
    data: &'a [u8],
    pts: Pts,
}

impl<'a> CaptionPayload<'a> {
    /// Creates a payload view over a producer-owned buffer.
    pub fn new(data_type: CcDataType, data: &'a [u8], pts: Pts) -> Self {
        Self {
            data_type,
            data,
            pts,
        }
    }

    /// Returns the kind of caption data carried.
    pub fn data_type(&self) -> CcDataType {
        self.data_type
    }

    /// Returns the caption bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the buffer length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the presentation timestamp supplied by the producer.
    pub fn pts(&self) -> Pts {
        self.pts
    }
}

/// Consumer interface receiving closed caption data.
///
/// Implemented by the caption renderer and injected at registration time.
/// The controller invokes [`on_cc_data`](CaptionSink::on_cc_data) from the
/// producer's delivery thread for each unit of CC data that arrives while
/// decoding is started.
///
/// # Obligations
///
/// - The payload buffer is valid only for the duration of the call; do not
///   retain references to it.
/// - Do not call back into the controller's register/start/stop from inside
///   the sink: the controller's lock is held during delivery and the call
///   would deadlock.
/// - There is no return value: delivery failures are not observable to the
///   controller, and payloads are never redelivered.
pub trait CaptionSink: Send + Sync {
    /// Delivers one unit of closed caption data.
    ///
    /// `sequence` is the decode sequence produced by the start transition
    /// that opened the current session, letting the consumer discard data
    /// from a stale session after a rapid stop/restart.
    fn on_cc_data(
        &self,
        decoder: DecoderHandle,
        payload: CaptionPayload<'_>,
        sequence: DecodeSequence,
    );
}

/// Consumer interface receiving decode lifecycle transitions.
///
/// The reentrancy obligation of [`CaptionSink`] applies here as well.
pub trait LifecycleSink: Send + Sync {
    /// Reports a decode lifecycle event for the given decoder.
    fn on_decode_event(&self, decoder: DecoderHandle, event: CcEvent, sequence: DecodeSequence);
}
