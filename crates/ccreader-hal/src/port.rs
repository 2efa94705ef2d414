//! Decoder port engagement boundary.

use crate::error::CcResult;
use crate::handle::DecoderHandle;

/// Engagement boundary to the platform's CC extraction mechanism.
///
/// Implementations resolve a decoder handle to its hardware CC port and
/// arm or disarm extraction. The actual byte extraction is out of scope:
/// once engaged, the platform's delivery thread feeds data back through the
/// controller's producer-facing entry points.
///
/// The controller invokes both methods while holding its internal lock, so
/// implementations must not call back into the controller from within them.
pub trait DecoderPort: Send + Sync {
    /// Engages CC extraction on the decoder named by `handle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the decoder is invalid, unavailable, or the
    /// firmware rejects engagement. The controller reports this to the
    /// caller as a start failure and takes no state transition.
    fn engage(&self, handle: DecoderHandle) -> CcResult<()>;

    /// Disengages CC extraction on the decoder named by `handle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the firmware rejects the request. The controller
    /// logs the failure but completes the stop transition regardless; the
    /// decode session is over either way.
    fn disengage(&self, handle: DecoderHandle) -> CcResult<()>;
}
