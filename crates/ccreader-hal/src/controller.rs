//! Caption delivery controller: registration, lifecycle, and dispatch.

use std::sync::Arc;

use log::{debug, trace, warn};
use parking_lot::Mutex;

use ccreader_types::{CcDataType, CcEvent, DecodeSequence, Pts};

use crate::error::{CcError, CcResult};
use crate::handle::DecoderHandle;
use crate::port::DecoderPort;
use crate::sink::{CaptionPayload, CaptionSink, LifecycleSink};

/// Registered sink pair. At most one exists per controller.
struct Registration {
    data_sink: Arc<dyn CaptionSink>,
    lifecycle_sink: Arc<dyn LifecycleSink>,
}

/// Decode lifecycle state. `Started` implies a registration exists.
#[derive(Clone, Copy)]
enum LifecycleState {
    Unregistered,
    Registered,
    Started { decoder: DecoderHandle },
}

/// State guarded by the controller lock: the lifecycle state, the
/// registration slot, and the sequence counter move together.
struct Inner {
    state: LifecycleState,
    registration: Option<Registration>,
    sequence: DecodeSequence,
}

/// Caption delivery controller for one decoder port.
///
/// The controller owns the registration slot, the decode lifecycle state
/// machine, and the decode sequence counter for exactly one underlying
/// decoder port. Consumers drive the control plane
/// ([`register`](Self::register) / [`start`](Self::start) /
/// [`stop`](Self::stop)); the platform's delivery thread drives the data
/// plane ([`deliver_cc_data`](Self::deliver_cc_data) /
/// [`deliver_presentation_event`](Self::deliver_presentation_event)).
///
/// # Lifecycle
///
/// ```text
/// Unregistered --register--> Registered --start--> Started
///                                 ^                   |
///                                 +------- stop ------+
/// ```
///
/// Each successful start and stop advances the decode sequence (wrapping
/// 65535 to 0), so a consumer can tell data of a stale session from the
/// current one across rapid stop/restart cycles such as channel changes.
///
/// # Concurrency
///
/// One internal lock guards the lifecycle state, the registration slot, and
/// the sequence counter. Sinks are invoked while it is held, which yields
/// the quiescence guarantee: once `stop` returns, no data delivery is in
/// flight and none will begin. The flip side is a documented caller
/// obligation: sinks must not call back into the control plane.
pub struct CaptionController<P: DecoderPort> {
    port: P,
    inner: Mutex<Inner>,
}

impl<P: DecoderPort> CaptionController<P> {
    /// Creates a controller wrapping the given decoder port.
    ///
    /// The sequence counter starts at zero and is owned by this instance;
    /// independent controllers do not share state.
    pub fn new(port: P) -> Self {
        Self {
            port,
            inner: Mutex::new(Inner {
                state: LifecycleState::Unregistered,
                registration: None,
                sequence: DecodeSequence::ZERO,
            }),
        }
    }

    /// Registers the consumer's sink pair.
    ///
    /// Registration is strict: a second call while a sink pair is held
    /// fails with [`CcError::AlreadyRegistered`] and leaves the original
    /// pair intact. There is no unregister operation; the slot lives until
    /// the controller is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CcError::AlreadyRegistered`] if a sink pair is already
    /// registered.
    pub fn register(
        &self,
        data_sink: Arc<dyn CaptionSink>,
        lifecycle_sink: Arc<dyn LifecycleSink>,
    ) -> CcResult<()> {
        let mut inner = self.inner.lock();

        if inner.registration.is_some() {
            warn!("register rejected: callbacks already registered");
            return Err(CcError::AlreadyRegistered);
        }

        inner.registration = Some(Registration {
            data_sink,
            lifecycle_sink,
        });
        inner.state = LifecycleState::Registered;
        debug!("caption sinks registered");
        Ok(())
    }

    /// Starts closed caption decoding for the given decoder.
    ///
    /// On success the decode sequence advances by one (wrapping 65535 to 0)
    /// and subsequent producer deliveries are forwarded to the data sink.
    /// The `ContentPresenting` lifecycle event is not raised here: it
    /// reaches the lifecycle sink once the platform confirms presentation
    /// through [`deliver_presentation_event`](Self::deliver_presentation_event).
    ///
    /// # Errors
    ///
    /// - [`CcError::InvalidParam`] if `decoder` is the null handle
    /// - [`CcError::NotRegistered`] if no sink pair is registered
    /// - [`CcError::AlreadyStarted`] if decoding is already started
    /// - [`CcError::StartFailed`] if the decoder port rejects engagement
    ///
    /// A failed call leaves the lifecycle state and sequence unchanged.
    pub fn start(&self, decoder: DecoderHandle) -> CcResult<()> {
        if decoder.is_null() {
            return Err(CcError::invalid_param("decoder handle is null"));
        }

        let mut inner = self.inner.lock();

        match inner.state {
            LifecycleState::Unregistered => {
                warn!("start {} rejected: not registered", decoder);
                return Err(CcError::NotRegistered);
            }
            LifecycleState::Started { decoder: current } => {
                warn!(
                    "start {} rejected: already started on {}",
                    decoder, current
                );
                return Err(CcError::AlreadyStarted);
            }
            LifecycleState::Registered => {}
        }

        self.port
            .engage(decoder)
            .map_err(|e| CcError::start_failed(format!("port engage on {}: {}", decoder, e)))?;

        inner.sequence = inner.sequence.next();
        inner.state = LifecycleState::Started { decoder };
        debug!(
            "decoding started on {} (sequence {})",
            decoder, inner.sequence
        );
        Ok(())
    }

    /// Stops closed caption decoding.
    ///
    /// On success the decode sequence advances again, the state returns to
    /// registered, and the lifecycle sink observes `PresentationShutdown`
    /// before this call returns. Quiescence is guaranteed: no data delivery
    /// is in flight when `stop` returns and none will begin afterwards, so
    /// the consumer may tear down its state immediately.
    ///
    /// A port disengage failure is logged but does not fail the call: the
    /// decode session ends regardless.
    ///
    /// # Errors
    ///
    /// - [`CcError::NotRegistered`] if no sink pair was ever registered
    /// - [`CcError::NotStarted`] if decoding is not started
    pub fn stop(&self) -> CcResult<()> {
        let mut inner = self.inner.lock();

        let decoder = match inner.state {
            LifecycleState::Unregistered => {
                warn!("stop rejected: not registered");
                return Err(CcError::NotRegistered);
            }
            LifecycleState::Registered => {
                warn!("stop rejected: not started");
                return Err(CcError::NotStarted);
            }
            LifecycleState::Started { decoder } => decoder,
        };

        if let Err(e) = self.port.disengage(decoder) {
            warn!("port disengage on {} failed: {}", decoder, e);
        }

        inner.sequence = inner.sequence.next();
        inner.state = LifecycleState::Registered;
        let sequence = inner.sequence;
        debug!("decoding stopped on {} (sequence {})", decoder, sequence);

        // Started implies a registration exists
        if let Some(registration) = inner.registration.as_ref() {
            registration.lifecycle_sink.on_decode_event(
                decoder,
                CcEvent::PresentationShutdown,
                sequence,
            );
        }
        Ok(())
    }

    /// Returns the current decode sequence number.
    pub fn current_sequence(&self) -> DecodeSequence {
        self.inner.lock().sequence
    }

    /// Producer entry point: delivers one unit of closed caption data.
    ///
    /// Invoked by the platform's delivery thread whenever CC bytes are
    /// extracted. The payload is forwarded to the data sink tagged with the
    /// decoder identity, data type, session sequence, and timestamp, in
    /// arrival order. If decoding is not started, or `decoder` is not the
    /// decoder of the current session, the payload is dropped silently;
    /// that is expected during shutdown races, not an error.
    ///
    /// The buffer is borrowed for the duration of the sink call only.
    pub fn deliver_cc_data(
        &self,
        decoder: DecoderHandle,
        data_type: CcDataType,
        data: &[u8],
        pts: Pts,
    ) {
        let inner = self.inner.lock();

        let current = match inner.state {
            LifecycleState::Started { decoder } => decoder,
            _ => {
                trace!("dropping {} bytes from {}: not started", data.len(), decoder);
                return;
            }
        };
        if current != decoder {
            trace!(
                "dropping {} bytes from {}: session belongs to {}",
                data.len(),
                decoder,
                current
            );
            return;
        }

        // Started implies a registration exists
        if let Some(registration) = inner.registration.as_ref() {
            let payload = CaptionPayload::new(data_type, data, pts);
            registration
                .data_sink
                .on_cc_data(decoder, payload, inner.sequence);
        }
    }

    /// Producer entry point: delivers a presentation lifecycle signal.
    ///
    /// Invoked by the platform when the hardware reports presenting or
    /// shutdown. The event is forwarded to the lifecycle sink when it
    /// belongs to the current decode session and dropped silently
    /// otherwise. In particular this is how `ContentPresenting` reaches the
    /// consumer after a successful [`start`](Self::start).
    pub fn deliver_presentation_event(&self, decoder: DecoderHandle, event: CcEvent) {
        let inner = self.inner.lock();

        let current = match inner.state {
            LifecycleState::Started { decoder } => decoder,
            _ => {
                trace!("dropping {} from {}: not started", event, decoder);
                return;
            }
        };
        if current != decoder {
            trace!(
                "dropping {} from {}: session belongs to {}",
                event,
                decoder,
                current
            );
            return;
        }

        if let Some(registration) = inner.registration.as_ref() {
            registration
                .lifecycle_sink
                .on_decode_event(decoder, event, inner.sequence);
        }
    }

    /// Returns a reference to the underlying decoder port.
    pub fn port(&self) -> &P {
        &self.port
    }
}
