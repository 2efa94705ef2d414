//! Cross-thread lifecycle tests for the caption delivery controller.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use ccreader_hal::{
    CaptionController, CaptionPayload, CaptionSink, CcDataType, CcError, CcEvent, CcResult,
    DecodeSequence, DecoderHandle, DecoderPort, LifecycleSink, Pts,
};

struct NoopPort;

impl DecoderPort for NoopPort {
    fn engage(&self, _handle: DecoderHandle) -> CcResult<()> {
        Ok(())
    }

    fn disengage(&self, _handle: DecoderHandle) -> CcResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct Renderer {
    payloads: Mutex<Vec<(CcDataType, Vec<u8>, Pts, DecodeSequence)>>,
    events: Mutex<Vec<(CcEvent, DecodeSequence)>>,
}

impl CaptionSink for Renderer {
    fn on_cc_data(
        &self,
        _decoder: DecoderHandle,
        payload: CaptionPayload<'_>,
        sequence: DecodeSequence,
    ) {
        self.payloads.lock().push((
            payload.data_type(),
            payload.data().to_vec(),
            payload.pts(),
            sequence,
        ));
    }
}

impl LifecycleSink for Renderer {
    fn on_decode_event(&self, _decoder: DecoderHandle, event: CcEvent, sequence: DecodeSequence) {
        self.events.lock().push((event, sequence));
    }
}

fn decoder() -> DecoderHandle {
    DecoderHandle::from_raw(0x1001).unwrap()
}

/// The full consumer scenario: register, start, one delivery, stop, and a
/// late payload that must be dropped.
#[test]
fn full_session_scenario() {
    let controller = CaptionController::new(NoopPort);
    let renderer = Arc::new(Renderer::default());

    controller
        .register(renderer.clone(), renderer.clone())
        .unwrap();

    controller.start(decoder()).unwrap();
    assert_eq!(controller.current_sequence(), DecodeSequence::new(1));

    controller.deliver_presentation_event(decoder(), CcEvent::ContentPresenting);
    controller.deliver_cc_data(decoder(), CcDataType::Cea608, &[0x14, 0x20], Pts::new(1000));

    controller.stop().unwrap();
    assert_eq!(controller.current_sequence(), DecodeSequence::new(2));

    // A payload arriving after stop returned is dropped
    controller.deliver_cc_data(decoder(), CcDataType::Cea608, &[0x15, 0x2f], Pts::new(2000));

    let payloads = renderer.payloads.lock();
    assert_eq!(payloads.len(), 1);
    assert_eq!(
        payloads[0],
        (
            CcDataType::Cea608,
            vec![0x14, 0x20],
            Pts::new(1000),
            DecodeSequence::new(1)
        )
    );

    let events = renderer.events.lock();
    assert_eq!(
        *events,
        vec![
            (CcEvent::ContentPresenting, DecodeSequence::new(1)),
            (CcEvent::PresentationShutdown, DecodeSequence::new(2)),
        ]
    );
}

#[test]
fn start_without_register_leaves_sequence_unchanged() {
    let controller = CaptionController::new(NoopPort);
    let err = controller.start(decoder()).unwrap_err();
    assert!(matches!(err, CcError::NotRegistered));
    assert_eq!(controller.current_sequence(), DecodeSequence::ZERO);
}

/// Sink that asserts no delivery happens after `stop` has returned.
struct QuiescenceSink {
    stopped: Arc<AtomicBool>,
    delivered: AtomicUsize,
    late_deliveries: AtomicUsize,
}

impl CaptionSink for QuiescenceSink {
    fn on_cc_data(
        &self,
        _decoder: DecoderHandle,
        _payload: CaptionPayload<'_>,
        _sequence: DecodeSequence,
    ) {
        if self.stopped.load(Ordering::SeqCst) {
            self.late_deliveries.fetch_add(1, Ordering::SeqCst);
        }
        self.delivered.fetch_add(1, Ordering::SeqCst);
        // Widen the race window while the controller lock is held
        thread::sleep(Duration::from_micros(50));
    }
}

impl LifecycleSink for QuiescenceSink {
    fn on_decode_event(&self, _decoder: DecoderHandle, _event: CcEvent, _sequence: DecodeSequence) {}
}

/// A producer thread hammering the data path must never reach the sink
/// after `stop` returns, even though stop races the deliveries.
#[test]
fn stop_quiesces_racing_producer() {
    let _ = env_logger::builder().is_test(true).try_init();

    let controller = Arc::new(CaptionController::new(NoopPort));
    let stopped = Arc::new(AtomicBool::new(false));
    let sink = Arc::new(QuiescenceSink {
        stopped: stopped.clone(),
        delivered: AtomicUsize::new(0),
        late_deliveries: AtomicUsize::new(0),
    });

    controller.register(sink.clone(), sink.clone()).unwrap();
    controller.start(decoder()).unwrap();

    let producer = {
        let controller = controller.clone();
        let done = stopped.clone();
        thread::spawn(move || {
            while !done.load(Ordering::SeqCst) {
                controller.deliver_cc_data(decoder(), CcDataType::Cea708, &[0xff], Pts::new(0));
            }
        })
    };

    // Let the producer get some deliveries through first
    while sink.delivered.load(Ordering::SeqCst) < 10 {
        thread::yield_now();
    }

    controller.stop().unwrap();
    // From the consumer's point of view the session is torn down now
    stopped.store(true, Ordering::SeqCst);

    producer.join().unwrap();
    assert_eq!(sink.late_deliveries.load(Ordering::SeqCst), 0);
    assert!(sink.delivered.load(Ordering::SeqCst) >= 10);
}

/// Rapid stop/restart (channel change): data delivered into the new session
/// carries the new session's sequence, never the stale one.
#[test]
fn restart_retags_sequence() {
    let controller = CaptionController::new(NoopPort);
    let renderer = Arc::new(Renderer::default());
    controller
        .register(renderer.clone(), renderer.clone())
        .unwrap();

    controller.start(decoder()).unwrap();
    controller.deliver_cc_data(decoder(), CcDataType::Cea708, &[0x01], Pts::new(1));
    controller.stop().unwrap();

    let other = DecoderHandle::from_raw(0x1002).unwrap();
    controller.start(other).unwrap();
    controller.deliver_cc_data(other, CcDataType::Cea708, &[0x02], Pts::new(2));

    let payloads = renderer.payloads.lock();
    assert_eq!(payloads[0].3, DecodeSequence::new(1));
    assert_eq!(payloads[1].3, DecodeSequence::new(3));
}
