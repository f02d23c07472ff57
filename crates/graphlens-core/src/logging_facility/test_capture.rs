//! In-memory event capture for logging assertions
//!
//! [`init_test_capture`] installs a layer that records every event's fields
//! as strings. Tests then query the shared buffer by operation and event, or
//! pull out the member paths reported by `mismatch` and `skip` events.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event, every field rendered as a string
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Look up a recorded field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// True when the event was logged for `op` with event name `event`
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }

    /// Dotted member path of a detail event
    pub fn path(&self) -> Option<&str> {
        self.field("path")
    }
}

#[derive(Default)]
struct FieldRecorder(HashMap<String, String>);

impl FieldRecorder {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldRecorder {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, value.to_string());
    }
}

/// Layer appending every event to a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    /// Create the layer together with the handle that reads its buffer
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let capture = TestCapture {
            events: Arc::clone(&events),
        };
        (Self { events }, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);
        let fields = recorder.0;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: fields.get("component").cloned(),
            op: fields.get("op").cloned(),
            event: fields.get("event").cloned(),
            fields,
        };

        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Read handle over the captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of every captured event
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events logged for `op` with event name `event`
    pub fn events_for(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.events().into_iter().filter(|e| e.is(op, event)).collect()
    }

    /// Member paths reported by `op`'s detail events named `event`
    pub fn detail_paths(&self, op: &str, event: &str) -> Vec<String> {
        self.events_for(op, event)
            .iter()
            .filter_map(|e| e.path().map(str::to_string))
            .collect()
    }

    /// Assert that at least one `op`/`event` pair was captured
    ///
    /// # Panics
    ///
    /// Panics if no such event was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer and return a handle to its buffer
///
/// The layer becomes the global subscriber on first use; later calls return
/// the same handle. Tests in one binary share the buffer and run in parallel,
/// so assertions should filter on a path or op unique to the test.
///
/// # Example
///
/// ```
/// use graphlens_core::logging_facility::test_capture::init_test_capture;
/// use graphlens_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op");
/// capture.assert_event_exists("doc_capture_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}
