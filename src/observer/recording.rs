//! A recording observer for tests and diagnostics.

use super::{QueryEvent, QueryObserver};
use parking_lot::Mutex;

/// Observer that records every notification it receives.
///
/// Intended as a test double: install one, run the workload under
/// observation, then inspect [`events`](RecordingObserver::events). The
/// internal buffer is guarded by a `parking_lot::Mutex`, so a single
/// instance can be shared across reader threads.
///
/// # Examples
///
/// ```rust
/// use envtap::prelude::*;
/// use std::sync::Arc;
///
/// let tap = TappedEnv::new(MapSource::from_iter([("user.home", "/home/demo")]));
/// let spy = Arc::new(RecordingObserver::new());
///
/// tap.install(spy.clone());
/// tap.read("user.home", "pluginA").unwrap();
/// tap.reset();
///
/// assert_eq!(spy.events(), vec![QueryEvent::new("user.home", "pluginA")]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<QueryEvent>>,
}

impl RecordingObserver {
    /// Create an empty recording observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far, in notification order.
    pub fn events(&self) -> Vec<QueryEvent> {
        self.events.lock().clone()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Discard all recorded events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl QueryObserver for RecordingObserver {
    fn env_queried(&self, key: &str, consumer: &str) {
        self.events.lock().push(QueryEvent::new(key, consumer));
    }
}
