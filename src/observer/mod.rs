//! Observer types for instrumented environment reads.
//!
//! An observer is the capability that receives notification of a resource
//! query: which key was looked up, and on behalf of which consumer. Exactly
//! one observer is active per [`ObserverSlot`](crate::core::ObserverSlot)
//! at any instant.

mod recording;

pub use recording::RecordingObserver;

/// Capability that observes instrumented environment reads.
///
/// Implementors receive one notification per instrumented read, carrying
/// the queried key and an opaque consumer label identifying the logical
/// caller. Observers observe only: they cannot influence the read, and the
/// notification always happens before the underlying lookup begins.
pub trait QueryObserver: Send + Sync {
    /// Called once per instrumented read, before the underlying lookup.
    ///
    /// Implementations should return quickly: notification is synchronous
    /// on the reading thread. Panicking here is isolated by the accessor
    /// and logged, but treated as a bug in the observer.
    fn env_queried(&self, key: &str, consumer: &str);
}

/// Adapter turning a closure into an observer.
///
/// Lets simple observers skip a dedicated type:
///
/// ```rust
/// use envtap::prelude::*;
/// use std::sync::Arc;
///
/// let slot = ObserverSlot::new();
/// slot.install(Arc::new(FnObserver::new(|key: &str, consumer: &str| {
///     println!("{consumer} queried {key}");
/// })));
/// ```
pub struct FnObserver<F>(F);

impl<F> FnObserver<F>
where
    F: Fn(&str, &str) + Send + Sync,
{
    /// Wrap a closure as an observer.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> QueryObserver for FnObserver<F>
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn env_queried(&self, key: &str, consumer: &str) {
        (self.0)(key, consumer)
    }
}

/// Observer that does nothing.
///
/// This is the default observer: a slot holds it at construction and again
/// after [`reset`](crate::core::ObserverSlot::reset), so instrumented call
/// sites never have to check whether anyone is listening.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl QueryObserver for NoOpObserver {
    fn env_queried(&self, _key: &str, _consumer: &str) {}
}

/// A single recorded environment query.
///
/// Events exist only in the hands of observers that choose to keep them;
/// the interception hot path passes borrowed key/consumer strings and
/// stores nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEvent {
    /// The key that was looked up.
    pub key: String,
    /// Opaque label identifying the logical caller.
    pub consumer: String,
}

impl QueryEvent {
    /// Create an event from borrowed key/consumer strings.
    pub fn new(key: impl Into<String>, consumer: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            consumer: consumer.into(),
        }
    }
}
