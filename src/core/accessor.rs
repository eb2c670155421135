//! The instrumented accessor wrapping a real value lookup.

use crate::core::ObserverSlot;
use crate::error::{Result, TapError};
use crate::observer::QueryObserver;
use crate::sources::{ProcessEnv, ValueSource};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::warn;

/// An instrumented environment accessor.
///
/// `TappedEnv` is a drop-in substitute for a direct lookup against its
/// [`ValueSource`]: every [`read`](TappedEnv::read) first notifies the
/// observer currently installed in its [`ObserverSlot`], then performs the
/// real lookup and returns its result unmodified. Call sites never need to
/// know whether anyone is observing.
///
/// # Examples
///
/// ```rust
/// use envtap::prelude::*;
/// use std::sync::Arc;
///
/// # fn example() -> envtap::error::Result<()> {
/// let tap = TappedEnv::new(MapSource::from_iter([("user.home", "/home/demo")]));
/// let spy = Arc::new(RecordingObserver::new());
///
/// tap.install(spy.clone());
/// let value = tap.read("user.home", "pluginA")?;
/// tap.reset();
///
/// assert_eq!(value.as_deref(), Some("/home/demo"));
/// assert_eq!(spy.events(), vec![QueryEvent::new("user.home", "pluginA")]);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct TappedEnv<S = ProcessEnv> {
    /// The slot holding the currently active observer.
    slot: ObserverSlot,
    /// The real lookup this accessor wraps.
    source: S,
}

impl TappedEnv<ProcessEnv> {
    /// Create an accessor over the real process environment.
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl Default for TappedEnv<ProcessEnv> {
    fn default() -> Self {
        Self::process()
    }
}

impl<S: ValueSource> TappedEnv<S> {
    /// Create an accessor over the given source, with a fresh slot holding
    /// the no-op observer.
    pub fn new(source: S) -> Self {
        Self {
            slot: ObserverSlot::new(),
            source,
        }
    }

    /// Create an accessor sharing an existing slot.
    ///
    /// Useful when one controller scopes observation across several
    /// accessors at once.
    pub fn with_slot(source: S, slot: ObserverSlot) -> Self {
        Self { slot, source }
    }

    /// Perform an instrumented read of `key` on behalf of `consumer`.
    ///
    /// In order: the currently installed observer is notified with
    /// `(key, consumer)`, then the underlying lookup runs and its result is
    /// returned exactly, `None` for an absent value. The notification
    /// always happens before the lookup begins, but observers can only
    /// observe that a read is about to occur, never influence its outcome.
    ///
    /// Each call performs a fresh notification and a fresh lookup; nothing
    /// is cached or retried.
    ///
    /// # Errors
    ///
    /// Returns [`TapError::EmptyKey`] if `key` is empty. An observer that
    /// panics during notification is isolated and logged; the lookup still
    /// runs and its result is still returned.
    pub fn read(&self, key: &str, consumer: &str) -> Result<Option<String>> {
        if key.is_empty() {
            return Err(TapError::EmptyKey);
        }

        let observer = self.slot.current();
        // An observer failure must not disturb the underlying lookup.
        if catch_unwind(AssertUnwindSafe(|| observer.env_queried(key, consumer))).is_err() {
            warn!(key, consumer, "observer panicked during notification");
        }

        Ok(self.source.get(key))
    }

    /// The slot controlling which observer this accessor notifies.
    pub fn slot(&self) -> &ObserverSlot {
        &self.slot
    }

    /// Install an observer. Shorthand for `self.slot().install(observer)`.
    pub fn install(&self, observer: Arc<dyn QueryObserver>) {
        self.slot.install(observer);
    }

    /// Reset the observer to the no-op default. Shorthand for
    /// `self.slot().reset()`.
    pub fn reset(&self) {
        self.slot.reset();
    }

    /// Name of the wrapped source, for diagnostics.
    pub fn source_name(&self) -> String {
        self.source.name()
    }
}

impl<S: Clone> Clone for TappedEnv<S> {
    /// Clones share the same slot, so one install covers all handles.
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            source: self.source.clone(),
        }
    }
}
