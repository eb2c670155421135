//! The listener slot holding the currently active observer.

use crate::observer::{NoOpObserver, QueryObserver};
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// The shared no-op observer, constructed once and reused on every reset.
static NO_OP: LazyLock<Arc<dyn QueryObserver>> = LazyLock::new(|| Arc::new(NoOpObserver));

/// Holds exactly one active [`QueryObserver`] with lock-free install,
/// read, and reset.
///
/// The slot is the only shared mutable state in the interception mechanism.
/// It always holds a valid observer: it starts out with a
/// [`NoOpObserver`](crate::observer::NoOpObserver) and returns to one on
/// [`reset`](ObserverSlot::reset), so readers never have to handle an
/// absent value. All three operations are backed by a single atomic
/// reference (`arc-swap`), so they never block and are safe under
/// unbounded concurrent callers.
///
/// Installs and resets establish a total order of visible states (last
/// writer wins), but a `current` call racing with an install may observe
/// either the old or the new observer. Callers that need strict
/// before/after semantics must synchronize install/reset with the workload
/// they intend to observe.
///
/// # Examples
///
/// ```rust
/// use envtap::prelude::*;
/// use std::sync::Arc;
///
/// let slot = ObserverSlot::new();
/// let spy = Arc::new(RecordingObserver::new());
///
/// slot.install(spy.clone());
/// slot.current().env_queried("user.home", "pluginA");
/// slot.reset();
///
/// assert_eq!(spy.len(), 1);
/// ```
pub struct ObserverSlot {
    /// The active observer, wrapped in ArcSwap for atomic replacement.
    current: Arc<ArcSwap<Arc<dyn QueryObserver>>>,
}

impl ObserverSlot {
    /// Create a slot holding the default no-op observer.
    pub fn new() -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(Arc::clone(&NO_OP))),
        }
    }

    /// Atomically replace the active observer.
    ///
    /// The new observer is visible to any thread that reads the slot after
    /// this call returns. The call never blocks or retries. The slot keeps
    /// its own reference; the caller retains ownership of `observer` and
    /// may hold on to it to inspect state the observer accumulates.
    pub fn install(&self, observer: Arc<dyn QueryObserver>) {
        self.current.store(Arc::new(observer));
        debug!("observer installed");
    }

    /// Atomically replace the active observer with the no-op default.
    ///
    /// Equivalent to installing a fresh [`NoOpObserver`]. Controllers call
    /// this after an observed workload so no stale observer leaks into
    /// unrelated later reads.
    pub fn reset(&self) {
        self.current.store(Arc::new(Arc::clone(&NO_OP)));
        debug!("observer reset to no-op");
    }

    /// The observer active at the moment of the call.
    ///
    /// Lock-free and side-effect free. Never returns an absent value.
    pub fn current(&self) -> Arc<dyn QueryObserver> {
        self.current.load_full().as_ref().clone()
    }
}

impl Default for ObserverSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ObserverSlot {
    /// Clones share the same underlying slot: an install through one
    /// handle is visible through every other.
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
        }
    }
}

impl std::fmt::Debug for ObserverSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSlot").finish_non_exhaustive()
    }
}
