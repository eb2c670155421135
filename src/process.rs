//! Process-wide instrumented accessor.
//!
//! Generated or injected call sites usually cannot carry an accessor
//! handle, so this module provides one shared [`TappedEnv`] over the real
//! process environment, plus free functions mirroring the instance API.
//! Code that can take a handle should prefer constructing its own
//! [`TappedEnv`]; independent instances keep tests from sharing hidden
//! state.

use crate::core::TappedEnv;
use crate::error::Result;
use crate::observer::QueryObserver;
use crate::sources::ProcessEnv;
use std::sync::{Arc, LazyLock};

static PROCESS_TAP: LazyLock<TappedEnv<ProcessEnv>> = LazyLock::new(TappedEnv::process);

/// The process-wide instrumented accessor.
pub fn tap() -> &'static TappedEnv<ProcessEnv> {
    &PROCESS_TAP
}

/// Install an observer on the process-wide accessor.
///
/// Visible immediately to every thread performing instrumented reads.
pub fn install(observer: Arc<dyn QueryObserver>) {
    tap().install(observer);
}

/// Reset the process-wide accessor to the no-op observer.
pub fn reset() {
    tap().reset();
}

/// Instrumented read of an environment variable on behalf of `consumer`.
///
/// Drop-in substitute for a direct [`std::env::var`] call: the return
/// value is exactly what the direct lookup would produce, with unset
/// variables reported as `Ok(None)`.
///
/// # Errors
///
/// Returns [`TapError::EmptyKey`](crate::error::TapError::EmptyKey) if
/// `key` is empty.
pub fn env_var(key: &str, consumer: &str) -> Result<Option<String>> {
    tap().read(key, consumer)
}
