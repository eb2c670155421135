//! # envtap
//!
//! Lock-free interception of environment lookups with a hot-swappable observer.
//!
//! ## Overview
//!
//! `envtap` is a minimal instrumentation interception point: external
//! tooling can observe which environment/configuration keys a workload
//! reads, and on behalf of which consumer, without the reading code
//! knowing an observer exists. It provides exactly two pieces:
//!
//! - [`ObserverSlot`](core::ObserverSlot): holds the one active observer,
//!   with atomic install/read/reset backed by `arc-swap`
//! - [`TappedEnv`](core::TappedEnv): the instrumented accessor that
//!   notifies the active observer, then performs the real lookup and
//!   returns its result unmodified
//!
//! ## Quick Start
//!
//! ```rust
//! use envtap::prelude::*;
//! use std::sync::Arc;
//!
//! # fn example() -> envtap::error::Result<()> {
//! let tap = TappedEnv::process();
//! let spy = Arc::new(RecordingObserver::new());
//!
//! // Scope observation to a window of execution.
//! tap.install(spy.clone());
//! let path = tap.read("PATH", "startup")?;
//! tap.reset();
//!
//! // The read returned the real value; the spy saw who asked for what.
//! assert_eq!(path, std::env::var("PATH").ok());
//! assert_eq!(spy.events(), vec![QueryEvent::new("PATH", "startup")]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Guarantees
//!
//! - **Lock-free**: install, reset, and observer reads never block, under
//!   any number of concurrent callers
//! - **Never absent**: the slot always holds a valid observer, defaulting
//!   to a no-op, so call sites never check for a listener
//! - **Transparent**: a read returns exactly what the unwrapped lookup
//!   would, regardless of which observer is installed; observer panics are
//!   isolated and cannot corrupt the read
//! - **One observer**: this is not an event bus; exactly one observer is
//!   active per slot at any instant, and installing replaces the previous
//!   one
//!
//! A race between an install/reset and an in-flight read may observe
//! either the old or the new observer; callers needing strict before/after
//! semantics must synchronize reconfiguration with the workload they
//! observe.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod observer;
pub mod process;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{ObserverSlot, TappedEnv};
    pub use crate::error::{Result, TapError};
    pub use crate::observer::{
        FnObserver, NoOpObserver, QueryEvent, QueryObserver, RecordingObserver,
    };
    pub use crate::sources::{MapSource, ProcessEnv, ValueSource};
}
