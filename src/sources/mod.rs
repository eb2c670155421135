//! Value source implementations.
//!
//! A [`ValueSource`] is the real lookup an instrumented accessor wraps.
//! The interception mechanism never alters what a source returns; it only
//! notifies the active observer before asking.

mod env;
mod map;

pub use env::ProcessEnv;
pub use map::MapSource;

/// A keyed lookup that an accessor can wrap.
pub trait ValueSource: Send + Sync {
    /// Look up `key`, returning `None` when the value is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Human-readable name for this source, used in diagnostics.
    fn name(&self) -> String;
}
