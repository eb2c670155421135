//! Process environment value source.

use super::ValueSource;
use std::env;

/// Value source backed by the real process environment.
///
/// Lookups go through [`std::env::var`]. A variable that is unset, or set
/// to a value that is not valid Unicode, reads as absent.
///
/// # Examples
///
/// ```rust
/// use envtap::sources::{ProcessEnv, ValueSource};
///
/// // PATH is set in any reasonable environment.
/// assert!(ProcessEnv.get("PATH").is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ValueSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn name(&self) -> String {
        "process-env".to_string()
    }
}
