//! In-memory value source.

use super::ValueSource;
use std::collections::HashMap;

/// In-memory value source backed by a `HashMap`.
///
/// Useful for tests and for embedding the interception mechanism over a
/// value set that is not the real process environment.
///
/// # Examples
///
/// ```rust
/// use envtap::sources::{MapSource, ValueSource};
///
/// let source = MapSource::from_iter([("user.home", "/home/demo")]);
/// assert_eq!(source.get("user.home").as_deref(), Some("/home/demo"));
/// assert_eq!(source.get("user.shell"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ValueSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn name(&self) -> String {
        format!("map[{}]", self.values.len())
    }
}
