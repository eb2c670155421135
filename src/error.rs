//! Error types for envtap.

/// Result type alias for envtap operations.
pub type Result<T> = std::result::Result<T, TapError>;

/// Errors that can occur when performing an instrumented read.
///
/// The taxonomy is deliberately small. An absent value is not an error:
/// [`TappedEnv::read`](crate::core::TappedEnv::read) reports it as
/// `Ok(None)`, exactly as the underlying lookup would. Observer failures
/// during notification are isolated and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum TapError {
    /// An empty key was passed to an instrumented read.
    ///
    /// The resource model requires a key, so this is surfaced immediately
    /// to the caller rather than silently treated as an absent value.
    #[error("invalid argument: lookup key must be non-empty")]
    EmptyKey,
}
