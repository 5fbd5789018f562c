use thiserror::Error;

/// Failures a lookup stage reports instead of a value.
///
/// The `Display` text is what the user sees when the run is aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Invalid ID")]
    InvalidId,
    #[error("User not found")]
    UserNotFound,
    #[error("Rate limit")]
    RateLimited,
    /// Also covers every network-level failure of the resolver and the
    /// profile fetcher; the underlying cause is only logged.
    #[error("Not found")]
    NotFound,
    #[error("Malformed response")]
    MalformedResponse,
}
