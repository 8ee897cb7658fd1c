//! Loading state for one asynchronous fetch.

/// Tri-state wrapper around a fetched value: a request is pending, failed
/// with a user-facing message, or resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    /// Request not yet resolved
    Loading,
    /// Request failed; the message is user-facing
    Failed(String),
    /// Request resolved
    Ready(T),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The resolved value, if any
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Loading
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Remote<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(error) => Remote::Failed(error.to_string()),
        }
    }
}
