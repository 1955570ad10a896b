//! Coat room error types.

use thiserror::Error;

/// Errors from coat room, notification and attendant operations.
#[derive(Debug, Error)]
pub enum CoatError {
    /// A required argument was absent.
    #[error("invalid argument: {argument} must be present")]
    InvalidArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// A subscribed handler refused the notification.
    #[error("handler failed: {reason}")]
    Handler {
        /// Description of the handler failure.
        reason: String,
    },
}

impl CoatError {
    /// Missing coat passed to storage.
    pub(crate) const fn missing_coat() -> Self {
        Self::InvalidArgument { argument: "coat" }
    }

    /// Missing storage reference in a notification payload.
    pub(crate) const fn missing_storage() -> Self {
        Self::InvalidArgument { argument: "storage" }
    }

    /// Returns true if this error reports an absent required argument.
    ///
    /// These are caller bugs: the operation was aborted before any state
    /// changed.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
