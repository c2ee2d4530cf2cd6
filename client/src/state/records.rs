//! Request-state wrapper for fetched records.
//!
//! DESIGN
//! ======
//! Every screen used to carry its own ad-hoc `loading`/`error` flag pair;
//! `Remote<T>` folds that duplication into one type. A page that fires two
//! independent fetches holds two `Remote` cells and each gates its own
//! loading indicator.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

/// Lifecycle of a single remote read.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Remote<T> {
    /// No request issued yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Response arrived.
    Ready(T),
    /// Request failed; the message is shown inline.
    Failed(String),
}

impl<T> Remote<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fold a finished request into `Ready`/`Failed`.
    #[must_use]
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(message) => Self::Failed(message),
        }
    }
}
