use thiserror::Error;

/// Errors raised by the selection engines and the containers.
///
/// Every variant describes a caller mistake (an empty input, a rank or index
/// outside its bounds, reading from an empty container). None of them are
/// retried internally. Lookups where "not found" is an ordinary answer, like
/// [`Tree::search`](crate::structures::Tree::search), return a `bool` or an
/// `Option` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Selection was requested on a zero-length collection.
    #[error("cannot select from an empty collection")]
    EmptyInput,

    /// The requested rank is outside `1..=len`.
    #[error("rank {k} is out of range, expected 1..={len}")]
    InvalidRank { k: usize, len: usize },

    /// A container was accessed with an index outside its bounds.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// `pop`, `dequeue` or `peek` on an empty container.
    #[error("{container} is empty")]
    EmptyContainer { container: &'static str },
}

impl Error {
    pub(crate) fn invalid_rank(k: usize, len: usize) -> Self {
        Error::InvalidRank { k, len }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    pub(crate) fn empty(container: &'static str) -> Self {
        Error::EmptyContainer { container }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
