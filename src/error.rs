use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by both host operations.
///
/// Every failure is a returned value; nothing in this crate aborts. The
/// display text of [`Error::ClockUnavailable`] is part of the host contract
/// and must not change, and [`Error::User`] messages pass through
/// [`timeit`](crate::timeit) byte-for-byte.
#[derive(Debug, Error)]
pub enum Error {
    /// The OS monotonic clock source could not be queried.
    #[error("clock_gettime failed.")]
    ClockUnavailable,
    /// An error reported by a wrapped host computation, carried as text.
    #[error("{0}")]
    User(String),
}

impl Error {
    /// Constructs the user error a wrapped computation fails with.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }
}
