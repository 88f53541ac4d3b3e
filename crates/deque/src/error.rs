use thiserror::Error;

/// Errors produced by [`Deque`](crate::Deque) mutators.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// The index cannot participate in boundary bookkeeping. The two
    /// extremes of the `i64` range are rejected by
    /// [`set`](crate::Deque::set) because a bound one past them is not
    /// representable.
    #[error("Index must be a usable integer.")]
    InvalidIndex,
}
