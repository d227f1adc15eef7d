use thiserror::Error;

/// Errors that can occur when operating on a [`DynamicArray`][crate::DynamicArray].
///
/// A failed operation never modifies the array, so every error can be handled by correcting
/// the input and retrying the call.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A size or capacity argument violated a precondition of the operation.
    #[error("invalid argument: {problem}")]
    InvalidArgument {
        /// A human-readable description of the problem.
        problem: String,
    },

    /// An access or insertion targeted a position outside the logical range of the array.
    ///
    /// Only the logical size matters here. Allocated but unused capacity is never addressable
    /// through the bounds-checked API.
    #[error("index {index} is out of range for an array of size {size}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,

        /// The logical size of the array at the time of the call.
        size: usize,
    },

    /// An element was requested to be removed from an array that has no elements.
    #[error("cannot remove an element from an empty array")]
    EmptyContainer,

    /// A [`Cursor`][crate::Cursor] was asked for its current element while it was not
    /// positioned on one, either before the first advance or after it was exhausted.
    #[error("cursor is not positioned on an element")]
    InvalidCursorState,
}

/// A specialized `Result` type for dynamic array operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
