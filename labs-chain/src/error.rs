use thiserror::Error;

/// Errors reported by the sequence operations.
///
/// Every error is reported before the container is touched, so a rejected
/// call leaves the container exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An element index is not below the length, or an insertion position
    /// is beyond it.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A sub-range is reversed or reaches beyond the length.
    #[error("range {from}..{to} out of bounds for length {len}")]
    RangeOutOfBounds { from: usize, to: usize, len: usize },
    /// The operation can't be offered over a singly linked chain.
    #[error("{0} is not supported by a singly linked chain")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
