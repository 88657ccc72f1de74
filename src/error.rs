use thiserror::Error;

/// ### -> `SequenceError` - The failure taxonomy shared by both containers.
///
/// Every fallible operation in this crate fails with one of exactly three
/// conditions. The containers follow a consistent error handling philosophy:
///
/// - **User Errors** (everything below): Return `Result::Err` and leave the
///   container untouched. No partial mutation, no clamping, no silent
///   correction of arguments.
/// - **Invariant Violations** (e.g. an interior link without a value): Panic
///   immediately with diagnostic information, as these indicate data
///   corruption rather than recoverable errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Taking an element (`pop_first` / `pop_last`) from an empty sequence.
    #[error("sequence is empty")]
    EmptyContainer,

    /// A position or index outside the legal range: dereferencing or moving a
    /// cursor past its bounds, removing at the past-the-end position, an
    /// index beyond the occupied range, or a removal range that is inverted
    /// or extends past the end.
    #[error("position out of range for the sequence")]
    OutOfRange,

    /// An explicit capacity request that does not exceed the occupied count.
    /// The buffer must always be able to hold the occupied elements plus at
    /// least one more.
    #[error("requested capacity {requested} does not exceed the occupied count {occupied}")]
    InvalidAllocationSize { requested: usize, occupied: usize },
}

pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
