use std::ops::Range;

use crate::error::Result;

/// ### -> `Sequence<T> Trait`.
///
/// The value-level operation contract shared by both containers,
/// [`LinkedSequence<T>`](`crate::LinkedSequence`) and
/// [`ArraySequence<T>`](`crate::ArraySequence`). Code written against this
/// trait runs unchanged on either container; only the cost profile differs.
///
/// Position-level operations (O(1) insertion and removal at a known place,
/// navigation, seeking) live on the per-container cursor types instead,
/// because each container represents a position differently.
///
/// ### -> `Complexity`
///
/// | Operation | Linked | Array |
/// |---|---|---|
/// | `append` | O(1) | amortized O(1) |
/// | `prepend` | O(1) | O(n) shift |
/// | `insert` at index | O(index) walk | O(n - index) shift |
/// | `remove` at index | O(index) walk | O(n - index) shift |
/// | `remove_range` of k | O(start + k) | O(n - start) |
/// | `pop_first` / `pop_last` | O(1) | O(n) / O(1) |
/// | `len` / `is_empty` | O(1) | O(1) |
///
/// The asymmetry is deliberate and preserved: neither container caches or
/// amortizes its way into the other's profile.
///
/// ### -> `Failure contract`
///
/// Fallible operations fail with a
/// [`SequenceError`](`crate::SequenceError`) and leave the sequence exactly
/// as it was. Infallible operations (`append`, `prepend`, `clear`) never
/// allocate conditionally on user input and cannot be misused.
///
/// ### -> `Usage`
///
/// ```
/// use duoseq::prelude::*;
/// use anyhow::Result;
///
/// fn drive<S: Sequence<i32>>() -> Result<()> {
///     let mut sequence = S::new();
///     sequence.append(10);
///     sequence.prepend(5);
///     sequence.insert(2, 15)?;
///     assert_eq!(sequence.len(), 3);
///     assert_eq!(sequence.pop_first()?, 5);
///     assert_eq!(sequence.pop_last()?, 15);
///     Ok(())
/// }
///
/// drive::<LinkedSequence<i32>>().unwrap();
/// drive::<ArraySequence<i32>>().unwrap();
/// ```
pub trait Sequence<T>: Default {
    /// Creates an empty sequence.
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::default()
    }

    /// The occupied count. O(1) for both containers.
    #[must_use = "Lengths must have a purpose!"]
    fn len(&self) -> usize;

    /// `true` when the sequence holds no elements.
    #[must_use = "Emptiness checks must have a purpose!"]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read access to the element at `index`, `None` out of range.
    #[must_use = "Fetched elements must have a purpose!"]
    fn get(&self, index: usize) -> Option<&T>;

    /// Inserts `value` before the past-the-end position.
    fn append(&mut self, value: T);

    /// Inserts `value` at the front.
    fn prepend(&mut self, value: T);

    /// Inserts `value` before `index`. `index == len` appends; anything
    /// beyond that is [`OutOfRange`](`crate::SequenceError::OutOfRange`).
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes and returns the element at `index`; `index >= len` is
    /// [`OutOfRange`](`crate::SequenceError::OutOfRange`).
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Removes the elements in `[range.start, range.end)`.
    ///
    /// An empty range is an unconditional no-op. A non-empty range that is
    /// inverted or reaches past the end is
    /// [`OutOfRange`](`crate::SequenceError::OutOfRange`) and removes
    /// nothing.
    fn remove_range(&mut self, range: Range<usize>) -> Result<()>;

    /// Removes and returns the first element, or
    /// [`EmptyContainer`](`crate::SequenceError::EmptyContainer`).
    fn pop_first(&mut self) -> Result<T>;

    /// Removes and returns the last element, or
    /// [`EmptyContainer`](`crate::SequenceError::EmptyContainer`).
    fn pop_last(&mut self) -> Result<T>;

    /// Removes every element. The array container keeps its capacity; the
    /// linked container resets its markers to point at each other.
    fn clear(&mut self);
}
