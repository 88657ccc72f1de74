use std::fmt;
use std::ops::Range;
use std::slice;

use crate::error::{Result, SequenceError};
use crate::traits::Sequence;

mod cursor;

pub use cursor::{Cursor, CursorMut};

/// ### -> `ArraySequence<T>` - An ordered sequence over one contiguous growable buffer.
///
/// Elements live side by side in a single owned buffer; the occupied count
/// is the buffer length, the capacity is the buffer capacity. A freshly
/// constructed sequence starts with capacity
/// [`INITIAL_CAPACITY`](`Self::INITIAL_CAPACITY`) and occupied count 0.
///
/// ### -> `Growth Policy`
///
/// All sizing decisions flow through one policy layer:
/// - An insertion that finds the buffer full first grows it to **double**
///   the current capacity, then inserts. Growth allocates a fresh buffer
///   and moves the occupied elements across.
/// - [`reserve`](`Self::reserve`) resizes to an explicitly requested
///   capacity. A request that does not exceed the occupied count fails with
///   [`InvalidAllocationSize`](`SequenceError::InvalidAllocationSize`) and
///   changes nothing; the buffer must always be able to hold the occupied
///   elements plus at least one more. Shrinking above the occupied count is
///   allowed.
/// - Nothing else reallocates. `clear` and removals keep the capacity.
///
/// ### -> `Performance Characteristics`
///
/// - **Append / Pop last**: amortized O(1) / O(1) - the back is cheap.
/// - **Prepend / Pop first**: O(n) - the whole buffer shifts.
/// - **Insert / Remove at index**: O(n - index) - the suffix shifts.
/// - **Get, Cursor seek by d**: O(1) - index arithmetic.
/// - **Range removal**: O(n - start) - one closing shift.
///
/// This is the deliberate opposite of
/// [`LinkedSequence`](`crate::LinkedSequence`): offsetting a position is
/// free here and walking is free there, and neither container papers over
/// its expensive direction.
///
/// ### -> `Usage`
///
/// ```
/// use duoseq::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let mut sequence = ArraySequence::new();
///     assert!(sequence.capacity() >= 2);
///
///     sequence.append(5);
///     sequence.append(10);
///     sequence.append(15); // full buffer: capacity doubles to 4
///     assert_eq!(sequence.capacity(), 4);
///
///     let mut cursor = sequence.cursor_front_mut();
///     cursor.seek_forward(2)?; // O(1), unlike the linked walk
///     cursor.insert_before(7);
///     assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![5, 10, 7, 15]);
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct ArraySequence<T> {
    buffer: Vec<T>,
}

impl<T> ArraySequence<T> {
    /// The capacity every freshly constructed sequence starts with.
    pub const INITIAL_CAPACITY: usize = 2;

    /// Creates an empty sequence with capacity
    /// [`INITIAL_CAPACITY`](`Self::INITIAL_CAPACITY`).
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Creates an empty sequence with an explicitly requested capacity.
    /// A request of 0 fails with
    /// [`InvalidAllocationSize`](`SequenceError::InvalidAllocationSize`):
    /// even an empty buffer must have room for one element.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SequenceError::InvalidAllocationSize {
                requested: 0,
                occupied: 0,
            });
        }
        Ok(Self {
            buffer: Vec::with_capacity(capacity),
        })
    }

    /// The number of elements in the sequence. O(1).
    #[must_use = "Lengths must have a purpose!"]
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// `true` when the sequence holds no elements.
    #[must_use = "Emptiness checks must have a purpose!"]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// How many elements the buffer can hold before the next growth.
    #[must_use = "Capacities must have a purpose!"]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Read access to the element at `index`, `None` out of range. O(1).
    #[must_use = "Fetched elements must have a purpose!"]
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index)
    }

    /// Write access to the element at `index`, `None` out of range. O(1).
    #[must_use = "Fetched elements must have a purpose!"]
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buffer.get_mut(index)
    }

    /// Inserts `value` after the last element. Amortized O(1).
    pub fn append(&mut self, value: T) {
        if self.buffer.len() == self.buffer.capacity() {
            self.grow();
        }
        self.buffer.push(value);
    }

    /// Inserts `value` at the front, shifting everything right. O(n).
    pub fn prepend(&mut self, value: T) {
        self.insert_at(0, value);
    }

    /// Inserts `value` before `index`; `index == len` appends.
    /// O(n - index).
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.buffer.len() {
            return Err(SequenceError::OutOfRange);
        }
        self.insert_at(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the suffix
    /// left. O(n - index).
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.buffer.len() {
            return Err(SequenceError::OutOfRange);
        }
        Ok(self.remove_at(index))
    }

    /// Removes the elements in `[range.start, range.end)` with one closing
    /// shift.
    ///
    /// An empty range is a no-op. A non-empty range that is inverted or
    /// reaches past the end is
    /// [`OutOfRange`](`SequenceError::OutOfRange`) and removes nothing.
    pub fn remove_range(&mut self, range: Range<usize>) -> Result<()> {
        if range.start == range.end {
            return Ok(());
        }
        if range.start > range.end || range.end > self.buffer.len() {
            return Err(SequenceError::OutOfRange);
        }
        self.buffer.drain(range);
        Ok(())
    }

    /// Removes and returns the first element. O(n).
    pub fn pop_first(&mut self) -> Result<T> {
        if self.buffer.is_empty() {
            return Err(SequenceError::EmptyContainer);
        }
        Ok(self.buffer.remove(0))
    }

    /// Removes and returns the last element. O(1).
    pub fn pop_last(&mut self) -> Result<T> {
        self.buffer.pop().ok_or(SequenceError::EmptyContainer)
    }

    /// Removes every element. The capacity stays as it was.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Moves the elements into a fresh buffer of exactly `new_capacity`.
    ///
    /// Fails with
    /// [`InvalidAllocationSize`](`SequenceError::InvalidAllocationSize`)
    /// when `new_capacity` does not exceed the occupied count, leaving
    /// buffer, length, and capacity unchanged.
    ///
    /// ```
    /// use duoseq::prelude::*;
    ///
    /// let mut sequence: ArraySequence<i32> = (0..3).collect();
    /// assert_eq!(
    ///     sequence.reserve(3),
    ///     Err(SequenceError::InvalidAllocationSize { requested: 3, occupied: 3 }),
    /// );
    /// sequence.reserve(8).unwrap();
    /// assert_eq!(sequence.capacity(), 8);
    /// assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.buffer.len() {
            return Err(SequenceError::InvalidAllocationSize {
                requested: new_capacity,
                occupied: self.buffer.len(),
            });
        }
        self.reallocate(new_capacity);
        Ok(())
    }

    /// A read-only cursor at the first element, or at the past-the-end
    /// position when the sequence is empty.
    #[must_use = "Cursors must have a purpose!"]
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::front(self)
    }

    /// A read-only cursor at the past-the-end position.
    #[must_use = "Cursors must have a purpose!"]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::end(self)
    }

    /// A mutating cursor at the first element, or at the past-the-end
    /// position when the sequence is empty.
    #[must_use = "Cursors must have a purpose!"]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::front(self)
    }

    /// A mutating cursor at the past-the-end position.
    #[must_use = "Cursors must have a purpose!"]
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::end(self)
    }

    /// A front-to-back iterator over shared references.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buffer.iter()
    }

    /// A front-to-back iterator over exclusive references.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buffer.iter_mut()
    }

    /// Inserts without a bounds check. Caller keeps `index <= len`.
    fn insert_at(&mut self, index: usize, value: T) {
        if self.buffer.len() == self.buffer.capacity() {
            self.grow();
        }
        self.buffer.insert(index, value);
    }

    /// Removes without a bounds check. Caller keeps `index < len`.
    fn remove_at(&mut self, index: usize) -> T {
        self.buffer.remove(index)
    }

    /// Doubles the capacity. Never called with room to spare.
    fn grow(&mut self) {
        // Capacity is never zero (construction starts at INITIAL_CAPACITY
        // and reserve demands room for at least one element), so doubling
        // always makes progress.
        let next = self
            .buffer
            .capacity()
            .saturating_mul(2)
            .max(Self::INITIAL_CAPACITY);
        self.reallocate(next);
    }

    /// Moves the occupied elements into a fresh buffer of `capacity`.
    /// Caller keeps `capacity > len`.
    fn reallocate(&mut self, capacity: usize) {
        let mut next = Vec::with_capacity(capacity);
        next.append(&mut self.buffer);
        self.buffer = next;
    }
}

impl<T> Default for ArraySequence<T> {
    /// An empty sequence with capacity
    /// [`INITIAL_CAPACITY`](`Self::INITIAL_CAPACITY`), equivalent to
    /// [`new`](`Self::new`). This is what `std::mem::take` leaves behind
    /// when the buffer is moved out.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArraySequence<T> {
    /// A deep copy that keeps the source's capacity, like the source's own
    /// growth would have produced it.
    fn clone(&self) -> Self {
        let mut buffer = Vec::with_capacity(self.buffer.capacity());
        buffer.extend(self.buffer.iter().cloned());
        Self { buffer }
    }
}

impl<T: PartialEq> PartialEq for ArraySequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for ArraySequence<T> {}

impl<T: fmt::Debug> fmt::Debug for ArraySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buffer.iter()).finish()
    }
}

impl<T> Extend<T> for ArraySequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for ArraySequence<T> {
    /// Collects through the growth policy, so the resulting capacity is
    /// whatever the doubling ladder reaches.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T> IntoIterator for ArraySequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArraySequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArraySequence<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Sequence<T> for ArraySequence<T> {
    fn len(&self) -> usize {
        ArraySequence::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        ArraySequence::get(self, index)
    }

    fn append(&mut self, value: T) {
        ArraySequence::append(self, value);
    }

    fn prepend(&mut self, value: T) {
        ArraySequence::prepend(self, value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        ArraySequence::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        ArraySequence::remove(self, index)
    }

    fn remove_range(&mut self, range: Range<usize>) -> Result<()> {
        ArraySequence::remove_range(self, range)
    }

    fn pop_first(&mut self) -> Result<T> {
        ArraySequence::pop_first(self)
    }

    fn pop_last(&mut self) -> Result<T> {
        ArraySequence::pop_last(self)
    }

    fn clear(&mut self) {
        ArraySequence::clear(self);
    }
}

#[cfg(test)]
mod tests;
