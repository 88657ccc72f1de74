use std::fmt;

use super::ArraySequence;
use crate::error::{Result, SequenceError};

/// A read-only position in an [`ArraySequence`]: a borrow plus an offset in
/// `[0, len]`, where `len` is the past-the-end position.
///
/// The navigation surface matches the linked cursor with one deliberate
/// difference: [`seek_forward`](`Self::seek_forward`) and
/// [`seek_backward`](`Self::seek_backward`) are O(1) index arithmetic
/// instead of a walk. Navigation past either end fails with
/// [`OutOfRange`](`SequenceError::OutOfRange`) and leaves the cursor where
/// it was.
pub struct Cursor<'a, T> {
    sequence: &'a ArraySequence<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn front(sequence: &'a ArraySequence<T>) -> Self {
        Self { sequence, index: 0 }
    }

    pub(super) fn end(sequence: &'a ArraySequence<T>) -> Self {
        let index = sequence.len();
        Self { sequence, index }
    }

    pub(super) fn at(sequence: &'a ArraySequence<T>, index: usize) -> Self {
        Self { sequence, index }
    }

    /// The element the cursor addresses, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) at the past-the-end
    /// position. The reference outlives the cursor.
    pub fn current(&self) -> Result<&'a T> {
        self.sequence.get(self.index).ok_or(SequenceError::OutOfRange)
    }

    /// `true` at the past-the-end position.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.index == self.sequence.len()
    }

    /// One step toward the back. Fails at the past-the-end position.
    pub fn move_next(&mut self) -> Result<()> {
        if self.index >= self.sequence.len() {
            return Err(SequenceError::OutOfRange);
        }
        self.index += 1;
        Ok(())
    }

    /// One step toward the front. Fails at the first element (and at the
    /// past-the-end position of an empty sequence).
    pub fn move_prev(&mut self) -> Result<()> {
        if self.index == 0 {
            return Err(SequenceError::OutOfRange);
        }
        self.index -= 1;
        Ok(())
    }

    /// `distance` positions toward the back in O(1). Fails without moving
    /// when the target would pass the past-the-end position.
    pub fn seek_forward(&mut self, distance: usize) -> Result<()> {
        let target = self
            .index
            .checked_add(distance)
            .filter(|&target| target <= self.sequence.len())
            .ok_or(SequenceError::OutOfRange)?;
        self.index = target;
        Ok(())
    }

    /// `distance` positions toward the front in O(1). Fails without moving
    /// when the target would pass the first element.
    pub fn seek_backward(&mut self, distance: usize) -> Result<()> {
        if distance > self.index {
            return Err(SequenceError::OutOfRange);
        }
        self.index -= distance;
        Ok(())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    /// Two cursors are equal when they address the same offset of the same
    /// sequence.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.sequence, other.sequence) && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("current", &self.current().ok())
            .finish()
    }
}

/// A mutating position in an [`ArraySequence`].
///
/// Structural mutation through the cursor shifts the suffix, and the
/// cursor keeps its offset: after
/// [`insert_before`](`Self::insert_before`) it addresses the inserted
/// value, after [`remove_current`](`Self::remove_current`) the element
/// that slid into the gap (or the past-the-end position).
///
/// ### -> `Usage`
///
/// ```
/// use duoseq::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let mut sequence: ArraySequence<i32> = [5, 10, 15].into_iter().collect();
///
///     let mut cursor = sequence.cursor_front_mut();
///     cursor.seek_forward(1)?;
///     assert_eq!(cursor.remove_current()?, 10);
///     assert_eq!(cursor.current()?, &15); // 15 slid into the gap
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct CursorMut<'a, T> {
    sequence: &'a mut ArraySequence<T>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn front(sequence: &'a mut ArraySequence<T>) -> Self {
        Self { sequence, index: 0 }
    }

    pub(super) fn end(sequence: &'a mut ArraySequence<T>) -> Self {
        let index = sequence.len();
        Self { sequence, index }
    }

    /// The element the cursor addresses, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) at the past-the-end
    /// position.
    pub fn current(&self) -> Result<&T> {
        self.sequence.get(self.index).ok_or(SequenceError::OutOfRange)
    }

    /// Exclusive access to the element the cursor addresses, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) at the past-the-end
    /// position.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        self.sequence
            .get_mut(self.index)
            .ok_or(SequenceError::OutOfRange)
    }

    /// `true` at the past-the-end position.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.index == self.sequence.len()
    }

    /// One step toward the back. Fails at the past-the-end position.
    pub fn move_next(&mut self) -> Result<()> {
        if self.index >= self.sequence.len() {
            return Err(SequenceError::OutOfRange);
        }
        self.index += 1;
        Ok(())
    }

    /// One step toward the front. Fails at the first element (and at the
    /// past-the-end position of an empty sequence).
    pub fn move_prev(&mut self) -> Result<()> {
        if self.index == 0 {
            return Err(SequenceError::OutOfRange);
        }
        self.index -= 1;
        Ok(())
    }

    /// `distance` positions toward the back in O(1). Fails without moving
    /// when the target would pass the past-the-end position.
    pub fn seek_forward(&mut self, distance: usize) -> Result<()> {
        let target = self
            .index
            .checked_add(distance)
            .filter(|&target| target <= self.sequence.len())
            .ok_or(SequenceError::OutOfRange)?;
        self.index = target;
        Ok(())
    }

    /// `distance` positions toward the front in O(1). Fails without moving
    /// when the target would pass the first element.
    pub fn seek_backward(&mut self, distance: usize) -> Result<()> {
        if distance > self.index {
            return Err(SequenceError::OutOfRange);
        }
        self.index -= distance;
        Ok(())
    }

    /// Inserts `value` at the cursor's offset, shifting the suffix right.
    /// At the past-the-end position this appends. The cursor keeps its
    /// offset and therefore addresses the inserted value.
    pub fn insert_before(&mut self, value: T) {
        // The cursor's offset never exceeds the length, so no bounds check
        // is needed here.
        self.sequence.insert_at(self.index, value);
    }

    /// Removes and returns the element at the cursor's offset, shifting
    /// the suffix left. The cursor keeps its offset and therefore
    /// addresses whatever slid into the gap, or the past-the-end position.
    /// Fails with [`OutOfRange`](`SequenceError::OutOfRange`) at the
    /// past-the-end position.
    pub fn remove_current(&mut self) -> Result<T> {
        if self.index >= self.sequence.len() {
            return Err(SequenceError::OutOfRange);
        }
        Ok(self.sequence.remove_at(self.index))
    }

    /// A read-only view of this cursor's position. The conversion only
    /// goes this way; a read-only cursor never becomes a mutating one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::at(self.sequence, self.index)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("current", &self.current().ok())
            .finish()
    }
}
