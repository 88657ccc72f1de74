use std::fmt;
use std::ptr::NonNull;

use super::{Link, LinkedSequence};
use crate::error::{Result, SequenceError};

/// A read-only position in a [`LinkedSequence`].
///
/// A cursor addresses either one element or the past-the-end position. It
/// is `Copy`: offsetting is done by copying a cursor and seeking, the way
/// the containers' benchmarks do. Navigation past either end fails with
/// [`OutOfRange`](`SequenceError::OutOfRange`) and leaves the cursor where
/// it was.
pub struct Cursor<'a, T> {
    sequence: &'a LinkedSequence<T>,
    node: NonNull<Link<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn front(sequence: &'a LinkedSequence<T>) -> Self {
        let node = sequence.first();
        Self { sequence, node }
    }

    pub(super) fn end(sequence: &'a LinkedSequence<T>) -> Self {
        let node = sequence.tail;
        Self { sequence, node }
    }

    pub(super) fn at(sequence: &'a LinkedSequence<T>, node: NonNull<Link<T>>) -> Self {
        Self { sequence, node }
    }

    /// The element the cursor addresses, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) at the past-the-end
    /// position. The reference outlives the cursor.
    pub fn current(&self) -> Result<&'a T> {
        self.sequence.slot_ref(self.node)
    }

    /// `true` at the past-the-end position.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.node == self.sequence.tail
    }

    /// One step toward the back. Fails at the past-the-end position.
    pub fn move_next(&mut self) -> Result<()> {
        self.node = self.sequence.step_next(self.node)?;
        Ok(())
    }

    /// One step toward the front. Fails at the first element (and at the
    /// past-the-end position of an empty sequence).
    pub fn move_prev(&mut self) -> Result<()> {
        self.node = self.sequence.step_prev(self.node)?;
        Ok(())
    }

    /// `distance` single steps toward the back, O(distance). Fails without
    /// moving when the walk would pass the past-the-end position.
    pub fn seek_forward(&mut self, distance: usize) -> Result<()> {
        self.node = self.sequence.walk_forward(self.node, distance)?;
        Ok(())
    }

    /// `distance` single steps toward the front, O(distance). Fails without
    /// moving when the walk would pass the first element.
    pub fn seek_backward(&mut self, distance: usize) -> Result<()> {
        self.node = self.sequence.walk_backward(self.node, distance)?;
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
    /// Two cursors are equal when they address the same position of the
    /// same sequence.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.sequence, other.sequence) && self.node == other.node
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current().ok())
            .finish()
    }
}

/// A mutating position in a [`LinkedSequence`].
///
/// Holds the sequence exclusively for its lifetime, which is what makes
/// O(1) positional insertion and removal safe: no other access can
/// invalidate the link the cursor stands on.
///
/// ### -> `Usage`
///
/// ```
/// use duoseq::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let mut sequence: LinkedSequence<i32> = [5, 10, 15].into_iter().collect();
///
///     let mut cursor = sequence.cursor_front_mut();
///     cursor.seek_forward(2)?;
///     assert_eq!(cursor.current()?, &15);
///     cursor.insert_before(7);
///     assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![5, 10, 7, 15]);
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct CursorMut<'a, T> {
    sequence: &'a mut LinkedSequence<T>,
    node: NonNull<Link<T>>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn front(sequence: &'a mut LinkedSequence<T>) -> Self {
        let node = sequence.first();
        Self { sequence, node }
    }

    pub(super) fn end(sequence: &'a mut LinkedSequence<T>) -> Self {
        let node = sequence.tail;
        Self { sequence, node }
    }

    /// The element the cursor addresses, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) at the past-the-end
    /// position.
    pub fn current(&self) -> Result<&T> {
        self.sequence.slot_ref(self.node)
    }

    /// Exclusive access to the element the cursor addresses, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) at the past-the-end
    /// position.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        self.sequence.slot_mut(self.node)
    }

    /// `true` at the past-the-end position.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.node == self.sequence.tail
    }

    /// One step toward the back. Fails at the past-the-end position.
    pub fn move_next(&mut self) -> Result<()> {
        self.node = self.sequence.step_next(self.node)?;
        Ok(())
    }

    /// One step toward the front. Fails at the first element (and at the
    /// past-the-end position of an empty sequence).
    pub fn move_prev(&mut self) -> Result<()> {
        self.node = self.sequence.step_prev(self.node)?;
        Ok(())
    }

    /// `distance` single steps toward the back, O(distance). Fails without
    /// moving when the walk would pass the past-the-end position.
    pub fn seek_forward(&mut self, distance: usize) -> Result<()> {
        self.node = self.sequence.walk_forward(self.node, distance)?;
        Ok(())
    }

    /// `distance` single steps toward the front, O(distance). Fails without
    /// moving when the walk would pass the first element.
    pub fn seek_backward(&mut self, distance: usize) -> Result<()> {
        self.node = self.sequence.walk_backward(self.node, distance)?;
        Ok(())
    }

    /// Splices `value` in immediately before the cursor, O(1). At the
    /// past-the-end position this appends. The cursor keeps addressing the
    /// link it stood on.
    pub fn insert_before(&mut self, value: T) {
        let node = self.node;
        // SAFETY: the cursor never stands on the head marker.
        unsafe { self.sequence.splice_before(node, value) };
    }

    /// Unsplices the element the cursor addresses and returns it, O(1).
    /// The cursor advances to the following position. Fails with
    /// [`OutOfRange`](`SequenceError::OutOfRange`) at the past-the-end
    /// position.
    pub fn remove_current(&mut self) -> Result<T> {
        if self.at_end() {
            return Err(SequenceError::OutOfRange);
        }
        // SAFETY: not at the end, so the cursor stands on an interior link.
        let next = unsafe { self.node.as_ref() }.next;
        let node = self.node;
        let value = unsafe { self.sequence.unsplice(node) };
        self.node = next;
        Ok(value)
    }

    /// A read-only view of this cursor's position. The conversion only
    /// goes this way; a read-only cursor never becomes a mutating one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::at(self.sequence, self.node)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("current", &self.current().ok())
            .finish()
    }
}
