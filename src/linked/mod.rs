use std::fmt;
use std::marker::PhantomData;
use std::ops::Range;
use std::ptr::NonNull;

use crate::error::{Result, SequenceError};
use crate::traits::Sequence;

mod cursor;
mod iter;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};

/// One link of the chain. The two boundary markers are the only links whose
/// `slot` is empty; every interior link holds exactly one value.
struct Link<T> {
    prev: NonNull<Link<T>>,
    next: NonNull<Link<T>>,
    slot: Option<T>,
}

impl<T> Link<T> {
    /// Allocates a marker link that is its own neighbour on both sides.
    ///
    /// The self-loop stands in for the null outward pointers a marker would
    /// otherwise need; the navigation guards check for the markers before
    /// following any pointer, so the loop is never walked.
    fn marker() -> NonNull<Link<T>> {
        let link = Box::new(Link {
            prev: NonNull::dangling(),
            next: NonNull::dangling(),
            slot: None,
        });
        // SAFETY: `Box::into_raw` never returns null.
        let ptr = unsafe { NonNull::new_unchecked(Box::into_raw(link)) };
        // SAFETY: the link was just allocated and is exclusively ours.
        unsafe {
            (*ptr.as_ptr()).prev = ptr;
            (*ptr.as_ptr()).next = ptr;
        }
        ptr
    }
}

/// ### -> `LinkedSequence<T>` - An ordered sequence over a doubly linked chain.
///
/// The chain is bounded by two permanent marker links, allocated when the
/// sequence is constructed and freed only when it is dropped. The head
/// marker sits before the first element, the tail marker after the last;
/// neither ever holds a value. An empty sequence is the two markers
/// pointing at each other.
///
/// ```text
/// [head] <-> [5] <-> [10] <-> [15] <-> [tail]
/// ```
///
/// ### -> `Invariants`
///
/// The chain maintains the following critical invariants (spelled out in
/// [`crate::invariants`]):
/// 1. **Symmetric wiring**: for every link L, `L.next.prev == L` and
///    `L.prev.next == L` across the span the markers delimit.
/// 2. **Permanent markers**: the markers are never unlinked and never hold
///    a value.
/// 3. **Accurate length**: `len` equals the number of interior links, and
///    every interior link holds exactly one value.
///
/// Violations of these invariants will result in panics, as they indicate
/// data corruption rather than user errors.
///
/// ### -> `Performance Characteristics`
///
/// - **Append / Prepend / Pop (either end)**: O(1) - splice next to a marker.
/// - **Insert / Remove at a cursor**: O(1) - splice at a known link.
/// - **Insert / Remove by index, Get**: O(index) - a walk from the front.
/// - **Cursor seek by d**: O(d) - repeated single steps, no shortcut.
/// - **Range removal of k**: O(start + k); the whole-sequence range is
///   special-cased to one O(n) bulk clear that resets the markers directly.
///
/// ### -> `Positions`
///
/// [`cursor_front`](`Self::cursor_front`) / [`cursor_end`](`Self::cursor_end`)
/// (and their `_mut` forms) hand out [`Cursor`] / [`CursorMut`] positions.
/// A cursor addresses one element or the past-the-end position; while any
/// cursor is live the borrow rules freeze the sequence, so a cursor can
/// never dangle.
///
/// ### -> `Ownership`
///
/// The sequence owns its elements. Moving the sequence moves the chain
/// without touching any link; `std::mem::take` transfers the chain out and
/// leaves a freshly constructed empty sequence behind. It is `Send`/`Sync`
/// exactly when `T` is.
///
/// ### -> `Usage`
///
/// ```
/// use duoseq::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let mut sequence = LinkedSequence::new();
///     sequence.append(5);
///     sequence.append(10);
///     sequence.prepend(1);
///     assert_eq!(sequence.len(), 3);
///
///     let mut cursor = sequence.cursor_front_mut();
///     cursor.move_next()?;
///     cursor.insert_before(7);
///     assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![1, 7, 5, 10]);
///
///     assert_eq!(sequence.pop_first()?, 1);
///     assert_eq!(sequence.pop_last()?, 10);
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct LinkedSequence<T> {
    head: NonNull<Link<T>>,
    tail: NonNull<Link<T>>,
    len: usize,
    marker: PhantomData<Box<Link<T>>>,
}

// SAFETY: the sequence owns its elements; the raw pointers never leak
// shared mutable state across threads on their own.
unsafe impl<T: Send> Send for LinkedSequence<T> {}
unsafe impl<T: Sync> Sync for LinkedSequence<T> {}

impl<T> LinkedSequence<T> {
    /// Creates an empty sequence: two markers pointing at each other.
    pub fn new() -> Self {
        let head = Link::marker();
        let tail = Link::marker();
        // SAFETY: both markers were just allocated and are exclusively ours.
        unsafe {
            (*head.as_ptr()).next = tail;
            (*tail.as_ptr()).prev = head;
        }
        Self {
            head,
            tail,
            len: 0,
            marker: PhantomData,
        }
    }

    /// The number of elements in the sequence. O(1).
    #[must_use = "Lengths must have a purpose!"]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the sequence holds no elements.
    #[must_use = "Emptiness checks must have a purpose!"]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read access to the element at `index`, `None` out of range. O(index).
    #[must_use = "Fetched elements must have a purpose!"]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let node = self.link_at(index);
        // SAFETY: `link_at` stays within the chain, and `index < len`
        // guarantees an interior link.
        unsafe { &*node.as_ptr() }.slot.as_ref()
    }

    /// Write access to the element at `index`, `None` out of range. O(index).
    #[must_use = "Fetched elements must have a purpose!"]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let node = self.link_at(index);
        // SAFETY: as in `get`, plus `&mut self` makes the access exclusive.
        unsafe { &mut *node.as_ptr() }.slot.as_mut()
    }

    /// Inserts `value` after the last element. O(1).
    pub fn append(&mut self, value: T) {
        let tail = self.tail;
        // SAFETY: the tail marker is a valid splice point for its lifetime.
        unsafe { self.splice_before(tail, value) };
    }

    /// Inserts `value` before the first element. O(1).
    pub fn prepend(&mut self, value: T) {
        // SAFETY: `head.next` is the first element or the tail marker, both
        // valid splice points.
        let first = unsafe { self.head.as_ref() }.next;
        unsafe { self.splice_before(first, value) };
    }

    /// Inserts `value` before `index`; `index == len` appends. O(index).
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(SequenceError::OutOfRange);
        }
        if index == self.len {
            self.append(value);
            return Ok(());
        }
        let node = self.link_at(index);
        // SAFETY: `index < len`, so `node` is an interior link.
        unsafe { self.splice_before(node, value) };
        Ok(())
    }

    /// Removes and returns the element at `index`. O(index).
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(SequenceError::OutOfRange);
        }
        let node = self.link_at(index);
        // SAFETY: `index < len`, so `node` is an interior link.
        Ok(unsafe { self.unsplice(node) })
    }

    /// Removes the elements in `[range.start, range.end)`.
    ///
    /// An empty range is a no-op. A non-empty range that is inverted or
    /// reaches past the end is
    /// [`OutOfRange`](`SequenceError::OutOfRange`) and removes nothing.
    /// Removing the whole sequence takes the bulk [`clear`](`Self::clear`)
    /// path instead of unsplicing link by link.
    pub fn remove_range(&mut self, range: Range<usize>) -> Result<()> {
        if range.start == range.end {
            return Ok(());
        }
        if range.start > range.end || range.end > self.len {
            return Err(SequenceError::OutOfRange);
        }
        if range.start == 0 && range.end == self.len {
            self.clear();
            return Ok(());
        }
        let mut node = self.link_at(range.start);
        for _ in 0..range.end - range.start {
            // SAFETY: the range was validated against `len`, so every link
            // visited here is interior.
            let next = unsafe { node.as_ref() }.next;
            drop(unsafe { self.unsplice(node) });
            node = next;
        }
        Ok(())
    }

    /// Removes and returns the first element. O(1).
    pub fn pop_first(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(SequenceError::EmptyContainer);
        }
        // SAFETY: the sequence is non-empty, so `head.next` is interior.
        let first = unsafe { self.head.as_ref() }.next;
        Ok(unsafe { self.unsplice(first) })
    }

    /// Removes and returns the last element. O(1).
    pub fn pop_last(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(SequenceError::EmptyContainer);
        }
        // SAFETY: the sequence is non-empty, so `tail.prev` is interior.
        let last = unsafe { self.tail.as_ref() }.prev;
        Ok(unsafe { self.unsplice(last) })
    }

    /// Removes every element in one pass and resets the markers to point at
    /// each other. O(n).
    pub fn clear(&mut self) {
        // SAFETY: the walk frees exactly the interior links, each allocated
        // via `Box::into_raw` and not yet re-boxed.
        let mut node = unsafe { self.head.as_ref() }.next;
        while node != self.tail {
            let next = unsafe { node.as_ref() }.next;
            drop(unsafe { Box::from_raw(node.as_ptr()) });
            node = next;
        }
        // SAFETY: the markers themselves are untouched by the walk.
        unsafe {
            (*self.head.as_ptr()).next = self.tail;
            (*self.tail.as_ptr()).prev = self.head;
        }
        self.len = 0;
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
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// A front-to-back iterator over exclusive references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Walks to the link at `index`; `index == len` lands on the tail
    /// marker. Caller keeps `index <= len`.
    fn link_at(&self, index: usize) -> NonNull<Link<T>> {
        // SAFETY: the walk follows `next` at most `len` times from the
        // first link, which keeps it within the chain.
        let mut node = unsafe { self.head.as_ref() }.next;
        for _ in 0..index {
            node = unsafe { node.as_ref() }.next;
        }
        node
    }

    /// Links a fresh interior link holding `value` before `at`, which must
    /// be an interior link or the tail marker.
    ///
    /// # Safety
    ///
    /// `at` must belong to this sequence and must not be the head marker.
    unsafe fn splice_before(&mut self, at: NonNull<Link<T>>, value: T) -> NonNull<Link<T>> {
        let prev = unsafe { at.as_ref() }.prev;
        let link = Box::new(Link {
            prev,
            next: at,
            slot: Some(value),
        });
        // SAFETY: `Box::into_raw` never returns null; the link is re-boxed
        // exactly once by `unsplice`, `clear`, or drop.
        let link = unsafe { NonNull::new_unchecked(Box::into_raw(link)) };
        // SAFETY: `prev` and `at` are adjacent links of this chain.
        unsafe {
            (*prev.as_ptr()).next = link;
            (*at.as_ptr()).prev = link;
        }
        self.len += 1;
        link
    }

    /// Unlinks `node`, frees it, and returns its value.
    ///
    /// # Safety
    ///
    /// `node` must be an interior link of this sequence.
    unsafe fn unsplice(&mut self, node: NonNull<Link<T>>) -> T {
        // SAFETY: interior links are allocated via `Box::into_raw` and
        // unlinked exactly once.
        let link = unsafe { Box::from_raw(node.as_ptr()) };
        // SAFETY: the neighbours of an interior link are valid links.
        unsafe {
            (*link.prev.as_ptr()).next = link.next;
            (*link.next.as_ptr()).prev = link.prev;
        }
        self.len -= 1;
        match link.slot {
            Some(value) => value,
            None => panic!("invariant violation: interior link without a value"),
        }
    }

    /// The first link, which is the tail marker when the sequence is empty.
    fn first(&self) -> NonNull<Link<T>> {
        // SAFETY: the head marker is valid for the sequence's lifetime.
        unsafe { self.head.as_ref() }.next
    }

    /// The last link, which is the head marker when the sequence is empty.
    fn last(&self) -> NonNull<Link<T>> {
        // SAFETY: the tail marker is valid for the sequence's lifetime.
        unsafe { self.tail.as_ref() }.prev
    }

    /// Shared access to the value of `node`, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) at the tail marker.
    fn slot_ref(&self, node: NonNull<Link<T>>) -> Result<&T> {
        // SAFETY: cursors and iterators only hold links of this chain.
        unsafe { &*node.as_ptr() }
            .slot
            .as_ref()
            .ok_or(SequenceError::OutOfRange)
    }

    /// Exclusive access to the value of `node`, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) at the tail marker.
    fn slot_mut(&mut self, node: NonNull<Link<T>>) -> Result<&mut T> {
        // SAFETY: as in `slot_ref`, plus `&mut self` makes it exclusive.
        unsafe { &mut *node.as_ptr() }
            .slot
            .as_mut()
            .ok_or(SequenceError::OutOfRange)
    }

    /// The link after `node`, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) when `node` is already
    /// the past-the-end position.
    fn step_next(&self, node: NonNull<Link<T>>) -> Result<NonNull<Link<T>>> {
        if node == self.tail {
            return Err(SequenceError::OutOfRange);
        }
        // SAFETY: `node` is interior, so its `next` stays within the chain.
        Ok(unsafe { node.as_ref() }.next)
    }

    /// The link before `node`, or
    /// [`OutOfRange`](`SequenceError::OutOfRange`) when `node` is the first
    /// element (or the past-the-end position of an empty sequence).
    fn step_prev(&self, node: NonNull<Link<T>>) -> Result<NonNull<Link<T>>> {
        // SAFETY: cursors never hold the head marker, so `prev` is defined.
        let prev = unsafe { node.as_ref() }.prev;
        if prev == self.head {
            return Err(SequenceError::OutOfRange);
        }
        Ok(prev)
    }

    /// `node` moved `distance` single steps forward. Fails without a
    /// partial result when the walk would pass the past-the-end position.
    fn walk_forward(&self, mut node: NonNull<Link<T>>, distance: usize) -> Result<NonNull<Link<T>>> {
        for _ in 0..distance {
            node = self.step_next(node)?;
        }
        Ok(node)
    }

    /// `node` moved `distance` single steps backward. Fails without a
    /// partial result when the walk would pass the first element.
    fn walk_backward(&self, mut node: NonNull<Link<T>>, distance: usize) -> Result<NonNull<Link<T>>> {
        for _ in 0..distance {
            node = self.step_prev(node)?;
        }
        Ok(node)
    }
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the markers were allocated in `new` and are freed nowhere
        // else; after `clear` nothing points at them.
        unsafe {
            drop(Box::from_raw(self.head.as_ptr()));
            drop(Box::from_raw(self.tail.as_ptr()));
        }
    }
}

impl<T> Default for LinkedSequence<T> {
    /// An empty sequence, equivalent to [`new`](`Self::new`). This is what
    /// `std::mem::take` leaves behind when the chain is moved out.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        let mut sequence = Self::new();
        sequence.extend(self.iter().cloned());
        sequence
    }
}

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Sequence<T> for LinkedSequence<T> {
    fn len(&self) -> usize {
        LinkedSequence::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        LinkedSequence::get(self, index)
    }

    fn append(&mut self, value: T) {
        LinkedSequence::append(self, value);
    }

    fn prepend(&mut self, value: T) {
        LinkedSequence::prepend(self, value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        LinkedSequence::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        LinkedSequence::remove(self, index)
    }

    fn remove_range(&mut self, range: Range<usize>) -> Result<()> {
        LinkedSequence::remove_range(self, range)
    }

    fn pop_first(&mut self) -> Result<T> {
        LinkedSequence::pop_first(self)
    }

    fn pop_last(&mut self) -> Result<T> {
        LinkedSequence::pop_last(self)
    }

    fn clear(&mut self) {
        LinkedSequence::clear(self);
    }
}

#[cfg(test)]
mod tests;
