use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{Link, LinkedSequence};

/// A front-to-back iterator over shared references into a
/// [`LinkedSequence`]. Double-ended and exact-size.
pub struct Iter<'a, T> {
    front: NonNull<Link<T>>,
    back: NonNull<Link<T>>,
    remaining: usize,
    marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(sequence: &'a LinkedSequence<T>) -> Self {
        Self {
            front: sequence.first(),
            back: sequence.last(),
            remaining: sequence.len(),
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // SAFETY: `remaining > 0` means `front` is an interior link of the
        // borrowed sequence.
        let link = unsafe { &*self.front.as_ptr() };
        self.front = link.next;
        match link.slot.as_ref() {
            Some(value) => Some(value),
            None => panic!("invariant violation: interior link without a value"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // SAFETY: `remaining > 0` means `back` is an interior link of the
        // borrowed sequence.
        let link = unsafe { &*self.back.as_ptr() };
        self.back = link.prev;
        match link.slot.as_ref() {
            Some(value) => Some(value),
            None => panic!("invariant violation: interior link without a value"),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

/// A front-to-back iterator over exclusive references into a
/// [`LinkedSequence`]. Double-ended and exact-size.
pub struct IterMut<'a, T> {
    front: NonNull<Link<T>>,
    back: NonNull<Link<T>>,
    remaining: usize,
    marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(sequence: &'a mut LinkedSequence<T>) -> Self {
        Self {
            front: sequence.first(),
            back: sequence.last(),
            remaining: sequence.len(),
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // SAFETY: each interior link is yielded at most once, so the
        // exclusive references handed out never alias.
        let link = unsafe { &mut *self.front.as_ptr() };
        self.front = link.next;
        match link.slot.as_mut() {
            Some(value) => Some(value),
            None => panic!("invariant violation: interior link without a value"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // SAFETY: as in `next`; the two ends never overlap while
        // `remaining > 0`.
        let link = unsafe { &mut *self.back.as_ptr() };
        self.back = link.prev;
        match link.slot.as_mut() {
            Some(value) => Some(value),
            None => panic!("invariant violation: interior link without a value"),
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over a [`LinkedSequence`]. Pops from the front (or
/// the back, iterating in reverse); whatever is left when the iterator is
/// dropped is freed by the sequence's own drop.
pub struct IntoIter<T> {
    sequence: LinkedSequence<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(sequence: LinkedSequence<T>) -> Self {
        Self { sequence }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.sequence.pop_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.sequence.pop_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
