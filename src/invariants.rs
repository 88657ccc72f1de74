#![allow(dead_code)]
//! This module is used to document the invariants that are meant to be
//! preserved in this crate. The unsafe pointer code in
//! [`linked`](`crate::linked`) relies on every one of them.

/// A [`LinkedSequence<T>`](`crate::LinkedSequence<T>`) owns exactly two
/// marker links, allocated on construction and freed only on drop. The
/// markers never hold a value, are never unlinked, and are never
/// addressable by a cursor (head marker) or dereferenceable (tail marker).
pub const INVARIANT_1: () = ();

/// For every link L between the markers, `L.next.prev == L` and
/// `L.prev.next == L`. A marker's outward pointer (the head marker's
/// `prev`, the tail marker's `next`) points at the marker itself and is
/// never followed.
pub const INVARIANT_2: () = ();

/// The `len` of a [`LinkedSequence<T>`](`crate::LinkedSequence<T>`) equals
/// the number of interior links; it is updated by every splice and
/// unsplice. Every interior link holds exactly one value: finding an empty
/// interior slot is a breach and panics.
pub const INVARIANT_3: () = ();

/// Every interior link is allocated through `Box::into_raw` on insertion
/// and re-boxed exactly once, by an unsplice, a bulk clear, or the
/// container's drop.
pub const INVARIANT_4: () = ();

/// A cursor's link always belongs to the sequence the cursor borrows and
/// lies in `[first element ..= tail marker]`. The borrow rules make
/// structural mutation impossible while any cursor is live, so a cursor
/// can never dangle.
pub const INVARIANT_5: () = ();

/// An [`ArraySequence<T>`](`crate::ArraySequence<T>`) keeps its occupied
/// count at or below its capacity, and all sizing decisions flow through
/// its growth policy (initial capacity 2, doubling growth, strict explicit
/// resize).
pub const INVARIANT_6: () = ();
