//! One-stop imports for the common surface of the crate.
//!
//! ```
//! use duoseq::prelude::*;
//!
//! let mut sequence = LinkedSequence::new();
//! sequence.append(1);
//! assert_eq!(sequence.len(), 1);
//! ```
//!
//! The cursor types are not re-exported here because the two containers
//! deliberately use the same names for them; reach them as
//! [`linked::Cursor`](`crate::linked::Cursor`) /
//! [`array::Cursor`](`crate::array::Cursor`) (and their `Mut` forms) when
//! a type annotation is needed.

pub use {
    crate::array::ArraySequence,
    crate::error::{Result, SequenceError},
    crate::linked::LinkedSequence,
    crate::traits::Sequence,
};
