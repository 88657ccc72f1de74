//! Two linear sequence containers behind one operation contract.
//!
//! [`LinkedSequence<T>`] keeps its elements in a doubly linked chain
//! bounded by two permanent markers: O(1) insertion and removal at a known
//! position, walking to get there. [`ArraySequence<T>`] keeps them in one
//! contiguous growable buffer: free positioning, shifting to insert or
//! remove. Both implement the [`Sequence<T>`](`traits::Sequence`) trait
//! and expose the same cursor surface, so code that only needs the
//! contract can swap one for the other and trade cost profiles.
//!
//! ```
//! use duoseq::prelude::*;
//!
//! let mut sequence = LinkedSequence::new();
//! sequence.append(10);
//! sequence.prepend(5);
//! assert_eq!(sequence.iter().copied().collect::<Vec<_>>(), vec![5, 10]);
//! ```

pub mod array;
pub mod error;
pub mod invariants;
pub mod linked;
pub mod prelude;
pub mod traits;

pub use array::ArraySequence;
pub use error::{Result, SequenceError};
pub use linked::LinkedSequence;
pub use traits::Sequence;
