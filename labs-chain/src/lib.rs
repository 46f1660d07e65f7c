//! An ordered sequence container backed by a singly linked chain of nodes.
//!
//! [`ChainList`] is indexable, mutable and iterable, and supports bulk
//! set-like operations. Its operations are declared by two traits:
//! [`SequenceCore`] holds the structural operations, and [`SequenceExt`]
//! adds searching and membership tests on top of it, comparing elements by
//! value.
//!
//! ```
//! use labs_chain::{ChainList, SequenceCore, SequenceExt};
//!
//! let mut list = ChainList::from(["a", "b", "c"]);
//! list.insert(1, "x").unwrap();
//! assert_eq!(list.index_of(&"b"), Some(2));
//! assert!(list.get(4).is_err());
//! ```
//!
//! Iteration only goes forward. The bidirectional and segmented traversal
//! operations are part of the interface but always fail with
//! [`Error::Unsupported`].
mod chain;
mod error;
mod iter;
mod list;
mod traits;

pub use error::{Error, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::ChainList;
pub use traits::{SequenceCore, SequenceExt};
