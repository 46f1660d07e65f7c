use std::convert::Infallible;

use crate::error::{Error, Result};

/// The core sequence interface: the structural operations a sequence
/// container implements directly.
///
/// Element indexes are checked before anything changes: an element index
/// must be below [`len`](SequenceCore::len), an insertion position may also
/// equal it. If you implement this, [`SequenceExt`] provides searching and
/// bulk membership on top of it.
pub trait SequenceCore<'a, T, I>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
{
    /// The number of elements.
    fn len(&self) -> usize;

    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Mutable access to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Replace the element at `index`, returning the element that was there.
    fn set(&mut self, index: usize, item: T) -> Result<T>;

    /// Append an element at the end.
    fn add(&mut self, item: T);

    /// Insert an element so it ends up at `index`, shifting the elements
    /// from `index` onwards one position back.
    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    /// Remove and return the element at `index`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Append all items, in their order. Returns whether anything was added.
    fn add_all(&mut self, items: impl IntoIterator<Item = T>) -> bool;

    /// Insert all items, in their order, the first one ending up at
    /// `index`. Returns whether anything was inserted.
    fn insert_all(&mut self, index: usize, items: impl IntoIterator<Item = T>) -> Result<bool>;

    /// Remove the first element for which the predicate holds.
    fn remove_first_where(&mut self, matches: impl FnMut(&T) -> bool) -> Option<T>;

    /// Remove every element for which the predicate holds. Returns the number
    /// of elements removed.
    fn remove_where(&mut self, matches: impl FnMut(&T) -> bool) -> usize;

    /// Remove all elements.
    fn clear(&mut self);

    /// Get the elements as a forward iterator
    fn iter(&'a self) -> I;

    /// An independent copy of the elements in `from..to`.
    ///
    /// This is not a view: changing the copy leaves this sequence alone and
    /// the other way around.
    fn sub_list(&'a self, from: usize, to: usize) -> Result<Self>
    where
        Self: Sized,
        T: Clone;

    /// A bidirectional cursor. Never available over a forward-only chain.
    fn list_iter(&self) -> Result<Infallible> {
        Err(Error::Unsupported("list_iter"))
    }

    /// A bidirectional cursor starting at `index`. Never available over a
    /// forward-only chain, whatever the index.
    fn list_iter_at(&self, _index: usize) -> Result<Infallible> {
        Err(Error::Unsupported("list_iter_at"))
    }

    /// Segmented traversal for parallel consumers. Never available over a
    /// forward-only chain.
    fn split_iter(&self) -> Result<Infallible> {
        Err(Error::Unsupported("split_iter"))
    }
}

/// Search and bulk membership, using structural equality of elements.
pub trait SequenceExt<'a, T, I>: SequenceCore<'a, T, I>
where
    T: PartialEq + 'a,
    I: Iterator<Item = &'a T>,
{
    /// The index of the first element equal to `item`.
    fn index_of(&'a self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    /// The index of the last element equal to `item`.
    fn last_index_of(&'a self, item: &T) -> Option<usize> {
        let mut found = None;
        for (index, candidate) in self.iter().enumerate() {
            if candidate == item {
                found = Some(index);
            }
        }
        found
    }

    fn contains(&'a self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Whether every element of `others` has an equal element in this
    /// sequence. Trivially true when `others` is empty.
    ///
    /// `others` is any finite sequence of references: a slice, a `Vec`, or
    /// another sequence.
    fn contains_all<'b>(&'a self, others: impl IntoIterator<Item = &'b T>) -> bool
    where
        T: 'b,
    {
        others.into_iter().all(|other| self.contains(other))
    }

    /// Remove the first element equal to `item`. Returns whether one was
    /// removed.
    fn remove_item(&mut self, item: &T) -> bool {
        self.remove_first_where(|candidate| candidate == item)
            .is_some()
    }

    /// Remove every element that has an equal element in `others`. Returns
    /// whether anything was removed.
    fn remove_all<'b>(&mut self, others: impl IntoIterator<Item = &'b T>) -> bool
    where
        T: 'b,
    {
        let others = others.into_iter().collect::<Vec<_>>();
        self.remove_where(|candidate| others.iter().any(|other| *other == candidate)) > 0
    }

    /// Keep only the elements that have an equal element in `others`.
    /// Returns whether anything was removed.
    fn retain_all<'b>(&mut self, others: impl IntoIterator<Item = &'b T>) -> bool
    where
        T: 'b,
    {
        let others = others.into_iter().collect::<Vec<_>>();
        self.remove_where(|candidate| !others.iter().any(|other| *other == candidate)) > 0
    }

    /// A snapshot of the elements, in order.
    fn to_array(&'a self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copy the elements, in order, into a caller supplied buffer.
    ///
    /// The buffer is cleared first. Its allocation is reused when it is
    /// large enough, and grown otherwise.
    fn copy_into(&'a self, buffer: &mut Vec<T>)
    where
        T: Clone,
    {
        buffer.clear();
        buffer.reserve(self.len());
        buffer.extend(self.iter().cloned());
    }
}
