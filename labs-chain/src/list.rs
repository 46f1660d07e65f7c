use std::fmt;

use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, IterMut};
use crate::traits::{SequenceCore, SequenceExt};

/// An ordered sequence backed by a singly linked chain of nodes.
///
/// Elements are accessed by index or by walking forward with
/// [`iter`](SequenceCore::iter). Searching and membership tests compare
/// elements by value through `PartialEq`.
///
/// Appending with [`add`](SequenceCore::add) walks to the tail each time, as
/// no tail pointer is kept. Bulk appends walk to the tail once.
pub struct ChainList<T> {
    chain: Chain<T>,
}

// a link is a single pointer thanks to the niche in Box, so the list is just
// the head and the length
#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(ChainList<u64>, [u8; 16]);

impl<T> ChainList<T> {
    /// An empty list.
    pub const fn new() -> Self {
        ChainList {
            chain: Chain::new(),
        }
    }

    /// A list holding exactly one element.
    pub fn one(item: T) -> Self {
        let mut list = Self::new();
        list.add(item);
        list
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.chain)
    }
}

impl<'a, T: 'a> SequenceCore<'a, T, Iter<'a, T>> for ChainList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.chain.len()
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.chain.check_element_index(index)?;
        self.chain
            .node_at(index)
            .map(|node| &node.item)
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.chain.check_element_index(index)?;
        let len = self.chain.len();
        self.chain
            .node_at_mut(index)
            .map(|node| &mut node.item)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, item))
    }

    fn add(&mut self, item: T) {
        self.chain.link_last(item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.chain.link_at(index, item)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.chain.unlink_at(index)
    }

    fn add_all(&mut self, items: impl IntoIterator<Item = T>) -> bool {
        let len = self.chain.len();
        // linking at the length can't be out of bounds
        matches!(self.chain.link_all_at(len, items), Ok(linked) if linked > 0)
    }

    fn insert_all(&mut self, index: usize, items: impl IntoIterator<Item = T>) -> Result<bool> {
        Ok(self.chain.link_all_at(index, items)? > 0)
    }

    fn remove_first_where(&mut self, matches: impl FnMut(&T) -> bool) -> Option<T> {
        self.chain.unlink_first_where(matches)
    }

    fn remove_where(&mut self, matches: impl FnMut(&T) -> bool) -> usize {
        self.chain.unlink_all_where(matches)
    }

    fn clear(&mut self) {
        self.chain.clear();
    }

    fn iter(&'a self) -> Iter<'a, T> {
        Iter::new(&self.chain)
    }

    fn sub_list(&'a self, from: usize, to: usize) -> Result<Self>
    where
        T: Clone,
    {
        if from > to || to > self.len() {
            return Err(Error::RangeOutOfBounds {
                from,
                to,
                len: self.len(),
            });
        }
        Ok(self.iter().skip(from).take(to - from).cloned().collect())
    }
}

impl<'a, T: PartialEq + 'a> SequenceExt<'a, T, Iter<'a, T>> for ChainList<T> {}

impl<T> Default for ChainList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ChainList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ChainList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ChainList<T> {}

impl<T> FromIterator<T> for ChainList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add_all(iter);
        list
    }
}

impl<T> Extend<T> for ChainList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T> From<Vec<T>> for ChainList<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for ChainList<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for ChainList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.chain)
    }
}

impl<'a, T> IntoIterator for &'a ChainList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ChainList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
