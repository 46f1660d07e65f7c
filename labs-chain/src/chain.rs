// The node chain is the storage underneath ChainList. It only knows about
// positions and links; equality based operations are built on top of the
// predicate based unlinking here.

use crate::error::{Error, Result};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) next: Link<T>,
}

/// A forward linked chain of owned nodes.
///
/// Only the head is kept, no tail pointer, so appending a single item walks
/// the whole chain. `len` always equals the number of nodes reachable from
/// `head`.
#[derive(Debug)]
pub(crate) struct Chain<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Chain<T> {
    pub(crate) const fn new() -> Self {
        Chain { head: None, len: 0 }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    #[inline]
    pub(crate) fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }

    /// Check that `index` addresses an existing element.
    pub(crate) fn check_element_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Check that `index` is a position an element can be inserted at.
    pub(crate) fn check_position_index(&self, index: usize) -> Result<()> {
        if index <= self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    pub(crate) fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref()?;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    pub(crate) fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    // The link that points at position `index`: the head link for 0,
    // otherwise the `next` link of the node before it. For `index == len`
    // this is the terminal link after the tail.
    fn link_mut(&mut self, index: usize) -> Result<&mut Link<T>> {
        let len = self.len;
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return Err(Error::IndexOutOfBounds { index, len }),
            }
        }
        Ok(link)
    }

    /// Append an item after the current tail.
    pub(crate) fn link_last(&mut self, item: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { item, next: None }));
        self.len += 1;
    }

    /// Insert an item so that it ends up at position `index`.
    pub(crate) fn link_at(&mut self, index: usize, item: T) -> Result<()> {
        self.check_position_index(index)?;
        let link = self.link_mut(index)?;
        let next = link.take();
        *link = Some(Box::new(Node { item, next }));
        self.len += 1;
        Ok(())
    }

    /// Insert all items in order, the first of them ending up at position
    /// `index`. The chain is walked once to find the position, after which
    /// each item costs a constant amount of work.
    ///
    /// Returns the number of items linked in.
    pub(crate) fn link_all_at(
        &mut self,
        index: usize,
        items: impl IntoIterator<Item = T>,
    ) -> Result<usize> {
        self.check_position_index(index)?;
        let mut link = self.link_mut(index)?;
        let mut linked = 0;
        for item in items {
            let next = link.take();
            let node = link.insert(Box::new(Node { item, next }));
            link = &mut node.next;
            linked += 1;
        }
        self.len += linked;
        Ok(linked)
    }

    // Unlink the node `link` points at and hand back its item. The caller is
    // responsible for the length bookkeeping.
    fn unlink(link: &mut Link<T>) -> Option<T> {
        let node = link.take()?;
        let Node { item, next } = *node;
        *link = next;
        Some(item)
    }

    /// Unlink the element at `index`.
    pub(crate) fn unlink_at(&mut self, index: usize) -> Result<T> {
        self.check_element_index(index)?;
        let len = self.len;
        let link = self.link_mut(index)?;
        let item = Self::unlink(link).ok_or(Error::IndexOutOfBounds { index, len })?;
        self.len -= 1;
        Ok(item)
    }

    pub(crate) fn unlink_first(&mut self) -> Option<T> {
        let item = Self::unlink(&mut self.head)?;
        self.len -= 1;
        Some(item)
    }

    /// Unlink the first element matching the predicate, if any.
    pub(crate) fn unlink_first_where(&mut self, mut matches: impl FnMut(&T) -> bool) -> Option<T> {
        let mut link = &mut self.head;
        loop {
            let matched = match link {
                Some(node) => matches(&node.item),
                None => return None,
            };
            if matched {
                let item = Self::unlink(link);
                self.len -= 1;
                return item;
            }
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
    }

    /// Unlink every element matching the predicate in a single pass.
    ///
    /// Returns the number of elements unlinked.
    pub(crate) fn unlink_all_where(&mut self, mut matches: impl FnMut(&T) -> bool) -> usize {
        let mut unlinked = 0;
        let mut link = &mut self.head;
        loop {
            let matched = match link {
                Some(node) => matches(&node.item),
                None => break,
            };
            if matched {
                Self::unlink(link);
                unlinked += 1;
            } else if let Some(node) = link {
                link = &mut node.next;
            }
        }
        self.len -= unlinked;
        unlinked
    }

    /// Release every node.
    ///
    /// Nodes are dropped one at a time; dropping the head box directly would
    /// recurse once per node.
    pub(crate) fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Count the nodes by following the links.
    #[cfg(test)]
    pub(crate) fn reachable(&self) -> usize {
        let mut count = 0;
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            count += 1;
            node = n.next.as_deref();
        }
        count
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(items: &[i32]) -> Chain<i32> {
        let mut chain = Chain::new();
        for item in items {
            chain.link_last(*item);
        }
        chain
    }

    fn items(chain: &Chain<i32>) -> Vec<i32> {
        let mut items = Vec::new();
        let mut node = chain.head();
        while let Some(n) = node {
            items.push(n.item);
            node = n.next.as_deref();
        }
        items
    }

    #[test]
    fn test_link_last() {
        let chain = chain(&[1, 2, 3]);
        assert_eq!(items(&chain), vec![1, 2, 3]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.reachable(), 3);
    }

    #[test]
    fn test_link_at_head_middle_and_tail() {
        let mut chain = chain(&[2, 4]);
        chain.link_at(0, 1).unwrap();
        chain.link_at(2, 3).unwrap();
        chain.link_at(4, 5).unwrap();
        assert_eq!(items(&chain), vec![1, 2, 3, 4, 5]);
        assert_eq!(chain.reachable(), chain.len());
    }

    #[test]
    fn test_link_at_beyond_end() {
        let mut chain = chain(&[1]);
        assert_eq!(
            chain.link_at(2, 9),
            Err(Error::IndexOutOfBounds { index: 2, len: 1 })
        );
        assert_eq!(items(&chain), vec![1]);
    }

    #[test]
    fn test_link_all_at() {
        let mut chain = chain(&[1, 5]);
        assert_eq!(chain.link_all_at(1, vec![2, 3, 4]), Ok(3));
        assert_eq!(items(&chain), vec![1, 2, 3, 4, 5]);
        assert_eq!(chain.link_all_at(5, vec![6]), Ok(1));
        assert_eq!(chain.link_all_at(0, vec![]), Ok(0));
        assert_eq!(items(&chain), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(chain.reachable(), 6);
    }

    #[test]
    fn test_unlink_at() {
        let mut chain = chain(&[1, 2, 3]);
        assert_eq!(chain.unlink_at(1), Ok(2));
        assert_eq!(chain.unlink_at(0), Ok(1));
        assert_eq!(
            chain.unlink_at(1),
            Err(Error::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(items(&chain), vec![3]);
        assert_eq!(chain.reachable(), 1);
    }

    #[test]
    fn test_unlink_all_where_adjacent_matches() {
        let mut chain = chain(&[2, 2, 1, 2, 3, 2, 2]);
        assert_eq!(chain.unlink_all_where(|i| *i == 2), 5);
        assert_eq!(items(&chain), vec![1, 3]);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.reachable(), 2);
    }

    #[test]
    fn test_unlink_first_where() {
        let mut chain = chain(&[1, 2, 3, 2]);
        assert_eq!(chain.unlink_first_where(|i| *i == 2), Some(2));
        assert_eq!(chain.unlink_first_where(|i| *i == 7), None);
        assert_eq!(items(&chain), vec![1, 3, 2]);
        assert_eq!(chain.reachable(), 3);
    }

    #[test]
    fn test_clear_long_chain() {
        let mut chain = Chain::new();
        chain.link_all_at(0, 0..200_000).unwrap();
        assert_eq!(chain.len(), 200_000);
        chain.clear();
        assert_eq!(chain.len(), 0);
        assert!(chain.head().is_none());
    }
}
