//! Doubly-linked circular list.
//!
//! Only the head key is stored; the tail is always `prev(head)`. An empty
//! list has `head == NONE`. The first node pushed into an empty list links
//! to itself in both directions, and every later insertion preserves
//! `next(prev(head)) == head`.

use core::fmt;

use crate::linked::node::DoublyNode;
use crate::storage::Arena;
use crate::{Error, Key, Result};

/// A doubly-linked circular list.
///
/// # Example
///
/// ```
/// use catena_collections::DoublyCircularList;
///
/// let mut list: DoublyCircularList<char> = DoublyCircularList::new();
/// list.push_back('b')?;
/// list.push_front('a')?;
/// list.push_back('c')?;
///
/// assert_eq!(list.back()?, &'c');
/// assert_eq!(list.pop(1)?, 'b');
/// assert_eq!(list.find(&'c'), 1);
/// # Ok::<(), catena_collections::Error>(())
/// ```
pub struct DoublyCircularList<T, K: Key = u32> {
    arena: Arena<DoublyNode<T, K>, K>,
    head: K,
    len: usize,
}

impl<T, K: Key> Default for DoublyCircularList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> DoublyCircularList<T, K> {
    /// Creates an empty list. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element. Idempotent.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = K::NONE;
        self.len = 0;
    }

    /// Appends a value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.link_last(value)?;
        Ok(())
    }

    /// Prepends a value. O(1).
    ///
    /// Linking at the back and then moving the head onto the new node is
    /// the same as linking at the front of a ring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.head = self.link_last(value)?;
        Ok(())
    }

    /// Inserts a value so that it ends up at position `index`.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] if `index > len`
    /// - [`Error::AllocationFailure`] if the key space is exhausted
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return self.push_front(value);
        }
        if index == self.len {
            return self.push_back(value);
        }
        let next = self.key_at(index);
        let prev = self.arena.get(next).prev;
        let key = self.arena.try_insert(DoublyNode::new(value))?;
        self.link_between(key, prev, next);
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.arena.get(self.key_at(index)).data)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let key = self.key_at(index);
        Ok(&mut self.arena.get_mut(key).data)
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn front(&self) -> Result<&T> {
        if self.head.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&self.arena.get(self.head).data)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn back(&self) -> Result<&T> {
        if self.head.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&self.arena.get(self.tail()).data)
    }

    /// Removes and returns the first element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.head.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(self.unlink(self.head))
    }

    /// Removes and returns the last element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.head.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(self.unlink(self.tail()))
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyContainerAccess`] if the list is empty
    /// - [`Error::IndexOutOfRange`] if `index >= len`
    pub fn pop(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainerAccess);
        }
        self.check_index(index)?;
        let key = self.key_at(index);
        Ok(self.unlink(key))
    }

    // ========================================================================
    // Link operations
    // ========================================================================

    /// Allocates a node and links it between the tail and the head,
    /// returning its key. The head is left unchanged unless the list was
    /// empty.
    fn link_last(&mut self, value: T) -> Result<K> {
        let key = self.arena.try_insert(DoublyNode::new(value))?;
        if self.head.is_none() {
            let node = self.arena.get_mut(key);
            node.next = key;
            node.prev = key;
            self.head = key;
            self.len = 1;
        } else {
            let tail = self.tail();
            self.link_between(key, tail, self.head);
        }
        Ok(key)
    }

    /// Links `key` between the adjacent nodes `prev` and `next`.
    fn link_between(&mut self, key: K, prev: K, next: K) {
        let node = self.arena.get_mut(key);
        node.prev = prev;
        node.next = next;
        self.arena.get_mut(prev).next = key;
        self.arena.get_mut(next).prev = key;
        self.len += 1;
    }

    /// Unlinks and deallocates `key`, returning its data.
    fn unlink(&mut self, key: K) -> T {
        let node = self.arena.remove(key);
        if self.len == 1 {
            self.head = K::NONE;
        } else {
            self.arena.get_mut(node.prev).next = node.next;
            self.arena.get_mut(node.next).prev = node.prev;
            if key == self.head {
                self.head = node.next;
            }
        }
        self.len -= 1;
        node.data
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Callers guarantee the list is not empty.
    #[inline]
    fn tail(&self) -> K {
        self.arena.get(self.head).prev
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Walks to the node at `index`, going backwards around the ring when
    /// that is shorter. Callers guarantee `index < len`.
    fn key_at(&self, index: usize) -> K {
        let mut key = self.head;
        if index <= self.len / 2 {
            for _ in 0..index {
                key = self.arena.get(key).next;
            }
        } else {
            for _ in index..self.len {
                key = self.arena.get(key).prev;
            }
        }
        key
    }

    fn values(&self) -> impl Iterator<Item = &T> + '_ {
        let mut key = self.head;
        (0..self.len).map(move |_| {
            let node = self.arena.get(key);
            key = node.next;
            &node.data
        })
    }
}

impl<T: PartialEq, K: Key> DoublyCircularList<T, K> {
    /// Returns the position of the first element equal to `value`, or
    /// `len()` if there is none.
    pub fn find(&self, value: &T) -> usize {
        self.values()
            .position(|data| data == value)
            .unwrap_or(self.len)
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value) != self.len
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` if no element matches, including on an empty list.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.find(value);
        if index == self.len {
            return None;
        }
        self.pop(index).ok()
    }
}

impl<T: Ord, K: Key> DoublyCircularList<T, K> {
    /// Inserts `value` before the first element that is not less than it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    pub fn insert_sorted(&mut self, value: T) -> Result<()> {
        let index = self
            .values()
            .position(|data| *data >= value)
            .unwrap_or(self.len);
        self.insert(index, value)
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for DoublyCircularList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_slice(values: &[i32]) -> DoublyCircularList<i32> {
        let mut list = DoublyCircularList::new();
        for &v in values {
            list.push_back(v).unwrap();
        }
        list
    }

    fn to_vec(list: &DoublyCircularList<i32>) -> Vec<i32> {
        list.values().copied().collect()
    }

    /// Checks symmetry of every link and closure in both directions.
    fn assert_ring<T, K: Key>(list: &DoublyCircularList<T, K>) {
        assert_eq!(list.arena.len(), list.len);
        if list.len == 0 {
            assert!(list.head.is_none());
            return;
        }

        let head = list.head;
        assert_eq!(list.arena.get(list.tail()).next, head);

        let mut key = head;
        for _ in 0..list.len {
            let node = list.arena.get(key);
            assert_eq!(list.arena.get(node.next).prev, key);
            assert_eq!(list.arena.get(node.prev).next, key);
            key = node.next;
        }
        assert_eq!(key, head, "forward walk did not close");

        for _ in 0..list.len {
            key = list.arena.get(key).prev;
        }
        assert_eq!(key, head, "backward walk did not close");
    }

    #[test]
    fn new_list_is_empty() {
        let list: DoublyCircularList<u64> = DoublyCircularList::new();
        assert!(list.is_empty());
        assert_eq!(list.front(), Err(Error::EmptyContainerAccess));
        assert_eq!(list.back(), Err(Error::EmptyContainerAccess));
        assert_ring(&list);
    }

    #[test]
    fn first_node_is_self_referential() {
        let mut list: DoublyCircularList<i32> = DoublyCircularList::new();
        list.push_front(1).unwrap();
        let node = list.arena.get(list.head);
        assert_eq!(node.next, list.head);
        assert_eq!(node.prev, list.head);
        assert_ring(&list);
    }

    #[test]
    fn push_front_and_back() {
        let mut list: DoublyCircularList<i32> = DoublyCircularList::new();
        list.push_back(2).unwrap();
        list.push_front(1).unwrap();
        list.push_back(3).unwrap();
        list.push_front(0).unwrap();
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3]);
        assert_eq!(list.front(), Ok(&0));
        assert_eq!(list.back(), Ok(&3));
        assert_ring(&list);
    }

    #[test]
    fn insert_and_at() {
        let mut list = from_slice(&[0, 2, 4]);
        list.insert(1, 1).unwrap();
        list.insert(3, 3).unwrap();
        list.insert(5, 5).unwrap();
        assert_eq!(to_vec(&list), vec![0, 1, 2, 3, 4, 5]);
        for i in 0..6 {
            assert_eq!(list.at(i), Ok(&(i as i32)));
        }
        assert_eq!(list.at(6), Err(Error::IndexOutOfRange { index: 6, len: 6 }));
        assert_eq!(
            list.insert(7, 7),
            Err(Error::IndexOutOfRange { index: 7, len: 6 })
        );
        assert_ring(&list);
    }

    #[test]
    fn pops_preserve_ring() {
        let mut list = from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(list.pop_front(), Ok(1));
        assert_ring(&list);
        assert_eq!(list.pop_back(), Ok(5));
        assert_ring(&list);
        assert_eq!(list.pop(1), Ok(3));
        assert_ring(&list);
        assert_eq!(to_vec(&list), vec![2, 4]);

        assert_eq!(list.pop(0), Ok(2));
        assert_eq!(list.pop(0), Ok(4));
        assert_ring(&list);
        assert_eq!(list.pop(0), Err(Error::EmptyContainerAccess));
        assert_eq!(list.pop_front(), Err(Error::EmptyContainerAccess));
        assert_eq!(list.pop_back(), Err(Error::EmptyContainerAccess));
    }

    #[test]
    fn sorted_find_remove() {
        let mut list: DoublyCircularList<i32> = DoublyCircularList::new();
        for v in [4, 2, 6, 2, 1] {
            list.insert_sorted(v).unwrap();
            assert_ring(&list);
        }
        assert_eq!(to_vec(&list), vec![1, 2, 2, 4, 6]);
        assert_eq!(list.find(&4), 3);
        assert_eq!(list.find(&5), 5);
        assert!(!list.contains(&5));

        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.remove(&6), Some(6));
        assert_eq!(list.back(), Ok(&4));
        assert_eq!(list.remove(&9), None);
        assert_ring(&list);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut list = from_slice(&[1, 2]);
        list.clear();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.remove(&1), None);
        list.push_back(3).unwrap();
        assert_ring(&list);
    }
}
