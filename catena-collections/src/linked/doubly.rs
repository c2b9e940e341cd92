//! Doubly-linked list with head and tail keys.
//!
//! Every node carries `prev` and `next` keys into the list's arena, giving
//! O(1) access and removal at both ends. Positional access walks from
//! whichever end is closer to the requested index.
//!
//! # Example
//!
//! ```
//! use catena_collections::DoublyLinkedList;
//!
//! let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
//! list.push_back(1)?;
//! list.push_back(2)?;
//! list.push_back(3)?;
//!
//! assert_eq!(list.pop_back()?, 3);
//! assert_eq!(list.pop_front()?, 1);
//! assert_eq!(list.len(), 1);
//! assert_eq!(list.at(0)?, &2);
//! # Ok::<(), catena_collections::Error>(())
//! ```

use core::fmt;

use crate::linked::node::DoublyNode;
use crate::storage::Arena;
use crate::{Error, Key, Result};

/// A doubly-linked list.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `K`: Key type for node links (default `u32`)
pub struct DoublyLinkedList<T, K: Key = u32> {
    arena: Arena<DoublyNode<T, K>, K>,
    head: K,
    tail: K,
    len: usize,
}

impl<T, K: Key> Default for DoublyLinkedList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Base impl
// =============================================================================

impl<T, K: Key> DoublyLinkedList<T, K> {
    /// Creates an empty list. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: K::NONE,
            tail: K::NONE,
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
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends a value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        let key = self.arena.try_insert(DoublyNode::new(value))?;
        self.link_back(key);
        Ok(())
    }

    /// Prepends a value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        let key = self.arena.try_insert(DoublyNode::new(value))?;
        self.link_front(key);
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
        if index == self.len {
            return self.push_back(value);
        }
        let before = self.key_at(index);
        let key = self.arena.try_insert(DoublyNode::new(value))?;
        self.link_before(before, key);
        Ok(())
    }

    // ========================================================================
    // Access
    // ========================================================================

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

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        if self.head.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&self.arena.get(self.head).data)
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        if self.tail.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&self.arena.get(self.tail).data)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        if self.head.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(self.remove_key(self.head))
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        if self.tail.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(self.remove_key(self.tail))
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
        Ok(self.remove_key(key))
    }

    // ========================================================================
    // Link operations
    // ========================================================================

    fn link_back(&mut self, key: K) {
        let node = self.arena.get_mut(key);
        node.prev = self.tail;
        node.next = K::NONE;

        if self.tail.is_some() {
            self.arena.get_mut(self.tail).next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    fn link_front(&mut self, key: K) {
        let node = self.arena.get_mut(key);
        node.next = self.head;
        node.prev = K::NONE;

        if self.head.is_some() {
            self.arena.get_mut(self.head).prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    fn link_before(&mut self, before: K, key: K) {
        let prev = self.arena.get(before).prev;
        let node = self.arena.get_mut(key);
        node.next = before;
        node.prev = prev;

        self.arena.get_mut(before).prev = key;

        if prev.is_some() {
            self.arena.get_mut(prev).next = key;
        } else {
            self.head = key;
        }

        self.len += 1;
    }

    /// Unlinks the node at `key`, deallocates it, and returns its data.
    fn remove_key(&mut self, key: K) -> T {
        let node = self.arena.remove(key);

        if node.prev.is_some() {
            self.arena.get_mut(node.prev).next = node.next;
        } else {
            self.head = node.next;
        }

        if node.next.is_some() {
            self.arena.get_mut(node.next).prev = node.prev;
        } else {
            self.tail = node.prev;
        }

        self.len -= 1;
        node.data
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

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

    /// Walks to the node at `index` from the nearer end.
    ///
    /// Callers guarantee `index < len`.
    fn key_at(&self, index: usize) -> K {
        if index < self.len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.arena.get(key).next;
            }
            key
        } else {
            let mut key = self.tail;
            for _ in index + 1..self.len {
                key = self.arena.get(key).prev;
            }
            key
        }
    }

    fn values(&self) -> impl Iterator<Item = &T> + '_ {
        let mut key = self.head;
        core::iter::from_fn(move || {
            if key.is_none() {
                return None;
            }
            let node = self.arena.get(key);
            key = node.next;
            Some(&node.data)
        })
    }
}

// =============================================================================
// Equality-based operations
// =============================================================================

impl<T: PartialEq, K: Key> DoublyLinkedList<T, K> {
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
    /// Returns `Ok(None)` if no element matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty, before
    /// any search takes place.
    pub fn remove(&mut self, value: &T) -> Result<Option<T>> {
        if self.is_empty() {
            return Err(Error::EmptyContainerAccess);
        }
        let mut key = self.head;
        while key.is_some() {
            let node = self.arena.get(key);
            if node.data == *value {
                return Ok(Some(self.remove_key(key)));
            }
            key = node.next;
        }
        Ok(None)
    }
}

// =============================================================================
// Order-based operations
// =============================================================================

impl<T: Ord, K: Key> DoublyLinkedList<T, K> {
    /// Inserts `value` before the first element that is not less than it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    pub fn insert_sorted(&mut self, value: T) -> Result<()> {
        let mut before = self.head;
        while before.is_some() {
            let node = self.arena.get(before);
            if node.data >= value {
                break;
            }
            before = node.next;
        }

        if before.is_none() {
            return self.push_back(value);
        }
        let key = self.arena.try_insert(DoublyNode::new(value))?;
        self.link_before(before, key);
        Ok(())
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for DoublyLinkedList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}
