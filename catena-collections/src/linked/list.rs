//! Singly-linked list.
//!
//! Nodes live in the list's own arena and carry a single `next` key. The
//! list tracks only the head, so front operations are O(1) while anything
//! touching the back walks the chain.
//!
//! # Example
//!
//! ```
//! use catena_collections::LinkedList;
//!
//! let mut list: LinkedList<u64> = LinkedList::new();
//! list.push_back(1)?;
//! list.push_back(3)?;
//! list.push_back(5)?;
//!
//! list.insert_sorted(4)?;
//! assert_eq!(list.find(&4), 2);
//!
//! assert_eq!(list.pop_front()?, 1);
//! assert_eq!(list.at(0)?, &3);
//! # Ok::<(), catena_collections::Error>(())
//! ```

use core::fmt;
use core::mem;

use crate::linked::node::SinglyNode;
use crate::storage::Arena;
use crate::{Error, Key, Result};

/// A singly-linked list.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `K`: Key type for node links (default `u32`)
pub struct LinkedList<T, K: Key = u32> {
    arena: Arena<SinglyNode<T, K>, K>,
    head: K,
    len: usize,
}

impl<T, K: Key> Default for LinkedList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Base impl
// =============================================================================

impl<T, K: Key> LinkedList<T, K> {
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

    /// Removes every element. Calling this on an empty list is a no-op.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts a value at the front of the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.head = self.arena.try_insert(SinglyNode::new(value, self.head))?;
        self.len += 1;
        Ok(())
    }

    /// Inserts a value at the back of the list.
    ///
    /// O(n): the list has no tail key and walks to the last node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.is_empty() {
            return self.push_front(value);
        }
        let last = self.key_at(self.len - 1);
        self.link_after(last, value)
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
        let prev = self.key_at(index - 1);
        self.link_after(prev, value)
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
        if self.is_empty() {
            return Err(Error::EmptyContainerAccess);
        }
        let node = self.arena.remove(self.head);
        self.head = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    /// Removes and returns the back element. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        match self.len {
            0 => Err(Error::EmptyContainerAccess),
            1 => self.pop_front(),
            len => {
                let prev = self.key_at(len - 2);
                Ok(self.unlink_after(prev))
            }
        }
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
        if index == 0 {
            return self.pop_front();
        }
        let prev = self.key_at(index - 1);
        Ok(self.unlink_after(prev))
    }

    /// Splits the list into its front half and its back half.
    ///
    /// The front half keeps `ceil(len / 2)` elements. Both halves preserve
    /// the original order.
    ///
    /// ```
    /// use catena_collections::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = LinkedList::new();
    /// for i in 0..7 {
    ///     list.push_back(i)?;
    /// }
    ///
    /// let (front, back) = list.halve();
    /// assert_eq!(front.len(), 4);
    /// assert_eq!(back.len(), 3);
    /// assert_eq!(front.at(0)?, &0);
    /// assert_eq!(back.at(0)?, &4);
    /// # Ok::<(), catena_collections::Error>(())
    /// ```
    pub fn halve(mut self) -> (Self, Self) {
        let keep = self.len.div_ceil(2);
        let mut back = Self::new();
        if keep == self.len {
            return (self, back);
        }

        let last_kept = self.key_at(keep - 1);
        let mut key = mem::replace(&mut self.arena.get_mut(last_kept).next, K::NONE);
        let mut back_tail = K::NONE;
        while key.is_some() {
            let node = self.arena.remove(key);
            key = node.next;
            // The back half never holds more nodes than this arena did.
            let new_key = back
                .arena
                .try_insert(SinglyNode::new(node.data, K::NONE))
                .expect("back half fits in the source key space");
            if back_tail.is_some() {
                back.arena.get_mut(back_tail).next = new_key;
            } else {
                back.head = new_key;
            }
            back_tail = new_key;
            back.len += 1;
        }
        self.len = keep;

        (self, back)
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

    /// Walks from the head to the node at `index`.
    ///
    /// Callers guarantee `index < len`.
    fn key_at(&self, index: usize) -> K {
        let mut key = self.head;
        for _ in 0..index {
            key = self.arena.get(key).next;
        }
        key
    }

    /// Allocates a node holding `value` and links it right after `prev`.
    fn link_after(&mut self, prev: K, value: T) -> Result<()> {
        let next = self.arena.get(prev).next;
        let key = self.arena.try_insert(SinglyNode::new(value, next))?;
        self.arena.get_mut(prev).next = key;
        self.len += 1;
        Ok(())
    }

    /// Unlinks and deallocates the node following `prev`.
    fn unlink_after(&mut self, prev: K) -> T {
        let target = self.arena.get(prev).next;
        let node = self.arena.remove(target);
        self.arena.get_mut(prev).next = node.next;
        self.len -= 1;
        node.data
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

impl<T: PartialEq, K: Key> LinkedList<T, K> {
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
    /// Returns `None` (leaving the list untouched) if no element matches.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.find(value);
        if index == self.len {
            return None;
        }
        self.pop(index).ok()
    }
}

// =============================================================================
// Order-based operations
// =============================================================================

impl<T: Ord, K: Key> LinkedList<T, K> {
    /// Inserts `value` before the first element that is not less than it.
    ///
    /// Keeps an ascending list ascending; a value equal to existing ones is
    /// placed before them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    pub fn insert_sorted(&mut self, value: T) -> Result<()> {
        let mut prev = K::NONE;
        let mut key = self.head;
        while key.is_some() {
            let node = self.arena.get(key);
            if node.data >= value {
                break;
            }
            prev = key;
            key = node.next;
        }

        if prev.is_none() {
            self.push_front(value)
        } else {
            self.link_after(prev, value)
        }
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for LinkedList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}
