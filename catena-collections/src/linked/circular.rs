//! Singly-linked circular list.
//!
//! The last node's `next` key points back at the first node. The list state
//! is an explicit [`Ring`]: either `Empty`, or `Occupied` with the keys of
//! the head and tail. There is no placeholder node, so an empty list owns
//! no nodes at all and the empty/non-empty transitions are plain state
//! changes.
//!
//! ```text
//!        ┌──────────────────────────┐
//!        ▼                          │
//!     ┌──────┐   ┌──────┐   ┌──────┐│
//!     │ head ├──►│      ├──►│ tail ├┘
//!     └──────┘   └──────┘   └──────┘
//! ```
//!
//! # Example
//!
//! ```
//! use catena_collections::CircularList;
//!
//! let mut list: CircularList<u64> = CircularList::new();
//! list.push_back(1)?;
//! list.push_back(2)?;
//! list.push_back(3)?;
//!
//! assert_eq!(list.at(0)?, &1);
//! assert_eq!(list.pop_front()?, 1);
//! assert_eq!(list.front()?, &2);
//! assert_eq!(list.back()?, &3);
//! # Ok::<(), catena_collections::Error>(())
//! ```

use core::fmt;

use crate::linked::node::SinglyNode;
use crate::storage::Arena;
use crate::{Error, Key, Result};

/// Occupancy state of a circular list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ring<K> {
    Empty,
    /// `next(tail) == head`. A single node is both head and tail and links
    /// to itself.
    Occupied { head: K, tail: K },
}

/// A singly-linked circular list.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `K`: Key type for node links (default `u32`)
pub struct CircularList<T, K: Key = u32> {
    arena: Arena<SinglyNode<T, K>, K>,
    ring: Ring<K>,
    len: usize,
}

impl<T, K: Key> Default for CircularList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Base impl
// =============================================================================

impl<T, K: Key> CircularList<T, K> {
    /// Creates an empty list. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            ring: Ring::Empty,
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
        self.ring = Ring::Empty;
        self.len = 0;
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts a value at the front of the list. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        match self.ring {
            Ring::Empty => self.push_first(value)?,
            Ring::Occupied { head, tail } => {
                let key = self.arena.try_insert(SinglyNode::new(value, head))?;
                self.arena.get_mut(tail).next = key;
                self.ring = Ring::Occupied { head: key, tail };
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts a value at the back of the list. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        match self.ring {
            Ring::Empty => self.push_first(value)?,
            Ring::Occupied { head, tail } => {
                let key = self.arena.try_insert(SinglyNode::new(value, head))?;
                self.arena.get_mut(tail).next = key;
                self.ring = Ring::Occupied { head, tail: key };
            }
        }
        self.len += 1;
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

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn front(&self) -> Result<&T> {
        match self.ring {
            Ring::Empty => Err(Error::EmptyContainerAccess),
            Ring::Occupied { head, .. } => Ok(&self.arena.get(head).data),
        }
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn back(&self) -> Result<&T> {
        match self.ring {
            Ring::Empty => Err(Error::EmptyContainerAccess),
            Ring::Occupied { tail, .. } => Ok(&self.arena.get(tail).data),
        }
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the first element. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T> {
        let Ring::Occupied { head, tail } = self.ring else {
            return Err(Error::EmptyContainerAccess);
        };
        if head == tail {
            return Ok(self.pop_last());
        }
        let node = self.arena.remove(head);
        self.arena.get_mut(tail).next = node.next;
        self.ring = Ring::Occupied {
            head: node.next,
            tail,
        };
        self.len -= 1;
        Ok(node.data)
    }

    /// Removes and returns the last element.
    ///
    /// O(n): the tail's predecessor is found by walking from the head.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let Ring::Occupied { head, tail } = self.ring else {
            return Err(Error::EmptyContainerAccess);
        };
        if head == tail {
            return Ok(self.pop_last());
        }
        let prev = self.key_at(self.len - 2);
        let node = self.arena.remove(tail);
        self.arena.get_mut(prev).next = head;
        self.ring = Ring::Occupied { head, tail: prev };
        self.len -= 1;
        Ok(node.data)
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
        if index == self.len - 1 {
            return self.pop_back();
        }
        let prev = self.key_at(index - 1);
        let target = self.arena.get(prev).next;
        let node = self.arena.remove(target);
        self.arena.get_mut(prev).next = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Allocates the only node of a previously empty list.
    fn push_first(&mut self, value: T) -> Result<()> {
        let key = self.arena.try_insert(SinglyNode::new(value, K::NONE))?;
        self.arena.get_mut(key).next = key;
        self.ring = Ring::Occupied {
            head: key,
            tail: key,
        };
        Ok(())
    }

    /// Removes the only node, returning the list to `Empty`.
    fn pop_last(&mut self) -> T {
        let Ring::Occupied { head, .. } = self.ring else {
            unreachable!("pop_last on an empty ring");
        };
        let node = self.arena.remove(head);
        self.ring = Ring::Empty;
        self.len = 0;
        node.data
    }

    /// Links a new node after `prev`. `prev` must not be the tail.
    fn link_after(&mut self, prev: K, value: T) -> Result<()> {
        let next = self.arena.get(prev).next;
        let key = self.arena.try_insert(SinglyNode::new(value, next))?;
        self.arena.get_mut(prev).next = key;
        self.len += 1;
        Ok(())
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

    #[inline]
    fn head(&self) -> K {
        match self.ring {
            Ring::Empty => K::NONE,
            Ring::Occupied { head, .. } => head,
        }
    }

    /// Walks from the head to the node at `index`.
    ///
    /// Callers guarantee `index < len`.
    fn key_at(&self, index: usize) -> K {
        let mut key = self.head();
        for _ in 0..index {
            key = self.arena.get(key).next;
        }
        key
    }

    /// Yields each element once, head first.
    fn values(&self) -> impl Iterator<Item = &T> + '_ {
        let mut key = self.head();
        (0..self.len).map(move |_| {
            let node = self.arena.get(key);
            key = node.next;
            &node.data
        })
    }
}

// =============================================================================
// Equality-based operations
// =============================================================================

impl<T: PartialEq, K: Key> CircularList<T, K> {
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

impl<T: Ord, K: Key> CircularList<T, K> {
    /// Inserts `value` before the first element that is not less than it.
    ///
    /// The scan stops after one lap, so a value greater than every element
    /// becomes the new tail.
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

impl<T: fmt::Debug, K: Key> fmt::Debug for CircularList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}
