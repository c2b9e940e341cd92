//! FIFO queue on singly-linked nodes.
//!
//! Elements enter at the tail and leave from the head. Both keys are
//! tracked so enqueue and dequeue are O(1).

use core::fmt;

use crate::linked::node::SinglyNode;
use crate::storage::Arena;
use crate::{Error, Key, Result};

/// A first-in first-out queue.
///
/// # Example
///
/// ```
/// use catena_collections::LinkedQueue;
///
/// let mut queue: LinkedQueue<i32> = LinkedQueue::new();
/// queue.enqueue(2)?;
/// queue.enqueue(3)?;
/// assert_eq!(queue.dequeue()?, 2);
/// assert_eq!(queue.dequeue()?, 3);
///
/// queue.enqueue(4)?;
/// assert_eq!(queue.front()?, &4);
/// # Ok::<(), catena_collections::Error>(())
/// ```
pub struct LinkedQueue<T, K: Key = u32> {
    arena: Arena<SinglyNode<T, K>, K>,
    head: K,
    tail: K,
    len: usize,
}

impl<T, K: Key> Default for LinkedQueue<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> LinkedQueue<T, K> {
    /// Creates an empty queue. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a value at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        let key = self.arena.try_insert(SinglyNode::new(value, K::NONE))?;
        if self.tail.is_some() {
            self.arena.get_mut(self.tail).next = key;
        } else {
            self.head = key;
        }
        self.tail = key;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.head.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        let node = self.arena.remove(self.head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = K::NONE;
        }
        self.len -= 1;
        Ok(node.data)
    }

    /// Returns a reference to the front value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the queue is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        if self.head.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&self.arena.get(self.head).data)
    }

    /// Returns a mutable reference to the front value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the queue is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.head.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&mut self.arena.get_mut(self.head).data)
    }

    /// Returns a reference to the back value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the queue is empty.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        if self.tail.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&self.arena.get(self.tail).data)
    }

    /// Returns a mutable reference to the back value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the queue is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.tail.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&mut self.arena.get_mut(self.tail).data)
    }

    /// Removes every element. Idempotent.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for LinkedQueue<T, K> {
    /// Lists elements from front to back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut key = self.head;
        let values = core::iter::from_fn(|| {
            if key.is_none() {
                return None;
            }
            let node = self.arena.get(key);
            key = node.next;
            Some(&node.data)
        });
        f.debug_list().entries(values).finish()
    }
}
