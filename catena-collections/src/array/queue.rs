//! Bounded FIFO queue over a ring of slots.
//!
//! `begin` is the slot of the front element and `end` the slot the next
//! enqueue writes to. Both advance modulo the capacity, so the live window
//! may wrap past the last slot back to slot 0. Emptiness and fullness are
//! decided by `len`, which removes the `begin == end` ambiguity.

use core::fmt;

use crate::{DEFAULT_CAPACITY, Error, Result};

/// A fixed-capacity first-in first-out queue.
///
/// # Example
///
/// ```
/// use catena_collections::{ArrayQueue, Error};
///
/// let mut queue: ArrayQueue<i32> = ArrayQueue::new(2);
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
/// assert_eq!(queue.enqueue(3), Err(Error::CapacityExceeded { capacity: 2 }));
///
/// assert_eq!(queue.dequeue()?, 1);
/// queue.enqueue(3)?;
/// assert_eq!(queue.back()?, &3);
/// # Ok::<(), catena_collections::Error>(())
/// ```
pub struct ArrayQueue<T> {
    slots: Box<[Option<T>]>,
    begin: usize,
    end: usize,
    len: usize,
}

impl<T> Default for ArrayQueue<T> {
    /// An empty queue with room for [`DEFAULT_CAPACITY`] elements.
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> ArrayQueue<T> {
    /// Creates an empty queue that holds at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            begin: 0,
            end: 0,
            len: 0,
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no further element fits.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    #[inline]
    fn advance(&self, slot: usize) -> usize {
        (slot + 1) % self.slots.len()
    }

    /// Adds `value` at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.max_size(),
            });
        }
        self.slots[self.end] = Some(value);
        self.end = self.advance(self.end);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        let value = self.slots[self.begin]
            .take()
            .ok_or(Error::EmptyContainerAccess)?;
        self.begin = self.advance(self.begin);
        self.len -= 1;
        Ok(value)
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the queue is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.slots[self.begin]
            .as_ref()
            .ok_or(Error::EmptyContainerAccess)
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the queue is empty.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        let last = (self.end + self.slots.len() - 1) % self.slots.len();
        self.slots[last]
            .as_ref()
            .ok_or(Error::EmptyContainerAccess)
    }

    /// Drops every queued element and rewinds both cursors. Idempotent.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.begin = 0;
        self.end = 0;
        self.len = 0;
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayQueue<T> {
    /// Lists elements from front to back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capacity = self.slots.len();
        let values = (0..self.len)
            .filter_map(|i| self.slots[(self.begin + i) % capacity].as_ref());
        f.debug_list().entries(values).finish()
    }
}
