//! Bounded list over a contiguous buffer.
//!
//! Capacity is fixed when the list is built. The buffer is reserved up front
//! and never grows, so a full list rejects further insertions instead of
//! reallocating.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::{DEFAULT_CAPACITY, Error, Result};

/// A fixed-capacity list with positional and sorted insertion.
///
/// Front and middle insertions shift the tail of the buffer, so they are
/// O(n); `push_back`, `pop_back` and indexing are O(1).
///
/// # Example
///
/// ```
/// use catena_collections::{ArrayList, Error};
///
/// let mut list: ArrayList<i32> = ArrayList::new(3);
/// list.push_back(1)?;
/// list.push_back(3)?;
/// list.insert_sorted(2)?;
///
/// assert_eq!(list[1], 2);
/// assert!(list.is_full());
/// assert_eq!(list.push_back(4), Err(Error::CapacityExceeded { capacity: 3 }));
/// # Ok::<(), catena_collections::Error>(())
/// ```
pub struct ArrayList<T> {
    contents: Vec<T>,
    capacity: usize,
}

impl<T> Default for ArrayList<T> {
    /// An empty list with room for [`DEFAULT_CAPACITY`] elements.
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> ArrayList<T> {
    /// Creates an empty list that holds at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            contents: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns `true` if no further element fits.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.contents.len() == self.capacity
    }

    /// Removes every element. Idempotent.
    pub fn clear(&mut self) {
        self.contents.clear();
    }

    #[inline]
    fn check_room(&self) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the list is full.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.check_room()?;
        self.contents.push(value);
        Ok(())
    }

    /// Prepends `value`, shifting every element one slot right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the list is full.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.check_room()?;
        self.contents.insert(0, value);
        Ok(())
    }

    /// Inserts `value` before position `index` (`index == len` appends).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the list is full, or
    /// [`Error::IndexOutOfRange`] if `index > len`. Fullness is checked first.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.check_room()?;
        if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.contents.insert(index, value);
        Ok(())
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.contents[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.contents[index])
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.contents
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes and returns the element at `index`, shifting the rest left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty, or
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn pop(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainerAccess);
        }
        self.check_index(index)?;
        Ok(self.contents.remove(index))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        self.contents.pop().ok_or(Error::EmptyContainerAccess)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        self.pop(0)
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Returns the position of the first element equal to `value`, or
    /// `len()` if there is none.
    pub fn find(&self, value: &T) -> usize {
        self.contents
            .iter()
            .position(|data| data == value)
            .unwrap_or(self.len())
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value) != self.len()
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` (leaving the list untouched) if no element matches.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.find(value);
        if index == self.len() {
            return None;
        }
        Some(self.contents.remove(index))
    }
}

impl<T: Ord> ArrayList<T> {
    /// Inserts `value` before the first element that is not less than it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the list is full.
    pub fn insert_sorted(&mut self, value: T) -> Result<()> {
        self.check_room()?;
        let index = self
            .contents
            .iter()
            .position(|data| *data >= value)
            .unwrap_or(self.len());
        self.contents.insert(index, value);
        Ok(())
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.contents[index]
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.contents[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.contents).finish()
    }
}
