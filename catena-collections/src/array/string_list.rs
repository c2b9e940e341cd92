//! Bounded list of owned strings.
//!
//! Borrowed input is copied into an exactly sized `Box<str>` on the way in;
//! pops hand the owned string back to the caller.

use core::fmt;

use crate::array::ArrayList;
use crate::{Error, Result};

/// A fixed-capacity list of strings, ordered byte-lexicographically.
///
/// # Example
///
/// ```
/// use catena_collections::StringList;
///
/// let mut names = StringList::new(4);
/// names.insert_sorted("pear")?;
/// names.insert_sorted("apple")?;
/// names.insert_sorted("fig")?;
///
/// assert_eq!(names.at(0)?, "apple");
/// assert_eq!(names.find("pear"), 2);
/// assert_eq!(&*names.pop_front()?, "apple");
/// # Ok::<(), catena_collections::Error>(())
/// ```
#[derive(Default)]
pub struct StringList {
    inner: ArrayList<Box<str>>,
}

impl StringList {
    /// Creates an empty list that holds at most `capacity` strings.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: ArrayList::new(capacity),
        }
    }

    /// Returns the number of strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.inner.max_size()
    }

    /// Returns `true` if the list holds no strings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if no further string fits.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Drops every stored string.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Appends a copy of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the list is full.
    pub fn push_back(&mut self, value: &str) -> Result<()> {
        self.inner.push_back(value.into())
    }

    /// Prepends a copy of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the list is full.
    pub fn push_front(&mut self, value: &str) -> Result<()> {
        self.inner.push_front(value.into())
    }

    /// Inserts a copy of `value` before position `index`.
    ///
    /// # Errors
    ///
    /// Same as [`ArrayList::insert`].
    pub fn insert(&mut self, index: usize, value: &str) -> Result<()> {
        self.inner.insert(index, value.into())
    }

    /// Inserts a copy of `value` before the first string not less than it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the list is full.
    pub fn insert_sorted(&mut self, value: &str) -> Result<()> {
        self.inner.insert_sorted(value.into())
    }

    /// Returns the string at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&str> {
        self.inner.at(index).map(|value| &**value)
    }

    /// Removes and returns the string at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`ArrayList::pop`].
    pub fn pop(&mut self, index: usize) -> Result<Box<str>> {
        self.inner.pop(index)
    }

    /// Removes and returns the first string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<Box<str>> {
        self.inner.pop_front()
    }

    /// Removes and returns the last string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<Box<str>> {
        self.inner.pop_back()
    }

    /// Returns the position of the first string equal to `value`, or `len()`.
    pub fn find(&self, value: &str) -> usize {
        self.inner
            .as_slice()
            .iter()
            .position(|data| **data == *value)
            .unwrap_or(self.len())
    }

    /// Returns `true` if some string equals `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.find(value) != self.len()
    }

    /// Removes the first string equal to `value` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the list is empty, even
    /// when nothing would have matched.
    pub fn remove(&mut self, value: &str) -> Result<Option<Box<str>>> {
        if self.is_empty() {
            return Err(Error::EmptyContainerAccess);
        }
        let index = self.find(value);
        if index == self.len() {
            return Ok(None);
        }
        self.inner.pop(index).map(Some)
    }

    /// Iterates over the stored strings in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.as_slice().iter().map(|value| &**value)
    }
}

impl fmt::Debug for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
