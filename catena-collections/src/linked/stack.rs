//! LIFO stack on singly-linked nodes.
//!
//! The top of the stack is the head of the chain, so push and pop only
//! ever touch one link.

use core::fmt;

use crate::linked::node::SinglyNode;
use crate::storage::Arena;
use crate::{Error, Key, Result};

/// A last-in first-out stack.
///
/// # Example
///
/// ```
/// use catena_collections::{Error, LinkedStack};
///
/// let mut stack: LinkedStack<String> = LinkedStack::new();
/// stack.push("a".to_string())?;
/// stack.push("b".to_string())?;
///
/// assert_eq!(stack.top()?, "b");
/// assert_eq!(stack.pop()?, "b");
/// assert_eq!(stack.pop()?, "a");
/// assert_eq!(stack.pop(), Err(Error::EmptyContainerAccess));
/// # Ok::<(), catena_collections::Error>(())
/// ```
pub struct LinkedStack<T, K: Key = u32> {
    arena: Arena<SinglyNode<T, K>, K>,
    top: K,
    len: usize,
}

impl<T, K: Key> Default for LinkedStack<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> LinkedStack<T, K> {
    /// Creates an empty stack. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            top: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the key space is exhausted.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<()> {
        self.top = self.arena.try_insert(SinglyNode::new(value, self.top))?;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        if self.top.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        let node = self.arena.remove(self.top);
        self.top = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    /// Returns a reference to the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the stack is empty.
    #[inline]
    pub fn top(&self) -> Result<&T> {
        if self.top.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&self.arena.get(self.top).data)
    }

    /// Returns a mutable reference to the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainerAccess`] if the stack is empty.
    #[inline]
    pub fn top_mut(&mut self) -> Result<&mut T> {
        if self.top.is_none() {
            return Err(Error::EmptyContainerAccess);
        }
        Ok(&mut self.arena.get_mut(self.top).data)
    }

    /// Removes every element. Idempotent.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.top = K::NONE;
        self.len = 0;
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for LinkedStack<T, K> {
    /// Lists elements from the top down.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut key = self.top;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let stack: LinkedStack<u64> = LinkedStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.top(), Err(Error::EmptyContainerAccess));
    }

    #[test]
    fn lifo_order() {
        let mut stack = LinkedStack::<i32>::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(Error::EmptyContainerAccess));
    }

    #[test]
    fn strings_push_pop() {
        let mut stack: LinkedStack<String> = LinkedStack::new();
        stack.push("a".to_string()).unwrap();
        assert_eq!(stack.pop().as_deref(), Ok("a"));
        assert_eq!(stack.pop(), Err(Error::EmptyContainerAccess));
    }

    #[test]
    fn top_mut_edits_in_place() {
        let mut stack = LinkedStack::<i32>::new();
        stack.push(1).unwrap();
        *stack.top_mut().unwrap() += 10;
        assert_eq!(stack.top(), Ok(&11));
    }

    #[test]
    fn slots_are_reused() {
        let mut stack = LinkedStack::<i32, u8>::new();
        for round in 0..4 {
            for i in 0..200 {
                stack.push(i + round).unwrap();
            }
            for i in (0..200).rev() {
                assert_eq!(stack.pop(), Ok(i + round));
            }
        }
        assert_eq!(stack.arena.len(), 0);
    }

    #[test]
    fn narrow_key_exhaustion() {
        let mut stack = LinkedStack::<i32, u8>::new();
        for i in 0..255 {
            stack.push(i).unwrap();
        }
        assert_eq!(stack.push(255), Err(Error::AllocationFailure));
        assert_eq!(stack.top(), Ok(&254));
        assert_eq!(stack.len(), 255);
    }

    #[test]
    fn clear_and_debug() {
        let mut stack = LinkedStack::<i32>::new();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(format!("{stack:?}"), "[2, 1]");
        stack.clear();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(format!("{stack:?}"), "[]");
    }
}
