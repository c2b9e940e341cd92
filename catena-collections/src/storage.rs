//! Arena storage for linked nodes.
//!
//! Each linked container owns exactly one [`Arena`]. Nodes are inserted
//! into the arena and linked to each other by [`Key`], so no node is ever
//! reachable from two containers and dropping the container releases every
//! node at once.
//!
//! The arena is backed by [`slab::Slab`]: stable indices, O(1)
//! insert/remove/get, and reuse of vacated slots.

use core::marker::PhantomData;

use slab::Slab;

use crate::{Error, Key, Result};

/// Slab-backed node storage addressed by keys of type `K`.
pub(crate) struct Arena<N, K: Key> {
    slots: Slab<N>,
    _marker: PhantomData<K>,
}

impl<N, K: Key> Arena<N, K> {
    /// Creates an empty arena. Does not allocate.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: Slab::new(),
            _marker: PhantomData,
        }
    }

    /// Number of occupied slots.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Inserts a node, returning its key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the slot the slab would hand
    /// out next is not representable by `K`. The arena is unchanged.
    #[inline]
    pub(crate) fn try_insert(&mut self, node: N) -> Result<K> {
        if self.slots.vacant_key() >= K::capacity() {
            return Err(Error::AllocationFailure);
        }
        Ok(K::from_usize(self.slots.insert(node)))
    }

    /// Removes the node at `key` and returns it.
    ///
    /// Keys only come from the owning container's links, so an invalid key
    /// is a broken link invariant and panics.
    #[inline]
    pub(crate) fn remove(&mut self, key: K) -> N {
        self.slots.remove(key.as_usize())
    }

    #[inline]
    pub(crate) fn get(&self, key: K) -> &N {
        &self.slots[key.as_usize()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, key: K) -> &mut N {
        &mut self.slots[key.as_usize()]
    }

    /// Drops every node.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<N, K: Key> Default for Arena<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let arena: Arena<u64, u32> = Arena::new();
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn insert_get_remove() {
        let mut arena: Arena<u64, u32> = Arena::new();

        let key = arena.try_insert(42).unwrap();
        assert_eq!(arena.len(), 1);
        assert_eq!(*arena.get(key), 42);

        *arena.get_mut(key) = 43;
        assert_eq!(arena.remove(key), 43);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn slot_reuse() {
        let mut arena: Arena<u64, u32> = Arena::new();

        let a = arena.try_insert(1).unwrap();
        let _b = arena.try_insert(2).unwrap();
        arena.remove(a);

        let c = arena.try_insert(3).unwrap();
        assert_eq!(c, a);
        assert_eq!(*arena.get(c), 3);
    }

    #[test]
    fn key_space_exhaustion() {
        let mut arena: Arena<u64, u8> = Arena::new();

        for i in 0..255 {
            arena.try_insert(i).unwrap();
        }
        assert_eq!(arena.try_insert(255), Err(Error::AllocationFailure));
        assert_eq!(arena.len(), 255);

        // A vacated slot below the sentinel is usable again.
        arena.remove(10);
        assert_eq!(arena.try_insert(999), Ok(10));
    }

    #[test]
    fn clear_drops_nodes() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct DropCounter(Rc<Cell<usize>>);

        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let mut arena: Arena<DropCounter, u32> = Arena::new();
        for _ in 0..5 {
            arena.try_insert(DropCounter(drops.clone())).unwrap();
        }

        arena.clear();
        assert_eq!(drops.get(), 5);
        assert_eq!(arena.len(), 0);
    }
}
