//! Node types shared by the linked containers.
//!
//! Nodes never leave the arena of the container that created them. Users
//! only ever see `&T`/`&mut T` and owned `T`.

use crate::Key;

/// Node with a single forward link.
#[derive(Debug)]
pub(crate) struct SinglyNode<T, K: Key> {
    pub(crate) data: T,
    pub(crate) next: K,
}

impl<T, K: Key> SinglyNode<T, K> {
    #[inline]
    pub(crate) fn new(data: T, next: K) -> Self {
        Self { data, next }
    }
}

/// Node with forward and backward links.
#[derive(Debug)]
pub(crate) struct DoublyNode<T, K: Key> {
    pub(crate) data: T,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<T, K: Key> DoublyNode<T, K> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            prev: K::NONE,
            next: K::NONE,
        }
    }
}
