//! Generic linear containers with explicit, typed failure.
//!
//! Two families live here:
//!
//! ```text
//! linked - nodes in a per-container arena, linked by integer key
//! array  - contiguous buffers with a capacity fixed at construction
//! ```
//!
//! Every fallible operation returns [`Result`]. Nothing panics on an empty
//! container or a bad index; the caller gets an [`Error`] back and the
//! container is left exactly as it was.
//!
//! # Quick Start
//!
//! ```
//! use catena_collections::{ArrayQueue, Error, LinkedList};
//!
//! let mut list: LinkedList<i32> = LinkedList::new();
//! for value in [1, 3, 5] {
//!     list.push_back(value)?;
//! }
//! list.insert_sorted(4)?;
//! assert_eq!(format!("{list:?}"), "[1, 3, 4, 5]");
//!
//! let mut queue: ArrayQueue<i32> = ArrayQueue::new(2);
//! queue.enqueue(1)?;
//! queue.enqueue(2)?;
//! assert_eq!(queue.enqueue(3), Err(Error::CapacityExceeded { capacity: 2 }));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Linked storage
//!
//! Linked containers never hold raw pointers. Each owns a private arena
//! (a [`slab::Slab`]) and stores its links as [`Key`]s into it, with
//! `Key::NONE` marking the absence of a neighbour. Dropping or clearing the
//! container releases every node in one step.
//!
//! The key type is a parameter defaulting to `u32`:
//!
//! ```
//! use catena_collections::{Error, LinkedStack};
//!
//! // u8 keys: 255 usable slots, one byte per link.
//! let mut stack: LinkedStack<u16, u8> = LinkedStack::new();
//! for i in 0..255 {
//!     stack.push(i)?;
//! }
//! assert_eq!(stack.push(255), Err(Error::AllocationFailure));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Containers
//!
//! | Container | Family | Bounded | Notes |
//! |-----------|--------|---------|-------|
//! | [`LinkedList`] | linked | no | head only; `halve` |
//! | [`DoublyLinkedList`] | linked | no | walks from the nearer end |
//! | [`CircularList`] | linked | no | tail links back to head |
//! | [`DoublyCircularList`] | linked | no | `prev(head)` is the tail |
//! | [`LinkedStack`] | linked | no | LIFO |
//! | [`LinkedQueue`] | linked | no | FIFO |
//! | [`ArrayList`] | array | yes | `Index`/`IndexMut` |
//! | [`ArrayQueue`] | array | yes | ring buffer |
//! | [`StringList`] | array | yes | owns copies of `&str` input |

#![warn(missing_docs)]

pub mod array;
mod error;
pub mod key;
pub mod linked;
mod storage;

pub use array::{ArrayList, ArrayQueue, StringList};
pub use error::{Error, Result};
pub use key::Key;
pub use linked::{
    CircularList, DoublyCircularList, DoublyLinkedList, LinkedList, LinkedQueue, LinkedStack,
};

/// Capacity used by the `Default` impls of the array-backed containers.
pub const DEFAULT_CAPACITY: usize = 10;
