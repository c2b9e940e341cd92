//! Node-linked structures.
//!
//! Every type in this module owns a private arena of nodes and links them
//! by integer key. The key width is a type parameter defaulting to `u32`;
//! narrower keys shrink each node at the cost of a lower node ceiling.
//!
//! | Structure | Links | Ends tracked | `push_back` |
//! |-----------|-------|--------------|-------------|
//! | [`LinkedList`] | next | head | O(n) |
//! | [`DoublyLinkedList`] | prev/next | head, tail | O(1) |
//! | [`CircularList`] | next, wraps | head, tail | O(1) |
//! | [`DoublyCircularList`] | prev/next, wraps | head | O(1) |
//! | [`LinkedStack`] | next | top | n/a |
//! | [`LinkedQueue`] | next | head, tail | n/a |
//!
//! # Example
//!
//! ```
//! use catena_collections::{DoublyLinkedList, LinkedStack};
//!
//! let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
//! let mut stack: LinkedStack<i32> = LinkedStack::new();
//!
//! for i in 1..=3 {
//!     list.push_back(i)?;
//!     stack.push(i)?;
//! }
//!
//! assert_eq!(list.pop_back()?, stack.pop()?);
//! # Ok::<(), catena_collections::Error>(())
//! ```

mod circular;
mod doubly;
mod doubly_circular;
mod list;
mod node;
mod queue;
mod stack;

pub use circular::CircularList;
pub use doubly::DoublyLinkedList;
pub use doubly_circular::DoublyCircularList;
pub use list::LinkedList;
pub use queue::LinkedQueue;
pub use stack::LinkedStack;
