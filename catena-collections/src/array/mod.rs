//! Contiguous, fixed-capacity structures.
//!
//! These never reallocate after construction. Insertion into a full
//! structure fails with [`Error::CapacityExceeded`](crate::Error::CapacityExceeded).

mod list;
mod queue;
mod string_list;

pub use list::ArrayList;
pub use queue::ArrayQueue;
pub use string_list::StringList;
