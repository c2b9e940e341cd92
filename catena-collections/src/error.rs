//! Error type shared by every container.

use core::fmt;

/// Why a container operation was rejected.
///
/// Every failing operation returns before touching any link or slot, so
/// the container is unchanged when an `Error` comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A bounded container was asked to grow past its capacity.
    CapacityExceeded {
        /// Maximum number of elements the container holds.
        capacity: usize,
    },
    /// An element was requested from an empty container.
    EmptyContainerAccess,
    /// A position was outside the valid range for the operation.
    ///
    /// Insertion accepts `index <= len`; access and removal require
    /// `index < len`.
    IndexOutOfRange {
        /// The rejected position.
        index: usize,
        /// Length of the container at the time of the call.
        len: usize,
    },
    /// The node arena could not hand out another key.
    ///
    /// Linked containers are otherwise unbounded; this only happens when
    /// the key type runs out of distinct indices.
    AllocationFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "container is full (capacity {capacity})")
            }
            Self::EmptyContainerAccess => write!(f, "container is empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::AllocationFailure => write!(f, "node arena key space exhausted"),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
