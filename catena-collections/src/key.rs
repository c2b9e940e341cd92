//! Key trait for arena slot indices.
//!
//! Linked structures address their nodes by key instead of by pointer.
//! A key type reserves its maximum value as the `NONE` sentinel, so a
//! link costs exactly one integer and "no neighbour" needs no `Option`.

/// An integer-like slot index with a reserved "no key" sentinel.
///
/// Every linked structure in this crate is generic over its key type,
/// defaulting to `u32`. A narrower key shrinks every node link but also
/// bounds how many nodes a structure can hold: a structure keyed by `u8`
/// stores at most 255 elements before insertion fails with
/// [`Error::AllocationFailure`](crate::Error::AllocationFailure).
///
/// # Example
///
/// ```
/// use catena_collections::Key;
///
/// let key: u32 = 42;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u8::capacity(), 255);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no key".
    const NONE: Self;

    /// Creates a key from a slot index.
    ///
    /// Callers must check `val < Self::capacity()` first.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot index this key addresses.
    fn as_usize(self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Number of distinct slot indices this key type can address.
    #[inline]
    fn capacity() -> usize {
        Self::NONE.as_usize()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    debug_assert!(val < <$ty>::MAX as usize);
                    val as $ty
                }

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, usize);

// u64 does not fit usize on 32-bit targets, so it saturates there.
impl Key for u64 {
    const NONE: Self = u64::MAX;

    #[inline]
    fn from_usize(val: usize) -> Self {
        val as u64
    }

    #[inline]
    fn as_usize(self) -> usize {
        usize::try_from(self).unwrap_or(usize::MAX)
    }
}
