//! Owned read-only view over a value.

use std::fmt;
use std::ops::Deref;

/// A compile-time frozen view of `T`.
///
/// Takes ownership of the value and exposes only shared access, so the type
/// system rejects mutation outright instead of checking a flag at runtime.
/// While the view is alive the original value is unreachable; [`thaw`]
/// recovers it unchanged.
///
/// Use this when a value should stay frozen for a whole region of code; use
/// the [`Freezable`](crate::Freezable) runtime capability when freezing is
/// toggled dynamically.
pub struct Frozen<T> {
    value: T,
}

impl<T> Frozen<T> {
    /// Freeze `value`, making it immutable until [`thaw`](Self::thaw).
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Shared access to the frozen value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the view and recover the value, mutable again.
    pub fn thaw(self) -> T {
        self.value
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> AsRef<T> for Frozen<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> From<T> for Frozen<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Frozen").field(&self.value).finish()
    }
}

impl<T: Clone> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: PartialEq> PartialEq for Frozen<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Frozen<T> {}
