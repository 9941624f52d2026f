// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Add, Deref, DerefMut};

use crate::{StringIndexError, error::fail_fast};

/// Offset of a position measured in UTF-16 code units from the start of the string.
///
/// This is the only part of a [`crate::StringIndex`] that every view agrees on, so it
/// is the "canonical" one. It occupies the high 48 bits of a
/// [`crate::CompoundOffset`].
///
/// ```rust
/// use r3bl_string_index::{canonical_offset, character_stride};
///
/// let start = canonical_offset(3usize);
/// let next = start + character_stride(2u16);
/// assert_eq!(next.as_usize(), 5);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct CanonicalOffset(pub usize);

impl CanonicalOffset {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

pub fn canonical_offset(arg_canonical_offset: impl Into<CanonicalOffset>) -> CanonicalOffset {
    arg_canonical_offset.into()
}

impl Deref for CanonicalOffset {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for CanonicalOffset {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<usize> for CanonicalOffset {
    fn from(it: usize) -> Self { Self(it) }
}

impl From<u16> for CanonicalOffset {
    fn from(it: u16) -> Self { Self(usize::from(it)) }
}

impl From<CanonicalOffset> for usize {
    fn from(it: CanonicalOffset) -> Self { it.0 }
}

impl Add<usize> for CanonicalOffset {
    type Output = CanonicalOffset;

    /// Move forward by a number of UTF-16 code units.
    ///
    /// # Panics
    ///
    /// If the sum does not fit in a [`usize`]. It is never wrapped.
    #[track_caller]
    fn add(self, rhs: usize) -> Self::Output {
        match self.0.checked_add(rhs) {
            Some(it) => CanonicalOffset(it),
            None => fail_fast(StringIndexError::CanonicalOffsetOutOfRange {
                value: usize::MAX,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_offset_conversions() {
        let offset = canonical_offset(42usize);
        assert_eq!(offset.as_usize(), 42);
        assert_eq!(usize::from(offset), 42);
        assert_eq!(canonical_offset(7u16), CanonicalOffset(7));
    }

    #[test]
    fn test_canonical_offset_deref_mut() {
        let mut offset = canonical_offset(20usize);
        *offset = 30;
        assert_eq!(*offset, 30);
    }

    #[test]
    fn test_canonical_offset_add() {
        assert_eq!(canonical_offset(5usize) + 1usize, canonical_offset(6usize));
        assert_eq!(
            canonical_offset(0usize) + usize::MAX,
            canonical_offset(usize::MAX)
        );
    }

    #[test]
    #[should_panic(expected = "does not fit in the 48 bit offset field")]
    fn test_canonical_offset_add_does_not_wrap() {
        let _ = canonical_offset(1usize) + usize::MAX;
    }
}
