// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Add, Deref};

use crate::{CanonicalOffset, StringIndexError};

/// Number of UTF-16 code units spanned by the grapheme cluster that starts at a
/// position. A grapheme view caches this in [`crate::DecodeCache::Character`] so the
/// next step forward does not have to run segmentation again.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct CharacterStride(pub u16);

impl CharacterStride {
    #[must_use]
    pub fn as_u16(&self) -> u16 { self.0 }

    #[must_use]
    pub fn as_usize(&self) -> usize { usize::from(self.0) }
}

pub fn character_stride(arg_character_stride: impl Into<CharacterStride>) -> CharacterStride {
    arg_character_stride.into()
}

impl Deref for CharacterStride {
    type Target = u16;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<u16> for CharacterStride {
    fn from(it: u16) -> Self { Self(it) }
}

impl TryFrom<&str> for CharacterStride {
    type Error = StringIndexError;

    /// Measures one grapheme cluster in UTF-16 code units. Segmenting the string into
    /// clusters is up to the caller.
    fn try_from(cluster: &str) -> Result<Self, Self::Error> {
        let len = cluster.encode_utf16().count();
        u16::try_from(len)
            .map(Self)
            .map_err(|_| StringIndexError::CharacterStrideOutOfRange { len })
    }
}

impl Add<CharacterStride> for CanonicalOffset {
    type Output = CanonicalOffset;

    /// Skip over the grapheme cluster that starts at this offset.
    fn add(self, rhs: CharacterStride) -> Self::Output { self + rhs.as_usize() }
}
