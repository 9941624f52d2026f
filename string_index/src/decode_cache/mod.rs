// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Advisory decode state attached to a [`crate::StringIndex`] - see [`DecodeCache`].

// Attach.
pub mod utf8_buffer;

// Re-export.
pub use utf8_buffer::*;

use crate::CharacterStride;

/// How a position was last derived. A view attaches one of these after it has done
/// the decoding work, so that the next step in the same view can skip it.
///
/// The cache is only a hint:
/// - It never takes part in equality, ordering or hashing of a [`crate::StringIndex`].
/// - It is never checked against the string. Whoever built the index is responsible
///   for the payload being right.
/// - Asking for the wrong variant is normal (several views share one index) and gives
///   back [`None`]. The caller then decodes from the offsets instead.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum_macros::IntoStaticStr)]
pub enum DecodeCache {
    /// No hint, the index was built straight from a UTF-16 offset.
    #[default]
    Utf16,
    /// UTF-8 bytes starting at the index.
    Utf8 { buffer: Utf8Buffer },
    /// Width of the grapheme cluster starting at the index.
    Character { stride: CharacterStride },
    /// The scalar starting at the index.
    UnicodeScalar { value: char },
}

impl DecodeCache {
    #[must_use]
    pub fn utf16(&self) -> Option<()> {
        match self {
            Self::Utf16 => Some(()),
            _ => None,
        }
    }

    #[must_use]
    pub fn utf8(&self) -> Option<Utf8Buffer> {
        match self {
            Self::Utf8 { buffer } => Some(*buffer),
            _ => None,
        }
    }

    #[must_use]
    pub fn character(&self) -> Option<CharacterStride> {
        match self {
            Self::Character { stride } => Some(*stride),
            _ => None,
        }
    }

    #[must_use]
    pub fn unicode_scalar(&self) -> Option<char> {
        match self {
            Self::UnicodeScalar { value } => Some(*value),
            _ => None,
        }
    }

    /// `true` for every variant except [`DecodeCache::Utf16`].
    #[must_use]
    pub fn is_hint(&self) -> bool { self.utf16().is_none() }

    /// Variant name, for log output.
    #[must_use]
    pub fn kind_name(&self) -> &'static str { self.into() }
}

impl From<Utf8Buffer> for DecodeCache {
    fn from(buffer: Utf8Buffer) -> Self { Self::Utf8 { buffer } }
}

impl From<CharacterStride> for DecodeCache {
    fn from(stride: CharacterStride) -> Self { Self::Character { stride } }
}

impl From<char> for DecodeCache {
    fn from(value: char) -> Self { Self::UnicodeScalar { value } }
}
