// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bit packed pair of [`CanonicalOffset`] and [`TranscodedOffset`] - see
//! [`CompoundOffset`].

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::{
    CanonicalOffset, MAX_CANONICAL_OFFSET, STRIDE_BITS, StringIndexError,
    TRANSCODED_OFFSET_MASK, TranscodedOffset, error::fail_fast,
};

/// Both halves of a position in one [`u64`]:
///
/// ```text
/// 63                                 16 15                0
/// ┌────────────────────────────────────┬──────────────────┐
/// │ canonical offset (UTF-16 units)    │ transcoded offset │
/// └────────────────────────────────────┴──────────────────┘
/// ```
///
/// The fields never overlap, so plain integer comparison is the same as comparing
/// `(canonical, transcoded)` lexicographically. That is what makes ordering and
/// equality of [`crate::StringIndex`] a single integer compare.
///
/// It serializes as a bare integer. Going back from a [`u64`] with `try_from` only
/// accepts values whose canonical half fits in a [`usize`], so [`Self::canonical_offset`] never truncates.
/// On 64 bit targets that is every [`u64`].
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct CompoundOffset(u64);

impl CompoundOffset {
    /// Packs `(canonical << 16) | transcoded`.
    ///
    /// # Errors
    ///
    /// - [`StringIndexError::TranscodedOffsetOutOfRange`] if `transcoded` is above
    ///   [`crate::MAX_TRANSCODED_OFFSET`].
    /// - [`StringIndexError::CanonicalOffsetOutOfRange`] if `canonical` is above
    ///   [`MAX_CANONICAL_OFFSET`].
    pub fn try_pack(
        canonical: impl Into<CanonicalOffset>,
        transcoded: usize,
    ) -> Result<Self, StringIndexError> {
        let transcoded = TranscodedOffset::try_from(transcoded)?;
        let canonical_bits = Self::try_canonical_bits(canonical.into())?;
        Ok(Self((canonical_bits << STRIDE_BITS) | u64::from(transcoded)))
    }

    /// Same as [`Self::try_pack`], for callers where a violation is a logic error.
    ///
    /// # Panics
    ///
    /// If either field is out of range.
    #[must_use]
    #[track_caller]
    pub fn pack(canonical: impl Into<CanonicalOffset>, transcoded: usize) -> Self {
        match Self::try_pack(canonical, transcoded) {
            Ok(it) => it,
            Err(error) => fail_fast(error),
        }
    }

    #[must_use]
    pub fn unpack(self) -> (CanonicalOffset, TranscodedOffset) {
        (self.canonical_offset(), self.transcoded_offset())
    }

    #[must_use]
    pub fn as_u64(self) -> u64 { self.0 }

    /// # Panics
    ///
    /// Never in practice. Every constructor checks that the canonical half fits in a
    /// [`usize`].
    #[must_use]
    #[track_caller]
    pub fn canonical_offset(self) -> CanonicalOffset {
        match usize::try_from(self.0 >> STRIDE_BITS) {
            Ok(it) => CanonicalOffset(it),
            Err(_) => fail_fast(StringIndexError::CompoundOffsetOutOfRange { raw: self.0 }),
        }
    }

    // Masked to 16 bits.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn transcoded_offset(self) -> TranscodedOffset {
        TranscodedOffset((self.0 & TRANSCODED_OFFSET_MASK) as u16)
    }

    /// Replaces the transcoded offset, leaving the canonical offset alone. Clears
    /// exactly the low 16 bits before or-ing in the new value.
    #[must_use]
    pub fn with_transcoded_offset(self, transcoded: impl Into<TranscodedOffset>) -> Self {
        let transcoded: TranscodedOffset = transcoded.into();
        Self((self.0 & !TRANSCODED_OFFSET_MASK) | u64::from(transcoded))
    }

    pub fn set_transcoded_offset(&mut self, transcoded: impl Into<TranscodedOffset>) {
        *self = self.with_transcoded_offset(transcoded);
    }

    /// # Errors
    ///
    /// Returns [`StringIndexError::TranscodedOffsetOutOfRange`] if `transcoded` does not
    /// fit in 16 bits. `self` is left untouched in that case.
    pub fn try_set_transcoded_offset(
        &mut self,
        transcoded: usize,
    ) -> Result<(), StringIndexError> {
        let transcoded = TranscodedOffset::try_from(transcoded)?;
        self.set_transcoded_offset(transcoded);
        Ok(())
    }

    /// Moves to a new canonical offset. The transcoded offset is reset to zero, since a
    /// sub-offset only means something relative to the unit it was measured in.
    ///
    /// # Errors
    ///
    /// Returns [`StringIndexError::CanonicalOffsetOutOfRange`] if `canonical` is above
    /// [`MAX_CANONICAL_OFFSET`].
    pub fn try_with_canonical_offset(
        self,
        canonical: impl Into<CanonicalOffset>,
    ) -> Result<Self, StringIndexError> {
        let canonical_bits = Self::try_canonical_bits(canonical.into())?;
        Ok(Self(canonical_bits << STRIDE_BITS))
    }

    fn try_canonical_bits(canonical: CanonicalOffset) -> Result<u64, StringIndexError> {
        u64::try_from(canonical.as_usize())
            .ok()
            .filter(|bits| *bits <= MAX_CANONICAL_OFFSET)
            .ok_or(StringIndexError::CanonicalOffsetOutOfRange {
                value: canonical.as_usize(),
            })
    }
}

impl From<CompoundOffset> for u64 {
    fn from(it: CompoundOffset) -> Self { it.0 }
}

impl TryFrom<u64> for CompoundOffset {
    type Error = StringIndexError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        usize::try_from(raw >> STRIDE_BITS)
            .map(|_| Self(raw))
            .map_err(|_| StringIndexError::CompoundOffsetOutOfRange { raw })
    }
}

impl Display for CompoundOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let (canonical, transcoded) = self.unpack();
        write!(f, "{}+{}", canonical.as_usize(), transcoded.as_u16())
    }
}

impl Debug for CompoundOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let (canonical, transcoded) = self.unpack();
        f.debug_struct("CompoundOffset")
            .field("canonical", &canonical.as_usize())
            .field("transcoded", &transcoded.as_u16())
            .finish()
    }
}
