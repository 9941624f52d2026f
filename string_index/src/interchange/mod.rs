// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Thin adapters between plain integer offsets and [`StringIndex`], for callers that
//! still think of a string position as "a number of UTF-16 code units".
//!
//! Nothing here knows about [`crate::DecodeCache`]. Going from an integer always gives
//! an index with no hint, and going back to an integer keeps only the canonical
//! offset. The single guarantee is that the canonical offset round trips. This module
//! can be removed without touching the rest of the crate.

use std::ops::{Range, RangeInclusive};

use crate::{StringIndex, StringIndexError};

impl StringIndex {
    /// # Panics
    ///
    /// If `position` is above [`crate::MAX_CANONICAL_OFFSET`].
    #[must_use]
    #[track_caller]
    pub fn from_position(position: usize) -> Self { Self::from_encoded_offset(position) }

    /// # Panics
    ///
    /// If `offset` is above [`crate::MAX_CANONICAL_OFFSET`].
    #[must_use]
    #[track_caller]
    pub fn from_offset(offset: usize) -> Self { Self::from_encoded_offset(offset) }

    /// The integer offset of this index in UTF-16 code units.
    #[must_use]
    pub fn utf16_index(&self) -> usize { self.encoded_offset().as_usize() }

    /// The integer offset of this index in UTF-16 code units.
    #[must_use]
    pub fn offset(&self) -> usize { self.encoded_offset().as_usize() }
}

impl From<usize> for StringIndex {
    #[track_caller]
    fn from(offset: usize) -> Self { Self::from_encoded_offset(offset) }
}

impl From<StringIndex> for usize {
    fn from(it: StringIndex) -> Self { it.utf16_index() }
}

/// Builds `lower..upper` from two indices that came out of fallible view conversions.
///
/// # Errors
///
/// Returns [`StringIndexError::MissingRangeBound`] naming the first bound that is
/// [`None`].
pub fn index_range(
    lower: Option<StringIndex>,
    upper: Option<StringIndex>,
) -> Result<Range<StringIndex>, StringIndexError> {
    let (lower, upper) = both_bounds(lower, upper)?;
    Ok(lower..upper)
}

/// Builds `lower..=upper` from two indices that came out of fallible view conversions.
///
/// # Errors
///
/// Returns [`StringIndexError::MissingRangeBound`] naming the first bound that is
/// [`None`].
pub fn index_range_inclusive(
    lower: Option<StringIndex>,
    upper: Option<StringIndex>,
) -> Result<RangeInclusive<StringIndex>, StringIndexError> {
    let (lower, upper) = both_bounds(lower, upper)?;
    Ok(lower..=upper)
}

fn both_bounds(
    lower: Option<StringIndex>,
    upper: Option<StringIndex>,
) -> Result<(StringIndex, StringIndex), StringIndexError> {
    let lower = lower.ok_or(StringIndexError::MissingRangeBound { which: "lower" })?;
    let upper = upper.ok_or(StringIndexError::MissingRangeBound { which: "upper" })?;
    Ok((lower, upper))
}
