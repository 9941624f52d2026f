// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Deref;

use crate::StringIndexError;

/// Offset, in the units of a non canonical encoding, inside the run of units that
/// together encode one UTF-16 code unit. For example, which byte of a 3 byte UTF-8
/// sequence a UTF-8 view is sitting on.
///
/// It occupies the low 16 bits of a [`crate::CompoundOffset`], which is why the
/// backing field is a [`u16`]. Wider values come in through [`TryFrom<usize>`] and are
/// rejected rather than truncated.
///
/// ```rust
/// use r3bl_string_index::{TranscodedOffset, StringIndexError};
///
/// assert_eq!(TranscodedOffset::try_from(3usize), Ok(TranscodedOffset(3)));
/// assert_eq!(
///     TranscodedOffset::try_from(65_536usize),
///     Err(StringIndexError::TranscodedOffsetOutOfRange { value: 65_536 })
/// );
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct TranscodedOffset(pub u16);

impl TranscodedOffset {
    #[must_use]
    pub fn as_u16(&self) -> u16 { self.0 }

    #[must_use]
    pub fn as_usize(&self) -> usize { usize::from(self.0) }

    /// Positions built straight from a UTF-16 offset always have a zero sub-offset.
    #[must_use]
    pub fn is_zero(&self) -> bool { self.0 == 0 }

    /// Step forward by `by` units without leaving the 16 bit budget.
    ///
    /// # Errors
    ///
    /// Returns [`StringIndexError::TranscodedOffsetOutOfRange`] if the result does not
    /// fit in 16 bits. A sum that does not even fit in a [`usize`] is reported as
    /// [`usize::MAX`].
    pub fn try_advance(self, by: usize) -> Result<Self, StringIndexError> {
        let sum = self.as_usize().checked_add(by).ok_or(
            StringIndexError::TranscodedOffsetOutOfRange { value: usize::MAX },
        )?;
        Self::try_from(sum)
    }
}

pub fn transcoded_offset(arg_transcoded_offset: impl Into<TranscodedOffset>) -> TranscodedOffset {
    arg_transcoded_offset.into()
}

impl Deref for TranscodedOffset {
    type Target = u16;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<u16> for TranscodedOffset {
    fn from(it: u16) -> Self { Self(it) }
}

impl From<u8> for TranscodedOffset {
    fn from(it: u8) -> Self { Self(u16::from(it)) }
}

impl TryFrom<usize> for TranscodedOffset {
    type Error = StringIndexError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map(Self)
            .map_err(|_| StringIndexError::TranscodedOffsetOutOfRange { value })
    }
}

impl From<TranscodedOffset> for u64 {
    fn from(it: TranscodedOffset) -> Self { u64::from(it.0) }
}
