// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be very careful when adjusting these. [`STRIDE_BITS`] is baked into the packed
//! representation of every [`crate::CompoundOffset`], so changing it changes the
//! serialized form, and [`UTF8_HINT_CAPACITY`] is copied around with every
//! [`crate::StringIndex`].

/// Width of the transcoded offset field, in the low bits of the compound offset.
pub const STRIDE_BITS: u32 = 16;

/// Selects the transcoded offset out of a compound offset.
pub const TRANSCODED_OFFSET_MASK: u64 = (1 << STRIDE_BITS) - 1;

/// Largest transcoded offset that can be packed. In practice a transcoded offset never
/// goes above 3, since no UTF-16 code unit is more than 4 UTF-8 bytes wide.
pub const MAX_TRANSCODED_OFFSET: u16 = u16::MAX;

/// Largest canonical (UTF-16) offset that can be packed into the high 48 bits.
pub const MAX_CANONICAL_OFFSET: u64 = u64::MAX >> STRIDE_BITS;

/// Number of pre-decoded UTF-8 bytes that fit inline in a [`crate::Utf8Buffer`]. One
/// [`u64`] worth of bytes.
pub const UTF8_HINT_CAPACITY: usize = 8;
