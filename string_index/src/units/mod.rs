// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Typed offsets that make up a [`crate::StringIndex`]. Each one wraps a primitive in
//! a newtype so that a UTF-16 offset can't be passed where a sub-offset is expected:
//!
//! | Type                 | Primitive | Meaning                                          |
//! |----------------------|-----------|--------------------------------------------------|
//! | [`CanonicalOffset`]  | [`usize`] | UTF-16 code units from the start of the string   |
//! | [`TranscodedOffset`] | [`u16`]   | Unit of another encoding inside one UTF-16 unit  |
//! | [`CharacterStride`]  | [`u16`]   | UTF-16 code units spanned by a grapheme cluster  |
//!
//! Arithmetic: [`CanonicalOffset`] + [`CharacterStride`] = [`CanonicalOffset`].

// Attach.
pub mod canonical_offset;
pub mod character_stride;
pub mod transcoded_offset;

// Re-export.
pub use canonical_offset::*;
pub use character_stride::*;
pub use transcoded_offset::*;
