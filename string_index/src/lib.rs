// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words transcoded

//! # String index
//!
//! A [`StringIndex`] is a position inside a Unicode string that stays meaningful no
//! matter which encoding the string is being viewed through:
//!
//! | View              | Unit                       | How it reads a [`StringIndex`]             |
//! |-------------------|----------------------------|--------------------------------------------|
//! | UTF-16            | code unit ([`u16`])        | [`StringIndex::encoded_offset()`]          |
//! | UTF-8             | byte ([`u8`])              | encoded offset + transcoded offset + hint  |
//! | Unicode scalar    | [`char`]                   | encoded offset + [`DecodeCache::unicode_scalar()`] |
//! | Grapheme cluster  | user perceived character   | encoded offset + [`DecodeCache::character()`] |
//!
//! The position is one packed [`u64`] (see [`CompoundOffset`]) plus an advisory
//! [`DecodeCache`]:
//!
//! ```text
//! ┌──────────────────── 64 bits ─────────────────────┐
//! │ canonical offset (48 bits) │ transcoded (16 bits) │
//! └──────────────────────────────────────────────────┘
//!         UTF-16 code units       UTF-8 byte within
//!                                 one UTF-16 unit
//! ```
//!
//! Ordering, equality and hashing only ever look at the packed integer. The cache is a
//! hint that a view attaches after it has done some decoding work; another view that
//! finds a hint of the wrong kind simply decodes from scratch.
//!
//! ```rust
//! use r3bl_string_index::{DecodeCache, StringIndex};
//!
//! let plain = StringIndex::from_encoded_offset(10usize);
//! let hinted = StringIndex::with_cache(10usize, DecodeCache::UnicodeScalar { value: 'A' });
//!
//! assert_eq!(plain, hinted);
//! assert_eq!(hinted.scalar_hint(), Some('A'));
//! assert_eq!(hinted.character_hint(), None);
//! assert_eq!(hinted.utf8_hint(), None);
//! ```
//!
//! Violating the bit budget (a transcoded offset above [`MAX_TRANSCODED_OFFSET`], or a
//! canonical offset above [`MAX_CANONICAL_OFFSET`]) is a logic error in the calling
//! view. The plain constructors and setters panic; every one of them has a `try_`
//! sibling that returns a [`StringIndexError`] instead.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod compound_offset;
pub mod constants;
pub mod decl_macros;
pub mod decode_cache;
pub mod error;
pub mod interchange;
pub mod string_index;
pub mod units;

// Re-export.
pub use compound_offset::*;
pub use constants::*;
pub use decode_cache::*;
pub use error::*;
pub use interchange::*;
pub use string_index::*;
pub use units::*;
