// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for building and mutating a [`crate::StringIndex`]. See
//! [`StringIndexError`] for details.

/// Errors from the `try_` constructors and setters of [`crate::StringIndex`],
/// [`crate::CompoundOffset`] and the decode hint payloads.
///
/// | Variant                          | Cause                                                  | Recoverable? |
/// | :------------------------------- | :----------------------------------------------------- | :----------- |
/// | [`TranscodedOffsetOutOfRange`]   | Sub-offset does not fit in 16 bits                     | No           |
/// | [`CanonicalOffsetOutOfRange`]    | UTF-16 offset does not fit in 48 bits                  | No           |
/// | [`CompoundOffsetOutOfRange`]     | Raw `u64` whose UTF-16 offset does not fit a `usize`   | Yes          |
/// | [`Utf8HintOverflow`]             | Too many bytes for the inline UTF-8 hint               | Yes          |
/// | [`InvalidUtf8Hint`]              | Bytes for the UTF-8 hint are not whole, valid UTF-8    | Yes          |
/// | [`CharacterStrideOutOfRange`]    | Grapheme cluster is wider than [`u16::MAX`] code units | Yes          |
/// | [`MissingRangeBound`]            | A range was built from an absent index                 | Yes          |
///
/// The two range violations are never clamped. Clamping would silently change how the
/// index orders against its neighbours.
///
/// [`TranscodedOffsetOutOfRange`]: Self::TranscodedOffsetOutOfRange
/// [`CanonicalOffsetOutOfRange`]: Self::CanonicalOffsetOutOfRange
/// [`CompoundOffsetOutOfRange`]: Self::CompoundOffsetOutOfRange
/// [`Utf8HintOverflow`]: Self::Utf8HintOverflow
/// [`InvalidUtf8Hint`]: Self::InvalidUtf8Hint
/// [`CharacterStrideOutOfRange`]: Self::CharacterStrideOutOfRange
/// [`MissingRangeBound`]: Self::MissingRangeBound
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum StringIndexError {
    #[error("Transcoded offset {value} does not fit in the 16 bit sub-offset field")]
    #[diagnostic(
        code(r3bl_string_index::transcoded_offset_out_of_range),
        help(
            "A single UTF-16 code unit never spans more than 4 units of another \
             encoding. The calling view is miscounting sub-units."
        )
    )]
    TranscodedOffsetOutOfRange { value: usize },

    #[error("Canonical offset {value} does not fit in the 48 bit offset field")]
    #[diagnostic(
        code(r3bl_string_index::canonical_offset_out_of_range),
        help("UTF-16 offsets are limited to 2^48 - 1 code units.")
    )]
    CanonicalOffsetOutOfRange { value: usize },

    #[error("Compound offset {raw:#x} holds a canonical offset wider than usize")]
    #[diagnostic(
        code(r3bl_string_index::compound_offset_out_of_range),
        help("The packed value was produced on a target with a wider usize.")
    )]
    CompoundOffsetOutOfRange { raw: u64 },

    #[error("UTF-8 hint of {len} bytes does not fit in the inline buffer")]
    #[diagnostic(
        code(r3bl_string_index::utf8_hint_overflow),
        help("Cache fewer scalars, the inline buffer holds 8 bytes.")
    )]
    Utf8HintOverflow { len: usize },

    #[error("UTF-8 hint is not a sequence of whole, valid UTF-8 scalars")]
    #[diagnostic(code(r3bl_string_index::invalid_utf8_hint))]
    InvalidUtf8Hint,

    #[error("Grapheme cluster of {len} UTF-16 code units is too wide for a stride hint")]
    #[diagnostic(code(r3bl_string_index::character_stride_out_of_range))]
    CharacterStrideOutOfRange { len: usize },

    #[error("Range is missing its {which} bound")]
    #[diagnostic(
        code(r3bl_string_index::missing_range_bound),
        help("Index conversions between views can fail, unwrap them before building a range.")
    )]
    MissingRangeBound {
        /// Which bound is absent (`"lower"` or `"upper"`).
        which: &'static str,
    },
}

/// Logs the violation and aborts the current operation. Used by the constructors and
/// setters that treat a broken bit budget as a programming error.
#[track_caller]
pub(crate) fn fail_fast(error: StringIndexError) -> ! {
    tracing::error!(%error, "string index encoding range violation");
    panic!("{error}");
}
