// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A position in a string that every encoding view can share - see [`StringIndex`].

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::{
    CanonicalOffset, CharacterStride, CompoundOffset, DecodeCache, StringIndexError,
    TranscodedOffset, Utf8Buffer, error::fail_fast,
};

/// A position of a character or code unit in a string.
///
/// A view that is iterating in its own encoding produces these, and any other view of
/// the *same* string can pick one up and carry on from there:
///
/// ```text
/// "a€"            UTF-16 units:  a      €
///                 UTF-8 bytes :  61     E2  82  AC
/// StringIndex                 : (0,0)  (1,0)(1,1)(1,2)   (canonical, transcoded)
/// ```
///
/// Comparison (`==`, `<`, ...) and [`Hash`] use only the [`CompoundOffset`]. Two indices
/// at the same offsets with different [`DecodeCache`] hints are equal.
///
/// It holds no reference to the string, is [`Copy`], and can be sent across threads
/// freely. The only mutators take `&mut self`.
///
/// ```rust
/// use r3bl_string_index::{DecodeCache, StringIndex, Utf8Buffer};
///
/// // A UTF-8 view sitting on the second byte of "€" (UTF-16 offset 1).
/// let mut index = StringIndex::new(1usize, 1, DecodeCache::from(Utf8Buffer::from_char('€')));
/// assert!(StringIndex::from_encoded_offset(1usize) < index);
/// assert!(index < StringIndex::from_encoded_offset(2usize));
///
/// // Step to the third byte without leaving the UTF-16 unit.
/// index.set_transcoded_offset(2);
/// assert_eq!(index.encoded_offset().as_usize(), 1);
/// assert_eq!(index.transcoded_offset().as_u16(), 2);
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(from = "CompoundOffset", into = "CompoundOffset")]
pub struct StringIndex {
    compound_offset: CompoundOffset,
    cache: DecodeCache,
}

mod constructors {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl StringIndex {
        /// Creates a new index at the specified UTF-16 offset, with no hint.
        ///
        /// # Panics
        ///
        /// If `offset` is above [`crate::MAX_CANONICAL_OFFSET`].
        #[must_use]
        #[track_caller]
        pub fn from_encoded_offset(offset: impl Into<CanonicalOffset>) -> Self {
            Self::new(offset, 0, DecodeCache::Utf16)
        }

        /// # Errors
        ///
        /// Returns [`StringIndexError::CanonicalOffsetOutOfRange`] if `offset` is above
        /// [`crate::MAX_CANONICAL_OFFSET`].
        pub fn try_from_encoded_offset(
            offset: impl Into<CanonicalOffset>,
        ) -> Result<Self, StringIndexError> {
            Self::try_new(offset, 0, DecodeCache::Utf16)
        }

        /// Used by a view that has just decoded something at this position and wants
        /// to remember it.
        ///
        /// # Panics
        ///
        /// If `transcoded` does not fit in 16 bits or `offset` does not fit in 48 bits.
        /// Either one means the calling view has miscounted.
        #[must_use]
        #[track_caller]
        pub fn new(
            offset: impl Into<CanonicalOffset>,
            transcoded: usize,
            cache: DecodeCache,
        ) -> Self {
            match Self::try_new(offset, transcoded, cache) {
                Ok(it) => it,
                Err(error) => fail_fast(error),
            }
        }

        /// # Errors
        ///
        /// See [`CompoundOffset::try_pack`].
        pub fn try_new(
            offset: impl Into<CanonicalOffset>,
            transcoded: usize,
            cache: DecodeCache,
        ) -> Result<Self, StringIndexError> {
            Ok(Self {
                compound_offset: CompoundOffset::try_pack(offset, transcoded)?,
                cache,
            })
        }

        /// Same as [`Self::new`] with a transcoded offset of zero.
        ///
        /// # Panics
        ///
        /// If `offset` is above [`crate::MAX_CANONICAL_OFFSET`].
        #[must_use]
        #[track_caller]
        pub fn with_cache(offset: impl Into<CanonicalOffset>, cache: DecodeCache) -> Self {
            Self::new(offset, 0, cache)
        }
    }
}

mod accessors {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl StringIndex {
        /// The offset into a string's UTF-16 encoding for this index.
        #[must_use]
        pub fn encoded_offset(&self) -> CanonicalOffset {
            self.compound_offset.canonical_offset()
        }

        /// The offset of this index within whatever encoding this is being viewed as.
        #[must_use]
        pub fn transcoded_offset(&self) -> TranscodedOffset {
            self.compound_offset.transcoded_offset()
        }

        #[must_use]
        pub fn compound_offset(&self) -> CompoundOffset { self.compound_offset }

        #[must_use]
        pub fn cache(&self) -> &DecodeCache { &self.cache }

        #[must_use]
        pub fn utf8_hint(&self) -> Option<Utf8Buffer> { self.cache.utf8() }

        #[must_use]
        pub fn character_hint(&self) -> Option<CharacterStride> { self.cache.character() }

        #[must_use]
        pub fn scalar_hint(&self) -> Option<char> { self.cache.unicode_scalar() }
    }
}

mod mutators {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl StringIndex {
        /// Moves within the current UTF-16 code unit. The canonical offset, and so the
        /// order relative to any index at a different canonical offset, is unchanged.
        ///
        /// # Panics
        ///
        /// If `transcoded` does not fit in 16 bits.
        #[track_caller]
        pub fn set_transcoded_offset(&mut self, transcoded: usize) {
            if let Err(error) = self.try_set_transcoded_offset(transcoded) {
                fail_fast(error);
            }
        }

        /// # Errors
        ///
        /// Returns [`StringIndexError::TranscodedOffsetOutOfRange`] if `transcoded` does
        /// not fit in 16 bits. `self` is left untouched in that case.
        pub fn try_set_transcoded_offset(
            &mut self,
            transcoded: usize,
        ) -> Result<(), StringIndexError> {
            self.compound_offset.try_set_transcoded_offset(transcoded)
        }

        /// Moves to another UTF-16 offset. The transcoded offset goes back to zero and
        /// any hint is dropped, since it described the old location.
        ///
        /// # Panics
        ///
        /// If `offset` is above [`crate::MAX_CANONICAL_OFFSET`].
        #[track_caller]
        pub fn set_encoded_offset(&mut self, offset: impl Into<CanonicalOffset>) {
            if let Err(error) = self.try_set_encoded_offset(offset) {
                fail_fast(error);
            }
        }

        /// # Errors
        ///
        /// Returns [`StringIndexError::CanonicalOffsetOutOfRange`] if `offset` is above
        /// [`crate::MAX_CANONICAL_OFFSET`]. `self` is left untouched in that case.
        pub fn try_set_encoded_offset(
            &mut self,
            offset: impl Into<CanonicalOffset>,
        ) -> Result<(), StringIndexError> {
            let compound_offset = self.compound_offset.try_with_canonical_offset(offset)?;
            if self.cache.is_hint() {
                tracing::trace!(
                    from = %self.compound_offset,
                    to = %compound_offset,
                    hint = self.cache.kind_name(),
                    "dropping decode hint"
                );
            }
            self.compound_offset = compound_offset;
            self.cache = DecodeCache::Utf16;
            Ok(())
        }

        /// Replaces the hint. The offsets are not touched.
        pub fn set_cache(&mut self, cache: DecodeCache) { self.cache = cache; }
    }
}

mod comparison {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl PartialEq for StringIndex {
        fn eq(&self, other: &Self) -> bool { self.compound_offset == other.compound_offset }
    }

    impl Eq for StringIndex {}

    impl PartialOrd for StringIndex {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
    }

    impl Ord for StringIndex {
        fn cmp(&self, other: &Self) -> Ordering {
            self.compound_offset.cmp(&other.compound_offset)
        }
    }

    impl Hash for StringIndex {
        fn hash<H: Hasher>(&self, state: &mut H) { self.compound_offset.hash(state); }
    }
}

mod conversions {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Deserialized indices carry no hint.
    impl From<CompoundOffset> for StringIndex {
        fn from(compound_offset: CompoundOffset) -> Self {
            Self {
                compound_offset,
                cache: DecodeCache::Utf16,
            }
        }
    }

    impl From<StringIndex> for CompoundOffset {
        fn from(it: StringIndex) -> Self { it.compound_offset }
    }

    impl Display for StringIndex {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            write!(f, "StringIndex({})", self.compound_offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        MAX_CANONICAL_OFFSET, assert_eq2, canonical_offset, character_stride,
        transcoded_offset,
    };
    use test_case::test_case;

    fn every_kind_of_cache() -> [DecodeCache; 4] {
        [
            DecodeCache::Utf16,
            DecodeCache::from(Utf8Buffer::from_char('€')),
            DecodeCache::from(character_stride(2u16)),
            DecodeCache::from('A'),
        ]
    }

    #[test]
    fn test_from_encoded_offset() {
        let index = StringIndex::from_encoded_offset(10usize);
        assert_eq2!(index.encoded_offset(), canonical_offset(10usize));
        assert!(index.transcoded_offset().is_zero());
        assert_eq2!(index.cache(), &DecodeCache::Utf16);
    }

    #[test]
    fn test_scalar_hint_scenario() {
        let index = StringIndex::with_cache(10usize, DecodeCache::UnicodeScalar {
            value: '\u{41}',
        });
        assert_eq2!(index.scalar_hint(), Some('A'));
        assert_eq2!(index.character_hint(), None);
        assert_eq2!(index.utf8_hint(), None);
        assert_eq2!(index.encoded_offset().as_usize(), 10);
    }

    #[test]
    fn test_cache_does_not_affect_equality_or_hash() {
        let indices = every_kind_of_cache().map(|cache| StringIndex::new(7usize, 2, cache));
        for lhs in &indices {
            for rhs in &indices {
                assert_eq2!(lhs, rhs);
                assert_eq2!(lhs.cmp(rhs), Ordering::Equal);
            }
        }
        let set: HashSet<StringIndex> = indices.into_iter().collect();
        assert_eq2!(set.len(), 1);
    }

    #[test_case((5, 0), (5, 3), Ordering::Less)]
    #[test_case((5, 3), (6, 0), Ordering::Less)]
    #[test_case((5, 65_535), (6, 0), Ordering::Less)]
    #[test_case((6, 0), (5, 3), Ordering::Greater)]
    #[test_case((4, 1), (4, 1), Ordering::Equal)]
    fn test_ordering(lhs: (usize, usize), rhs: (usize, usize), expected: Ordering) {
        let lhs = StringIndex::new(lhs.0, lhs.1, DecodeCache::from('x'));
        let rhs = StringIndex::new(rhs.0, rhs.1, DecodeCache::Utf16);
        assert_eq2!(lhs.cmp(&rhs), expected);
        assert_eq2!(lhs.partial_cmp(&rhs), Some(expected));
    }

    #[test]
    fn test_transcoded_offset_boundary() {
        let index = StringIndex::new(3usize, 65_535, DecodeCache::Utf16);
        assert_eq2!(index.transcoded_offset(), transcoded_offset(u16::MAX));
        assert_eq2!(index.encoded_offset(), canonical_offset(3usize));

        assert_eq2!(
            StringIndex::try_new(3usize, 65_536, DecodeCache::Utf16),
            Err(StringIndexError::TranscodedOffsetOutOfRange { value: 65_536 })
        );
    }

    #[test]
    #[should_panic(expected = "Transcoded offset 65536 does not fit")]
    fn test_new_fails_fast() { let _ = StringIndex::new(3usize, 65_536, DecodeCache::Utf16); }

    #[test]
    #[should_panic(expected = "Transcoded offset 70000 does not fit")]
    fn test_set_transcoded_offset_fails_fast() {
        let mut index = StringIndex::from_encoded_offset(1usize);
        index.set_transcoded_offset(70_000);
    }

    #[test]
    fn test_set_transcoded_offset_keeps_canonical_and_cache() {
        let cache = DecodeCache::from(Utf8Buffer::from_char('😃'));
        let mut index = StringIndex::with_cache(8usize, cache);
        let before = StringIndex::from_encoded_offset(7usize);
        let after = StringIndex::from_encoded_offset(9usize);

        for transcoded in [1, 2, 3, 65_535] {
            index.set_transcoded_offset(transcoded);
            assert_eq2!(index.encoded_offset(), canonical_offset(8usize));
            assert_eq2!(index.transcoded_offset().as_usize(), transcoded);
            assert_eq2!(index.cache(), &cache);
            assert!(before < index && index < after);
        }

        assert!(index.try_set_transcoded_offset(65_536).is_err());
        assert_eq2!(index.transcoded_offset().as_usize(), 65_535);
    }

    #[test]
    fn test_set_encoded_offset_drops_hint() {
        let mut index = StringIndex::new(2usize, 1, DecodeCache::from('é'));
        index.set_encoded_offset(5usize);
        assert_eq2!(index.encoded_offset(), canonical_offset(5usize));
        assert!(index.transcoded_offset().is_zero());
        assert_eq2!(index.cache(), &DecodeCache::Utf16);
    }

    fn too_big_canonical_offset() -> usize {
        usize::try_from(MAX_CANONICAL_OFFSET + 1).unwrap()
    }

    #[test]
    fn test_canonical_offset_boundary() {
        let max = usize::try_from(MAX_CANONICAL_OFFSET).unwrap();
        let index = StringIndex::from_encoded_offset(max);
        assert_eq2!(index.encoded_offset().as_usize(), max);

        let too_big = too_big_canonical_offset();
        assert_eq2!(
            StringIndex::try_from_encoded_offset(too_big),
            Err(StringIndexError::CanonicalOffsetOutOfRange { value: too_big })
        );
    }

    #[test]
    #[should_panic(expected = "does not fit in the 48 bit offset field")]
    fn test_from_encoded_offset_fails_fast() {
        let _ = StringIndex::from_encoded_offset(too_big_canonical_offset());
    }

    #[test]
    #[should_panic(expected = "does not fit in the 48 bit offset field")]
    fn test_set_encoded_offset_fails_fast() {
        let mut index = StringIndex::from_encoded_offset(1usize);
        index.set_encoded_offset(too_big_canonical_offset());
    }

    #[test]
    fn test_try_set_encoded_offset_rejects_overflow() {
        let cache = DecodeCache::from('é');
        let mut index = StringIndex::new(2usize, 1, cache);
        let too_big = too_big_canonical_offset();

        assert_eq2!(
            index.try_set_encoded_offset(too_big),
            Err(StringIndexError::CanonicalOffsetOutOfRange { value: too_big })
        );
        assert_eq2!(index.compound_offset(), CompoundOffset::pack(2usize, 1));
        assert_eq2!(index.cache(), &cache);

        assert_eq2!(index.try_set_encoded_offset(3usize), Ok(()));
        assert_eq2!(index, StringIndex::from_encoded_offset(3usize));
        assert_eq2!(index.cache(), &DecodeCache::Utf16);
    }

    #[test]
    fn test_set_cache() {
        let mut index = StringIndex::new(2usize, 1, DecodeCache::Utf16);
        index.set_cache(DecodeCache::from(character_stride(3u16)));
        assert_eq2!(index.character_hint(), Some(character_stride(3u16)));
        assert_eq2!(index, StringIndex::new(2usize, 1, DecodeCache::Utf16));
    }

    #[test]
    fn test_display() {
        let index = StringIndex::new(5usize, 3, DecodeCache::from('a'));
        assert_eq2!(index.to_string(), "StringIndex(5+3)");
    }

    #[test]
    fn test_serde_round_trip_skips_cache() {
        let index = StringIndex::new(5usize, 3, DecodeCache::from('a'));
        let json = serde_json::to_string(&index).unwrap();
        assert_eq2!(json, ((5u64 << 16) | 3).to_string());

        let restored: StringIndex = serde_json::from_str(&json).unwrap();
        assert_eq2!(restored, index);
        assert_eq2!(restored.cache(), &DecodeCache::Utf16);
    }

    #[test]
    fn test_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<StringIndex>();
    }
}
