// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{StringIndexError, UTF8_HINT_CAPACITY};

/// Pre-decoded UTF-8 bytes starting at a position, held inline.
///
/// The hint is copied with every [`crate::StringIndex`], so storage is a fixed array
/// with a hard capacity of [`UTF8_HINT_CAPACITY`] bytes and never touches the heap. The
/// contents are always whole, valid UTF-8 scalars.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Utf8Buffer {
    bytes: [u8; UTF8_HINT_CAPACITY],
    len: u8,
}

impl Default for Utf8Buffer {
    fn default() -> Self { Self::new() }
}

impl Utf8Buffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; UTF8_HINT_CAPACITY],
            len: 0,
        }
    }

    #[must_use]
    pub const fn capacity() -> usize { UTF8_HINT_CAPACITY }

    /// # Errors
    ///
    /// - [`StringIndexError::Utf8HintOverflow`] if there are more than
    ///   [`UTF8_HINT_CAPACITY`] bytes.
    /// - [`StringIndexError::InvalidUtf8Hint`] if the bytes are not valid UTF-8, which
    ///   includes a scalar cut off at the end.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, StringIndexError> {
        if bytes.len() > UTF8_HINT_CAPACITY {
            return Err(StringIndexError::Utf8HintOverflow { len: bytes.len() });
        }
        if std::str::from_utf8(bytes).is_err() {
            return Err(StringIndexError::InvalidUtf8Hint);
        }
        let mut it = Self::new();
        it.bytes[..bytes.len()].copy_from_slice(bytes);
        it.len = narrow_len(bytes.len());
        Ok(it)
    }

    /// A single scalar is at most 4 bytes, so it always fits.
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        let mut it = Self::new();
        let width = ch.encode_utf8(&mut it.bytes).len();
        it.len = narrow_len(width);
        it
    }

    /// # Errors
    ///
    /// Returns [`StringIndexError::Utf8HintOverflow`] if `ch` does not fit in the space
    /// that is left. `self` is left untouched in that case.
    pub fn try_push_char(&mut self, ch: char) -> Result<(), StringIndexError> {
        let start = self.len();
        let end = start + ch.len_utf8();
        if end > UTF8_HINT_CAPACITY {
            return Err(StringIndexError::Utf8HintOverflow { len: end });
        }
        ch.encode_utf8(&mut self.bytes[start..end]);
        self.len = narrow_len(end);
        Ok(())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes[..self.len()] }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Every constructor validates, so this never falls back.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize { usize::from(self.len) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// The first cached byte, ie: the byte a UTF-8 view is sitting on.
    #[must_use]
    pub fn first(&self) -> Option<u8> { self.as_bytes().first().copied() }

    #[must_use]
    pub fn first_scalar(&self) -> Option<char> { self.chars().next() }

    /// Drops the bytes of the leading scalar. A UTF-8 view calls this after it steps
    /// past the scalar, so the remaining bytes describe the next position.
    #[must_use]
    pub fn removing_first_scalar(&self) -> Self {
        let Some(ch) = self.first_scalar() else {
            return *self;
        };
        let rest = &self.as_bytes()[ch.len_utf8()..];
        let mut it = Self::new();
        it.bytes[..rest.len()].copy_from_slice(rest);
        it.len = narrow_len(rest.len());
        it
    }

    pub fn chars(&self) -> std::str::Chars<'_> { self.as_str().chars() }
}

// Only called with lengths that are already bounded by UTF8_HINT_CAPACITY.
#[allow(clippy::cast_possible_truncation)]
fn narrow_len(len: usize) -> u8 {
    debug_assert!(len <= UTF8_HINT_CAPACITY);
    len as u8
}

impl TryFrom<&str> for Utf8Buffer {
    type Error = StringIndexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from_bytes(value.as_bytes())
    }
}

impl From<char> for Utf8Buffer {
    fn from(ch: char) -> Self { Self::from_char(ch) }
}

impl Debug for Utf8Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Utf8Buffer").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case('a', &[0x61])]
    #[test_case('é', &[0xC3, 0xA9])]
    #[test_case('€', &[0xE2, 0x82, 0xAC])]
    #[test_case('😃', &[0xF0, 0x9F, 0x98, 0x83])]
    fn test_from_char(ch: char, expected: &[u8]) {
        let buffer = Utf8Buffer::from_char(ch);
        assert_eq2!(buffer.as_bytes(), expected);
        assert_eq2!(buffer.len(), ch.len_utf8());
        assert_eq2!(buffer.first_scalar(), Some(ch));
    }

    #[test]
    fn test_empty() {
        let buffer = Utf8Buffer::new();
        assert!(buffer.is_empty());
        assert_eq2!(buffer.first(), None);
        assert_eq2!(buffer.as_str(), "");
        assert_eq2!(buffer.removing_first_scalar(), buffer);
    }

    #[test]
    fn test_try_from_bytes_at_capacity() {
        let buffer = Utf8Buffer::try_from("😃😃").unwrap();
        assert_eq2!(buffer.len(), Utf8Buffer::capacity());
        assert_eq2!(buffer.as_str(), "😃😃");
    }

    #[test]
    fn test_try_from_bytes_overflow() {
        assert_eq2!(
            Utf8Buffer::try_from("abcdefghi"),
            Err(StringIndexError::Utf8HintOverflow { len: 9 })
        );
    }

    #[test]
    fn test_try_from_bytes_rejects_partial_scalar() {
        assert_eq2!(
            Utf8Buffer::try_from_bytes(&[0xE2, 0x82]),
            Err(StringIndexError::InvalidUtf8Hint)
        );
        assert_eq2!(
            Utf8Buffer::try_from_bytes(&[0x82, 0xAC]),
            Err(StringIndexError::InvalidUtf8Hint)
        );
    }

    #[test]
    fn test_try_push_char() {
        let mut buffer = Utf8Buffer::from_char('€');
        buffer.try_push_char('é').unwrap();
        buffer.try_push_char('a').unwrap();
        assert_eq2!(buffer.as_str(), "€éa");
        assert_eq2!(buffer.len(), 6);

        // 6 + 4 > 8, nothing changes.
        assert_eq2!(
            buffer.try_push_char('😃'),
            Err(StringIndexError::Utf8HintOverflow { len: 10 })
        );
        assert_eq2!(buffer.as_str(), "€éa");
    }

    #[test]
    fn test_removing_first_scalar() {
        let buffer = Utf8Buffer::try_from("€éa").unwrap();
        let rest = buffer.removing_first_scalar();
        assert_eq2!(rest.as_str(), "éa");
        assert_eq2!(rest.first(), Some(0xC3));
        let rest = rest.removing_first_scalar().removing_first_scalar();
        assert!(rest.is_empty());
    }

    #[test]
    fn test_debug() {
        assert_eq2!(format!("{:?}", Utf8Buffer::from_char('a')), r#"Utf8Buffer("a")"#);
    }
}
