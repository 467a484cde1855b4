//! Percent encoding and decoding.
//!
//! Decoding is total: byte sequences that are not valid UTF-8 — truncated
//! multi-byte sequences, stray continuation bytes, overlong or surrogate
//! encodings — come out as U+FFFD, one replacement character per maximal
//! valid subpart, and scanning resumes right after the last accepted
//! triplet so a single bad byte cannot corrupt the rest of the text.
//! Encoding and validation stay partial; see [`encode`].

use alloc::borrow::Cow;
use alloc::string::String;

use core::ops::Range;

use memchr::memchr;

use crate::parser::{self, char, ParseMode};

/// The substitute for undecodable input, U+FFFD.
const REPLACEMENT: char = '\u{FFFD}';

/// Uppercase hexadecimal digits, indexed by value.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Appends one byte as an uppercase percent triplet.
fn push_pct_byte(buf: &mut String, byte: u8) {
    buf.push('%');
    buf.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
    buf.push(HEX_DIGITS[usize::from(byte & 0x0F)] as char);
}

/// Appends the UTF-8 encoding of a character as percent triplets.
pub(crate) fn encode_utf8_to(buf: &mut String, c: char) {
    let mut utf8 = [0_u8; 4];
    for &byte in c.encode_utf8(&mut utf8).as_bytes() {
        push_pct_byte(buf, byte);
    }
}

/// Character classes an [`encode`] pass may escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodeMode {
    /// Escape controls, space, DEL, ``"<>\^`{|}``, and every non-ASCII
    /// character. An existing `%` passes through untouched.
    UnsafeChars,
    /// Escape characters outside ASCII only, after checking that the input
    /// is a valid IRI reference; encoding fails otherwise.
    NonAsciiChecked,
    /// Escape characters outside ASCII only.
    NonAscii,
    /// Like [`UnsafeChars`], except that well-formed percent triplets pass
    /// through and a lone `%` is escaped to `%25`.
    ///
    /// [`UnsafeChars`]: Self::UnsafeChars
    UnsafeCharsKeepTriplets,
}

/// Checks if the character belongs to the escape set of
/// [`EncodeMode::UnsafeChars`].
fn is_unsafe_char(c: char) -> bool {
    u32::from(c) >= 0x7F
        || u32::from(c) <= 0x20
        || matches!(c, '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}')
}

/// Percent-encodes a reference under the given mode.
///
/// Square brackets are kept verbatim when they fall inside the authority
/// component (where an IP literal legitimately uses them) and escaped
/// anywhere else.
///
/// Returns `None` only under [`EncodeMode::NonAsciiChecked`], when the
/// input is not a valid IRI reference.
///
/// # Examples
///
/// ```
/// use iri_ref::percent::{encode, EncodeMode};
///
/// assert_eq!(
///     encode("http://[::1]/a b", EncodeMode::UnsafeChars).as_deref(),
///     Some("http://[::1]/a%20b")
/// );
/// assert_eq!(
///     encode("ab\u{E9}", EncodeMode::NonAscii).as_deref(),
///     Some("ab%C3%A9")
/// );
/// ```
#[must_use]
pub fn encode(s: &str, mode: EncodeMode) -> Option<String> {
    let components = match mode {
        EncodeMode::NonAsciiChecked => Some(parser::split(s, ParseMode::IriStrict)?),
        _ => parser::split(s, ParseMode::IriSurrogateLenient),
    };
    let authority = components.and_then(|r| r.authority_range());
    /// Checks if the position falls inside the authority component.
    fn in_authority(authority: &Option<Range<usize>>, i: usize) -> bool {
        authority.as_ref().map_or(false, |range| range.contains(&i))
    }

    let bytes = s.as_bytes();
    let mut buf = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        match mode {
            EncodeMode::UnsafeChars | EncodeMode::UnsafeCharsKeepTriplets => {
                if c == '%' && mode == EncodeMode::UnsafeCharsKeepTriplets {
                    if char::is_pct_triplet(bytes, i, s.len()) {
                        buf.push('%');
                    } else {
                        push_pct_byte(&mut buf, b'%');
                    }
                } else if is_unsafe_char(c) {
                    encode_utf8_to(&mut buf, c);
                } else if c == '[' || c == ']' {
                    if in_authority(&authority, i) {
                        buf.push(c);
                    } else {
                        encode_utf8_to(&mut buf, c);
                    }
                } else {
                    buf.push(c);
                }
            }
            EncodeMode::NonAsciiChecked | EncodeMode::NonAscii => {
                if !c.is_ascii() {
                    encode_utf8_to(&mut buf, c);
                } else if c == '[' || c == ']' {
                    if in_authority(&authority, i) {
                        buf.push(c);
                    } else {
                        encode_utf8_to(&mut buf, c);
                    }
                } else {
                    buf.push(c);
                }
            }
        }
    }
    Some(buf)
}

/// Percent-encodes a string for embedding into a URI.
///
/// Everything outside the `unreserved` set (ASCII letters and digits, `-`,
/// `_`, `.`, `~`) is escaped, including `/` and an existing `%`.
///
/// # Examples
///
/// ```
/// use iri_ref::percent::encode_string_for_uri;
///
/// assert_eq!(encode_string_for_uri("a b"), "a%20b");
/// assert_eq!(encode_string_for_uri("100%"), "100%25");
/// ```
#[must_use]
pub fn encode_string_for_uri(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~') {
            buf.push(c);
        } else {
            encode_utf8_to(&mut buf, c);
        }
    }
    buf
}

/// Percent-decodes the whole of the given text.
///
/// See [`decode_range`]. Text without any `%` is returned as-is without
/// allocating.
///
/// # Examples
///
/// ```
/// use iri_ref::percent::decode;
///
/// assert_eq!(decode("a%20b"), "a b");
/// assert_eq!(decode("a%C3%A9"), "a\u{E9}");
/// // Decoding never fails; broken input degrades to U+FFFD.
/// assert_eq!(decode("a%C3"), "a\u{FFFD}");
/// assert_eq!(decode("%"), "\u{FFFD}");
/// ```
#[inline]
#[must_use]
pub fn decode(s: &str) -> Cow<'_, str> {
    decode_range(s, 0..s.len())
}

/// Percent-decodes the given subrange of the text.
///
/// Percent triplets are decoded as UTF-8 bytes. Anything that fails to
/// form valid UTF-8 — a `%` without two hexadecimal digits, a truncated
/// multi-byte sequence, a stray continuation byte, an overlong or
/// surrogate encoding — becomes U+FFFD, one replacement per maximal valid
/// subpart, and decoding resumes at the byte after the last accepted
/// triplet. Decoding therefore never fails.
///
/// # Panics
///
/// Panics if the range is out of bounds for `s` or if either end does not
/// lie on a character boundary.
#[must_use]
pub fn decode_range(s: &str, range: Range<usize>) -> Cow<'_, str> {
    assert!(
        range.start <= range.end && range.end <= s.len(),
        "range {}..{} is out of bounds of the text (length {})",
        range.start,
        range.end,
        s.len()
    );
    assert!(
        s.is_char_boundary(range.start) && s.is_char_boundary(range.end),
        "range {}..{} does not lie on character boundaries",
        range.start,
        range.end
    );
    let (start, end) = (range.start, range.end);
    let bytes = s.as_bytes();

    // Quick check: text without a `%` decodes to itself.
    let first_pct = match memchr(b'%', &bytes[start..end]) {
        Some(pos) => start + pos,
        None => return Cow::Borrowed(&s[start..end]),
    };

    let mut buf = String::with_capacity(end - start);
    buf.push_str(&s[start..first_pct]);

    // Incremental UTF-8 acceptance over decoded bytes. `lower`/`upper`
    // bound the next continuation byte, which rules out overlong forms and
    // encoded surrogates. `marked` is the last byte position that decoding
    // is known-good up to; scanning resumes right after it on error.
    let mut code_point: u32 = 0;
    let mut bytes_needed = 0;
    let mut bytes_seen = 0;
    let mut lower = 0x80_u8;
    let mut upper = 0xBF_u8;
    let mut marked = 0_usize;

    let mut i = first_pct;
    while i < end {
        if bytes[i] == b'%' {
            if !char::is_pct_triplet(bytes, i, end) {
                // Truncated or non-hexadecimal triplet.
                if bytes_needed > 0 {
                    bytes_needed = 0;
                    bytes_seen = 0;
                    buf.push(REPLACEMENT);
                }
                buf.push(REPLACEMENT);
                i += 1;
                continue;
            }
            let byte = (char::hex_digit_value(bytes[i + 1]) << 4)
                | char::hex_digit_value(bytes[i + 2]);
            i += 3;
            if bytes_needed == 0 {
                // A lead byte.
                match byte {
                    0x00..=0x7F => buf.push(byte as char),
                    0xC2..=0xDF => {
                        marked = i - 1;
                        bytes_needed = 1;
                        code_point = u32::from(byte) - 0xC0;
                        code_point <<= 6;
                    }
                    0xE0..=0xEF => {
                        marked = i - 1;
                        lower = if byte == 0xE0 { 0xA0 } else { 0x80 };
                        upper = if byte == 0xED { 0x9F } else { 0xBF };
                        bytes_needed = 2;
                        code_point = u32::from(byte) - 0xE0;
                        code_point <<= 12;
                    }
                    0xF0..=0xF4 => {
                        marked = i - 1;
                        lower = if byte == 0xF0 { 0x90 } else { 0x80 };
                        upper = if byte == 0xF4 { 0x8F } else { 0xBF };
                        bytes_needed = 3;
                        code_point = u32::from(byte) - 0xF0;
                        code_point <<= 18;
                    }
                    _ => buf.push(REPLACEMENT),
                }
            } else if byte < lower || byte > upper {
                // An illegal continuation byte: emit a replacement for the
                // partial sequence and rescan from after the last good
                // triplet.
                code_point = 0;
                bytes_needed = 0;
                bytes_seen = 0;
                lower = 0x80;
                upper = 0xBF;
                i = marked + 1;
                buf.push(REPLACEMENT);
            } else {
                lower = 0x80;
                upper = 0xBF;
                bytes_seen += 1;
                code_point += u32::from(byte - 0x80) << (6 * (bytes_needed - bytes_seen));
                marked = i - 1;
                if bytes_seen == bytes_needed {
                    let decoded = core::char::from_u32(code_point)
                        .expect("[validity] the byte acceptor admits only Unicode scalar values");
                    buf.push(decoded);
                    code_point = 0;
                    bytes_needed = 0;
                    bytes_seen = 0;
                }
            }
        } else {
            let c = parser::char_at(s, i);
            if bytes_needed > 0 {
                bytes_needed = 0;
                bytes_seen = 0;
                buf.push(REPLACEMENT);
            }
            buf.push(c);
            i += c.len_utf8();
        }
    }
    if bytes_needed > 0 {
        buf.push(REPLACEMENT);
    }
    Cow::Owned(buf)
}
