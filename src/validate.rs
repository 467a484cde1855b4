//! Validators.
//!
//! Boolean checks built on the splitter, for callers that only need a
//! verdict and not the component boundaries.

use core::ops::Range;

use crate::parser::{self, char, ParseMode};

/// Checks if the given string is a valid IRI reference.
///
/// Equivalent to splitting under [`ParseMode::IriStrict`] and discarding
/// the components.
///
/// # Examples
///
/// ```
/// use iri_ref::validate::is_valid_iri;
///
/// assert!(is_valid_iri("http://[::1]:80/"));
/// assert!(!is_valid_iri("http://[::1:80/"));
/// ```
#[must_use]
pub fn is_valid_iri(s: &str) -> bool {
    parser::split(s, ParseMode::IriStrict).is_some()
}

/// Checks if the given string is a valid IRI reference with a scheme.
#[must_use]
pub fn has_scheme(s: &str) -> bool {
    parser::split(s, ParseMode::IriStrict).map_or(false, |r| r.has_scheme())
}

/// Checks if the given string is a valid URI reference with a scheme.
///
/// Unlike [`has_scheme`], any byte outside ASCII fails the check.
#[must_use]
pub fn has_scheme_for_uri(s: &str) -> bool {
    parser::split(s, ParseMode::UriStrict).map_or(false, |r| r.has_scheme())
}

/// Checks if the given string is a valid CURIE reference.
///
/// A CURIE reference is the part of a compact URI after the prefix and
/// colon: a relative reference restricted to have no authority, so a
/// leading `//` is rejected. The path, query, and fragment are validated
/// against the IRI grammar, and percent triplets must be well-formed.
/// The empty string is valid.
#[must_use]
pub fn is_valid_curie_reference(s: &str) -> bool {
    is_valid_curie_reference_range(s, 0..s.len())
}

/// Checks if the given subrange of a string is a valid CURIE reference.
///
/// # Panics
///
/// Panics if the range is out of bounds for `s` or if either end does not
/// lie on a character boundary.
#[must_use]
pub fn is_valid_curie_reference_range(s: &str, range: Range<usize>) -> bool {
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
    if start == end {
        return true;
    }
    let bytes = s.as_bytes();
    if start + 2 <= end && bytes[start] == b'/' && bytes[start + 1] == b'/' {
        // Has an authority, which is not allowed.
        return false;
    }

    // 0: path, 1: query, 2: fragment.
    let mut state = 0;
    let mut i = start;
    while i < end {
        let c = parser::char_at(s, i);
        if c == '%' {
            if char::is_pct_triplet(bytes, i, end) {
                i += 3;
                continue;
            }
            return false;
        }
        match state {
            0 => {
                if c == '?' {
                    state = 1;
                } else if c == '#' {
                    state = 2;
                } else if !char::is_pchar(c) {
                    return false;
                }
            }
            1 => {
                if c == '#' {
                    state = 2;
                } else if !char::is_query_char(c) {
                    return false;
                }
            }
            _ => {
                if !char::is_fragment_char(c) {
                    return false;
                }
            }
        }
        i += c.len_utf8();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_iri() {
        assert!(is_valid_iri(""));
        assert!(is_valid_iri("http://example.com/"));
        assert!(is_valid_iri("http://r\u{E9}sum\u{E9}.example.org"));
        assert!(!is_valid_iri("foo://bar/<foo>"));
        assert!(!is_valid_iri("x@y:z"));
    }

    #[test]
    fn scheme_presence() {
        assert!(has_scheme("mailto:user@example.com"));
        assert!(!has_scheme("example.com/path"));
        assert!(!has_scheme("//example.com/path"));
        // A valid reference with non-ASCII text has a scheme as an IRI but
        // fails the URI check outright.
        assert!(has_scheme("http://example.com/ros\u{E9}"));
        assert!(!has_scheme_for_uri("http://example.com/ros\u{E9}"));
        assert!(has_scheme_for_uri("http://example.com/ros%C3%A9"));
    }

    #[test]
    fn curie_references() {
        assert!(is_valid_curie_reference(""));
        assert!(is_valid_curie_reference("book1"));
        assert!(is_valid_curie_reference("path/to?x=1#frag"));
        assert!(is_valid_curie_reference("a%20b"));
        // No authority allowed.
        assert!(!is_valid_curie_reference("//example.com/x"));
        assert!(!is_valid_curie_reference("a b"));
        assert!(!is_valid_curie_reference("a%2"));
    }

    #[test]
    fn curie_reference_ranges() {
        let s = "prefix://example.com/x";
        assert!(!is_valid_curie_reference_range(s, 7..s.len()));
        assert!(is_valid_curie_reference_range(s, 9..s.len()));
        assert!(is_valid_curie_reference_range(s, 3..3));
    }

    #[test]
    #[should_panic = "out of bounds"]
    fn curie_reference_bad_range() {
        let _ = is_valid_curie_reference_range("abc", 2..9);
    }
}
