//! Reference splitter.
//!
//! [`split`] scans a reference once, left to right, in grammar order:
//! scheme, authority (user info, host, port), path, query, fragment. The
//! scan yields the component boundaries as a [`ParsedReference`]; it never
//! allocates and never looks at a byte twice except when backing off from a
//! failed user-info prefix to rescan it as a host.

use core::ops::Range;

use crate::components::{ParsedReference, Span};

pub(crate) mod char;
pub(crate) mod ip;

/// Strictness and character repertoire of a parse.
///
/// The `Iri*`/`Uri*` axis selects the character repertoire: `Uri*` modes
/// reject any byte outside ASCII anywhere in the input. The `*Strict`
/// modes validate every character against the grammar production of the
/// component it appears in and require well-formed percent triplets
/// everywhere but the port; the `*Lenient` modes locate the same component
/// boundaries while skipping those legality checks.
///
/// `IriSurrogateLenient` is the lenient IRI mode for text transcoded from
/// UTF-16, where an unpaired surrogate code unit classifies as U+FFFD
/// instead of failing the parse. Rust strings are valid UTF-8 and cannot
/// carry unpaired surrogates, so the replacement branch is unreachable here
/// and the mode behaves exactly like [`IriLenient`]; it is kept so mode
/// values survive round trips through configuration.
///
/// [`IriLenient`]: Self::IriLenient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseMode {
    /// Validate as an IRI reference.
    IriStrict,
    /// Validate as an ASCII-only URI reference.
    UriStrict,
    /// Split as an IRI reference without legality checks.
    IriLenient,
    /// Split as a URI reference; non-ASCII bytes still fail.
    UriLenient,
    /// Split as an IRI reference, classifying unpaired surrogates as
    /// U+FFFD. Indistinguishable from `IriLenient` over `&str`.
    IriSurrogateLenient,
}

impl ParseMode {
    /// Returns `true` if per-character legality checks apply.
    #[inline]
    #[must_use]
    fn is_strict(self) -> bool {
        matches!(self, Self::IriStrict | Self::UriStrict)
    }

    /// Returns `true` if bytes outside ASCII are rejected.
    #[inline]
    #[must_use]
    fn is_ascii_only(self) -> bool {
        matches!(self, Self::UriStrict | Self::UriLenient)
    }
}

/// Returns the character beginning at the given byte index.
pub(crate) fn char_at(s: &str, i: usize) -> char {
    s[i..]
        .chars()
        .next()
        .expect("[consistency] scan positions must lie on character boundaries")
}

/// Splits a reference into its five components under the given mode.
///
/// Returns `None` if the text does not match the grammar selected by
/// `mode`. An empty string is a valid reference with an empty path and no
/// other components.
///
/// # Examples
///
/// ```
/// use iri_ref::parser::{split, ParseMode};
///
/// let r = split("foo://example.com:8042/over/there?name=ferret#nose", ParseMode::IriStrict)
///     .expect("should be a valid IRI reference");
/// assert_eq!(r.scheme(), Some("foo"));
/// assert_eq!(r.authority(), Some("example.com:8042"));
/// assert_eq!(r.path(), "/over/there");
/// assert_eq!(r.query(), Some("name=ferret"));
/// assert_eq!(r.fragment(), Some("nose"));
///
/// // A colon in the first segment of a scheme-less relative path is
/// // indistinguishable from a scheme delimiter, so strict modes reject it.
/// assert!(split("x@y:z", ParseMode::UriStrict).is_none());
/// ```
#[must_use]
pub fn split(s: &str, mode: ParseMode) -> Option<ParsedReference<'_>> {
    split_range(s, 0..s.len(), mode)
}

/// Splits the given subrange of a reference string.
///
/// Component spans of the result index into the whole of `s`, not into the
/// subrange, so they can be mapped back onto the caller's text.
///
/// # Panics
///
/// Panics if the range is out of bounds for `s` or if either end does not
/// lie on a character boundary.
#[must_use]
pub fn split_range(s: &str, range: Range<usize>, mode: ParseMode) -> Option<ParsedReference<'_>> {
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

    let start = range.start;
    let end = range.end;
    if start == end {
        return Some(ParsedReference::empty_at(s, start));
    }
    if mode.is_ascii_only() && !s[start..end].is_ascii() {
        return None;
    }
    let bytes = s.as_bytes();
    let strict = mode.is_strict();

    // Scheme.
    let mut scheme = None;
    let mut i = start;
    {
        let mut j = start;
        while j < end {
            let c = char_at(s, j);
            if j > start && c == ':' {
                scheme = Some(Span { start, end: j });
                i = j + 1;
                break;
            }
            if strict && j == start && !c.is_ascii_alphabetic() {
                break;
            }
            if strict && j > start && !char::is_scheme_continue(c) {
                break;
            }
            if !strict && matches!(c, '#' | ':' | '?' | '/') {
                break;
            }
            j += c.len_utf8();
        }
    }

    // Authority, only after "//".
    let mut authority = None;
    if i + 1 < end && bytes[i] == b'/' && bytes[i + 1] == b'/' {
        i += 2;
        let auth_start = i;
        let mut auth_end = end;
        // 0: user info, 1: host, 2: port.
        let mut state = 0;
        while i < end {
            let c = char_at(s, i);
            if strict && c == '%' && state != 2 {
                if char::is_pct_triplet(bytes, i, end) {
                    i += 3;
                    continue;
                }
                return None;
            }
            match state {
                0 => {
                    if matches!(c, '/' | '?' | '#') {
                        // No user info; rescan from the start as a host.
                        state = 1;
                        i = auth_start;
                    } else if strict && c == '@' {
                        state = 1;
                        i += 1;
                    } else if strict && char::is_userinfo_char(c) {
                        i += c.len_utf8();
                        if i == end {
                            // Ran out of input without an '@'.
                            state = 1;
                            i = auth_start;
                        }
                    } else {
                        state = 1;
                        i = auth_start;
                    }
                }
                1 => {
                    if matches!(c, '/' | '?' | '#') {
                        auth_end = i;
                        break;
                    }
                    if !strict {
                        i += c.len_utf8();
                    } else if c == '[' {
                        i = ip::parse_ip_literal(s, i + 1, end)?;
                    } else if c == ':' {
                        state = 2;
                        i += 1;
                    } else if char::is_regname_char(c) {
                        // IPv4 addresses match `ireg-name` as well.
                        i += c.len_utf8();
                    } else {
                        return None;
                    }
                }
                _ => {
                    if matches!(c, '/' | '?' | '#') {
                        auth_end = i;
                        break;
                    }
                    if c.is_ascii_digit() {
                        i += 1;
                    } else {
                        return None;
                    }
                }
            }
        }
        authority = Some(Span {
            start: auth_start,
            end: auth_end,
        });
    }

    // Path, query, and fragment.
    let fully_relative = i == start;
    let path_start = i;
    let mut path_end = end;
    let mut query: Option<Span> = None;
    let mut fragment = None;
    let mut seen_colon = false;
    let mut seen_slash = false;
    // 0: path, 1: query, 2: fragment.
    let mut state = 0;
    while i < end {
        let c = char_at(s, i);
        if strict && c == '%' {
            if char::is_pct_triplet(bytes, i, end) {
                i += 3;
                continue;
            }
            return None;
        }
        match state {
            0 => {
                if c == ':' && fully_relative {
                    seen_colon = true;
                } else if c == '/' && fully_relative && !seen_slash {
                    // The first segment of a scheme-less, authority-less
                    // reference must not contain a colon.
                    if strict && seen_colon {
                        return None;
                    }
                    seen_slash = true;
                }
                if c == '?' {
                    path_end = i;
                    query = Some(Span { start: i + 1, end });
                    state = 1;
                } else if c == '#' {
                    path_end = i;
                    fragment = Some(Span { start: i + 1, end });
                    state = 2;
                } else if strict && !char::is_pchar(c) {
                    return None;
                }
                i += c.len_utf8();
            }
            1 => {
                if c == '#' {
                    if let Some(query) = query.as_mut() {
                        query.end = i;
                    }
                    fragment = Some(Span { start: i + 1, end });
                    state = 2;
                } else if strict && !char::is_query_char(c) {
                    return None;
                }
                i += c.len_utf8();
            }
            _ => {
                if strict && !char::is_fragment_char(c) {
                    return None;
                }
                i += c.len_utf8();
            }
        }
    }
    if strict && fully_relative && seen_colon && !seen_slash {
        return None;
    }

    Some(ParsedReference {
        text: s,
        scheme,
        authority,
        path: Span {
            start: path_start,
            end: path_end,
        },
        query,
        fragment,
    })
}
