//! Components of IRI references.

use core::ops::Range;

/// A half-open byte span over the parsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    /// Start of the span, inclusive.
    pub(crate) start: usize,
    /// End of the span, exclusive.
    pub(crate) end: usize,
}

impl Span {
    /// Converts the span into a standard range.
    #[inline]
    #[must_use]
    fn to_range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Component boundaries of an IRI reference, borrowing the parsed text.
///
/// See [RFC 3986 section 5.2.2](https://tools.ietf.org/html/rfc3986#section-5.2.2)
/// for the component model.
///
/// The scheme, authority, query, and fragment components are optional; the
/// path is always present but may be empty. Note that an authority can be
/// `Some("")` (as in `scheme://`), which is distinct from an absent
/// authority (as in `scheme:`).
///
/// Spans returned by the `*_range` accessors are byte ranges into the text
/// passed to [`split`] or [`split_range`], so they stay meaningful for
/// windowed parses. Present spans never overlap, and the component
/// delimiters (`:`, `//`, `?`, `#`) belong to none of them.
///
/// [`split`]: crate::parser::split
/// [`split_range`]: crate::parser::split_range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedReference<'a> {
    /// The full text the spans index into.
    pub(crate) text: &'a str,
    /// Scheme span, without the trailing `:`.
    pub(crate) scheme: Option<Span>,
    /// Authority span, without the leading `//`.
    pub(crate) authority: Option<Span>,
    /// Path span. Always valid, possibly empty.
    pub(crate) path: Span,
    /// Query span, without the leading `?`.
    pub(crate) query: Option<Span>,
    /// Fragment span, without the leading `#`.
    pub(crate) fragment: Option<Span>,
}

impl<'a> ParsedReference<'a> {
    /// Creates a reference for empty input, anchored at the given position.
    #[inline]
    #[must_use]
    pub(crate) fn empty_at(text: &'a str, pos: usize) -> Self {
        Self {
            text,
            scheme: None,
            authority: None,
            path: Span {
                start: pos,
                end: pos,
            },
            query: None,
            fragment: None,
        }
    }

    /// Returns the text the component spans index into.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the scheme, if present.
    ///
    /// The scheme is case-insensitive; callers comparing schemes should
    /// lowercase it first (e.g. with `str::to_ascii_lowercase`).
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&'a str> {
        self.scheme.map(|span| &self.text[span.to_range()])
    }

    /// Returns the authority, if present.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&'a str> {
        self.authority.map(|span| &self.text[span.to_range()])
    }

    /// Returns the path. Always present, possibly empty.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &'a str {
        &self.text[self.path.to_range()]
    }

    /// Returns the query, if present.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&'a str> {
        self.query.map(|span| &self.text[span.to_range()])
    }

    /// Returns the fragment, if present.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment.map(|span| &self.text[span.to_range()])
    }

    /// Returns the byte range of the scheme, if present.
    #[inline]
    #[must_use]
    pub fn scheme_range(&self) -> Option<Range<usize>> {
        self.scheme.map(Span::to_range)
    }

    /// Returns the byte range of the authority, if present.
    #[inline]
    #[must_use]
    pub fn authority_range(&self) -> Option<Range<usize>> {
        self.authority.map(Span::to_range)
    }

    /// Returns the byte range of the path.
    #[inline]
    #[must_use]
    pub fn path_range(&self) -> Range<usize> {
        self.path.to_range()
    }

    /// Returns the byte range of the query, if present.
    #[inline]
    #[must_use]
    pub fn query_range(&self) -> Option<Range<usize>> {
        self.query.map(Span::to_range)
    }

    /// Returns the byte range of the fragment, if present.
    #[inline]
    #[must_use]
    pub fn fragment_range(&self) -> Option<Range<usize>> {
        self.fragment.map(Span::to_range)
    }

    /// Returns `true` if the scheme component is present.
    #[inline]
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        self.scheme.is_some()
    }

    /// Returns `true` if the authority component is present.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.authority.is_some()
    }

    /// Returns `true` if the reference is relative, i.e. has no scheme.
    ///
    /// See [RFC 3986 section 4.2](https://tools.ietf.org/html/rfc3986#section-4.2).
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.scheme.is_none()
    }
}
