//! Reference resolution against a base.
//!
//! [`resolve`] implements the transform of
//! [RFC 3986 section 5.3](https://tools.ietf.org/html/rfc3986#section-5.3):
//! the target components are picked from the reference where it supplies
//! them and fall back to the base where it does not, with relative paths
//! merged onto the base path and dot segments removed from the result.
//!
//! The base is expected to be an absolute reference; a base that does not
//! itself parse leaves the reference untouched rather than failing, so
//! callers can feed through reference strings unconditionally and only
//! branch on an invalid reference.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::components::ParsedReference;
use crate::normalize::{normalize_path, path_parent};
use crate::parser::{self, ParseMode};

/// Appends the scheme and its `:` delimiter, if present.
fn append_scheme(buf: &mut String, r: &ParsedReference<'_>) {
    if let Some(scheme) = r.scheme() {
        buf.push_str(scheme);
        buf.push(':');
    }
}

/// Appends `//` and the authority, if present.
fn append_authority(buf: &mut String, r: &ParsedReference<'_>) {
    if let Some(authority) = r.authority() {
        buf.push_str("//");
        buf.push_str(authority);
    }
}

/// Appends the path with dot segments removed.
fn append_normalized_path(buf: &mut String, r: &ParsedReference<'_>) {
    buf.push_str(&normalize_path(r.path()));
}

/// Appends `?` and the query, if present.
fn append_query(buf: &mut String, r: &ParsedReference<'_>) {
    if let Some(query) = r.query() {
        buf.push('?');
        buf.push_str(query);
    }
}

/// Appends `#` and the fragment, if present.
fn append_fragment(buf: &mut String, r: &ParsedReference<'_>) {
    if let Some(fragment) = r.fragment() {
        buf.push('#');
        buf.push_str(fragment);
    }
}

/// Resolves a reference against a base reference.
///
/// Both strings are split under the given mode. Returns `None` when the
/// reference itself does not parse. When the base does not parse, the
/// reference text is returned unchanged (borrowed); resolution cannot
/// improve on it.
///
/// # Examples
///
/// ```
/// use iri_ref::parser::ParseMode;
/// use iri_ref::resolve::resolve;
///
/// let base = "http://a/b/c/d;p?q";
/// let m = ParseMode::IriStrict;
/// assert_eq!(resolve("g", base, m).as_deref(), Some("http://a/b/c/g"));
/// assert_eq!(resolve("../g", base, m).as_deref(), Some("http://a/b/g"));
/// assert_eq!(resolve("?y", base, m).as_deref(), Some("http://a/b/c/d;p?y"));
/// assert_eq!(resolve("g:h", base, m).as_deref(), Some("g:h"));
/// ```
#[must_use]
pub fn resolve<'a>(reference: &'a str, base: &str, mode: ParseMode) -> Option<Cow<'a, str>> {
    let r = parser::split(reference, mode)?;
    let b = match parser::split(base, mode) {
        Some(b) => b,
        None => return Some(Cow::Borrowed(reference)),
    };

    let mut buf = String::with_capacity(base.len() + reference.len());
    if r.has_scheme() {
        append_scheme(&mut buf, &r);
        append_authority(&mut buf, &r);
        append_normalized_path(&mut buf, &r);
        append_query(&mut buf, &r);
        append_fragment(&mut buf, &r);
    } else if r.has_authority() {
        append_scheme(&mut buf, &b);
        append_authority(&mut buf, &r);
        append_normalized_path(&mut buf, &r);
        append_query(&mut buf, &r);
        append_fragment(&mut buf, &r);
    } else if r.path().is_empty() {
        // The reference changes at most the query and fragment; the base
        // path is carried over verbatim, not normalized.
        append_scheme(&mut buf, &b);
        append_authority(&mut buf, &b);
        buf.push_str(b.path());
        if r.query().is_some() {
            append_query(&mut buf, &r);
        } else {
            append_query(&mut buf, &b);
        }
        append_fragment(&mut buf, &r);
    } else {
        append_scheme(&mut buf, &b);
        append_authority(&mut buf, &b);
        if r.path().starts_with('/') {
            append_normalized_path(&mut buf, &r);
        } else {
            let mut merged = String::with_capacity(b.path().len() + r.path().len() + 1);
            if b.has_authority() && b.path().is_empty() {
                merged.push('/');
            } else {
                merged.push_str(path_parent(b.path()));
            }
            merged.push_str(r.path());
            buf.push_str(&normalize_path(&merged));
        }
        append_query(&mut buf, &r);
        append_fragment(&mut buf, &r);
    }
    Some(Cow::Owned(buf))
}
