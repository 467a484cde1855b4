//! Building an IRI from components.
//!
//! [`build_iri`] assembles a reference from an optional scheme-plus-
//! authority prefix, a path, and optional query and fragment parts,
//! escaping each part as needed and re-validating the assembled text.
//!
//! Note that `?` is escaped in every part, including the query and
//! fragment where the grammar would allow it raw. Texts produced here
//! therefore never contain a raw `?` after the first one, and consumers
//! may rely on that; do not "fix" a `%3F` back into `?` when echoing a
//! built reference.

use alloc::string::String;

use core::fmt;

use crate::parser::{self, char, ParseMode};
use crate::percent;

/// IRI building error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error(ErrorKind);

/// What went wrong while building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    /// The scheme-and-authority part had more than a scheme and authority.
    SchemeAuthority,
    /// The assembled text does not parse as an IRI reference.
    Unparsable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorKind::SchemeAuthority => {
                f.write_str("invalid scheme and authority for an IRI")
            }
            ErrorKind::Unparsable => f.write_str("assembled text is not a valid IRI reference"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Appends a path, query, or fragment part, escaping as needed.
///
/// Well-formed percent triplets are preserved; a lone `%` is escaped to
/// `%25`. Beyond the unreserved characters, the part keeps the delimiters
/// that are harmless inside a path (`/ ( = ) : ! $ & ' * + , ; @`) and
/// escapes everything else, `?` included.
fn append_escaped(buf: &mut String, s: &str) {
    let bytes = s.as_bytes();
    let mut iter = s.char_indices();
    while let Some((i, c)) = iter.next() {
        if c == '%' {
            if char::is_pct_triplet(bytes, i, s.len()) {
                buf.push_str(&s[i..i + 3]);
                iter.next();
                iter.next();
            } else {
                buf.push_str("%25");
            }
        } else if c.is_ascii_alphanumeric()
            || matches!(
                c,
                '-' | '_'
                    | '.'
                    | '~'
                    | '/'
                    | '('
                    | '='
                    | ')'
                    | ':'
                    | '!'
                    | '$'
                    | '&'
                    | '\''
                    | '*'
                    | '+'
                    | ','
                    | ';'
                    | '@'
            )
        {
            buf.push(c);
        } else {
            percent::encode_utf8_to(buf, c);
        }
    }
}

/// Builds an IRI reference from components.
///
/// `scheme_and_authority`, when given and non-empty, must consist of
/// exactly a scheme and/or an authority — that is, it must split with an
/// empty path and neither query nor fragment (e.g. `http://example.com` or
/// `urn:`). It is prepended verbatim.
///
/// `path` is mandatory (possibly empty); `query` and `fragment` are
/// appended behind their `?`/`#` delimiters when given. All three are
/// escaped as described in the module documentation.
///
/// # Errors
///
/// Fails when `scheme_and_authority` does not have the required shape, or
/// when the assembled text does not parse back as a valid IRI reference
/// (for example, a relative path whose first segment contains a colon).
///
/// # Examples
///
/// ```
/// use iri_ref::build::build_iri;
///
/// let iri = build_iri(Some("http://example.com"), "/a b", Some("x=1"), None)?;
/// assert_eq!(iri, "http://example.com/a%20b?x=1");
///
/// let path_only = build_iri(None, "a b", None, None)?;
/// assert_eq!(path_only, "a%20b");
/// # Ok::<_, iri_ref::build::Error>(())
/// ```
pub fn build_iri(
    scheme_and_authority: Option<&str>,
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> Result<String, Error> {
    let mut buf = String::new();
    if let Some(prefix) = scheme_and_authority.filter(|s| !s.is_empty()) {
        let is_scheme_authority_only = parser::split(prefix, ParseMode::IriStrict)
            .map_or(false, |r| {
                (r.has_scheme() || r.has_authority())
                    && r.path().is_empty()
                    && r.query().is_none()
                    && r.fragment().is_none()
            });
        if !is_scheme_authority_only {
            return Err(Error(ErrorKind::SchemeAuthority));
        }
        buf.push_str(prefix);
    }
    append_escaped(&mut buf, path);
    if let Some(query) = query {
        buf.push('?');
        append_escaped(&mut buf, query);
    }
    if let Some(fragment) = fragment {
        buf.push('#');
        append_escaped(&mut buf, fragment);
    }
    if parser::split(&buf, ParseMode::IriStrict).is_none() {
        return Err(Error(ErrorKind::Unparsable));
    }
    Ok(buf)
}
