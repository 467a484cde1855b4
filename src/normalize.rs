//! Path normalization.
//!
//! [`normalize_path`] removes dot segments from a path, the
//! `remove_dot_segments` algorithm of [RFC 3986 section 5.2.4]. It is the
//! path half of reference resolution, exposed on its own because resolved
//! outputs are expected to be normalized even when the reference is used
//! directly.
//!
//! [RFC 3986 section 5.2.4]: https://tools.ietf.org/html/rfc3986#section-5.2.4

use alloc::borrow::Cow;
use alloc::string::String;

use memchr::{memchr, memrchr};
use memchr::memmem;

/// Removes dot segments (`.` and `..`) from the given path.
///
/// The input `.` and `..` normalize to the empty string, and a trailing
/// `/.` or `/..` keeps its trailing slash, so this function is closed over
/// its own output: normalizing twice yields the same text as normalizing
/// once.
///
/// Paths containing neither `/.` nor `./` are returned as-is without
/// allocating.
///
/// # Examples
///
/// ```
/// use iri_ref::normalize::normalize_path;
///
/// assert_eq!(normalize_path("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(normalize_path("mid/content=5/../6"), "mid/6");
/// assert_eq!(normalize_path(".."), "");
/// assert_eq!(normalize_path("/a/b/.."), "/a/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.is_empty() || path == "." || path == ".." {
        return Cow::Borrowed("");
    }
    let bytes = path.as_bytes();
    if memmem::find(bytes, b"/.").is_none() && memmem::find(bytes, b"./").is_none() {
        return Cow::Borrowed(path);
    }

    let len = path.len();
    let mut buf = String::with_capacity(len);
    let mut i = 0;
    while i < len {
        let c = bytes[i];
        if (i + 3 <= len && c == b'/' && bytes[i + 1] == b'.' && bytes[i + 2] == b'/')
            || (i + 2 == len && c == b'.' && bytes[i + 1] == b'.')
        {
            // "/./" prefix, or all that remains is "..".
            i += 2;
            continue;
        }
        if i + 3 <= len && c == b'.' && bytes[i + 1] == b'.' && bytes[i + 2] == b'/' {
            // "../" prefix.
            i += 3;
            continue;
        }
        if (i + 2 <= len && c == b'.' && bytes[i + 1] == b'/') || (i + 1 == len && c == b'.') {
            // "./" prefix, or all that remains is ".".
            i += 1;
            continue;
        }
        if i + 2 == len && c == b'/' && bytes[i + 1] == b'.' {
            // Trailing "/." keeps its slash.
            buf.push('/');
            break;
        }
        if i + 3 == len && c == b'/' && bytes[i + 1] == b'.' && bytes[i + 2] == b'.' {
            // Trailing "/..": drop the previous segment, keep the slash.
            truncate_last_segment(&mut buf);
            buf.push('/');
            break;
        }
        if i + 4 <= len && c == b'/' && bytes[i + 1] == b'.' && bytes[i + 2] == b'.' && bytes[i + 3] == b'/'
        {
            // "/../" prefix: drop the previous segment.
            truncate_last_segment(&mut buf);
            i += 3;
            continue;
        }
        // An ordinary segment; copy it through to the next slash.
        let next = memchr(b'/', &bytes[i + 1..]).map_or(len, |pos| i + 1 + pos);
        buf.push_str(&path[i..next]);
        i = next;
    }
    Cow::Owned(buf)
}

/// Truncates the buffer back through its last `/`, exclusive.
fn truncate_last_segment(buf: &mut String) {
    match memrchr(b'/', buf.as_bytes()) {
        Some(pos) => buf.truncate(pos),
        None => buf.clear(),
    }
}

/// Returns the prefix of the path up to and including its last `/`.
///
/// Returns the empty string when the path has no slash at all. This is the
/// "all but the last segment" step of merging a relative path onto a base
/// (RFC 3986 section 5.3, `merge`).
#[must_use]
pub(crate) fn path_parent(path: &str) -> &str {
    match memrchr(b'/', path.as_bytes()) {
        Some(pos) => &path[..=pos],
        None => "",
    }
}
