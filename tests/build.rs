//! Tests for the builder.

use iri_ref::build::build_iri;
use iri_ref::validate::is_valid_iri;

/// Successful build cases.
// [((scheme_and_authority, path, query, fragment), built)]
const OK_CASES: &[((Option<&str>, &str, Option<&str>, Option<&str>), &str)] = &[
    ((None, "", None, None), ""),
    ((None, "a b", None, None), "a%20b"),
    ((None, "a/b", None, None), "a/b"),
    ((Some("http://example.com"), "", None, None), "http://example.com"),
    (
        (Some("http://example.com"), "/a b", Some("x=1"), None),
        "http://example.com/a%20b?x=1",
    ),
    (
        (Some("http://example.com"), "/p", Some("q"), Some("f")),
        "http://example.com/p?q#f",
    ),
    // Absent versus empty parts.
    ((None, "p", Some(""), None), "p?"),
    ((None, "p", None, Some("")), "p#"),
    // The question mark is escaped even in the query and fragment.
    ((None, "p", Some("a?b"), Some("c?d")), "p?a%3Fb#c%3Fd"),
    // Existing triplets are kept; a lone percent is escaped.
    ((None, "a%2Fb", None, None), "a%2Fb"),
    ((None, "50%", None, None), "50%25"),
    // Non-ASCII is percent-encoded as UTF-8.
    ((None, "ros\u{E9}", None, None), "ros%C3%A9"),
    ((None, "\u{3042}", Some("\u{3044}"), None), "%E3%81%82?%E3%81%84"),
    // Scheme-only and authority-only prefixes.
    ((Some("urn:"), "a:b", None, None), "urn:a:b"),
    ((Some("//host"), "/p", None, None), "//host/p"),
];

#[test]
fn builds() {
    for ((sa, path, query, fragment), expected) in OK_CASES {
        let built = build_iri(*sa, path, *query, *fragment)
            .unwrap_or_else(|e| panic!("should build: {:?}: {}", (sa, path, query, fragment), e));
        assert_eq!(&built, expected, "components={:?}", (sa, path, query, fragment));
        assert!(is_valid_iri(&built), "built={:?}", built);
    }
}

#[test]
fn rejects_bad_scheme_and_authority() {
    for sa in [
        "http://example.com/path",
        "http://example.com?query",
        "http://example.com#fragment",
        "relative-name",
        "not a scheme",
    ] {
        assert!(build_iri(Some(sa), "p", None, None).is_err(), "{:?}", sa);
    }
}

#[test]
fn rejects_unparsable_assembly() {
    assert!(build_iri(None, "0x:y", None, None).is_err());
}

#[test]
fn error_messages_name_the_failure() {
    let scheme_err = build_iri(Some("oops oops"), "p", None, None)
        .expect_err("should fail");
    assert!(scheme_err.to_string().contains("scheme"));
    let parse_err = build_iri(None, "0x:y", None, None).expect_err("should fail");
    assert!(parse_err.to_string().contains("not a valid IRI"));
}
