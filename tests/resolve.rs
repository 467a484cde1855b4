//! Tests for reference resolution.

use iri_ref::parser::ParseMode;
use iri_ref::resolve::resolve;

/// Test cases.
// [(base, [(input, output)])]
const TEST_CASES: &[(&str, &[(&str, &str)])] = &[
    // RFC 3986, section 5.2.4.
    ("scheme:///a/b/c/./../../", &[("g", "scheme:///a/g")]),
    ("scheme:///a/b/c/./../", &[("../g", "scheme:///a/g")]),
    ("scheme:///a/b/c/./", &[("../../g", "scheme:///a/g")]),
    ("scheme:///a/b/c/", &[("./../../g", "scheme:///a/g")]),
    ("scheme:///a/b/", &[("c/./../../g", "scheme:///a/g")]),
    ("scheme:///a/", &[("b/c/./../../g", "scheme:///a/g")]),
    ("scheme:///", &[("a/b/c/./../../g", "scheme:///a/g")]),
    ("scheme:mid/content=5/../", &[("6", "scheme:mid/6")]),
    ("scheme:mid/content=5/", &[("../6", "scheme:mid/6")]),
    ("scheme:mid/", &[("content=5/../6", "scheme:mid/6")]),
    ("scheme:", &[("mid/content=5/../6", "scheme:mid/6")]),
    // RFC 3986, section 5.4.1.
    (
        "http://a/b/c/d;p?q",
        &[
            ("g:h", "g:h"),
            ("g", "http://a/b/c/g"),
            ("./g", "http://a/b/c/g"),
            ("g/", "http://a/b/c/g/"),
            ("/g", "http://a/g"),
            ("//g", "http://g"),
            ("?y", "http://a/b/c/d;p?y"),
            ("g?y", "http://a/b/c/g?y"),
            ("#s", "http://a/b/c/d;p?q#s"),
            ("g#s", "http://a/b/c/g#s"),
            ("g?y#s", "http://a/b/c/g?y#s"),
            (";x", "http://a/b/c/;x"),
            ("g;x", "http://a/b/c/g;x"),
            ("g;x?y#s", "http://a/b/c/g;x?y#s"),
            ("", "http://a/b/c/d;p?q"),
            (".", "http://a/b/c/"),
            ("./", "http://a/b/c/"),
            ("..", "http://a/b/"),
            ("../", "http://a/b/"),
            ("../g", "http://a/b/g"),
            ("../..", "http://a/"),
            ("../../", "http://a/"),
            ("../../g", "http://a/g"),
        ],
    ),
    // RFC 3986, section 5.4.2.
    (
        "http://a/b/c/d;p?q",
        &[
            ("../../../g", "http://a/g"),
            ("../../../../g", "http://a/g"),
            ("/./g", "http://a/g"),
            ("g.", "http://a/b/c/g."),
            (".g", "http://a/b/c/.g"),
            ("g..", "http://a/b/c/g.."),
            ("..g", "http://a/b/c/..g"),
            ("./../g", "http://a/b/g"),
            ("g/./h", "http://a/b/c/g/h"),
            ("g/../h", "http://a/b/c/h"),
            ("g;x=1/./y", "http://a/b/c/g;x=1/y"),
            ("g?y/./x", "http://a/b/c/g?y/./x"),
            ("g?y/../x", "http://a/b/c/g?y/../x"),
            ("g#s/./x", "http://a/b/c/g#s/./x"),
            ("g#s/../x", "http://a/b/c/g#s/../x"),
        ],
    ),
    // IRI references resolve the same way.
    (
        "http://r\u{E9}sum\u{E9}.example.org/b/",
        &[
            ("ros\u{E9}", "http://r\u{E9}sum\u{E9}.example.org/b/ros\u{E9}"),
            ("../x", "http://r\u{E9}sum\u{E9}.example.org/x"),
        ],
    ),
];

#[test]
fn resolves_against_bases() {
    for (base, cases) in TEST_CASES {
        for (input, expected) in *cases {
            let got = resolve(input, base, ParseMode::IriStrict)
                .unwrap_or_else(|| panic!("should resolve: input={:?} base={:?}", input, base));
            assert_eq!(
                got, *expected,
                "input={:?} base={:?}",
                input, base
            );
        }
    }
}

#[test]
fn ascii_cases_resolve_as_uris_too() {
    for (base, cases) in TEST_CASES {
        if !base.is_ascii() {
            continue;
        }
        for (input, expected) in *cases {
            let got = resolve(input, base, ParseMode::UriStrict)
                .unwrap_or_else(|| panic!("should resolve: input={:?} base={:?}", input, base));
            assert_eq!(got, *expected, "input={:?} base={:?}", input, base);
        }
    }
}

#[test]
fn invalid_reference_yields_none() {
    assert!(resolve("x@y:z", "http://a/b", ParseMode::IriStrict).is_none());
    assert!(resolve("a b", "http://a/b", ParseMode::IriStrict).is_none());
}

#[test]
fn invalid_base_returns_reference_unchanged() {
    assert_eq!(
        resolve("a/b/c", "no base", ParseMode::IriStrict).as_deref(),
        Some("a/b/c")
    );
    assert_eq!(
        resolve("g", "x@y:z", ParseMode::IriStrict).as_deref(),
        Some("g")
    );
}

#[test]
fn lenient_resolution_skips_legality_checks() {
    // Neither side parses strictly, yet lenient modes still resolve.
    assert_eq!(
        resolve("g h", "http://a/b c/d", ParseMode::IriLenient).as_deref(),
        Some("http://a/b c/g h")
    );
}

#[test]
fn merge_with_authority_and_empty_base_path() {
    assert_eq!(
        resolve("g", "http://h", ParseMode::IriStrict).as_deref(),
        Some("http://h/g")
    );
    assert_eq!(
        resolve("g", "scheme:x", ParseMode::IriStrict).as_deref(),
        Some("scheme:g")
    );
}
