use criterion::{criterion_group, criterion_main, Criterion};

use iri_ref::parser::{split, ParseMode};

pub fn criterion_benchmark(c: &mut Criterion) {
    let domain = "scheme://sub.sub.sub.example.com:8080/a/b/c";
    let v4 = "scheme://198.51.100.23:8080/a/b/c";
    let v6 = "scheme://[2001:db8:0123::cafe]:8080/a/b/c";
    let v6v4 = "scheme://[2001:db8::198.51.100.23]:8080/a/b/c";
    let vfuture = "scheme://[v2.ipv2-does-not-exist]:8080/a/b/c";

    c.bench_function("split various hosts", |b| {
        b.iter(|| {
            (
                split(domain, ParseMode::IriStrict),
                split(v4, ParseMode::IriStrict),
                split(v6, ParseMode::IriStrict),
                split(v6v4, ParseMode::IriStrict),
                split(vfuture, ParseMode::IriStrict),
            )
        })
    });

    c.bench_function("split complex path", |b| {
        let s = concat!(
            "scheme://user:pw@sub.example.com:8080/a/b/c/%30/%31/%32%33%34",
            "/foo/foo/../../../foo.foo/foo/foo/././././//////foo",
            "/\u{03B1}\u{03B2}\u{03B3}/\u{03B1}\u{03B2}\u{03B3}/\u{03B1}\u{03B2}\u{03B3}",
            "?k1=v1&k2=v2&k3=v3#fragment"
        );
        b.iter(|| split(s, ParseMode::IriStrict));
    });

    c.bench_function("split lenient", |b| {
        let s = "scheme://user @host/a b/c?query query#frag frag";
        b.iter(|| split(s, ParseMode::IriLenient));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
