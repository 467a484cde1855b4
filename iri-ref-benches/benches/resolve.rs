use criterion::{criterion_group, criterion_main, Criterion};

use iri_ref::parser::ParseMode;
use iri_ref::resolve::resolve;

pub fn criterion_benchmark(c: &mut Criterion) {
    let base = "https://sub.example.com/foo1/foo2/foo3/foo4/foo5";
    let rel = concat!(
        "bar1/bar2/bar3/../bar4/../../bar5/bar6/bar7/../../../../..",
        "/bar8/../../../bar9/././././././bar10/bar11",
    );

    c.bench_function("resolve deep relative path", |b| {
        b.iter(|| resolve(rel, base, ParseMode::IriStrict).expect("should be a valid reference"))
    });

    c.bench_function("resolve query only", |b| {
        b.iter(|| {
            resolve("?k1=v1&k2=v2", base, ParseMode::IriStrict)
                .expect("should be a valid reference")
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
