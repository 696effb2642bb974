use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semver_range::{parse_range, Version, VersionFilter};

const SIMPLE: &str = ">1.0.0";
const AVERAGE: &str = ">=1.0.0 <2.0.0";
const COMPLEX: &str = ">=1.0.0 <2.0.0 || >=3.0.1 <4.0.0 !=3.0.3 || >=5.0.0";

fn bench_parse_range(c: &mut Criterion) {
    c.bench_function("range_parse_simple", |b| b.iter(|| black_box(parse_range(black_box(SIMPLE)).ok())));
    c.bench_function("range_parse_average", |b| b.iter(|| black_box(parse_range(black_box(AVERAGE)).ok())));
    c.bench_function("range_parse_complex", |b| b.iter(|| black_box(parse_range(black_box(COMPLEX)).ok())));

    let shorthands = ["^1.2.3 || ~2.4", "1.2.* || 2.*", "1.2.3 - 2.0.0", ">= 1.x < 3", "!=1.x"];
    c.bench_function("range_parse_shorthands", |b| {
        b.iter(|| {
            for range in shorthands {
                black_box(parse_range(black_box(range)).ok());
            }
        })
    });
}

fn bench_match_range(c: &mut Criterion) {
    let cases = [
        ("range_match_simple", SIMPLE, Version::new(2, 0, 0)),
        ("range_match_average", AVERAGE, Version::new(1, 2, 3)),
        ("range_match_complex", COMPLEX, Version::new(5, 0, 1)),
    ];

    for (name, range, version) in cases {
        let range = parse_range(range).expect("parse range");
        c.bench_function(name, |b| b.iter(|| black_box(range.matches(black_box(&version)))));
    }
}

fn bench_version_filter(c: &mut Criterion) {
    let versions = [
        "1.0.0", "0.1.0", "0.1.1", "3.2.1", "2.4.0-alpha", "2.4.0", "50.2.0", "1.2.3", "2.4.5", "2.4.5-rc.1",
    ];

    c.bench_function("version_filter_max_satisfying", |b| {
        b.iter(|| black_box(VersionFilter::max_satisfying(black_box(&versions), black_box("^2.4"))))
    });
    c.bench_function("version_filter_sort", |b| b.iter(|| black_box(VersionFilter::sort(black_box(&versions)))));
}

criterion_group!(benches, bench_parse_range, bench_match_range, bench_version_filter);
criterion_main!(benches);
