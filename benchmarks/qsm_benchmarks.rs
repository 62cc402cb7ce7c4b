#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: qsm vs rebuilding the query with the url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use qsm::{ActionSet, construct_url_params, get_url_params, qsm};

// Rust url crate
use url::Url as UrlCrate;

const SIMPLE: &str = "https://www.google.cz/search?q=hello+world&num=20&tbm=isch";
const REPEATED: &str =
    "https://www.google.cz/search?num=12&q=hello+world&num=x3&num=x4&f%5Bmin%5D=1&f%5Bmax%5D=9";

/// Same manipulation as `set num=40, toggle tbm off` via `form_urlencoded`
fn url_crate_equivalent(input: &str) -> String {
    let mut url = UrlCrate::parse(input).unwrap();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "num" && k != "tbm")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair("num", "40");
    url.into()
}

fn bench_manipulate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("manipulate");
    let actions = ActionSet::new().set("num", 40).toggle("tbm", "isch");

    group.bench_function("qsm_simple", |b| {
        b.iter(|| qsm(black_box(SIMPLE), black_box(&actions)).unwrap());
    });

    group.bench_function("qsm_repeated", |b| {
        b.iter(|| qsm(black_box(REPEATED), black_box(&actions)).unwrap());
    });

    group.bench_function("url_crate_simple", |b| {
        b.iter(|| url_crate_equivalent(black_box(SIMPLE)));
    });

    group.bench_function("url_crate_repeated", |b| {
        b.iter(|| url_crate_equivalent(black_box(REPEATED)));
    });

    group.finish();
}

fn bench_parse_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_serialize");
    let params = get_url_params(REPEATED);

    group.bench_function("get_url_params", |b| {
        b.iter(|| get_url_params(black_box(REPEATED)));
    });

    group.bench_function("construct_url_params", |b| {
        b.iter(|| construct_url_params(black_box(&params)));
    });

    group.finish();
}

criterion_group!(benches, bench_manipulate_all, bench_parse_serialize);

criterion_main!(benches);
