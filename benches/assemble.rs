use criterion::{Criterion, criterion_group, criterion_main};
use quarry::prelude::*;
use std::hint::black_box;

fn build(dialect: Dialect) -> Select {
    let mut select = quarry::select(dialect);
    select
        .from("users AS u", ["id", "name", "email"])
        .unwrap()
        .join_left("posts AS p", "p.user_id = u.id", ["title", "COUNT(p.id) AS posts"])
        .unwrap()
        .join_inner_using("profiles", &["user_id"], "bio")
        .unwrap()
        .where_bind("u.active = ?", true)
        .unwrap()
        .where_bind("u.name LIKE ?", "%o'neil%")
        .unwrap()
        .group(["u.id", "u.name"])
        .having_bind("COUNT(p.id) > ?", 3)
        .unwrap()
        .order(["u.name DESC", "2"])
        .limit_page(4, 50);
    select
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for dialect in Dialect::ALL {
        group.bench_function(dialect.as_str(), |b| b.iter(|| build(black_box(dialect))));
    }
    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    for dialect in Dialect::ALL {
        let select = build(dialect);
        group.bench_function(dialect.as_str(), |b| {
            b.iter(|| black_box(&select).assemble().unwrap())
        });
    }
    group.finish();
}

fn bench_quote(c: &mut Criterion) {
    let adapter = Adapter::new(Dialect::MySQL);
    let text = Value::from("it's a \"quoted\"\nline with \\ backslash");
    let list = Value::from((0..64).collect::<Vec<i64>>());

    c.bench_function("quote/text", |b| {
        b.iter(|| adapter.quote(black_box(&text), None).unwrap())
    });
    c.bench_function("quote/list", |b| {
        b.iter(|| adapter.quote(black_box(&list), None).unwrap())
    });
    c.bench_function("quote/bigint_hint", |b| {
        b.iter(|| {
            adapter
                .quote(black_box(&text), Some(QuoteType::BigInt))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_build, bench_assemble, bench_quote);
criterion_main!(benches);
