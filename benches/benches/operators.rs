use criterion::{Criterion, criterion_group, criterion_main};
use normalize_js_runtime::{Value, add, enumerate_keys, loose_equal, rem, strict_equal, to_number};
use std::hint::black_box;

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let a = Value::from(-7.5);
    let b = Value::from(3);
    let s = Value::from("12.5e3");

    group.bench_function("add_numbers", |bench| {
        bench.iter(|| add(black_box(&a), black_box(&b)))
    });
    group.bench_function("add_concat", |bench| {
        bench.iter(|| add(black_box(&s), black_box(&b)))
    });
    group.bench_function("rem", |bench| bench.iter(|| rem(black_box(&a), black_box(&b))));
    group.bench_function("to_number_string", |bench| {
        bench.iter(|| to_number(black_box(&s)))
    });
    group.finish();
}

fn bench_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("equality");
    let n = Value::from(5);
    let s = Value::from("5");
    let obj = Value::object();

    group.bench_function("strict_identity", |bench| {
        bench.iter(|| strict_equal(black_box(&obj), black_box(&obj)))
    });
    group.bench_function("loose_number_string", |bench| {
        bench.iter(|| loose_equal(black_box(&n), black_box(&s)))
    });
    group.finish();
}

fn bench_enumeration(c: &mut Criterion) {
    let arr = Value::array((0..1000).map(|i| {
        if i % 3 == 0 {
            Value::Undefined
        } else {
            Value::from(i)
        }
    }));
    let obj = Value::object_from((0..1000).map(|i| (format!("key{i}"), Value::from(i))));

    c.bench_function("enumerate_array_with_holes", |bench| {
        bench.iter(|| enumerate_keys(black_box(&arr)).count())
    });
    c.bench_function("enumerate_object", |bench| {
        bench.iter(|| enumerate_keys(black_box(&obj)).count())
    });
}

criterion_group!(benches, bench_arithmetic, bench_equality, bench_enumeration);
criterion_main!(benches);
