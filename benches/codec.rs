#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use det_cbor::{decode, dump, encode, Map, Value};

fn sample_small() -> Value {
    let mut map = Map::new();
    map.insert("a", 1);
    Value::from(map)
}

fn sample_medium() -> Value {
    let mut map = Map::new();
    for i in 0..64i64 {
        let entry = Value::from(vec![
            Value::from(i),
            Value::from(format!("value-{i:03}")),
            Value::from(f64::from(i32::try_from(i).unwrap()) + 0.5),
        ]);
        map.insert(format!("k{i:03}"), entry);
    }
    Value::from(map)
}

fn bench_codec(c: &mut Criterion) {
    let small = sample_small();
    let small_bytes = encode(&small);

    c.bench_function("encode_small", |b| {
        b.iter(|| encode(black_box(&small)));
    });

    c.bench_function("decode_small", |b| {
        b.iter(|| decode(black_box(&small_bytes)).unwrap());
    });

    let medium = sample_medium();
    let medium_bytes = encode(&medium);

    c.bench_function("encode_medium", |b| {
        b.iter(|| encode(black_box(&medium)));
    });

    c.bench_function("decode_medium", |b| {
        b.iter(|| decode(black_box(&medium_bytes)).unwrap());
    });

    c.bench_function("dump_annotated_medium", |b| {
        b.iter(|| dump(black_box(&medium), true, None));
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
