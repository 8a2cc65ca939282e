//! Criterion benchmark untuk codec dan batched reader
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use endio::io::BatchedReader;
use endio::protocol::{decode, encode};
use endio::{ByteOrder, ByteSwap, Record};
use std::io::Cursor;

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(1));
    let host = ByteOrder::detect();

    group.bench_function("swap_u64", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i = i.wrapping_add(1);
            black_box(black_box(i).swap())
        });
    });

    group.bench_function("encode", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i = i.wrapping_add(1);
            black_box(encode(&Record::splat(black_box(i)), host))
        });
    });

    group.bench_function("decode", |b| {
        let bytes = encode(&Record::splat(42), host);
        b.iter(|| black_box(decode(black_box(&bytes), host)));
    });

    group.finish();
}

fn bench_batched_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("batched_reader");
    const RECORDS: u64 = 10_000;

    let host = ByteOrder::detect();
    let data: Vec<u8> = (1..=RECORDS)
        .flat_map(|i| encode(&Record::splat(i), host))
        .collect();

    for batch_size in [1usize, 2, 64, 1024].iter() {
        group.throughput(Throughput::Elements(RECORDS));
        group.bench_function(format!("batch_{}", batch_size), |b| {
            b.iter(|| {
                let mut reader =
                    BatchedReader::new(Cursor::new(data.as_slice()), *batch_size, host).unwrap();
                let mut count = 0u64;
                while let Some(r) = reader.next_record().unwrap() {
                    black_box(r);
                    count += 1;
                }
                count
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec, bench_batched_reader);
criterion_main!(benches);
