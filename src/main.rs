//! endio - Batched Big-Endian Record I/O
//!
//! Benchmark round-trip: tulis file referensi sekali, lalu baca dengan
//! setiap strategi dan bandingkan latency per record.

use endio::config::{ReadStrategy, ReaderConfig, WriterConfig};
use endio::driver::{read_session, write_session};
use endio::protocol::{decode, encode};
use endio::{ByteOrder, ByteSwap, Record};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("endio - Record I/O Benchmark");
    println!("============================\n");
    println!("Host order: {}\n", ByteOrder::detect());

    benchmark_swap();
    benchmark_codec();
    benchmark_file_io()?;

    println!("\nAll benchmarks complete!");
    println!("\nTo write a data file: cargo run --release --bin endio_writer -- 1000000");
    Ok(())
}

fn benchmark_swap() {
    println!("Byte-Swap Benchmark");
    println!("-------------------");

    const ITERATIONS: u64 = 10_000_000;

    let start = Instant::now();
    let mut acc = 0u64;
    for i in 0..ITERATIONS {
        acc ^= std::hint::black_box(i).swap();
    }
    let duration = start.elapsed();
    std::hint::black_box(acc);

    println!(
        "  u64 swap: {:.2} ns/op\n",
        duration.as_nanos() as f64 / ITERATIONS as f64
    );
}

fn benchmark_codec() {
    println!("Codec Benchmark");
    println!("---------------");

    const ITERATIONS: u64 = 1_000_000;
    let host = ByteOrder::detect();

    let start = Instant::now();
    let mut last = [0u8; 16];
    for i in 0..ITERATIONS {
        last = encode(&Record::splat(std::hint::black_box(i)), host);
    }
    let encode_duration = start.elapsed();

    let start = Instant::now();
    let mut decoded = Record::default();
    for _ in 0..ITERATIONS {
        decoded = decode(std::hint::black_box(&last), host);
    }
    let decode_duration = start.elapsed();
    std::hint::black_box(decoded);

    println!(
        "  Encode latency: {:.2} ns/op",
        encode_duration.as_nanos() as f64 / ITERATIONS as f64
    );
    println!(
        "  Decode latency: {:.2} ns/op\n",
        decode_duration.as_nanos() as f64 / ITERATIONS as f64
    );
}

fn benchmark_file_io() -> anyhow::Result<()> {
    println!("File I/O Benchmark");
    println!("------------------");

    const RECORDS: u64 = 1_000_000;

    let path = std::env::temp_dir().join(format!("endio_bench_{}.dat", std::process::id()));
    let writer = WriterConfig {
        path: path.clone(),
        count: RECORDS,
        ..WriterConfig::default()
    };

    let start = Instant::now();
    write_session(&writer)?;
    let write_duration = start.elapsed();
    println!(
        "  Write: {:.2} ns/record ({:.2} MB/sec)",
        write_duration.as_nanos() as f64 / RECORDS as f64,
        (RECORDS * 16) as f64 / write_duration.as_secs_f64() / 1_000_000.0
    );

    let strategies = [
        ReadStrategy::Naive,
        ReadStrategy::Batched(1),
        ReadStrategy::Batched(2),
        ReadStrategy::Batched(64),
        ReadStrategy::Batched(4096),
        ReadStrategy::Mapped,
    ];

    let mut result = Ok(());
    for strategy in strategies {
        let config = ReaderConfig {
            path: path.clone(),
            strategy,
            ..ReaderConfig::default()
        };

        let start = Instant::now();
        match read_session(&config) {
            Ok(summary) => {
                let duration = start.elapsed();
                println!(
                    "  Read {:<36} {:>8.2} ns/record ({} records)",
                    strategy.to_string(),
                    duration.as_nanos() as f64 / summary.records.max(1) as f64,
                    summary.records
                );
            }
            Err(e) => {
                result = Err(e.into());
                break;
            }
        }
    }

    std::fs::remove_file(&path).ok();
    result
}
