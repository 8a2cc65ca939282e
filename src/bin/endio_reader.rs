//! endio Reader Binary
//!
//! Membaca file data dan memverifikasi setiap record terhadap sequence
//! referensi. Mismatch = exit code 1.
//!
//! Usage:
//!   cargo run --release --bin endio_reader -- 2      # 2 record per read
//!   cargo run --release --bin endio_reader -- 0      # satu field per read
//!   cargo run --release --bin endio_reader -- --mmap

use anyhow::{Context, Result};
use clap::Parser;
use endio::config::{ReadStrategy, ReaderConfig};
use endio::driver::read_session;
use endio::io::TailPolicy;
use endio::ByteOrder;
use std::path::PathBuf;
use std::time::Instant;

/// Read and verify 16-byte big-endian records from a data file
#[derive(Debug, Parser)]
#[command(name = "endio_reader", version)]
struct Args {
    /// Records to read at once (0 = one field at a time)
    #[arg(default_value_t = 2)]
    batch: usize,

    /// Input file
    #[arg(short, long, default_value = endio::config::DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Memory-map the whole file instead of reading in batches
    #[arg(long, conflicts_with = "batch")]
    mmap: bool,

    /// Fail on a torn record at end of file instead of dropping it
    #[arg(long)]
    strict_tail: bool,

    /// Pretend the host has this byte order (big|little)
    #[arg(long, value_name = "ORDER")]
    assume_order: Option<ByteOrder>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let strategy = if args.mmap {
        ReadStrategy::Mapped
    } else {
        ReadStrategy::from_batch_arg(args.batch)
    };
    let config = ReaderConfig {
        path: args.file,
        strategy,
        tail_policy: if args.strict_tail {
            TailPolicy::Error
        } else {
            TailPolicy::Drop
        },
        host_order: args.assume_order,
    };

    println!(
        "Reading {} from file \"{}\"",
        config.strategy,
        config.path.display()
    );

    let start = Instant::now();
    let summary = read_session(&config)
        .with_context(|| format!("failed to verify {}", config.path.display()))?;
    let elapsed = start.elapsed();

    println!("Read {} records from file.", summary.records);
    if let Some(refills) = summary.refills {
        println!("Bulk reads issued: {}", refills);
    }
    match summary.last {
        Some(last) => println!("Last record read from file:\n{}", last.report()),
        None => println!("File contained no records."),
    }
    println!(
        "Elapsed: {:.3}s ({:.2} M records/sec)",
        elapsed.as_secs_f64(),
        summary.records as f64 / elapsed.as_secs_f64().max(f64::EPSILON) / 1_000_000.0
    );

    Ok(())
}
