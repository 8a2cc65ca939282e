//! endio Writer Binary
//!
//! Menulis N record referensi (1, 2, 3, ...) dalam format big-endian.
//!
//! Usage:
//!   cargo run --release --bin endio_writer -- 100000000

use anyhow::{Context, Result};
use clap::Parser;
use endio::config::WriterConfig;
use endio::driver::write_session;
use endio::{ByteOrder, RECORD_SIZE};
use std::path::PathBuf;
use std::time::Instant;

/// Write incrementing 16-byte big-endian records to a data file
#[derive(Debug, Parser)]
#[command(name = "endio_writer", version)]
struct Args {
    /// Number of records to write
    count: u64,

    /// Output file
    #[arg(short, long, default_value = endio::config::DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Issue one write syscall per record instead of buffering
    #[arg(long)]
    unbuffered: bool,

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
    let config = WriterConfig {
        path: args.file,
        count: args.count,
        buffered: !args.unbuffered,
        host_order: args.assume_order,
    };

    println!(
        "Writing {} {}-byte records to file \"{}\"",
        config.count,
        RECORD_SIZE,
        config.path.display()
    );
    println!(
        "Final file size: {} MB",
        config.count * RECORD_SIZE as u64 / 1024 / 1024
    );

    let start = Instant::now();
    let summary = write_session(&config)
        .with_context(|| format!("failed to write {}", config.path.display()))?;
    let elapsed = start.elapsed();

    if let Some(last) = summary.last {
        println!("Last record written to file:\n{}", last.report());
    }
    println!(
        "Wrote {} bytes in {:.3}s ({:.2} MB/sec)",
        summary.bytes,
        elapsed.as_secs_f64(),
        summary.bytes as f64 / elapsed.as_secs_f64().max(f64::EPSILON) / 1_000_000.0
    );

    Ok(())
}
