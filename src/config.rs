//! Session configuration
//!
//! Struct biasa dengan `Default`; binary mengisinya dari argumen CLI.

use crate::core::ByteOrder;
use crate::io::TailPolicy;
use std::path::PathBuf;

/// Nama file data default
pub const DEFAULT_DATA_FILE: &str = "data.dat";

/// Cara membaca file data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStrategy {
    /// Satu read per field
    Naive,
    /// N record per bulk read
    Batched(usize),
    /// Seluruh file via mmap
    Mapped,
}

impl ReadStrategy {
    /// `0` berarti naive, nilai lain adalah batch size
    pub fn from_batch_arg(n: usize) -> Self {
        if n == 0 {
            ReadStrategy::Naive
        } else {
            ReadStrategy::Batched(n)
        }
    }
}

impl std::fmt::Display for ReadStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadStrategy::Naive => f.write_str("naive (one field at a time)"),
            ReadStrategy::Batched(n) => write!(f, "batched ({} records at a time)", n),
            ReadStrategy::Mapped => f.write_str("memory-mapped"),
        }
    }
}

/// Reader session configuration
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub path: PathBuf,
    pub strategy: ReadStrategy,
    pub tail_policy: TailPolicy,
    /// Override host order (default: deteksi otomatis)
    pub host_order: Option<ByteOrder>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
            strategy: ReadStrategy::Batched(2),
            tail_policy: TailPolicy::Drop,
            host_order: None,
        }
    }
}

/// Writer session configuration
#[derive(Debug, Clone)]
pub struct WriterConfig {
    pub path: PathBuf,
    pub count: u64,
    /// Bungkus file dengan `BufWriter`
    pub buffered: bool,
    pub host_order: Option<ByteOrder>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
            count: 0,
            buffered: true,
            host_order: None,
        }
    }
}
