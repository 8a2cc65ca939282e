//! Error types untuk record I/O
//!
//! End-of-stream BUKAN error: di-signal lewat `Ok(None)` dari reader.

use crate::protocol::Record;

/// Error dari layer record I/O
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Device error, permission, disk full, dll.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid batch size {0}: must be at least 1")]
    InvalidBatchSize(usize),

    /// Ekor file bukan kelipatan record size (hanya dengan `TailPolicy::Error`)
    #[error("Torn record at end of stream: {trailing} trailing bytes")]
    TornRecord { trailing: usize },

    /// Cursor batch buffer di luar record yang tersedia
    #[error("Cursor {cursor} out of bounds for {len} buffered bytes")]
    CursorOutOfBounds { cursor: usize, len: usize },

    #[error("Slice too short for a record: {len} bytes")]
    ShortSlice { len: usize },

    /// Record tidak sesuai sequence yang diharapkan
    #[error("Record {index} did not match expected value ({expected}), found ({found}). Is endianness correct?")]
    Mismatch {
        index: u64,
        expected: Record,
        found: Record,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
