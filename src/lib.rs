//! endio - Batched Big-Endian Record I/O
//!
//! Arsitektur:
//! - core: deteksi host order dan byte-swap 16/32/64-bit
//! - protocol: record 16-byte dan codec field-by-field
//! - io: batched reader (buffer reusable), naive reader, mmap reader, writer
//! - driver: sesi tulis/baca dengan verifikasi sequence

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod io;
pub mod protocol;
pub mod verify;

pub use crate::core::{ByteOrder, ByteSwap};
pub use crate::error::{Error, Result};
pub use crate::protocol::{Record, RECORD_SIZE};
