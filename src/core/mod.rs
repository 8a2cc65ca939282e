//! Core module: Endianness & Byte-Swap
//!
//! Prinsip desain:
//! - Pure functions: tidak ada state, tidak ada alokasi
//! - Skip total: jika host order == on-disk order, swap tidak dipanggil

mod endian;

pub use endian::{ByteOrder, ByteSwap};
