//! Protocol Layer: Fixed-Layout Binary Records
//!
//! Prinsip desain:
//! - Fixed-size: setiap record tepat 16 bytes
//! - Explicit offsets: encode/decode per field, bukan cast memori
//! - Big-endian on disk, apapun host order-nya

mod codec;
mod record;

pub use codec::{decode, decode_slice, encode, encode_into};
pub use record::{
    Record, FIELD16_OFFSET, FIELD32_OFFSET, FIELD64_OFFSET, FIELD8_OFFSET, PADDING_OFFSET,
    RECORD_SIZE,
};
