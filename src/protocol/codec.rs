//! Record Codec: slice ↔ Record
//!
//! Decode dan encode field-by-field dari/ke byte slice dengan offset
//! eksplisit. Tidak ada cast struct ke bytes, jadi tidak bergantung pada
//! padding/alignment platform.

use super::record::{
    Record, FIELD16_OFFSET, FIELD32_OFFSET, FIELD64_OFFSET, FIELD8_OFFSET, PADDING_OFFSET,
    RECORD_SIZE,
};
use crate::core::{ByteOrder, ByteSwap};
use crate::error::{Error, Result};

/// Decode satu record dari tepat 16 bytes.
///
/// Byte 1 (padding) diabaikan. Field multi-byte diambil dalam host order
/// lalu di-swap hanya jika `host` berbeda dari on-disk order.
#[inline(always)]
pub fn decode(buf: &[u8; RECORD_SIZE], host: ByteOrder) -> Record {
    let field8 = buf[FIELD8_OFFSET];
    let field16 = u16::from_ne_bytes([buf[FIELD16_OFFSET], buf[FIELD16_OFFSET + 1]]);
    let field32 = u32::from_ne_bytes([
        buf[FIELD32_OFFSET],
        buf[FIELD32_OFFSET + 1],
        buf[FIELD32_OFFSET + 2],
        buf[FIELD32_OFFSET + 3],
    ]);
    let mut field64_bytes = [0u8; 8];
    field64_bytes.copy_from_slice(&buf[FIELD64_OFFSET..FIELD64_OFFSET + 8]);
    let field64 = u64::from_ne_bytes(field64_bytes);

    if host.needs_swap() {
        Record::new(field8, field16.swap(), field32.swap(), field64.swap())
    } else {
        Record::new(field8, field16, field32, field64)
    }
}

/// Decode dari slice sembarang; hanya 16 byte pertama yang dibaca.
pub fn decode_slice(buf: &[u8], host: ByteOrder) -> Result<Record> {
    let bytes: &[u8; RECORD_SIZE] = buf
        .get(..RECORD_SIZE)
        .and_then(|s| s.try_into().ok())
        .ok_or(Error::ShortSlice { len: buf.len() })?;
    Ok(decode(bytes, host))
}

/// Encode record ke buffer 16 bytes yang sudah ada (tanpa alokasi)
#[inline(always)]
pub fn encode_into(record: &Record, host: ByteOrder, out: &mut [u8; RECORD_SIZE]) {
    let (field16, field32, field64) = if host.needs_swap() {
        (
            record.field16.swap(),
            record.field32.swap(),
            record.field64.swap(),
        )
    } else {
        (record.field16, record.field32, record.field64)
    };

    out[FIELD8_OFFSET] = record.field8;
    out[PADDING_OFFSET] = 0;
    out[FIELD16_OFFSET..FIELD32_OFFSET].copy_from_slice(&field16.to_ne_bytes());
    out[FIELD32_OFFSET..FIELD64_OFFSET].copy_from_slice(&field32.to_ne_bytes());
    out[FIELD64_OFFSET..RECORD_SIZE].copy_from_slice(&field64.to_ne_bytes());
}

/// Encode record ke 16 bytes on-disk (big-endian)
#[inline(always)]
pub fn encode(record: &Record, host: ByteOrder) -> [u8; RECORD_SIZE] {
    let mut out = [0u8; RECORD_SIZE];
    encode_into(record, host, &mut out);
    out
}
