//! Naive Reader: satu read per field
//!
//! Lima read per record (field8, padding, field16, field32, field64).
//! Baseline untuk membandingkan biaya syscall dengan batched reader.

use super::{fill_buffer, RecordSource, TailPolicy};
use crate::core::ByteOrder;
use crate::error::{Error, Result};
use crate::protocol::{
    decode, Record, FIELD16_OFFSET, FIELD32_OFFSET, FIELD64_OFFSET, FIELD8_OFFSET,
    PADDING_OFFSET, RECORD_SIZE,
};
use std::io::Read;

/// (offset, width) setiap field dalam urutan on-disk
const FIELDS: [(usize, usize); 5] = [
    (FIELD8_OFFSET, 1),
    (PADDING_OFFSET, 1),
    (FIELD16_OFFSET, 2),
    (FIELD32_OFFSET, 4),
    (FIELD64_OFFSET, 8),
];

pub struct NaiveReader<R> {
    source: R,
    host: ByteOrder,
    tail_policy: TailPolicy,
    exhausted: bool,
    records_read: u64,
}

impl<R: Read> NaiveReader<R> {
    pub fn new(source: R, host: ByteOrder) -> Self {
        Self {
            source,
            host,
            tail_policy: TailPolicy::default(),
            exhausted: false,
            records_read: 0,
        }
    }

    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }

    pub fn next_record(&mut self) -> Result<Option<Record>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut buf = [0u8; RECORD_SIZE];
        let mut consumed = 0usize;

        // Satu read per field, padding ikut dibaca lalu diabaikan oleh decode
        for (offset, width) in FIELDS {
            let n = fill_buffer(&mut self.source, &mut buf[offset..offset + width])?;
            consumed += n;
            if n < width {
                return self.end_of_stream(consumed);
            }
        }

        self.records_read += 1;
        Ok(Some(decode(&buf, self.host)))
    }

    fn end_of_stream(&mut self, trailing: usize) -> Result<Option<Record>> {
        self.exhausted = true;
        if trailing == 0 {
            return Ok(None);
        }
        match self.tail_policy {
            TailPolicy::Drop => {
                tracing::warn!(trailing, "dropping torn record at end of stream");
                Ok(None)
            }
            TailPolicy::Error => Err(Error::TornRecord { trailing }),
        }
    }

    pub fn records_read(&self) -> u64 {
        self.records_read
    }
}

impl<R: Read> RecordSource for NaiveReader<R> {
    fn next_record(&mut self) -> Result<Option<Record>> {
        NaiveReader::next_record(self)
    }
}
