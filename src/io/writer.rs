//! Record Writer
//!
//! Satu `write_all` per record. Untuk throughput, bungkus sink dengan
//! `BufWriter`: urutan byte dan batas record tetap sama.

use crate::core::ByteOrder;
use crate::error::Result;
use crate::protocol::{encode_into, Record, RECORD_SIZE};
use std::io::Write;

pub struct RecordWriter<W: Write> {
    sink: W,
    host: ByteOrder,
    scratch: [u8; RECORD_SIZE],
    records_written: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W, host: ByteOrder) -> Self {
        Self {
            sink,
            host,
            scratch: [0u8; RECORD_SIZE],
            records_written: 0,
        }
    }

    /// Encode ke big-endian lalu tulis tepat 16 bytes
    #[inline]
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        encode_into(record, self.host, &mut self.scratch);
        self.sink.write_all(&self.scratch)?;
        self.records_written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Flush dan kembalikan sink
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
