//! Batched Record Reader
//!
//! Satu buffer reusable berukuran `N * 16` bytes. Refill hanya terjadi saat
//! buffer kosong secara logis (cursor == 0), lalu record dilayani satu per
//! panggilan sampai cursor wrap ke 0 lagi.
//!
//! State machine:
//! - Empty: cursor == 0, panggilan berikutnya melakukan satu bulk read
//! - Serving: 0 < cursor < records_in_buffer * 16

use super::{fill_buffer, RecordSource, TailPolicy};
use crate::core::ByteOrder;
use crate::error::{Error, Result};
use crate::protocol::{decode, Record, RECORD_SIZE};
use std::io::Read;

/// Reader yang mengambil hingga N record per bulk read
pub struct BatchedReader<R> {
    source: R,
    host: ByteOrder,
    buffer: Box<[u8]>,
    // Offset record berikutnya, selalu kelipatan RECORD_SIZE
    cursor: usize,
    records_in_buffer: usize,
    tail_policy: TailPolicy,
    // Torn tail yang belum dilaporkan (TailPolicy::Error)
    pending_tail: Option<usize>,
    exhausted: bool,
    refills: u64,
    records_read: u64,
}

impl<R: Read> BatchedReader<R> {
    /// Membuat reader dengan batch size `batch_size` record.
    ///
    /// Buffer dialokasikan sekali di sini dan dipakai ulang selama sesi.
    pub fn new(source: R, batch_size: usize, host: ByteOrder) -> Result<Self> {
        let len = match batch_size.checked_mul(RECORD_SIZE) {
            Some(len) if batch_size > 0 => len,
            _ => return Err(Error::InvalidBatchSize(batch_size)),
        };

        Ok(Self {
            source,
            host,
            buffer: vec![0u8; len].into_boxed_slice(),
            cursor: 0,
            records_in_buffer: 0,
            tail_policy: TailPolicy::default(),
            pending_tail: None,
            exhausted: false,
            refills: 0,
            records_read: 0,
        })
    }

    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }

    /// Record berikutnya, `Ok(None)` saat end-of-stream.
    ///
    /// Setelah end-of-stream, semua panggilan berikutnya mengembalikan
    /// `Ok(None)` tanpa menyentuh source.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        if self.cursor == 0 {
            if let Some(trailing) = self.pending_tail.take() {
                self.exhausted = true;
                return Err(Error::TornRecord { trailing });
            }
            if self.exhausted {
                return Ok(None);
            }
            if self.refill()? == 0 {
                return Ok(None);
            }
        }

        let start = self.cursor;
        let end = start + RECORD_SIZE;
        let slot: &[u8; RECORD_SIZE] = self
            .buffer
            .get(start..end)
            .filter(|_| end <= self.records_in_buffer * RECORD_SIZE)
            .and_then(|s| s.try_into().ok())
            .ok_or(Error::CursorOutOfBounds {
                cursor: start,
                len: self.records_in_buffer * RECORD_SIZE,
            })?;

        let record = decode(slot, self.host);

        self.cursor = end;
        if self.cursor == self.records_in_buffer * RECORD_SIZE {
            self.cursor = 0;
        }
        self.records_read += 1;

        Ok(Some(record))
    }

    /// Satu bulk read hingga `N * 16` bytes. Returns jumlah record utuh.
    fn refill(&mut self) -> Result<usize> {
        let filled = fill_buffer(&mut self.source, &mut self.buffer)?;
        self.refills += 1;

        let whole = filled / RECORD_SIZE;
        let trailing = filled % RECORD_SIZE;
        self.records_in_buffer = whole;

        tracing::debug!(
            refill = self.refills,
            bytes = filled,
            records = whole,
            "batch refilled"
        );

        if filled == 0 {
            self.exhausted = true;
            return Ok(0);
        }

        if trailing != 0 {
            match self.tail_policy {
                TailPolicy::Drop => {
                    tracing::warn!(
                        trailing,
                        after_records = self.records_read + whole as u64,
                        "dropping torn record at end of stream"
                    );
                }
                TailPolicy::Error => self.pending_tail = Some(trailing),
            }
        }

        if whole == 0 {
            // Hanya torn tail yang tersisa
            self.exhausted = true;
            if let Some(trailing) = self.pending_tail.take() {
                return Err(Error::TornRecord { trailing });
            }
        }

        Ok(whole)
    }

    pub fn batch_size(&self) -> usize {
        self.buffer.len() / RECORD_SIZE
    }

    /// Jumlah bulk read yang sudah dilakukan
    pub fn refills(&self) -> u64 {
        self.refills
    }

    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Record utuh dari refill terakhir
    pub fn records_in_buffer(&self) -> usize {
        self.records_in_buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn host_order(&self) -> ByteOrder {
        self.host
    }

    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: Read> RecordSource for BatchedReader<R> {
    fn next_record(&mut self) -> Result<Option<Record>> {
        BatchedReader::next_record(self)
    }
}

impl<R: Read> Iterator for BatchedReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
