//! Memory-Mapped Record Reader
//!
//! Seluruh file di-mmap, record di-decode langsung dari page cache via
//! `chunks_exact`. Tidak ada buffer copy sama sekali.

use super::{RecordSource, TailPolicy};
use crate::core::ByteOrder;
use crate::error::{Error, Result};
use crate::protocol::{decode, Record, RECORD_SIZE};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

pub struct MappedRecords {
    // None untuk file kosong: mapping 0 byte tidak portable
    mmap: Option<Mmap>,
    host: ByteOrder,
    tail_policy: TailPolicy,
    // Index record berikutnya
    next: usize,
    tail_reported: bool,
}

impl MappedRecords {
    /// Map file read-only.
    pub fn open<P: AsRef<Path>>(path: P, host: ByteOrder) -> Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        let mmap = if len == 0 {
            None
        } else {
            // SAFETY: file hanya dibaca; writer tidak berjalan bersamaan
            let mmap = unsafe { Mmap::map(&file)? };
            #[cfg(unix)]
            {
                if let Err(e) = mmap.advise(memmap2::Advice::Sequential) {
                    tracing::debug!(error = %e, "madvise(SEQUENTIAL) failed");
                }
            }
            Some(mmap)
        };

        Ok(Self {
            mmap,
            host,
            tail_policy: TailPolicy::default(),
            next: 0,
            tail_reported: false,
        })
    }

    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }

    #[inline]
    fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Jumlah record utuh di file
    pub fn len(&self) -> usize {
        self.bytes().len() / RECORD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte sisa di akhir file yang bukan record utuh
    pub fn trailing_bytes(&self) -> usize {
        self.bytes().len() % RECORD_SIZE
    }

    /// Iterasi semua record utuh (zero-copy), tanpa mengubah posisi
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        let host = self.host;
        self.bytes()
            .chunks_exact(RECORD_SIZE)
            .filter_map(move |chunk| chunk.try_into().ok().map(|c| decode(c, host)))
    }

    pub fn next_record(&mut self) -> Result<Option<Record>> {
        let start = self.next * RECORD_SIZE;
        let record = self
            .bytes()
            .get(start..start + RECORD_SIZE)
            .and_then(|s| s.try_into().ok())
            .map(|chunk| decode(chunk, self.host));

        if let Some(record) = record {
            self.next += 1;
            return Ok(Some(record));
        }

        let trailing = self.trailing_bytes();
        if trailing != 0 && !self.tail_reported {
            self.tail_reported = true;
            match self.tail_policy {
                TailPolicy::Drop => {
                    tracing::warn!(trailing, "dropping torn record at end of stream");
                }
                TailPolicy::Error => return Err(Error::TornRecord { trailing }),
            }
        }
        Ok(None)
    }
}

impl RecordSource for MappedRecords {
    fn next_record(&mut self) -> Result<Option<Record>> {
        MappedRecords::next_record(self)
    }
}
