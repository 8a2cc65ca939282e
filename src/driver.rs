//! Session Driver
//!
//! Memiliki file handle (dibuka sekali, ditutup lewat `Drop` di setiap
//! exit path), menjalankan reader/writer dalam loop, dan memverifikasi
//! setiap record yang dibaca.

use crate::config::{ReadStrategy, ReaderConfig, WriterConfig};
use crate::core::ByteOrder;
use crate::error::Result;
use crate::io::{BatchedReader, MappedRecords, NaiveReader, RecordSource, RecordWriter};
use crate::protocol::{Record, RECORD_SIZE};
use crate::verify::{RecordGenerator, SequenceChecker};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

/// Hasil satu sesi tulis
#[derive(Debug, Clone)]
pub struct WriteSummary {
    pub records: u64,
    pub bytes: u64,
    pub last: Option<Record>,
}

/// Hasil satu sesi baca
#[derive(Debug, Clone)]
pub struct ReadSummary {
    pub records: u64,
    /// Record valid terakhir yang dibaca
    pub last: Option<Record>,
    /// Bulk read yang dilakukan (hanya strategi batched)
    pub refills: Option<u64>,
}

/// Tulis `config.count` record referensi ke file (truncate).
pub fn write_session(config: &WriterConfig) -> Result<WriteSummary> {
    let host = config.host_order.unwrap_or_else(ByteOrder::detect);
    let bytes = config.count.saturating_mul(RECORD_SIZE as u64);

    tracing::info!(
        %host,
        path = %config.path.display(),
        count = config.count,
        size_mb = bytes / 1024 / 1024,
        buffered = config.buffered,
        "writing records"
    );

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&config.path)?;

    let last = if config.buffered {
        emit(RecordWriter::new(BufWriter::new(file), host), config.count)?
    } else {
        emit(RecordWriter::new(file, host), config.count)?
    };

    tracing::info!(records = config.count, "write complete");

    Ok(WriteSummary {
        records: config.count,
        bytes,
        last,
    })
}

fn emit<W: Write>(mut writer: RecordWriter<W>, count: u64) -> Result<Option<Record>> {
    let mut last = None;
    for record in RecordGenerator::new().take(count as usize) {
        writer.write_record(&record)?;
        last = Some(record);
    }
    writer.finish()?;
    Ok(last)
}

/// Baca seluruh file dengan strategi yang dikonfigurasi dan verifikasi
/// setiap record terhadap sequence referensi.
pub fn read_session(config: &ReaderConfig) -> Result<ReadSummary> {
    let host = config.host_order.unwrap_or_else(ByteOrder::detect);

    tracing::info!(
        %host,
        path = %config.path.display(),
        strategy = %config.strategy,
        "reading records"
    );

    let mut checker = SequenceChecker::new();

    let (last, refills) = match config.strategy {
        ReadStrategy::Batched(n) => {
            let file = File::open(&config.path)?;
            advise_sequential(&file);
            let mut reader =
                BatchedReader::new(file, n, host)?.with_tail_policy(config.tail_policy);
            let last = drain(&mut reader, &mut checker)?;
            (last, Some(reader.refills()))
        }
        ReadStrategy::Naive => {
            let file = File::open(&config.path)?;
            let mut reader = NaiveReader::new(file, host).with_tail_policy(config.tail_policy);
            (drain(&mut reader, &mut checker)?, None)
        }
        ReadStrategy::Mapped => {
            let mut reader =
                MappedRecords::open(&config.path, host)?.with_tail_policy(config.tail_policy);
            (drain(&mut reader, &mut checker)?, None)
        }
    };

    tracing::info!(records = checker.checked(), "read complete");

    Ok(ReadSummary {
        records: checker.checked(),
        last,
        refills,
    })
}

/// Drain source sampai end-of-stream; error pertama menghentikan loop.
pub fn drain<S: RecordSource>(
    source: &mut S,
    checker: &mut SequenceChecker,
) -> Result<Option<Record>> {
    let mut last = None;
    while let Some(record) = source.next_record()? {
        checker.check(&record)?;
        last = Some(record);
    }
    Ok(last)
}

#[cfg(target_os = "linux")]
fn advise_sequential(file: &File) {
    use std::os::unix::io::AsRawFd;

    // Hint ke kernel untuk read-ahead agresif; error diabaikan
    let rc = unsafe { libc::posix_fadvise(file.as_raw_fd(), 0, 0, libc::POSIX_FADV_SEQUENTIAL) };
    if rc != 0 {
        tracing::debug!(rc, "posix_fadvise(SEQUENTIAL) failed");
    }
}

#[cfg(not(target_os = "linux"))]
fn advise_sequential(_file: &File) {}
