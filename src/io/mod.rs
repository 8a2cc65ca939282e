//! I/O Layer: Batched Record Reader & Writer
//!
//! Prinsip desain:
//! - Reusable buffer: satu alokasi per sesi baca
//! - Bulk read: N record per refill, bukan per field
//! - End-of-stream = `Ok(None)`, I/O failure = `Err`
//!
//! Strategi baca yang tersedia: batched (buffer N record), naive
//! (satu read per field) dan mapped (memmap2, seluruh file).

mod mapped;
mod naive;
mod reader;
mod writer;

pub use mapped::MappedRecords;
pub use naive::NaiveReader;
pub use reader::BatchedReader;
pub use writer::RecordWriter;

use crate::error::Result;
use crate::protocol::Record;
use std::io::{self, Read};

/// Apa yang dilakukan terhadap torn record (< 16 bytes) di akhir stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailPolicy {
    /// Buang diam-diam (hanya `warn!`), perilaku default
    #[default]
    Drop,
    /// Laporkan sebagai `Error::TornRecord` setelah semua record utuh dibaca
    Error,
}

/// Sumber record yang bisa di-drain satu per satu oleh driver
pub trait RecordSource {
    /// `Ok(None)` berarti end-of-stream; panggilan berikutnya juga `Ok(None)`.
    fn next_record(&mut self) -> Result<Option<Record>>;
}

/// Isi `buf` sampai penuh atau EOF, seperti kontrak `fread`.
///
/// Short read dari `Read::read` diulang; `Interrupted` di-retry.
/// Returns jumlah byte yang terisi.
pub(crate) fn fill_buffer<R: Read>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::io::{self, Read};

    /// Reader yang hanya mengembalikan `chunk` bytes per `read` call
    pub struct Trickle<R> {
        pub inner: R,
        pub chunk: usize,
        pub calls: usize,
    }

    impl<R: Read> Read for Trickle<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.calls += 1;
            let len = buf.len().min(self.chunk);
            self.inner.read(&mut buf[..len])
        }
    }

    /// Reader yang selalu gagal
    pub struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "device gone"))
        }
    }

    /// Reader yang mengembalikan `Interrupted` sekali sebelum data
    pub struct InterruptOnce<R> {
        pub inner: R,
        pub fired: bool,
    }

    impl<R: Read> Read for InterruptOnce<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.fired {
                self.fired = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }
}
