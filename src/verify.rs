//! Sequence Generation & Verification
//!
//! File referensi berisi record 1, 2, 3, ... dengan setiap field diisi dari
//! counter yang sama (field 8/16-bit wrap modulo lebarnya). Counter yang
//! diharapkan disimpan di objek eksplisit, bukan state global.

use crate::error::{Error, Result};
use crate::protocol::Record;

/// Generator record referensi, mulai dari `Record::splat(1)`
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    next: Record,
}

impl RecordGenerator {
    pub fn new() -> Self {
        Self {
            next: Record::splat(1),
        }
    }
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RecordGenerator {
    type Item = Record;

    #[inline]
    fn next(&mut self) -> Option<Record> {
        let current = self.next;
        self.next = current.incremented();
        Some(current)
    }
}

/// Memeriksa bahwa record yang dibaca mengikuti sequence referensi
#[derive(Debug, Clone)]
pub struct SequenceChecker {
    expected: Record,
    checked: u64,
}

impl SequenceChecker {
    pub fn new() -> Self {
        Self {
            expected: Record::splat(1),
            checked: 0,
        }
    }

    /// Mismatch bersifat fatal: file korup atau konversi endian salah.
    pub fn check(&mut self, record: &Record) -> Result<()> {
        if *record != self.expected {
            return Err(Error::Mismatch {
                index: self.checked,
                expected: self.expected,
                found: *record,
            });
        }
        self.expected = self.expected.incremented();
        self.checked += 1;
        Ok(())
    }

    pub fn checked(&self) -> u64 {
        self.checked
    }

    pub fn expected(&self) -> &Record {
        &self.expected
    }
}

impl Default for SequenceChecker {
    fn default() -> Self {
        Self::new()
    }
}
