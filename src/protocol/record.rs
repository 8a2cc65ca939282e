//! Fixed 16-byte Record Format
//!
//! Layout on-disk (big-endian):
//! ┌────────┬─────────┬─────────┬───────────┬──────────────────────┐
//! │ 0: u8  │ 1: pad  │ 2: u16  │ 4: u32    │ 8: u64               │
//! └────────┴─────────┴─────────┴───────────┴──────────────────────┘
//!
//! Urutan field tetap, tidak pernah di-reorder.

use std::fmt;

/// Ukuran satu record di disk
pub const RECORD_SIZE: usize = 16;

pub const FIELD8_OFFSET: usize = 0;
pub const PADDING_OFFSET: usize = 1;
pub const FIELD16_OFFSET: usize = 2;
pub const FIELD32_OFFSET: usize = 4;
pub const FIELD64_OFFSET: usize = 8;

/// Satu record yang sudah di-decode ke host order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Record {
    pub field8: u8,
    pub field16: u16,
    pub field32: u32,
    pub field64: u64,
}

impl Record {
    #[inline]
    pub const fn new(field8: u8, field16: u16, field32: u32, field64: u64) -> Self {
        Self {
            field8,
            field16,
            field32,
            field64,
        }
    }

    /// Semua field dari satu counter; field sempit wrap modulo lebarnya
    #[inline]
    pub const fn splat(value: u64) -> Self {
        Self {
            field8: value as u8,
            field16: value as u16,
            field32: value as u32,
            field64: value,
        }
    }

    /// Setiap field +1, wrapping per lebar field
    #[inline]
    pub fn incremented(&self) -> Self {
        Self {
            field8: self.field8.wrapping_add(1),
            field16: self.field16.wrapping_add(1),
            field32: self.field32.wrapping_add(1),
            field64: self.field64.wrapping_add(1),
        }
    }

    /// Multi-line report: `8:`, `16:`, `32:`, `64:`
    pub fn report(&self) -> String {
        format!(
            "8:  {}\n16: {}\n32: {}\n64: {}",
            self.field8, self.field16, self.field32, self.field64
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.field8, self.field16, self.field32, self.field64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_fit_record() {
        assert_eq!(FIELD64_OFFSET + 8, RECORD_SIZE);
        assert_eq!(FIELD32_OFFSET + 4, FIELD64_OFFSET);
        assert_eq!(FIELD16_OFFSET + 2, FIELD32_OFFSET);
        assert_eq!(PADDING_OFFSET + 1, FIELD16_OFFSET);
    }

    #[test]
    fn test_splat_wraps_narrow_fields() {
        let r = Record::splat(65_537);
        assert_eq!(r, Record::new(1, 1, 65_537, 65_537));
    }

    #[test]
    fn test_incremented_wraps() {
        let r = Record::new(u8::MAX, u16::MAX, 7, 9).incremented();
        assert_eq!(r, Record::new(0, 0, 8, 10));
        assert_eq!(Record::splat(255).incremented(), Record::splat(256));
    }

    #[test]
    fn test_report_format() {
        let r = Record::new(1, 2, 3, 4);
        assert_eq!(r.report(), "8:  1\n16: 2\n32: 3\n64: 4");
        assert_eq!(r.to_string(), "1, 2, 3, 4");
    }
}
