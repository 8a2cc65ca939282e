//! Endianness Detection & Byte-Swap Engine
//!
//! Host order dideteksi sekali saat startup dengan melihat layout memori
//! dari integer kecil yang diketahui. Swap dilakukan dengan aritmatika
//! shift/mask eksplisit, bit-exact untuk 16/32/64-bit.

/// Urutan byte: host atau on-disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most-significant byte first
    Big,
    /// Least-significant byte first
    Little,
}

impl ByteOrder {
    /// Urutan byte di disk, tetap big-endian apapun host-nya
    pub const ON_DISK: ByteOrder = ByteOrder::Big;

    /// Deteksi host order dari layout memori `1u16`.
    ///
    /// Pure dan idempotent, boleh dipanggil berkali-kali.
    #[inline]
    pub fn detect() -> Self {
        let probe = 1u16.to_ne_bytes();
        if probe[0] == 1 {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    /// True jika field multi-byte harus di-swap untuk sampai ke on-disk order
    #[inline(always)]
    pub fn needs_swap(self) -> bool {
        self != Self::ON_DISK
    }

    /// Urutan byte kebalikannya
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            ByteOrder::Big => ByteOrder::Little,
            ByteOrder::Little => ByteOrder::Big,
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::Big => f.write_str("big endian"),
            ByteOrder::Little => f.write_str("little endian"),
        }
    }
}

impl std::str::FromStr for ByteOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" => Ok(ByteOrder::Big),
            "little" | "le" => Ok(ByteOrder::Little),
            other => Err(format!("unknown byte order '{}' (expected big or little)", other)),
        }
    }
}

/// Membalik urutan byte dari unsigned integer.
///
/// `x.swap().swap() == x` untuk semua `x`. Tidak ada implementasi untuk
/// `u8`: satu byte tidak punya urutan.
pub trait ByteSwap: Copy {
    fn swap(self) -> Self;
}

impl ByteSwap for u16 {
    #[inline(always)]
    fn swap(self) -> Self {
        (self >> 8) | (self << 8)
    }
}

impl ByteSwap for u32 {
    #[inline(always)]
    fn swap(self) -> Self {
        (self >> 24)
            | ((self >> 8) & 0x0000_FF00)
            | ((self << 8) & 0x00FF_0000)
            | (self << 24)
    }
}

impl ByteSwap for u64 {
    #[inline(always)]
    fn swap(self) -> Self {
        (self >> 56)
            | ((self >> 40) & 0x0000_0000_0000_FF00)
            | ((self >> 24) & 0x0000_0000_00FF_0000)
            | ((self >> 8) & 0x0000_0000_FF00_0000)
            | ((self << 8) & 0x0000_00FF_0000_0000)
            | ((self << 24) & 0x0000_FF00_0000_0000)
            | ((self << 40) & 0x00FF_0000_0000_0000)
            | (self << 56)
    }
}
