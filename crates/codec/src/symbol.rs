use core::fmt;

use serde::{Deserialize, Serialize};

/// One letter of the storage alphabet.
///
/// The discriminant is the 2-bit group the symbol stands for. The table is
/// fixed: `00 -> A`, `01 -> T`, `10 -> G`, `11 -> C`. It is shared by the
/// encoder and the decoder and must never change, otherwise previously
/// written sequences stop decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    A = 0b00,
    T = 0b01,
    G = 0b10,
    C = 0b11,
}

impl Symbol {
    /// All symbols in 2-bit order.
    pub const ALL: [Symbol; 4] = [Symbol::A, Symbol::T, Symbol::G, Symbol::C];

    /// Convert from a 2-bit group. Only the low two bits are looked at.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::A,
            0b01 => Self::T,
            0b10 => Self::G,
            _ => Self::C,
        }
    }

    /// The 2-bit group this symbol encodes.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Strict conversion from an ASCII byte. Accepts lowercase.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'T' | b't' => Some(Self::T),
            b'G' | b'g' => Some(Self::G),
            b'C' | b'c' => Some(Self::C),
            _ => None,
        }
    }

    /// Lossy conversion used by the decoder: anything outside the alphabet
    /// becomes `A` (bits `00`).
    #[inline]
    pub fn from_char_lossy(c: char) -> Self {
        if c.is_ascii() {
            Self::from_ascii(c as u8).unwrap_or(Self::A)
        } else {
            Self::A
        }
    }

    /// Uppercase ASCII byte for this symbol.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::T => b'T',
            Self::G => b'G',
            Self::C => b'C',
        }
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii() {
            Self::from_ascii(c as u8).ok_or(c)
        } else {
            Err(c)
        }
    }
}
