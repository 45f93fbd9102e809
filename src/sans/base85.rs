//! Base-85 rendering of the checksum and descriptor block.
//!
//! The 8-byte block holds the checksum followed by the descriptor, both
//! big-endian. Each 32-bit word becomes five digits, most significant first,
//! drawn from the Z85 alphabet, which avoids quotes, backslashes and
//! whitespace.

use core::{fmt, str::FromStr};

use thiserror::Error;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, byteorder::big_endian::U32};

use super::descriptor::PortDescriptor;

const ALPHABET: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Reverse lookup from ASCII to digit value, `0xFF` where invalid.
const VALUES: [u8; 128] = {
    let mut values = [0xFF; 128];
    let mut i = 0;

    while i < ALPHABET.len() {
        values[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }

    values
};

/// Length of an encoded block.
pub const TEXT_LEN: usize = 10;

#[repr(C)]
#[derive(Debug, FromBytes, IntoBytes, Immutable, KnownLayout)]
struct Block {
    checksum: U32,
    descriptor: U32,
}

/// An error decoding a base-85 block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Wrong number of symbols.
    #[error("Expected 10 symbols, found {0}.")]
    Length(usize),
    /// A symbol outside the alphabet.
    #[error("Invalid symbol ({0:?}).")]
    Symbol(char),
    /// A five-symbol group exceeding 32 bits.
    #[error("Symbol group out of range.")]
    Overflow,
}

/// Encode an 8-byte block as ten base-85 symbols.
pub fn encode(block: [u8; 8]) -> [u8; TEXT_LEN] {
    let Block {
        checksum,
        descriptor,
    } = zerocopy::transmute!(block);

    let mut text = [0; TEXT_LEN];

    for (word, digits) in [checksum.get(), descriptor.get()]
        .into_iter()
        .zip(text.chunks_exact_mut(5))
    {
        let mut word = word;
        for d in digits.iter_mut().rev() {
            *d = ALPHABET[(word % 85) as usize];
            word /= 85;
        }
    }

    text
}

/// Decode ten base-85 symbols into an 8-byte block.
pub fn decode(s: &str) -> Result<[u8; 8], DecodeError> {
    if let Some(c) = s.chars().find(|c| value(*c).is_none()) {
        Err(DecodeError::Symbol(c))?;
    }

    // Every symbol is ASCII from here on, so bytes and symbols coincide.
    let s = s.as_bytes();
    if s.len() != TEXT_LEN {
        Err(DecodeError::Length(s.len()))?;
    }

    let mut words = [0; 2];

    for (word, digits) in words.iter_mut().zip(s.chunks_exact(5)) {
        let acc = digits.iter().fold(0, |acc: u64, &c| {
            acc * 85 + u64::from(VALUES[c as usize])
        });
        *word = u32::try_from(acc).map_err(|_| DecodeError::Overflow)?;
    }

    let block = Block {
        checksum: U32::new(words[0]),
        descriptor: U32::new(words[1]),
    };

    Ok(zerocopy::transmute!(block))
}

fn value(c: char) -> Option<u8> {
    let v = *VALUES.get(c as usize)?;
    (v != 0xFF).then_some(v)
}

/// An encoded token: the checksum and descriptor block with its rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    block: [u8; 8],
    text: [u8; TEXT_LEN],
}

impl Token {
    pub fn new(checksum: u32, descriptor: PortDescriptor) -> Self {
        let block = Block {
            checksum: U32::new(checksum),
            descriptor: U32::new(descriptor.bits()),
        };

        Self::from_block(zerocopy::transmute!(block))
    }

    pub fn from_block(block: [u8; 8]) -> Self {
        Self {
            block,
            text: encode(block),
        }
    }

    pub fn checksum(&self) -> u32 {
        let Block { checksum, .. } = zerocopy::transmute!(self.block);
        checksum.get()
    }

    pub fn descriptor(&self) -> PortDescriptor {
        let Block { descriptor, .. } = zerocopy::transmute!(self.block);
        PortDescriptor::from_bits(descriptor.get())
    }

    /// The raw block, checksum first.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.block
    }

    /// The rendered symbols, all ASCII.
    pub fn text(&self) -> &[u8; TEXT_LEN] {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text
            .iter()
            .try_for_each(|&c| fmt::Write::write_char(f, c as char))
    }
}

impl FromStr for Token {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s).map(Self::from_block)
    }
}
