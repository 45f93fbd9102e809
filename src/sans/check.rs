//! Helper for computing cyclic redundancy checks.
//!
//! The checksum is the non-reflected CRC-32 over polynomial `0x04C11DB7`
//! (AUTODIN II, Ethernet), with an all-ones preload and a complemented result.

/// Generator polynomial.
const POLY: u32 = 0x04C11DB7;

/// Byte-at-a-time lookup table, built at compile time.
const CRC_TABLE: [u32; 256] = {
    let mut table = [0; 256];
    let mut i = 0;

    while i < 256 {
        let mut c = (i as u32) << 24;
        let mut j = 0;

        while j < 8 {
            c = if c & 0x8000_0000 != 0 {
                (c << 1) ^ POLY
            } else {
                c << 1
            };
            j += 1;
        }

        table[i] = c;
        i += 1;
    }

    table
};

/// Compute the cyclic redundancy check value of a slice of bytes.
pub fn compute_crc(r: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(r);
    crc.finish()
}

/// Incremental cyclic redundancy check accumulator.
///
/// Feeding a sequence of slices produces the same value as a single call to
/// [`compute_crc`] over their concatenation.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    register: u32,
}

impl Crc32 {
    pub const fn new() -> Self {
        Self {
            register: 0xFFFF_FFFF,
        }
    }

    /// Accumulate a slice of bytes.
    pub fn update(&mut self, r: &[u8]) {
        self.register = r.iter().fold(self.register, |acc, b| crc_byte(acc, *b));
    }

    /// Complement the register, yielding the check value.
    pub fn finish(self) -> u32 {
        !self.register
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulate a single byte into the running register.
fn crc_byte(crc: u32, b: u8) -> u32 {
    (crc << 8) ^ CRC_TABLE[((crc >> 24) as u8 ^ b) as usize]
}
