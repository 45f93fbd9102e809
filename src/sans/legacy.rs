//! Legacy 15-character tag layout.
//!
//! ```text
//! 8CCEC102 5 1 2 E003
//! ^^^^^^^^           checksum, hexadecimal
//!          ^ ^ ^     type, interface, module, as '0' + (value & 0x3F)
//!                ^^^^ port word, hexadecimal
//! ```
//!
//! The port word keeps 13 bits of the port number. A split port sets bit 15
//! and stores the two low bits of the zero-based split index in bits 13 and
//! 14. Unlike [`super::descriptor`], no split index is rejected.

use core::fmt;

use super::port::PortSpec;

const FIELD_MASK: u32 = 0x3F;
const PORT_MASK: u32 = 0x1FFF;

const SPLIT_FLAG: u16 = 1 << 15;
const SPLIT_SHIFT: u32 = 13;
const SPLIT_MASK: i32 = 0x03;

/// A tag in the legacy layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyTag {
    checksum: u32,
    fields: [u8; 3],
    port: u16,
}

impl LegacyTag {
    pub fn new(checksum: u32, type_code: u32, spec: &PortSpec<'_>) -> Self {
        let mut port = (spec.port & PORT_MASK) as u16;

        if let Some(split) = spec.split {
            port |= SPLIT_FLAG;
            port |= ((split.wrapping_sub(1) & SPLIT_MASK) as u16) << SPLIT_SHIFT;
        }

        let fields = [type_code, spec.interface, spec.module].map(|x| (x & FIELD_MASK) as u8);

        Self {
            checksum,
            fields,
            port,
        }
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// The 16-bit port word, including split bits.
    pub fn port_word(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for LegacyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.fields.map(|x| char::from(b'0' + x));
        write!(f, "{:08X}{a}{b}{c}{:04X}", self.checksum, self.port)
    }
}
