//! Dense 32-bit port descriptor.
//!
//! ```text
//!  31  29 28      23 22      17 16      11 10             0
//! +------+----------+----------+----------+----------------+
//! | split|   type   | interface|  module  |      port      |
//! +------+----------+----------+----------+----------------+
//! ```
//!
//! Numeric fields are truncated to their width, keeping the low-order bits.
//! The split field stores the zero-based split index, with all ones reserved to
//! mark a port that is not split.

use tartan_bitfield::bitfield;
use thiserror::Error;

use super::port::PortSpec;

const PORT_MASK: u32 = 0x7FF;
const FIELD_MASK: u32 = 0x3F;

/// Split field value of a port that is not split.
const NO_SPLIT: u8 = 0b111;

bitfield! {
    struct Layout(u32) {
        [0..11] port: u16,
        [11..17] module: u8,
        [17..23] interface: u8,
        [23..29] type_code: u8,
        [29..32] split: u8,
    }
}

/// An error packing a port descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    /// The split index does not fit the split field.
    #[error("Split index {0} out of range (1 to 7).")]
    SplitOutOfRange(i32),
}

/// A packed port descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortDescriptor(u32);

impl PortDescriptor {
    /// Pack a resolved type code and a port specification.
    ///
    /// Fails only if a split index is given outside `1..=7`. Oversized numeric
    /// fields are masked instead.
    pub fn pack(type_code: u32, spec: &PortSpec<'_>) -> Result<Self, PackError> {
        let split = match spec.split {
            None => NO_SPLIT,
            Some(n) => match u8::try_from(n.wrapping_sub(1)) {
                Ok(stored) if stored < NO_SPLIT => stored,
                _ => Err(PackError::SplitOutOfRange(n))?,
            },
        };

        let mut layout = Layout(0);
        layout.set_port((spec.port & PORT_MASK) as u16);
        layout.set_module((spec.module & FIELD_MASK) as u8);
        layout.set_interface((spec.interface & FIELD_MASK) as u8);
        layout.set_type_code((type_code & FIELD_MASK) as u8);
        layout.set_split(split);

        Ok(Self(layout.0))
    }

    /// Wrap a raw descriptor word, as found in a decoded token.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Recover the stored fields.
    ///
    /// Values reflect what was kept after truncation, not the original input.
    pub fn unpack(self) -> PortFields {
        let layout = Layout(self.0);

        let split = match layout.split() {
            NO_SPLIT => None,
            stored => Some(stored + 1),
        };

        PortFields {
            type_code: layout.type_code(),
            interface: layout.interface(),
            module: layout.module(),
            port: layout.port(),
            split,
        }
    }
}

/// Fields stored in a [`PortDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortFields {
    pub type_code: u8,
    pub interface: u8,
    pub module: u8,
    pub port: u16,
    /// One-based split index.
    pub split: Option<u8>,
}
