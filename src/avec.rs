//! Convenience interfaces running the whole encoding pipeline.
//!
//! The functions in this module parse a port specification, resolve its type
//! family against a type table, checksum the switch name, and render the
//! result through the [`Render`] trait. The table may be held in memory
//! ([`slice`]) or read from a file or other reader ([`reader`]).
//!
//! ```
//! use porttag::sans::Token;
//!
//! let token: Token = porttag::avec::encode_slice(b"sw1", "eth1/2/3", "eth 5\n")?;
//! assert_eq!(token.to_string(), "JlYlv&^}Zz");
//! ```

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::encode as encode_reader;
pub use slice::encode as encode_slice;

use alloc::string::String;

use crate::sans::{
    Token,
    check::compute_crc,
    descriptor::{PackError, PortDescriptor},
    legacy::LegacyTag,
    port::PortSpec,
};

/// Produce an output from a checksum, a resolved type code and a port.
///
/// Implemented for [`Token`] (the dense layout) and [`LegacyTag`].
pub trait Render: Sized {
    fn render(checksum: u32, type_code: u32, spec: &PortSpec<'_>) -> Result<Self, PackError>;
}

impl Render for Token {
    fn render(checksum: u32, type_code: u32, spec: &PortSpec<'_>) -> Result<Self, PackError> {
        let descriptor = PortDescriptor::pack(type_code, spec)?;
        tracing::debug!("packed descriptor {:08X}", descriptor.bits());

        Ok(Token::new(checksum, descriptor))
    }
}

impl Render for LegacyTag {
    fn render(checksum: u32, type_code: u32, spec: &PortSpec<'_>) -> Result<Self, PackError> {
        Ok(LegacyTag::new(checksum, type_code, spec))
    }
}

/// Final stages shared by all pipelines, once the table has been consulted.
///
/// `unknown` builds the pipeline's error for a family missing from the table.
fn encode_spec<T: Render, E: From<PackError>>(
    switch: &[u8],
    spec: &PortSpec<'_>,
    type_code: Option<u32>,
    unknown: fn(String) -> E,
) -> Result<T, E> {
    let type_code = type_code.ok_or_else(|| unknown(spec.family.into()))?;

    let checksum = compute_crc(switch);
    tracing::debug!("switch checksum {checksum:08X}, type code {type_code}");

    Ok(T::render(checksum, type_code, spec)?)
}
