//! Pipeline over a type table held in memory.

use alloc::string::String;

use thiserror::Error;

use crate::sans::{
    descriptor::PackError,
    port::{ParseError, PortSpec},
    table,
};

use super::Render;

/// Errors occurring while encoding against an in-memory table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The port specification matches neither accepted form.
    #[error("Malformed port specification [{0}].")]
    MalformedPortSpec(String),
    /// The type token lacks a family name or interface number.
    #[error("Malformed port type [{0}].")]
    MalformedTypeName(String),
    /// No table entry names the type family.
    #[error("Unknown port type [{0}].")]
    UnknownPortType(String),
    /// The split index does not fit the descriptor.
    #[error("Split index {0} out of range (1 to 7).")]
    SplitOutOfRange(i32),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::MalformedPortSpec(s) => Self::MalformedPortSpec(s),
            ParseError::MalformedTypeName(s) => Self::MalformedTypeName(s),
        }
    }
}

impl From<PackError> for Error {
    fn from(err: PackError) -> Self {
        match err {
            PackError::SplitOutOfRange(n) => Self::SplitOutOfRange(n),
        }
    }
}

/// Look up the code of a type family in a table.
pub fn resolve(table: &str, family: &str) -> Option<u32> {
    table::lookup(table.lines(), family)
}

/// Encode a switch name and port specification against a table.
///
/// This method is also re-exported as `porttag::avec::encode_slice`.
pub fn encode<T: Render>(switch: &[u8], port: &str, table: &str) -> Result<T, Error> {
    let spec = PortSpec::parse(port)?;
    tracing::debug!(?spec, "parsed port specification");

    let type_code = resolve(table, spec.family);
    super::encode_spec(switch, &spec, type_code, Error::UnknownPortType)
}
