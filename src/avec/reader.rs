//! Pipeline over a type table read from a file or reader.
//!
//! _Requires Cargo feature `std`._

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    string::String,
    vec::Vec,
};

use thiserror::Error;

use crate::sans::{
    descriptor::PackError,
    port::{ParseError, PortSpec},
    table::TypeEntry,
};

use super::Render;

extern crate std;

/// Errors occurring while encoding against a table reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
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

/// Look up the code of a type family, reading the table line by line.
///
/// Stops reading at the first match. Lines that are not valid UTF-8 are
/// skipped like any other malformed line.
pub fn resolve(r: &mut impl BufRead, family: &str) -> std::io::Result<Option<u32>> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if r.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let entry = std::str::from_utf8(&buf).ok().and_then(TypeEntry::parse);

        match entry {
            Some(entry) if entry.name == family => return Ok(Some(entry.code)),
            Some(_) => {}
            None => match std::str::from_utf8(&buf) {
                Ok(line) => tracing::trace!(line, "skipping malformed type table line"),
                Err(_) => tracing::trace!("skipping malformed type table line"),
            },
        }
    }
}

/// Encode a switch name and port specification against a table reader.
///
/// This method is also re-exported as `porttag::avec::encode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn encode<T: Render>(switch: &[u8], port: &str, r: &mut impl BufRead) -> Result<T, Error> {
    let spec = PortSpec::parse(port)?;
    tracing::debug!(?spec, "parsed port specification");

    let type_code = resolve(r, spec.family)?;
    super::encode_spec(switch, &spec, type_code, Error::UnknownPortType)
}

/// Encode a switch name and port specification against a table file.
///
/// The specification is parsed before the file is opened.
///
/// _Requires Cargo feature `std`._
pub fn encode_path<T: Render>(
    switch: &[u8],
    port: &str,
    path: impl AsRef<Path>,
) -> Result<T, Error> {
    let spec = PortSpec::parse(port)?;
    tracing::debug!(?spec, "parsed port specification");

    let path = path.as_ref();
    tracing::debug!("reading type table {}", path.display());

    let mut r = BufReader::new(File::open(path)?);
    let type_code = resolve(&mut r, spec.family)?;
    super::encode_spec(switch, &spec, type_code, Error::UnknownPortType)
}
