//! Parser for port specifications.
//!
//! A port specification names a port type with its interface number, then a
//! module and a port number, and optionally the index of a split (breakout)
//! sub-port:
//!
//! ```text
//! eth1/2/3:4
//! ^^^        family `eth`
//!    ^       interface 1
//!      ^     module 2
//!        ^   port 3
//!          ^ split 4
//! ```

use alloc::string::String;

use either::Either::{self, Left, Right};
use thiserror::Error;

/// An error parsing a port specification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The string matches neither the split nor the plain form.
    #[error("Malformed port specification [{0}].")]
    MalformedPortSpec(String),
    /// The type token lacks a family name or a trailing interface number.
    #[error("Malformed port type [{0}].")]
    MalformedTypeName(String),
}

/// A parsed port specification, borrowing its family name from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSpec<'a> {
    /// Type family, looked up in the type table.
    pub family: &'a str,
    /// Interface number trailing the family in the type token.
    pub interface: u32,
    pub module: u32,
    pub port: u32,
    /// Split sub-port index, if the `:N` suffix was given.
    ///
    /// Parsed as signed; range checks happen when packing.
    pub split: Option<i32>,
}

impl<'a> PortSpec<'a> {
    /// Parse a specification of the form `TYPE/MODULE/PORT[:SPLIT]`.
    ///
    /// The split form is attempted first. Either form must consume the whole
    /// string.
    pub fn parse(s: &'a str) -> Result<Self, ParseError> {
        let (token, module, port, split) = match scan(s) {
            Some(Left((token, module, port, split))) => (token, module, port, Some(split)),
            Some(Right((token, module, port))) => (token, module, port, None),
            None => Err(ParseError::MalformedPortSpec(s.into()))?,
        };

        let (family, interface) = split_type_token(token)?;

        Ok(Self {
            family,
            interface,
            module,
            port,
            split,
        })
    }
}

type Split<'a> = (&'a str, u32, u32, i32);
type Plain<'a> = (&'a str, u32, u32);

/// Match the string against the split form, then the plain form.
fn scan(s: &str) -> Option<Either<Split<'_>, Plain<'_>>> {
    scan_split(s).map(Left).or_else(|| scan_plain(s).map(Right))
}

fn scan_split(s: &str) -> Option<Split<'_>> {
    let (head, split) = s.rsplit_once(':')?;
    let (token, module, port) = scan_plain(head)?;

    Some((token, module, port, signed(split)?))
}

fn scan_plain(s: &str) -> Option<Plain<'_>> {
    let mut parts = s.splitn(3, '/');

    let token = parts.next().filter(|t| !t.is_empty())?;
    let module = unsigned(parts.next()?)?;
    let port = unsigned(parts.next()?)?;

    Some((token, module, port))
}

/// Split a type token such as `eth12` into its family and interface number.
fn split_type_token(token: &str) -> Result<(&str, u32), ParseError> {
    let family = token.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &token[family.len()..];

    if family.is_empty() || digits.is_empty() {
        Err(ParseError::MalformedTypeName(token.into()))?;
    }

    let interface = digits
        .parse()
        .map_err(|_| ParseError::MalformedTypeName(token.into()))?;

    Ok((family, interface))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn unsigned(s: &str) -> Option<u32> {
    is_digits(s).then(|| s.parse().ok()).flatten()
}

fn signed(s: &str) -> Option<i32> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    is_digits(digits).then(|| s.parse().ok()).flatten()
}
