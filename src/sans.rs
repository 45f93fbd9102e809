//! Individual encoding stages, free of I/O.
//!
//! A token is produced in four steps, each in its own module:
//!
//! - [`check`] computes the CRC-32 of the switch name.
//! - [`port`] parses a port specification into a [`port::PortSpec`].
//! - [`descriptor`] packs the port fields and a resolved type code into a
//! 32-bit [`descriptor::PortDescriptor`].
//! - [`base85`] joins checksum and descriptor into an 8-byte block and renders
//! it as a [`base85::Token`].
//!
//! Resolving the type code is left to the caller. The [`table`] module parses
//! the line format of a type table, and [`crate::avec`] wires everything
//! together.
//!
//! The [`legacy`] module renders the older 15-character layout, which holds
//! the same checksum and fields in hexadecimal and offset characters.

pub mod base85;
pub mod check;
pub mod descriptor;
pub mod legacy;
pub mod port;
pub mod table;

pub use base85::Token;
pub use descriptor::PortDescriptor;
pub use port::PortSpec;
