#![no_std]

//! Compact, deterministic tokens for network switch ports.
//!
//! Porttag turns a switch name and a port specification such as `eth1/2/3:4`
//! into a ten-character printable token. The token carries a CRC-32 of the
//! switch name followed by a packed 32-bit port descriptor, rendered in a
//! base-85 alphabet that is safe to embed in hostnames, labels and asset tags.
//!
//! Most users should begin with the functions in the [`avec`] module, which run
//! the whole pipeline against a type table. The individual stages (checksum,
//! parser, bit-packer and codec) live in the [`sans`] module and perform no
//! I/O.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based type tables (default).
//! - `cli`: build the `porttag` command-line tool (default).

extern crate alloc;

pub mod avec;
pub mod sans;
