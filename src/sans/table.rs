//! Line format of port type tables.
//!
//! Each line maps a type family to its code, separated by whitespace:
//!
//! ```text
//! eth 5
//! xe 6
//! ```
//!
//! Lines that do not hold exactly a name and an unsigned 32-bit number are
//! skipped. Earlier lines shadow later ones naming the same family.

/// A single table line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry<'a> {
    pub name: &'a str,
    pub code: u32,
}

impl<'a> TypeEntry<'a> {
    /// Parse a table line, returning `None` if it is malformed.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_ascii_whitespace();

        let (Some(name), Some(code), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return None;
        };

        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            name,
            code: code.parse().ok()?,
        })
    }
}

/// Find the code of the first entry naming a family.
pub fn lookup<'a>(lines: impl IntoIterator<Item = &'a str>, family: &str) -> Option<u32> {
    lines
        .into_iter()
        .filter_map(|line| {
            let entry = TypeEntry::parse(line);
            if entry.is_none() {
                tracing::trace!(line, "skipping malformed type table line");
            }
            entry
        })
        .find(|entry| entry.name == family)
        .map(|entry| entry.code)
}
