#![cfg(feature = "std")]

use std::io::Cursor;

use porttag::{
    avec::reader::{self, Error},
    sans::Token,
};

const PATH: &str = "fixtures/types";

#[test]
fn encode_path() {
    let token: Token = reader::encode_path(b"sw1", "eth1/2/3", PATH).unwrap();
    assert_eq!(token.to_string(), "JlYlv&^}Zz");
}

#[test]
fn encode_reader() {
    let mut file = std::io::BufReader::new(std::fs::File::open(PATH).unwrap());
    let token: Token = porttag::avec::encode_reader(b"core-sw-01", "ge1/0/48:2", &mut file).unwrap();
    assert_eq!(token.to_string(), "nwpF(a+xXF");
}

#[test]
fn resolve_fixture() {
    let resolve = |family| {
        let mut file = std::io::BufReader::new(std::fs::File::open(PATH).unwrap());
        reader::resolve(&mut file, family).unwrap()
    };

    assert_eq!(resolve("eth"), Some(5));
    assert_eq!(resolve("xe"), Some(6));
    assert_eq!(resolve("ge"), Some(3));
    assert_eq!(resolve("ib"), Some(12));
    assert_eq!(resolve("fe"), None);
    assert_eq!(resolve("sfp"), None);
    assert_eq!(resolve("#"), None);
}

#[test]
fn invalid_utf8_line_skipped() {
    let mut r = Cursor::new(b"\xFF\xFE 1\neth 5\n".to_vec());
    assert_eq!(reader::resolve(&mut r, "eth").unwrap(), Some(5));
}

#[test]
fn last_line_without_newline() {
    let mut r = Cursor::new(b"xe 6\neth 5".to_vec());
    assert_eq!(reader::resolve(&mut r, "eth").unwrap(), Some(5));
}

#[test]
fn missing_table() {
    let result = reader::encode_path::<Token>(b"sw1", "eth1/2/3", "fixtures/missing");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn unknown_type() {
    let result = reader::encode_path::<Token>(b"sw1", "fe1/2/3", PATH);
    assert!(matches!(result, Err(Error::UnknownPortType(family)) if family == "fe"));
}

#[test]
fn parse_errors_before_reading() {
    // A malformed specification fails before the table is read.
    let mut r = Cursor::new(Vec::new());
    let result = reader::encode::<Token>(b"sw1", "eth", &mut r);
    assert!(matches!(result, Err(Error::MalformedPortSpec(_))));
    assert_eq!(r.position(), 0);
}

#[test]
fn parse_errors_before_opening() {
    let result = reader::encode_path::<Token>(b"sw1", "eth/2/3", "fixtures/missing");
    assert!(matches!(result, Err(Error::MalformedTypeName(token)) if token == "eth"));

    let result = reader::encode_path::<Token>(b"sw1", "eth1-2-3", "fixtures/missing");
    assert!(matches!(result, Err(Error::MalformedPortSpec(_))));
}
