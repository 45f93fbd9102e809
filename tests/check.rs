use porttag::sans::check::{Crc32, compute_crc};

#[test]
fn check_value() {
    assert_eq!(compute_crc(b"123456789"), 0xFC891918);
}

#[test]
fn empty_input() {
    // The all-ones preload, complemented.
    assert_eq!(compute_crc(b""), 0x0000_0000);
}

#[test]
fn single_byte() {
    assert_eq!(compute_crc(b"a"), 0x19939B6B);
}

#[test]
fn order_sensitive() {
    assert_eq!(compute_crc(b"ab"), 0xE993FDCD);
    assert_eq!(compute_crc(b"ba"), 0x963B84C7);
}

#[test]
fn switch_name() {
    assert_eq!(compute_crc(b"sw1"), 0x8CCEC102);
    assert_eq!(compute_crc(b"sw2"), 0x818DE7DB);
}

#[test]
fn incremental_matches_whole() {
    let mut crc = Crc32::new();
    crc.update(b"1234");
    crc.update(b"");
    crc.update(b"56789");
    assert_eq!(crc.finish(), compute_crc(b"123456789"));
}
