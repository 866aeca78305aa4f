//! Address range tests.
//!
//! Verifies checked construction, size and containment queries, overlap
//! detection, and display formatting.

use r2sys_core::common::{AddrRange, MemorySystemError};

#[test]
fn new_covers_half_open_interval() {
    let range = AddrRange::new(0x8000_0000, 0x8000_1000).unwrap();
    assert_eq!(range.start(), 0x8000_0000);
    assert_eq!(range.end(), 0x8000_1000);
    assert_eq!(range.size(), 0x1000);
}

#[test]
fn new_rejects_empty_and_inverted_ranges() {
    assert!(matches!(
        AddrRange::new(0x1000, 0x1000),
        Err(MemorySystemError::InvalidRange { start: 0x1000, size: 0 })
    ));
    assert!(AddrRange::new(0x2000, 0x1000).is_err());
}

#[test]
fn with_size_matches_new() {
    let a = AddrRange::with_size(0x8000_0000, 1 << 30).unwrap();
    let b = AddrRange::new(0x8000_0000, 0x8000_0000 + (1 << 30)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn with_size_rejects_zero_size() {
    assert!(matches!(
        AddrRange::with_size(0, 0),
        Err(MemorySystemError::InvalidRange { start: 0, size: 0 })
    ));
}

#[test]
fn with_size_rejects_overflowing_end() {
    assert!(AddrRange::with_size(u64::MAX - 0xF, 0x20).is_err());
}

#[test]
fn contains_excludes_end() {
    let range = AddrRange::with_size(0x1000, 0x100).unwrap();
    assert!(range.contains(0x1000));
    assert!(range.contains(0x10FF));
    assert!(!range.contains(0x1100));
    assert!(!range.contains(0x0FFF));
}

#[test]
fn display_uses_hex_bounds() {
    let range = AddrRange::with_size(0x8000_0000, 0x4000_0000).unwrap();
    assert_eq!(range.to_string(), "[0x80000000:0xc0000000)");
}
