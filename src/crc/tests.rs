//! Tests for CRC module

use super::*;

#[test]
fn test_crc16_check_value() {
    // Standard check input for CRC-16/XMODEM
    assert_eq!(CRC16.checksum(b"123456789"), 0x31C3);
}

#[test]
fn test_crc32c_check_value() {
    // Standard check input for CRC-32/ISCSI (Castagnoli)
    assert_eq!(CRC32C.checksum(b"123456789"), 0xE306_9283);
}

#[test]
fn test_crc16_empty_data() {
    assert_eq!(CRC16.checksum(b""), 0);
}

#[test]
fn test_crc16_order_matters() {
    assert_ne!(CRC16.checksum(b"abc"), CRC16.checksum(b"bca"));
}

#[test]
fn test_crc32c_digest_update() {
    let mut digest = CRC32C.digest();
    digest.update(b"hello");
    digest.update(b" world");
    let checksum1 = digest.finalize();

    let checksum2 = CRC32C.checksum(b"hello world");

    // Incremental update should produce same result
    assert_eq!(checksum1, checksum2);
}

#[test]
fn test_crc32c_pattern_data() {
    let data = [0xAAu8, 0x55, 0xAA, 0x55];
    let longer = [0xAAu8, 0x55, 0xAA, 0x55, 0xAA, 0x55];

    assert_ne!(CRC32C.checksum(&data), CRC32C.checksum(&longer));
}
