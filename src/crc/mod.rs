use crc::{Crc, CRC_16_XMODEM, CRC_32_ISCSI};

/// CRC16 used by user-friendly addresses and get-method ids
pub const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// CRC32-C trailer of a bag of cells
pub const CRC32C: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);

#[cfg(test)]
mod tests;
