//! TON Address implementation
//!
//! Internal addresses only: a signed workchain plus a 256-bit account id,
//! printable either raw (`wc:hex`) or in the 48-character user-friendly form.

use crate::crc::CRC16;
use anyhow::{Result, bail};
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use std::fmt;

const BOUNCEABLE_TAG: u8 = 0x11;
const NON_BOUNCEABLE_TAG: u8 = 0x51;
const TEST_ONLY_FLAG: u8 = 0x80;

/// Represents a TON blockchain address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    /// Workchain ID (-1 for masterchain, 0 for basechain)
    pub workchain: i8,
    /// 32-byte hash part of the address
    pub hash_part: [u8; 32],
    /// Whether the address is bounceable
    pub is_bounceable: bool,
    /// Whether this is a test-only address
    pub is_test_only: bool,
}

impl Address {
    /// Creates a new address from workchain and hash part
    pub fn new(workchain: i8, hash_part: [u8; 32]) -> Self {
        Self {
            workchain,
            hash_part,
            is_bounceable: true,
            is_test_only: false,
        }
    }

    /// Parses an address in either raw or user-friendly form
    pub fn parse(address: &str) -> Result<Self> {
        let address = address.trim();
        if address.contains(':') {
            Self::from_hex(address)
        } else {
            Self::from_base64(address)
        }
    }

    /// Parses address from raw format: "workchain:hash"
    pub fn from_hex(address: &str) -> Result<Self> {
        let Some((workchain, hash_hex)) = address.split_once(':') else {
            bail!("Invalid raw address format: {}", address);
        };

        let workchain = workchain.parse::<i8>()?;
        if hash_hex.len() != 64 {
            bail!("Hash part must be 64 hex characters");
        }

        let mut hash_part = [0u8; 32];
        hex::decode_to_slice(hash_hex, &mut hash_part)?;

        Ok(Self::new(workchain, hash_part))
    }

    /// Parses address from base64 user-friendly format (either alphabet)
    pub fn from_base64(address: &str) -> Result<Self> {
        let decoded = if address.contains(['-', '_']) {
            URL_SAFE.decode(address)?
        } else {
            STANDARD.decode(address)?
        };

        if decoded.len() != 36 {
            bail!("Invalid user-friendly address length: {}", decoded.len());
        }

        let expected_crc = u16::from_be_bytes([decoded[34], decoded[35]]);
        if CRC16.checksum(&decoded[..34]) != expected_crc {
            bail!("Invalid address CRC");
        }

        let mut tag = decoded[0];
        let is_test_only = tag & TEST_ONLY_FLAG != 0;
        tag &= !TEST_ONLY_FLAG;

        let is_bounceable = match tag {
            BOUNCEABLE_TAG => true,
            NON_BOUNCEABLE_TAG => false,
            _ => bail!("Invalid address tag {:#04x}", decoded[0]),
        };

        let mut hash_part = [0u8; 32];
        hash_part.copy_from_slice(&decoded[2..34]);

        Ok(Self {
            workchain: decoded[1] as i8,
            hash_part,
            is_bounceable,
            is_test_only,
        })
    }

    /// Renders the user-friendly form with explicit flags
    pub fn to_friendly(&self, url_safe: bool, bounceable: bool, test_only: bool) -> String {
        let mut tag = if bounceable {
            BOUNCEABLE_TAG
        } else {
            NON_BOUNCEABLE_TAG
        };
        if test_only {
            tag |= TEST_ONLY_FLAG;
        }

        let mut data = Vec::with_capacity(36);
        data.push(tag);
        data.push(self.workchain as u8);
        data.extend_from_slice(&self.hash_part);
        data.extend_from_slice(&CRC16.checksum(&data).to_be_bytes());

        if url_safe {
            URL_SAFE.encode(&data)
        } else {
            STANDARD.encode(&data)
        }
    }

    /// Converts to raw format (workchain:hash)
    pub fn to_hex(&self) -> String {
        format!("{}:{}", self.workchain, hex::encode(self.hash_part))
    }

    /// Converts to url-safe user-friendly format using the stored flags
    pub fn to_base64(&self) -> String {
        self.to_friendly(true, self.is_bounceable, self.is_test_only)
    }

    pub fn set_bounceable(&mut self, bounceable: bool) {
        self.is_bounceable = bounceable;
    }

    pub fn set_test_only(&mut self, test_only: bool) {
        self.is_test_only = test_only;
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl std::str::FromStr for Address {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "0:83dfd552e63729b472fcbcc8c45ebcc6691702558b68ec7527e1ba403a0f31a8";

    #[test]
    fn test_address_hex() {
        let addr = Address::from_hex(RAW).unwrap();
        assert_eq!(addr.workchain, 0);
        assert_eq!(addr.hash_part[0], 0x83);
        assert_eq!(addr.to_hex(), RAW);
    }

    #[test]
    fn test_address_base64() {
        let addr: Address = "EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqB2N"
            .parse()
            .unwrap();
        assert_eq!(addr.workchain, 0);
        assert!(addr.is_bounceable);
        assert!(!addr.is_test_only);
        assert_eq!(addr.to_hex(), RAW);
        assert_eq!(
            addr.to_string(),
            "EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqB2N"
        );
    }

    #[test]
    fn test_address_bad_crc() {
        assert!(Address::from_base64("EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqB2O").is_err());
    }

    #[test]
    fn test_address_masterchain_raw() {
        let addr = Address::parse(&format!("-1:{}", "ab".repeat(32))).unwrap();
        assert_eq!(addr.workchain, -1);
        assert_eq!(addr.to_hex(), format!("-1:{}", "ab".repeat(32)));
    }

    #[test]
    fn test_address_flags_survive_round_trip() {
        let addr = Address::new(0, [9u8; 32]);
        let friendly = addr.to_friendly(true, false, true);
        let parsed = Address::parse(&friendly).unwrap();
        assert!(!parsed.is_bounceable);
        assert!(parsed.is_test_only);
        assert_eq!(parsed.hash_part, addr.hash_part);
    }

    #[test]
    fn test_zero_address_formats() {
        let zero_addr = Address::new(0, [0u8; 32]);

        assert_eq!(
            zero_addr.to_hex(),
            "0:0000000000000000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(
            zero_addr.to_friendly(true, true, false),
            "EQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAM9c"
        );
        assert_eq!(
            zero_addr.to_friendly(true, false, false),
            "UQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAJKZ"
        );
    }
}
