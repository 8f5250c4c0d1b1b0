//! Enhanced Builder for constructing cells with convenient methods
//!
//! This module provides a high-level builder (`Builder`) that wraps the low-level
//! `CellBuilder` with additional convenience methods for common TON operations.
//!
//! - **`CellBuilder`** (in `cell.rs`): minimal API for raw bit/byte operations.
//! - **`Builder`** (this module): addresses, coins, snake strings, maybe-refs and
//!   dictionaries on top of `CellBuilder`.
//!
//! # Examples
//!
//! ```rust
//! use tonutils_nft::tvm::{Builder, Address};
//!
//! let mut builder = Builder::new();
//!
//! let addr = Address::new(0, [0u8; 32]);
//! builder.store_address(Some(&addr)).unwrap();
//!
//! // 1 TON
//! builder.store_coins(1_000_000_000).unwrap();
//!
//! let cell = builder.build().unwrap();
//! assert_eq!(cell.bit_len(), 267 + 4 + 32);
//! ```

use crate::tvm::address::Address;
use crate::tvm::cell::{Cell, CellBuilder, MAX_CELL_BITS, MAX_CELL_REFS};
use crate::tvm::slice::Slice;
use anyhow::{Result, bail};
use num_bigint::BigUint;
use std::sync::Arc;

/// Extended builder with convenience methods
#[derive(Debug, Clone, Default)]
pub struct Builder {
    inner: CellBuilder,
}

impl Builder {
    /// Creates a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bits used
    pub fn bit_len(&self) -> usize {
        self.inner.bit_len()
    }

    /// Returns the number of available bits
    pub fn available_bits(&self) -> usize {
        MAX_CELL_BITS - self.bit_len()
    }

    /// Returns the number of available whole bytes
    pub fn available_bytes(&self) -> usize {
        self.available_bits() / 8
    }

    /// Returns the number of references
    pub fn ref_count(&self) -> usize {
        self.inner.ref_count()
    }

    /// Returns the number of available references
    pub fn available_refs(&self) -> usize {
        MAX_CELL_REFS - self.ref_count()
    }

    /// Stores a single bit
    pub fn store_bit(&mut self, bit: bool) -> Result<&mut Self> {
        self.inner.store_bit(bit)?;
        Ok(self)
    }

    /// Stores multiple bits from a byte slice
    pub fn store_bits(&mut self, bits: &[u8], bit_len: usize) -> Result<&mut Self> {
        self.inner.store_bits(bits, bit_len)?;
        Ok(self)
    }

    /// Stores a byte
    pub fn store_byte(&mut self, byte: u8) -> Result<&mut Self> {
        self.inner.store_byte(byte)?;
        Ok(self)
    }

    /// Stores multiple bytes
    pub fn store_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        self.inner.store_bytes(bytes)?;
        Ok(self)
    }

    /// Stores a u32 value
    pub fn store_u32(&mut self, value: u32) -> Result<&mut Self> {
        self.inner.store_u32(value)?;
        Ok(self)
    }

    /// Stores a u64 value
    pub fn store_u64(&mut self, value: u64) -> Result<&mut Self> {
        self.inner.store_u64(value)?;
        Ok(self)
    }

    /// Stores an unsigned integer with specific bit length
    pub fn store_uint(&mut self, value: u64, bits: usize) -> Result<&mut Self> {
        self.inner.store_uint(value, bits)?;
        Ok(self)
    }

    /// Stores an arbitrary-width unsigned integer (dictionary keys, 256-bit hashes)
    pub fn store_big_uint(&mut self, value: &BigUint, bits: usize) -> Result<&mut Self> {
        if value.bits() as usize > bits {
            bail!("Value needs {} bits, only {} available", value.bits(), bits);
        }

        if bits == 0 {
            return Ok(self);
        }

        let byte_len = bits.div_ceil(8);
        let aligned = value << (byte_len * 8 - bits);
        let raw = aligned.to_bytes_be();

        let mut buf = vec![0u8; byte_len];
        // A zero value serializes to a single zero byte
        let start = byte_len.saturating_sub(raw.len());
        buf[start..].copy_from_slice(&raw[raw.len().saturating_sub(byte_len)..]);

        self.store_bits(&buf, bits)
    }

    /// Stores a signed integer with specific bit length
    pub fn store_int(&mut self, value: i64, bits: usize) -> Result<&mut Self> {
        if bits == 0 || bits > 64 {
            bail!("Signed integer width must be between 1 and 64 bits");
        }

        if bits < 64 {
            let min = -(1i64 << (bits - 1));
            let max = (1i64 << (bits - 1)) - 1;
            if value < min || value > max {
                bail!("Value {} does not fit into {} signed bits", value, bits);
            }
        }

        let unsigned = if bits == 64 {
            value as u64
        } else {
            (value as u64) & ((1u64 << bits) - 1)
        };

        self.store_uint(unsigned, bits)
    }

    /// Stores a boolean value as a single bit
    pub fn store_bool(&mut self, value: bool) -> Result<&mut Self> {
        self.store_bit(value)
    }

    /// Stores a reference to another cell
    pub fn store_ref(&mut self, cell: Arc<Cell>) -> Result<&mut Self> {
        self.inner.store_reference(cell)?;
        Ok(self)
    }

    /// Stores an optional reference (Maybe ^Cell)
    pub fn store_maybe_ref(&mut self, cell: Option<Arc<Cell>>) -> Result<&mut Self> {
        match cell {
            Some(c) => {
                self.store_bit(true)?;
                self.store_ref(c)?;
            }
            None => {
                self.store_bit(false)?;
            }
        }
        Ok(self)
    }

    /// Stores the contents (bits and references) of another cell inline
    pub fn store_cell(&mut self, cell: &Arc<Cell>) -> Result<&mut Self> {
        if self.ref_count() + cell.reference_count() > MAX_CELL_REFS {
            bail!("Builder refs overflow");
        }

        self.store_bits(cell.data(), cell.bit_len())?;

        for reference in cell.references() {
            self.store_ref(reference.clone())?;
        }

        Ok(self)
    }

    /// Stores the unread remainder of a slice
    pub fn store_slice(&mut self, slice: &Slice) -> Result<&mut Self> {
        let mut rest = slice.clone_from_current();
        let remaining_bits = rest.remaining_bits();
        if remaining_bits > 0 {
            let data = rest.load_bits(remaining_bits)?;
            self.store_bits(&data, remaining_bits)?;
        }

        for reference in rest.load_remaining_refs()? {
            self.store_ref(reference)?;
        }

        Ok(self)
    }

    /// Stores a variable-length unsigned integer (VarUInteger n)
    ///
    /// `length_bits` is the width of the byte-length prefix.
    pub fn store_var_uint(&mut self, value: u64, length_bits: usize) -> Result<&mut Self> {
        if value == 0 {
            return self.store_uint(0, length_bits);
        }

        let byte_len = (64 - value.leading_zeros() as usize).div_ceil(8);
        self.store_uint(byte_len as u64, length_bits)?;
        self.store_uint(value, byte_len * 8)?;
        Ok(self)
    }

    /// Stores coins (VarUInteger 16)
    pub fn store_coins(&mut self, amount: u128) -> Result<&mut Self> {
        if amount == 0 {
            return self.store_uint(0, 4);
        }

        let byte_len = (128 - amount.leading_zeros() as usize).div_ceil(8);
        if byte_len > 15 {
            bail!("Coins value too large");
        }

        self.store_uint(byte_len as u64, 4)?;

        let bytes = amount.to_be_bytes();
        self.store_bytes(&bytes[16 - byte_len..])?;

        Ok(self)
    }

    /// Stores a string using snake encoding
    pub fn store_snake_string(&mut self, s: &str) -> Result<&mut Self> {
        self.store_snake_bytes(s.as_bytes())
    }

    /// Stores bytes using snake encoding (splits across a chain of cells if needed)
    pub fn store_snake_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        let available = self.available_bytes();
        if bytes.len() <= available {
            return self.store_bytes(bytes);
        }

        self.store_bytes(&bytes[..available])?;

        let mut next_builder = Builder::new();
        next_builder.store_snake_bytes(&bytes[available..])?;
        self.store_ref(next_builder.build()?)?;

        Ok(self)
    }

    /// Stores a TON address, `None` becomes `addr_none`
    pub fn store_address(&mut self, address: Option<&Address>) -> Result<&mut Self> {
        match address {
            None => {
                // addr_none$00
                self.store_uint(0b00, 2)?;
            }
            Some(addr) => {
                // addr_std$10 anycast:(Maybe Anycast) workchain_id:int8 address:bits256
                self.store_uint(0b10, 2)?;
                self.store_bit(false)?;
                self.store_int(addr.workchain as i64, 8)?;
                self.store_bytes(&addr.hash_part)?;
            }
        }
        Ok(self)
    }

    /// Stores a dictionary root (HashmapE: Maybe ^Hashmap)
    pub fn store_dict(&mut self, dict: Option<Arc<Cell>>) -> Result<&mut Self> {
        self.store_maybe_ref(dict)
    }

    /// Builds the cell
    pub fn build(self) -> Result<Arc<Cell>> {
        self.inner.build()
    }

    /// Converts to a cell (alias for build)
    pub fn end_cell(self) -> Result<Arc<Cell>> {
        self.build()
    }

    /// Converts to a slice
    pub fn to_slice(self) -> Result<Slice> {
        let cell = self.build()?;
        Ok(Slice::new(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let mut builder = Builder::new();
        builder.store_u32(0x12345678).unwrap();
        builder.store_byte(0xFF).unwrap();
        assert_eq!(builder.bit_len(), 40);
        assert_eq!(builder.available_bits(), 983);

        let cell = builder.build().unwrap();
        assert_eq!(cell.bit_len(), 40);
    }

    #[test]
    fn test_builder_address() {
        let addr = Address::new(0, [0u8; 32]);
        let mut builder = Builder::new();
        builder.store_address(Some(&addr)).unwrap();

        let cell = builder.build().unwrap();
        // 2 bits (addr_std) + 1 bit (no anycast) + 8 bits (workchain) + 256 bits (hash) = 267 bits
        assert_eq!(cell.bit_len(), 267);
    }

    #[test]
    fn test_builder_none_address() {
        let mut builder = Builder::new();
        builder.store_address(None).unwrap();
        let cell = builder.build().unwrap();

        assert_eq!(cell.bit_len(), 2);
        assert_eq!(cell.data(), &[0x00]);
    }

    #[test]
    fn test_builder_masterchain_address() {
        let addr = Address::new(-1, [0xAA; 32]);
        let mut builder = Builder::new();
        builder.store_address(Some(&addr)).unwrap();

        let mut slice = builder.to_slice().unwrap();
        assert_eq!(slice.load_uint(3).unwrap(), 0b100);
        assert_eq!(slice.load_int(8).unwrap(), -1);
    }

    #[test]
    fn test_builder_coins() {
        let mut builder = Builder::new();
        builder.store_coins(1_000_000_000).unwrap(); // 1 TON, 4 bytes

        let cell = builder.build().unwrap();
        assert_eq!(cell.bit_len(), 4 + 32);
    }

    #[test]
    fn test_builder_zero_coins() {
        let mut builder = Builder::new();
        builder.store_coins(0).unwrap();
        assert_eq!(builder.bit_len(), 4);
    }

    #[test]
    fn test_builder_coins_too_large() {
        let mut builder = Builder::new();
        assert!(builder.store_coins(u128::MAX).is_err());
    }

    #[test]
    fn test_store_int_range() {
        let mut builder = Builder::new();
        assert!(builder.store_int(-128, 8).is_ok());
        assert!(builder.store_int(127, 8).is_ok());
        assert!(builder.store_int(128, 8).is_err());
        assert!(builder.store_int(-129, 8).is_err());
    }

    #[test]
    fn test_store_big_uint() {
        let mut builder = Builder::new();
        builder
            .store_big_uint(&BigUint::from(0x1234u32), 20)
            .unwrap();
        let mut slice = builder.to_slice().unwrap();
        assert_eq!(slice.load_uint(20).unwrap(), 0x1234);

        let mut builder = Builder::new();
        assert!(builder.store_big_uint(&BigUint::from(256u32), 8).is_err());
    }

    #[test]
    fn test_store_big_uint_zero() {
        let mut builder = Builder::new();
        builder.store_big_uint(&BigUint::from(0u32), 256).unwrap();
        assert_eq!(builder.bit_len(), 256);
    }

    #[test]
    fn test_builder_snake_string() {
        let long_string = "a".repeat(200);
        let mut builder = Builder::new();
        builder.store_byte(0x01).unwrap();
        builder.store_snake_string(&long_string).unwrap();

        let cell = builder.build().unwrap();
        // 126 bytes fit in the root next to the prefix byte, the rest goes to a ref
        assert_eq!(cell.bit_len(), 8 + 126 * 8);
        assert_eq!(cell.reference_count(), 1);
        assert_eq!(cell.reference(0).unwrap().bit_len(), 74 * 8);
    }

    #[test]
    fn test_store_cell_inline() {
        let mut inner = Builder::new();
        inner.store_u32(7).unwrap();
        inner.store_ref(Builder::new().build().unwrap()).unwrap();
        let inner = inner.build().unwrap();

        let mut outer = Builder::new();
        outer.store_bit(true).unwrap();
        outer.store_cell(&inner).unwrap();
        let outer = outer.build().unwrap();

        assert_eq!(outer.bit_len(), 33);
        assert_eq!(outer.reference_count(), 1);
    }
}
