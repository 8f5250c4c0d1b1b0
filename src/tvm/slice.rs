//! Slice implementation for reading data from cells
//!
//! A Slice reads a Cell sequentially, tracking the current position in both
//! bits and references. Every reader on the cell model (content parsers,
//! dictionary parser, account state parser) goes through it.

use crate::tvm::address::Address;
use crate::tvm::cell::Cell;
use anyhow::{Result, anyhow, bail};
use num_bigint::BigUint;
use std::sync::Arc;

/// A slice for reading data from a cell
#[derive(Debug, Clone)]
pub struct Slice {
    /// The cell being read
    cell: Arc<Cell>,
    /// Current bit position in the cell
    bit_pos: usize,
    /// Current reference position
    ref_pos: usize,
}

impl Slice {
    /// Creates a new slice from a cell
    pub fn new(cell: Arc<Cell>) -> Self {
        Self {
            cell,
            bit_pos: 0,
            ref_pos: 0,
        }
    }

    /// Returns the number of remaining bits
    pub fn remaining_bits(&self) -> usize {
        self.cell.bit_len().saturating_sub(self.bit_pos)
    }

    /// Returns the number of remaining references
    pub fn remaining_refs(&self) -> usize {
        self.cell.reference_count().saturating_sub(self.ref_pos)
    }

    /// Checks if both bits and references are exhausted
    pub fn is_empty(&self) -> bool {
        self.remaining_bits() == 0 && self.remaining_refs() == 0
    }

    /// Loads a single bit
    pub fn load_bit(&mut self) -> Result<bool> {
        if self.remaining_bits() == 0 {
            bail!("No more bits to read");
        }

        let byte = self.cell.data()[self.bit_pos / 8];
        let bit = (byte >> (7 - (self.bit_pos % 8))) & 1;
        self.bit_pos += 1;

        Ok(bit == 1)
    }

    /// Loads `n` bits, left-aligned into a byte vector
    pub fn load_bits(&mut self, n: usize) -> Result<Vec<u8>> {
        if n > self.remaining_bits() {
            bail!(
                "Not enough bits remaining: requested {}, available {}",
                n,
                self.remaining_bits()
            );
        }

        let mut result = vec![0u8; n.div_ceil(8)];

        for i in 0..n {
            if self.load_bit()? {
                result[i / 8] |= 1 << (7 - (i % 8));
            }
        }

        Ok(result)
    }

    /// Loads a byte (8 bits)
    pub fn load_byte(&mut self) -> Result<u8> {
        Ok(self.load_uint(8)? as u8)
    }

    /// Loads multiple bytes
    pub fn load_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        self.load_bits(n * 8)
    }

    /// Loads a u16 value (16 bits, big-endian)
    pub fn load_u16(&mut self) -> Result<u16> {
        Ok(self.load_uint(16)? as u16)
    }

    /// Loads a u32 value (32 bits, big-endian)
    pub fn load_u32(&mut self) -> Result<u32> {
        Ok(self.load_uint(32)? as u32)
    }

    /// Loads a u64 value (64 bits, big-endian)
    pub fn load_u64(&mut self) -> Result<u64> {
        self.load_uint(64)
    }

    /// Loads a uint with a specific number of bits
    pub fn load_uint(&mut self, bits: usize) -> Result<u64> {
        if bits > 64 {
            bail!("Cannot load more than 64 bits into u64");
        }

        if bits > self.remaining_bits() {
            bail!(
                "Not enough bits remaining: requested {}, available {}",
                bits,
                self.remaining_bits()
            );
        }

        let mut result = 0u64;
        for _ in 0..bits {
            result = (result << 1) | self.load_bit()? as u64;
        }

        Ok(result)
    }

    /// Loads an arbitrary-width unsigned integer
    pub fn load_big_uint(&mut self, bits: usize) -> Result<BigUint> {
        if bits == 0 {
            return Ok(BigUint::default());
        }

        let bytes = self.load_bits(bits)?;
        let pad = bytes.len() * 8 - bits;
        Ok(BigUint::from_bytes_be(&bytes) >> pad)
    }

    /// Loads a signed integer with a specific number of bits
    pub fn load_int(&mut self, bits: usize) -> Result<i64> {
        if bits > 64 {
            bail!("Cannot load more than 64 bits into i64");
        }

        if bits == 0 {
            return Ok(0);
        }

        let unsigned = self.load_uint(bits)?;

        if bits < 64 && unsigned & (1u64 << (bits - 1)) != 0 {
            // Sign-extend
            Ok((unsigned | (!0u64 << bits)) as i64)
        } else {
            Ok(unsigned as i64)
        }
    }

    /// Loads a reference to another cell
    pub fn load_reference(&mut self) -> Result<Arc<Cell>> {
        let reference = self
            .cell
            .reference(self.ref_pos)
            .ok_or_else(|| anyhow!("No more references to read"))?
            .clone();

        self.ref_pos += 1;
        Ok(reference)
    }

    /// Loads an optional reference (Maybe ^Cell)
    pub fn load_maybe_ref(&mut self) -> Result<Option<Arc<Cell>>> {
        if self.load_bit()? {
            Ok(Some(self.load_reference()?))
        } else {
            Ok(None)
        }
    }

    /// Preloads a reference without advancing the position
    pub fn preload_reference(&self, index: usize) -> Result<Arc<Cell>> {
        let actual_index = self.ref_pos + index;
        self.cell
            .reference(actual_index)
            .ok_or_else(|| anyhow!("Reference not found at index {}", actual_index))
            .cloned()
    }

    /// Skips a number of bits
    pub fn skip_bits(&mut self, n: usize) -> Result<()> {
        if n > self.remaining_bits() {
            bail!(
                "Cannot skip {} bits: only {} remaining",
                n,
                self.remaining_bits()
            );
        }
        self.bit_pos += n;
        Ok(())
    }

    /// Skips a number of references
    pub fn skip_refs(&mut self, n: usize) -> Result<()> {
        if n > self.remaining_refs() {
            bail!(
                "Cannot skip {} references: only {} remaining",
                n,
                self.remaining_refs()
            );
        }
        self.ref_pos += n;
        Ok(())
    }

    /// Gets the underlying cell
    pub fn cell(&self) -> &Arc<Cell> {
        &self.cell
    }

    /// Creates a new slice from the current position
    pub fn clone_from_current(&self) -> Self {
        self.clone()
    }

    /// Collects the unread bits and references into a standalone cell
    pub fn to_cell(&self) -> Result<Arc<Cell>> {
        let mut rest = self.clone();
        let bit_len = rest.remaining_bits();
        let data = rest.load_bits(bit_len)?;
        let refs = rest.load_remaining_refs()?;
        Ok(Arc::new(Cell::with_references(data, bit_len, refs)?))
    }

    /// Loads all remaining references
    pub fn load_remaining_refs(&mut self) -> Result<Vec<Arc<Cell>>> {
        let mut refs = Vec::new();
        while self.remaining_refs() > 0 {
            refs.push(self.load_reference()?);
        }
        Ok(refs)
    }

    /// Loads a variable-length integer (VarUInteger)
    ///
    /// First `length_bits` encode the byte length, then that many bytes of data.
    pub fn load_var_uint(&mut self, length_bits: usize) -> Result<u64> {
        let byte_len = self.load_uint(length_bits)? as usize;
        if byte_len > 8 {
            bail!("VarUInteger byte length {} exceeds maximum 8", byte_len);
        }

        self.load_uint(byte_len * 8)
    }

    /// Loads coins (VarUInteger 16)
    pub fn load_coins(&mut self) -> Result<u128> {
        let len = self.load_uint(4)? as usize;

        let mut result = 0u128;
        for byte in self.load_bytes(len)? {
            result = (result << 8) | byte as u128;
        }

        Ok(result)
    }

    /// Loads a `MsgAddressInt` or `addr_none`
    pub fn load_address(&mut self) -> Result<Option<Address>> {
        match self.load_uint(2)? {
            0b00 => Ok(None),
            0b10 => {
                if self.load_bit()? {
                    // anycast depth:(#<= 30) rewrite_pfx:(bits depth)
                    let depth = self.load_uint(5)? as usize;
                    self.skip_bits(depth)?;
                }
                let workchain = self.load_int(8)? as i8;
                let mut hash_part = [0u8; 32];
                hash_part.copy_from_slice(&self.load_bytes(32)?);
                Ok(Some(Address::new(workchain, hash_part)))
            }
            tag => bail!("Unsupported address tag {:#04b}", tag),
        }
    }

    /// Loads snake-encoded bytes: whole bytes of this cell then of each first reference
    pub fn load_snake_bytes(&mut self) -> Result<Vec<u8>> {
        if self.remaining_bits() % 8 != 0 {
            bail!("Snake data is not byte aligned");
        }

        let mut result = self.load_bytes(self.remaining_bits() / 8)?;
        if self.remaining_refs() > 0 {
            let mut next = Slice::new(self.load_reference()?);
            result.extend(next.load_snake_bytes()?);
        }

        Ok(result)
    }

    /// Loads a snake-encoded UTF-8 string
    pub fn load_snake_string(&mut self) -> Result<String> {
        Ok(String::from_utf8(self.load_snake_bytes()?)?)
    }
}

impl From<Arc<Cell>> for Slice {
    fn from(cell: Arc<Cell>) -> Self {
        Self::new(cell)
    }
}
