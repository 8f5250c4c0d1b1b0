//! Cell implementation for TON blockchain
//!
//! A cell is a fundamental data structure in TON that can store up to 1023 bits
//! of data and maintain up to 4 references to other cells.

use anyhow::{Result, bail};
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Maximum number of bits a cell can store
pub const MAX_CELL_BITS: usize = 1023;

/// Maximum number of references a cell can have
pub const MAX_CELL_REFS: usize = 4;

/// Type byte of a library reference cell
pub const LIBRARY_CELL_TYPE: u8 = 0x02;

/// Represents a cell in the TON blockchain
///
/// Ordinary cells are the common case. The only exotic kind accepted is the
/// level-0 library reference, which account code uses to point at shared
/// library code by hash.
///
/// Cells are immutable once constructed. The representation hash and depth are
/// computed when the cell is created, so sharing a cell through `Arc` never
/// recomputes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Cell data as bytes, bits past `bit_len` are always zero
    data: Vec<u8>,
    /// Number of bits in the cell (not necessarily a multiple of 8)
    bit_len: usize,
    /// References to other cells
    references: Vec<Arc<Cell>>,
    /// Representation hash
    hash: [u8; 32],
    /// Maximum distance to a leaf
    depth: u16,
    /// Whether this is an exotic (special) cell
    is_exotic: bool,
}

impl Cell {
    /// Creates a new empty cell
    pub fn new() -> Self {
        // An empty cell is always within capacity
        Self::finish(Vec::new(), 0, Vec::new(), false)
    }

    /// Creates a cell with the given data and bit length and no references
    pub fn with_data(data: Vec<u8>, bit_len: usize) -> Result<Self> {
        Self::with_references(data, bit_len, Vec::new())
    }

    /// Creates a cell with data and child references
    pub fn with_references(
        mut data: Vec<u8>,
        bit_len: usize,
        references: Vec<Arc<Cell>>,
    ) -> Result<Self> {
        if bit_len > MAX_CELL_BITS {
            bail!(
                "Cell bit length {} exceeds maximum {}",
                bit_len,
                MAX_CELL_BITS
            );
        }

        if references.len() > MAX_CELL_REFS {
            bail!(
                "Cell has {} references, maximum is {}",
                references.len(),
                MAX_CELL_REFS
            );
        }

        let required_bytes = bit_len.div_ceil(8);
        if data.len() < required_bytes {
            bail!(
                "Data length {} is insufficient for {} bits",
                data.len(),
                bit_len
            );
        }

        // Keep the representation canonical: drop trailing bytes and zero the
        // unused low bits of the last byte
        data.truncate(required_bytes);
        if bit_len % 8 != 0 {
            let mask = 0xFFu8 << (8 - bit_len % 8);
            data[required_bytes - 1] &= mask;
        }

        Ok(Self::finish(data, bit_len, references, false))
    }

    /// Creates an exotic cell from its raw data
    ///
    /// Only library references are supported: `type:uint8 = 2` followed by
    /// the 256-bit hash of the library root, with no references.
    pub fn exotic(data: Vec<u8>, bit_len: usize, references: Vec<Arc<Cell>>) -> Result<Self> {
        let cell = Self::with_references(data, bit_len, references)?;
        let Some(&cell_type) = cell.data.first().filter(|_| cell.bit_len >= 8) else {
            bail!("Exotic cell without a type byte");
        };
        if cell_type != LIBRARY_CELL_TYPE {
            bail!("Unsupported exotic cell type {}", cell_type);
        }
        if cell.bit_len != 8 + 256 || !cell.references.is_empty() {
            bail!(
                "Malformed library cell: {} bits, {} references",
                cell.bit_len,
                cell.references.len()
            );
        }

        Ok(Self::finish(cell.data, cell.bit_len, Vec::new(), true))
    }

    /// Creates a library reference cell pointing at `library_hash`
    pub fn library(library_hash: [u8; 32]) -> Self {
        let mut data = Vec::with_capacity(33);
        data.push(LIBRARY_CELL_TYPE);
        data.extend_from_slice(&library_hash);
        Self::finish(data, 8 + 256, Vec::new(), true)
    }

    fn finish(
        data: Vec<u8>,
        bit_len: usize,
        references: Vec<Arc<Cell>>,
        is_exotic: bool,
    ) -> Self {
        let depth = references
            .iter()
            .map(|r| r.depth() + 1)
            .max()
            .unwrap_or(0);

        let mut cell = Self {
            data,
            bit_len,
            references,
            hash: [0u8; 32],
            depth,
            is_exotic,
        };
        cell.hash = cell.compute_hash();
        cell
    }

    /// Returns the cell's data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of bits in the cell
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Returns the cell's references
    pub fn references(&self) -> &[Arc<Cell>] {
        &self.references
    }

    /// Returns the number of references
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    /// Gets a reference by index
    pub fn reference(&self, index: usize) -> Option<&Arc<Cell>> {
        self.references.get(index)
    }

    /// Returns whether this is an exotic cell
    pub fn is_exotic(&self) -> bool {
        self.is_exotic
    }

    /// Hash stored in a library reference cell
    pub fn library_hash(&self) -> Option<[u8; 32]> {
        if !self.is_exotic {
            return None;
        }
        self.data.get(1..33)?.try_into().ok()
    }

    /// Computes the cell's descriptors (2 bytes)
    pub fn descriptors(&self) -> [u8; 2] {
        // First byte: r + 8*s + 32*l, every supported cell has level 0
        let refs_descriptor = self.references.len() as u8 + if self.is_exotic { 8 } else { 0 };

        // Second byte: floor(b/8) + ceil(b/8)
        let bits_descriptor = (self.bit_len / 8 + self.bit_len.div_ceil(8)) as u8;

        [refs_descriptor, bits_descriptor]
    }

    /// Serializes the cell data, appending the completion tag to a partial byte
    pub fn serialize_data(&self) -> Vec<u8> {
        let mut result = self.data.clone();

        if self.bit_len % 8 != 0 {
            let last_byte_idx = self.bit_len / 8;
            let bits_in_last_byte = self.bit_len % 8;
            result[last_byte_idx] |= 1 << (7 - bits_in_last_byte);
        }

        result
    }

    /// Returns the depth of the cell
    pub fn depth(&self) -> u16 {
        self.depth
    }

    /// Returns the representation hash of the cell
    pub fn hash(&self) -> [u8; 32] {
        self.hash
    }

    fn compute_hash(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        hasher.update(self.descriptors());
        hasher.update(self.serialize_data());

        for reference in &self.references {
            hasher.update(reference.depth().to_be_bytes());
        }

        for reference in &self.references {
            hasher.update(reference.hash());
        }

        hasher.finalize().into()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

/// Low-level builder for constructing cells
///
/// This is the core, minimal builder that provides basic bit/byte operations.
/// For a higher-level API with TON-specific convenience methods, see [`Builder`](crate::tvm::Builder).
///
/// # Example
///
/// ```rust
/// use tonutils_nft::tvm::CellBuilder;
///
/// let mut builder = CellBuilder::new();
/// builder.store_u32(0x12345678).unwrap();
/// builder.store_byte(0xFF).unwrap();
/// let cell = builder.build().unwrap();
/// assert_eq!(cell.bit_len(), 40);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CellBuilder {
    data: Vec<u8>,
    bit_len: usize,
    references: Vec<Arc<Cell>>,
}

impl CellBuilder {
    /// Creates a new cell builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bits stored so far
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Returns the number of references stored so far
    pub fn ref_count(&self) -> usize {
        self.references.len()
    }

    /// Stores bits from a byte slice
    pub fn store_bits(&mut self, bits: &[u8], bit_len: usize) -> Result<&mut Self> {
        if self.bit_len + bit_len > MAX_CELL_BITS {
            bail!(
                "Cannot store {} bits: would exceed maximum cell size ({} used)",
                bit_len,
                self.bit_len
            );
        }

        let required_bytes = bit_len.div_ceil(8);
        if bits.len() < required_bytes {
            bail!("Insufficient data for {} bits", bit_len);
        }

        for i in 0..bit_len {
            let bit = (bits[i / 8] >> (7 - (i % 8))) & 1;

            let target_byte_idx = self.bit_len / 8;
            if target_byte_idx >= self.data.len() {
                self.data.push(0);
            }

            if bit == 1 {
                self.data[target_byte_idx] |= 1 << (7 - (self.bit_len % 8));
            }

            self.bit_len += 1;
        }

        Ok(self)
    }

    /// Stores a byte
    pub fn store_byte(&mut self, byte: u8) -> Result<&mut Self> {
        self.store_bits(&[byte], 8)
    }

    /// Stores multiple bytes
    pub fn store_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        self.store_bits(bytes, bytes.len() * 8)
    }

    /// Stores a u32 value
    pub fn store_u32(&mut self, value: u32) -> Result<&mut Self> {
        self.store_bits(&value.to_be_bytes(), 32)
    }

    /// Stores a u64 value
    pub fn store_u64(&mut self, value: u64) -> Result<&mut Self> {
        self.store_bits(&value.to_be_bytes(), 64)
    }

    /// Stores `value` as an unsigned integer of exactly `bits` bits
    ///
    /// Fails when the value does not fit, instead of truncating it.
    pub fn store_uint(&mut self, value: u64, bits: usize) -> Result<&mut Self> {
        if bits > 64 {
            bail!("Cannot store more than 64 bits from u64");
        }

        if bits < 64 && value >> bits != 0 {
            bail!("Value {} does not fit into {} bits", value, bits);
        }

        if bits == 0 {
            return Ok(self);
        }

        // Left-align the value so its most significant stored bit comes first
        let aligned = value << (64 - bits);
        self.store_bits(&aligned.to_be_bytes(), bits)
    }

    /// Stores a single bit
    pub fn store_bit(&mut self, bit: bool) -> Result<&mut Self> {
        self.store_bits(&[if bit { 0x80 } else { 0x00 }], 1)
    }

    /// Adds a reference to another cell
    pub fn store_reference(&mut self, cell: Arc<Cell>) -> Result<&mut Self> {
        if self.references.len() >= MAX_CELL_REFS {
            bail!(
                "Cannot add reference: maximum {} references allowed",
                MAX_CELL_REFS
            );
        }
        self.references.push(cell);
        Ok(self)
    }

    /// Builds the cell
    pub fn build(self) -> Result<Arc<Cell>> {
        Ok(Arc::new(Cell::with_references(
            self.data,
            self.bit_len,
            self.references,
        )?))
    }
}
