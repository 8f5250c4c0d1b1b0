//! Bag of Cells (BoC) serialization and deserialization
//!
//! BoC is the envelope every cell tree travels in: a header, the cells in
//! topological order (parents before children) with their references written
//! as indices, and an optional CRC32-C trailer.

use crate::crc::CRC32C;
use crate::tvm::cell::Cell;
use anyhow::{Context, Result, anyhow, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;

/// BoC magic number for standard format
const BOC_GENERIC_MAGIC: u32 = 0xb5ee9c72;

const FLAG_HAS_IDX: u8 = 0x80;
const FLAG_HAS_CRC32C: u8 = 0x40;
const FLAG_HAS_CACHE_BITS: u8 = 0x20;
const SIZE_BYTES_MASK: u8 = 0x07;

/// Serializes a cell and its references into a Bag of Cells (BoC) format
pub fn serialize_boc(root: &Arc<Cell>, has_crc32: bool) -> Result<Vec<u8>> {
    let cells = topological_order(root);

    let index: HashMap<[u8; 32], usize> = cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| (cell.hash(), idx))
        .collect();

    let size_bytes = bytes_needed(cells.len());

    let mut payload = Vec::new();
    for cell in &cells {
        payload.extend_from_slice(&cell.descriptors());
        payload.extend_from_slice(&cell.serialize_data());
        for reference in cell.references() {
            let idx = index
                .get(&reference.hash())
                .ok_or_else(|| anyhow!("Reference missing from cell index"))?;
            write_uint(&mut payload, *idx, size_bytes);
        }
    }

    let offset_bytes = bytes_needed(payload.len());

    let mut result = Vec::with_capacity(payload.len() + 32);
    result.extend_from_slice(&BOC_GENERIC_MAGIC.to_be_bytes());

    let mut flags = size_bytes as u8;
    if has_crc32 {
        flags |= FLAG_HAS_CRC32C;
    }
    result.push(flags);
    result.push(offset_bytes as u8);

    write_uint(&mut result, cells.len(), size_bytes);
    write_uint(&mut result, 1, size_bytes); // roots
    write_uint(&mut result, 0, size_bytes); // absent
    write_uint(&mut result, payload.len(), offset_bytes);
    write_uint(&mut result, 0, size_bytes); // root index

    result.extend_from_slice(&payload);

    if has_crc32 {
        let crc = CRC32C.checksum(&result);
        result.extend_from_slice(&crc.to_le_bytes());
    }

    log::trace!(
        "serialized BoC: {} cells, {} bytes",
        cells.len(),
        result.len()
    );

    Ok(result)
}

/// Orders unique cells so that every parent precedes its children
///
/// Cells are ranked depth-first, with all fresh children of a cell ranked
/// before descending into any of them. The output is a topological sort that
/// always takes the lowest-ranked ready cell, so a shared cell still lands
/// after every parent.
fn topological_order(root: &Arc<Cell>) -> Vec<Arc<Cell>> {
    fn rank_children(
        cell: &Arc<Cell>,
        rank: &mut HashMap<[u8; 32], usize>,
        cells: &mut Vec<Arc<Cell>>,
    ) {
        let mut fresh = Vec::new();
        for reference in cell.references() {
            if !rank.contains_key(&reference.hash()) {
                rank.insert(reference.hash(), cells.len());
                cells.push(reference.clone());
                fresh.push(reference);
            }
        }
        for reference in fresh {
            rank_children(reference, rank, cells);
        }
    }

    let mut rank = HashMap::from([(root.hash(), 0)]);
    let mut cells = vec![root.clone()];
    rank_children(root, &mut rank, &mut cells);

    let mut parents = vec![0usize; cells.len()];
    for cell in &cells {
        for reference in cell.references() {
            parents[rank[&reference.hash()]] += 1;
        }
    }

    let mut ready = BinaryHeap::from([Reverse(0usize)]);
    let mut order = Vec::with_capacity(cells.len());
    while let Some(Reverse(idx)) = ready.pop() {
        let cell = &cells[idx];
        for reference in cell.references() {
            let child = rank[&reference.hash()];
            parents[child] -= 1;
            if parents[child] == 0 {
                ready.push(Reverse(child));
            }
        }
        order.push(cell.clone());
    }
    order
}

/// Deserializes a Bag of Cells (BoC) into its single root cell
pub fn deserialize_boc(data: &[u8]) -> Result<Arc<Cell>> {
    let mut reader = Reader { data, pos: 0 };

    let magic = reader.read_uint(4)? as u32;
    if magic != BOC_GENERIC_MAGIC {
        bail!("Invalid BoC magic number: 0x{:08x}", magic);
    }

    let flags = reader.read_byte()?;
    let has_idx = flags & FLAG_HAS_IDX != 0;
    let has_crc32 = flags & FLAG_HAS_CRC32C != 0;
    if flags & FLAG_HAS_CACHE_BITS != 0 && !has_idx {
        bail!("BoC cache bits require an index");
    }

    let size_bytes = (flags & SIZE_BYTES_MASK) as usize;
    if size_bytes == 0 || size_bytes > 4 {
        bail!("Invalid size_bytes: {}", size_bytes);
    }

    let offset_bytes = reader.read_byte()? as usize;
    if offset_bytes == 0 || offset_bytes > 8 {
        bail!("Invalid offset_bytes: {}", offset_bytes);
    }

    let cells_count = reader.read_uint(size_bytes)?;
    let roots_count = reader.read_uint(size_bytes)?;
    let _absent_count = reader.read_uint(size_bytes)?;
    let cells_size = reader.read_uint(offset_bytes)?;

    if roots_count != 1 {
        bail!("Expected exactly one root, found {}", roots_count);
    }
    let root_idx = reader.read_uint(size_bytes)?;

    if has_idx {
        reader.skip(cells_count * offset_bytes)?;
    }

    let cells_start = reader.pos;
    let cells_end = cells_start
        .checked_add(cells_size)
        .ok_or_else(|| anyhow!("Invalid cells size"))?;

    let trailer = if has_crc32 { 4 } else { 0 };
    let expected_len = cells_end
        .checked_add(trailer)
        .ok_or_else(|| anyhow!("Invalid cells size"))?;
    if expected_len != data.len() {
        bail!(
            "BoC length mismatch: expected {} bytes, got {}",
            expected_len,
            data.len()
        );
    }

    if has_crc32 {
        let expected = u32::from_le_bytes([
            data[cells_end],
            data[cells_end + 1],
            data[cells_end + 2],
            data[cells_end + 3],
        ]);
        let actual = CRC32C.checksum(&data[..cells_end]);
        if expected != actual {
            bail!(
                "CRC32-C mismatch: expected 0x{:08x}, got 0x{:08x}",
                expected,
                actual
            );
        }
    }

    let mut cells_reader = Reader {
        data: &data[..cells_end],
        pos: cells_start,
    };
    let raw = (0..cells_count)
        .map(|idx| {
            parse_raw_cell(&mut cells_reader, size_bytes)
                .with_context(|| format!("Failed to parse cell {}", idx))
        })
        .collect::<Result<Vec<_>>>()?;

    if cells_reader.pos != cells_end {
        bail!("Trailing bytes after the last cell");
    }

    let cells = link_cells(raw)?;
    cells
        .get(root_idx)
        .cloned()
        .ok_or_else(|| anyhow!("Invalid root index: {}", root_idx))
}

struct RawCell {
    data: Vec<u8>,
    bit_len: usize,
    refs: Vec<usize>,
    is_exotic: bool,
}

fn parse_raw_cell(reader: &mut Reader<'_>, size_bytes: usize) -> Result<RawCell> {
    let d1 = reader.read_byte()?;
    let d2 = reader.read_byte()?;

    let ref_count = (d1 & 0x07) as usize;
    let is_exotic = d1 & 0x08 != 0;
    let with_hashes = d1 & 0x10 != 0;
    let level = d1 >> 5;

    // Library cells are the only exotic kind accepted, and they are level 0
    if level != 0 {
        bail!("Cell with non-zero level {}", level);
    }
    if ref_count > 4 {
        bail!("Invalid reference count {}", ref_count);
    }
    if with_hashes {
        // hash + depth per level
        reader.skip((level as usize + 1) * (32 + 2))?;
    }

    let data_len = d2.div_ceil(2) as usize;
    let mut data = reader.read_bytes(data_len)?.to_vec();

    let bit_len = if d2 % 2 == 0 {
        data_len * 8
    } else {
        let last = data[data_len - 1];
        if last == 0 {
            bail!("Missing completion tag in partial byte");
        }
        let tag_pos = last.trailing_zeros() as usize;
        data[data_len - 1] = last & !(1u8 << tag_pos);
        data_len * 8 - tag_pos - 1
    };

    let refs = (0..ref_count)
        .map(|_| reader.read_uint(size_bytes))
        .collect::<Result<Vec<_>>>()?;

    Ok(RawCell {
        data,
        bit_len,
        refs,
        is_exotic,
    })
}

/// Builds cells from the last one backwards, so every reference is already resolved
fn link_cells(raw: Vec<RawCell>) -> Result<Vec<Arc<Cell>>> {
    let count = raw.len();
    let mut built: Vec<Option<Arc<Cell>>> = vec![None; count];

    for (idx, cell) in raw.into_iter().enumerate().rev() {
        let mut references = Vec::with_capacity(cell.refs.len());
        for r in cell.refs {
            if r <= idx || r >= count {
                bail!("Cell {} references {} out of topological order", idx, r);
            }
            let child = built[r]
                .clone()
                .ok_or_else(|| anyhow!("Cell {} is not built", r))?;
            references.push(child);
        }
        let linked = if cell.is_exotic {
            Cell::exotic(cell.data, cell.bit_len, references)
        } else {
            Cell::with_references(cell.data, cell.bit_len, references)
        }
        .with_context(|| format!("Invalid cell {}", idx))?;
        built[idx] = Some(Arc::new(linked));
    }

    built
        .into_iter()
        .map(|cell| cell.ok_or_else(|| anyhow!("Unresolved cell")))
        .collect()
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| anyhow!("Unexpected end of BoC data"))?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    fn read_uint(&mut self, size: usize) -> Result<usize> {
        Ok(self
            .read_bytes(size)?
            .iter()
            .fold(0usize, |acc, &b| (acc << 8) | b as usize))
    }

    fn skip(&mut self, n: usize) -> Result<()> {
        self.read_bytes(n).map(|_| ())
    }
}

fn bytes_needed(value: usize) -> usize {
    let bits = (usize::BITS - value.leading_zeros()) as usize;
    bits.div_ceil(8).max(1)
}

fn write_uint(buf: &mut Vec<u8>, value: usize, size: usize) {
    let bytes = (value as u64).to_be_bytes();
    buf.extend_from_slice(&bytes[8 - size..]);
}

/// Parses a BoC from a hex string
pub fn hex_to_boc(hex: &str) -> Result<Arc<Cell>> {
    let hex: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&hex).context("Failed to decode BoC hex")?;
    deserialize_boc(&bytes)
}

/// Serializes a cell tree to a hex BoC string
pub fn boc_to_hex(cell: &Arc<Cell>, has_crc32: bool) -> Result<String> {
    Ok(hex::encode(serialize_boc(cell, has_crc32)?))
}

/// Serializes a cell tree to a base64 BoC string
pub fn boc_to_base64(cell: &Arc<Cell>, has_crc32: bool) -> Result<String> {
    Ok(STANDARD.encode(serialize_boc(cell, has_crc32)?))
}

/// Parses a BoC from a base64 string
pub fn base64_to_boc(b64: &str) -> Result<Arc<Cell>> {
    let bytes = STANDARD
        .decode(b64.trim())
        .context("Failed to decode BoC base64")?;
    deserialize_boc(&bytes)
}
