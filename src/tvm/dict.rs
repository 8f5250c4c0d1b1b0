//! TON Dictionary (HashMap) implementation
//!
//! Dictionaries are binary Patricia tries stored in cells. Every edge carries a
//! label (`hml_short`, `hml_long` or `hml_same`, whichever is shortest) followed
//! either by the leaf value or by two references for the 0 and 1 branches.
//! Serialization is a pure function of the key/value set.

use crate::tvm::builder::Builder;
use crate::tvm::cell::{Cell, MAX_CELL_BITS};
use crate::tvm::slice::Slice;
use anyhow::{Result, bail};
use num_bigint::BigUint;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// Dictionary value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictValue {
    /// Cell stored inline in the leaf (bits and references)
    Cell(Arc<Cell>),
    /// Cell stored as a reference of the leaf
    Ref(Arc<Cell>),
    /// Unsigned integer of the given width
    Uint(u64, usize),
    /// Coins value
    Coins(u128),
}

impl DictValue {
    fn store(&self, builder: &mut Builder) -> Result<()> {
        match self {
            DictValue::Cell(cell) => builder.store_cell(cell)?,
            DictValue::Ref(cell) => builder.store_ref(cell.clone())?,
            DictValue::Uint(value, bits) => builder.store_uint(*value, *bits)?,
            DictValue::Coins(amount) => builder.store_coins(*amount)?,
        };
        Ok(())
    }
}

/// TON Dictionary (HashmapE) with fixed-width unsigned keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dict {
    /// Key size in bits
    key_size: usize,
    map: BTreeMap<BigUint, DictValue>,
}

impl Dict {
    /// Creates a new dictionary with the specified key size
    pub fn new(key_size: usize) -> Self {
        Self {
            key_size,
            map: BTreeMap::new(),
        }
    }

    pub fn key_size(&self) -> usize {
        self.key_size
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn check_key(&self, key: &BigUint) -> Result<()> {
        if key.bits() as usize > self.key_size {
            bail!(
                "Key {} does not fit into {} bits",
                key,
                self.key_size
            );
        }
        Ok(())
    }

    /// Sets a value, replacing any previous value under the same key
    pub fn set(&mut self, key: impl Into<BigUint>, value: DictValue) -> Result<&mut Self> {
        let key = key.into();
        self.check_key(&key)?;
        self.map.insert(key, value);
        Ok(self)
    }

    /// Inserts a value, failing if the key is already present
    pub fn insert_new(&mut self, key: impl Into<BigUint>, value: DictValue) -> Result<&mut Self> {
        let key = key.into();
        self.check_key(&key)?;
        match self.map.entry(key) {
            Entry::Occupied(entry) => bail!("Duplicate dictionary key {}", entry.key()),
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
        Ok(self)
    }

    pub fn get(&self, key: &BigUint) -> Option<&DictValue> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &BigUint) -> bool {
        self.map.contains_key(key)
    }

    /// Iterates over entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&BigUint, &DictValue)> {
        self.map.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &BigUint> {
        self.map.keys()
    }

    /// Serializes the trie root, `None` for an empty dictionary
    pub fn serialize(&self) -> Result<Option<Arc<Cell>>> {
        if self.map.is_empty() {
            return Ok(None);
        }
        if self.key_size > MAX_CELL_BITS {
            bail!("Dictionary key size {} is too large", self.key_size);
        }

        let entries: Vec<(Vec<bool>, &DictValue)> = self
            .map
            .iter()
            .map(|(key, value)| (key_to_bits(key, self.key_size), value))
            .collect();

        build_edge(&entries, self.key_size).map(Some)
    }

    /// Parses a trie root back into a dictionary of inline leaf cells
    pub fn deserialize(root: Arc<Cell>, key_size: usize) -> Result<Self> {
        let mut dict = Dict::new(key_size);
        let mut prefix = Vec::with_capacity(key_size);
        parse_edge(Slice::new(root), key_size, &mut prefix, &mut dict)?;
        Ok(dict)
    }
}

fn key_to_bits(key: &BigUint, key_size: usize) -> Vec<bool> {
    (0..key_size)
        .rev()
        .map(|i| key.bit(i as u64))
        .collect()
}

fn bits_to_key(bits: &[bool]) -> BigUint {
    bits.iter().fold(BigUint::default(), |acc, &bit| {
        (acc << 1u32) | BigUint::from(bit as u8)
    })
}

/// Width of the length field in long/same labels: ceil(log2(max_len + 1))
fn length_bits(max_len: usize) -> usize {
    (usize::BITS - max_len.leading_zeros()) as usize
}

fn build_edge(entries: &[(Vec<bool>, &DictValue)], remaining: usize) -> Result<Arc<Cell>> {
    let first = &entries[0].0;
    let label_len = if entries.len() == 1 {
        remaining
    } else {
        entries[1..].iter().fold(remaining, |len, (bits, _)| {
            first
                .iter()
                .zip(bits.iter())
                .take(len)
                .take_while(|(a, b)| a == b)
                .count()
        })
    };

    let mut builder = Builder::new();
    store_label(&mut builder, &first[..label_len], remaining)?;

    if label_len == remaining {
        if entries.len() != 1 {
            bail!("Duplicate keys in dictionary");
        }
        entries[0].1.store(&mut builder)?;
        return builder.build();
    }

    let child_len = remaining - label_len - 1;
    builder.store_ref(build_edge(&branch(entries, label_len, false), child_len)?)?;
    builder.store_ref(build_edge(&branch(entries, label_len, true), child_len)?)?;
    builder.build()
}

/// Entries whose bit at `at` equals `bit`, with the key bits up to and including `at` dropped
fn branch<'a>(
    entries: &[(Vec<bool>, &'a DictValue)],
    at: usize,
    bit: bool,
) -> Vec<(Vec<bool>, &'a DictValue)> {
    entries
        .iter()
        .filter(|(bits, _)| bits[at] == bit)
        .map(|(bits, value)| (bits[at + 1..].to_vec(), *value))
        .collect()
}

fn store_label(builder: &mut Builder, label: &[bool], max_len: usize) -> Result<()> {
    let len = label.len();
    let k = length_bits(max_len);

    let short_len = 2 + 2 * len;
    let long_len = 2 + k + len;
    let same_len = 3 + k;
    let is_same = len > 0 && label.iter().all(|&bit| bit == label[0]);

    let mut best = short_len;
    let mut kind = 0u8;
    if long_len < best {
        best = long_len;
        kind = 1;
    }
    if is_same && same_len < best {
        kind = 2;
    }

    match kind {
        // hml_short$0 len:(Unary ~n) s:(n * Bit)
        0 => {
            builder.store_bit(false)?;
            for _ in 0..len {
                builder.store_bit(true)?;
            }
            builder.store_bit(false)?;
            for &bit in label {
                builder.store_bit(bit)?;
            }
        }
        // hml_long$10 n:(#<= m) s:(n * Bit)
        1 => {
            builder.store_uint(0b10, 2)?;
            builder.store_uint(len as u64, k)?;
            for &bit in label {
                builder.store_bit(bit)?;
            }
        }
        // hml_same$11 v:Bit n:(#<= m)
        _ => {
            builder.store_uint(0b11, 2)?;
            builder.store_bit(label[0])?;
            builder.store_uint(len as u64, k)?;
        }
    }

    Ok(())
}

fn load_label(slice: &mut Slice, max_len: usize, out: &mut Vec<bool>) -> Result<usize> {
    let k = length_bits(max_len);

    if !slice.load_bit()? {
        let mut len = 0;
        while slice.load_bit()? {
            len += 1;
        }
        for _ in 0..len {
            out.push(slice.load_bit()?);
        }
        return Ok(len);
    }

    if !slice.load_bit()? {
        let len = slice.load_uint(k)? as usize;
        for _ in 0..len {
            out.push(slice.load_bit()?);
        }
        Ok(len)
    } else {
        let bit = slice.load_bit()?;
        let len = slice.load_uint(k)? as usize;
        out.extend(std::iter::repeat_n(bit, len));
        Ok(len)
    }
}

fn parse_edge(
    mut slice: Slice,
    remaining: usize,
    prefix: &mut Vec<bool>,
    dict: &mut Dict,
) -> Result<()> {
    let start = prefix.len();
    let label_len = load_label(&mut slice, remaining, prefix)?;
    if label_len > remaining {
        bail!("Dictionary label longer than remaining key bits");
    }

    if label_len == remaining {
        let key = bits_to_key(prefix);
        dict.insert_new(key, DictValue::Cell(slice.to_cell()?))?;
    } else {
        let child_len = remaining - label_len - 1;
        for branch in [false, true] {
            let child = slice.load_reference()?;
            prefix.push(branch);
            parse_edge(Slice::new(child), child_len, prefix, dict)?;
            prefix.pop();
        }
    }

    prefix.truncate(start);
    Ok(())
}

impl Builder {
    /// Stores a dictionary as `HashmapE` (Maybe ^Hashmap)
    pub fn store_dictionary(&mut self, dict: &Dict) -> Result<&mut Self> {
        let root = dict.serialize()?;
        self.store_dict(root)
    }
}

impl Slice {
    /// Loads a `HashmapE` with the given key size
    pub fn load_dict(&mut self, key_size: usize) -> Result<Dict> {
        match self.load_maybe_ref()? {
            Some(root) => Dict::deserialize(root, key_size),
            None => Ok(Dict::new(key_size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint_cell(value: u64, bits: usize) -> Arc<Cell> {
        let mut builder = Builder::new();
        builder.store_uint(value, bits).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_empty_dict_serializes_to_none() {
        let dict = Dict::new(64);
        assert!(dict.serialize().unwrap().is_none());

        let mut builder = Builder::new();
        builder.store_dictionary(&dict).unwrap();
        let cell = builder.build().unwrap();
        assert_eq!(cell.bit_len(), 1);
        assert_eq!(cell.reference_count(), 0);
    }

    #[test]
    fn test_single_entry_layout() {
        // key 5 in 8 bits: label 00000101 is not uniform, hml_long wins
        // (2 + 4 + 8 = 14 bits against 2 + 16 = 18 for hml_short)
        let mut dict = Dict::new(8);
        dict.set(5u32, DictValue::Uint(0xAB, 8)).unwrap();
        let root = dict.serialize().unwrap().unwrap();

        let mut slice = Slice::new(root);
        assert_eq!(slice.load_uint(2).unwrap(), 0b10);
        assert_eq!(slice.load_uint(4).unwrap(), 8);
        assert_eq!(slice.load_uint(8).unwrap(), 5);
        assert_eq!(slice.load_uint(8).unwrap(), 0xAB);
        assert!(slice.is_empty());
    }

    #[test]
    fn test_same_label_for_zero_key() {
        let mut dict = Dict::new(64);
        dict.set(0u32, DictValue::Uint(1, 1)).unwrap();
        let root = dict.serialize().unwrap().unwrap();

        // hml_same: 11, bit 0, length 64 in 7 bits, then the value bit
        assert_eq!(root.bit_len(), 2 + 1 + 7 + 1);
        let mut slice = Slice::new(root);
        assert_eq!(slice.load_uint(3).unwrap(), 0b110);
        assert_eq!(slice.load_uint(7).unwrap(), 64);
        assert!(slice.load_bit().unwrap());
    }

    #[test]
    fn test_fork_has_two_refs() {
        let mut dict = Dict::new(64);
        dict.set(0u32, DictValue::Ref(uint_cell(1, 8))).unwrap();
        dict.set(1u32, DictValue::Ref(uint_cell(2, 8))).unwrap();

        let root = dict.serialize().unwrap().unwrap();
        assert_eq!(root.reference_count(), 2);

        let left = root.reference(0).unwrap();
        let right = root.reference(1).unwrap();
        // leaves carry an empty label plus the value ref
        assert_eq!(left.reference_count(), 1);
        assert_eq!(right.reference_count(), 1);
        assert_eq!(
            left.reference(0).unwrap().hash(),
            uint_cell(1, 8).hash()
        );
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let mut a = Dict::new(32);
        let mut b = Dict::new(32);
        for key in [3u32, 17, 1000, 4, 5] {
            a.set(key, DictValue::Coins(key as u128 * 10)).unwrap();
        }
        for key in [1000u32, 5, 4, 3, 17] {
            b.set(key, DictValue::Coins(key as u128 * 10)).unwrap();
        }

        let root_a = a.serialize().unwrap().unwrap();
        let root_b = b.serialize().unwrap().unwrap();
        assert_eq!(root_a.hash(), root_b.hash());
    }

    #[test]
    fn test_set_replaces_and_insert_new_rejects() {
        let mut dict = Dict::new(16);
        dict.set(7u32, DictValue::Uint(1, 8)).unwrap();
        dict.set(7u32, DictValue::Uint(2, 8)).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(
            dict.get(&BigUint::from(7u32)),
            Some(&DictValue::Uint(2, 8))
        );

        assert!(dict.insert_new(7u32, DictValue::Uint(3, 8)).is_err());
        assert!(dict.insert_new(8u32, DictValue::Uint(3, 8)).is_ok());
    }

    #[test]
    fn test_key_too_wide() {
        let mut dict = Dict::new(8);
        assert!(dict.set(256u32, DictValue::Uint(0, 1)).is_err());
        assert!(dict.set(255u32, DictValue::Uint(0, 1)).is_ok());
    }

    #[test]
    fn test_deserialize_recovers_keys_and_values() {
        let mut dict = Dict::new(64);
        for key in 10u64..15 {
            dict.set(key, DictValue::Uint(key * 3, 16)).unwrap();
        }

        let mut builder = Builder::new();
        builder.store_dictionary(&dict).unwrap();
        let mut slice = builder.to_slice().unwrap();
        let parsed = slice.load_dict(64).unwrap();

        assert_eq!(parsed.len(), 5);
        let keys: Vec<BigUint> = parsed.keys().cloned().collect();
        let expected: Vec<BigUint> = (10u64..15).map(BigUint::from).collect();
        assert_eq!(keys, expected);

        for (key, value) in parsed.iter() {
            let DictValue::Cell(cell) = value else {
                panic!("parsed values are inline cells");
            };
            let mut leaf = Slice::new(cell.clone());
            let expected: u64 = key.try_into().unwrap();
            assert_eq!(leaf.load_uint(16).unwrap(), expected * 3);
        }
    }

    #[test]
    fn test_reserialize_parsed_dict_is_identical() {
        let mut dict = Dict::new(256);
        dict.set(BigUint::from(1u8) << 255u32, DictValue::Ref(uint_cell(1, 8)))
            .unwrap();
        dict.set(BigUint::from(42u8), DictValue::Ref(uint_cell(2, 8)))
            .unwrap();

        let root = dict.serialize().unwrap().unwrap();
        let parsed = Dict::deserialize(root.clone(), 256).unwrap();
        let again = parsed.serialize().unwrap().unwrap();
        assert_eq!(root.hash(), again.hash());
    }
}
