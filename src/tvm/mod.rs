//! TVM (TON Virtual Machine) data structures and utilities
//!
//! This module provides the on-chain data model everything else is built on:
//! - Cell: up to 1023 bits and up to 4 references, hashed on construction
//! - Builder / Slice: writing and reading cells
//! - BoC: Bag of Cells envelope for moving cell trees around
//! - Address: internal address handling
//! - Dict: Hashmap tries keyed by fixed-width integers

pub mod address;
pub mod boc;
pub mod builder;
pub mod cell;
pub mod dict;
pub mod slice;
#[cfg(test)]
mod tests;

pub use address::Address;
pub use boc::{
    base64_to_boc, boc_to_base64, boc_to_hex, deserialize_boc, hex_to_boc, serialize_boc,
};
pub use builder::Builder;
pub use cell::{Cell, CellBuilder, MAX_CELL_BITS, MAX_CELL_REFS};
pub use dict::{Dict, DictValue};
pub use slice::Slice;
