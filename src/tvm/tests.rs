//! Cross-module tests for the cell model

use crate::tvm::*;
use num_bigint::BigUint;
use std::sync::Arc;

fn create_test_cell(data: Vec<u8>, bit_len: usize) -> Arc<Cell> {
    Arc::new(Cell::with_data(data, bit_len).unwrap())
}

#[test]
fn test_builder_slice_round_trip() {
    let addr = Address::new(0, [1u8; 32]);

    let mut builder = Builder::new();
    builder.store_u32(1).unwrap();
    builder.store_u64(42).unwrap();
    builder.store_coins(1_000_000_000).unwrap();
    builder.store_address(Some(&addr)).unwrap();
    builder.store_bool(true).unwrap();

    let mut slice = builder.to_slice().unwrap();
    assert_eq!(slice.load_u32().unwrap(), 1);
    assert_eq!(slice.load_u64().unwrap(), 42);
    assert_eq!(slice.load_coins().unwrap(), 1_000_000_000);
    assert_eq!(slice.load_address().unwrap(), Some(addr));
    assert!(slice.load_bit().unwrap());
    assert!(slice.is_empty());
}

#[test]
fn test_boc_with_references() {
    let mut ref_builder_1 = Builder::new();
    let mut ref_builder_2 = Builder::new();
    ref_builder_1.store_u32(111).unwrap();
    ref_builder_2.store_u32(222).unwrap();
    let ref_cell_1 = ref_builder_1.build().unwrap();
    let ref_cell_2 = ref_builder_2.build().unwrap();

    let mut root_builder = Builder::new();
    root_builder.store_u32(999).unwrap();
    root_builder.store_ref(ref_cell_1.clone()).unwrap();
    root_builder.store_ref(ref_cell_2.clone()).unwrap();
    let root = root_builder.build().unwrap();

    let deserialized = deserialize_boc(&serialize_boc(&root, true).unwrap()).unwrap();

    assert_eq!(deserialized.reference_count(), 2);
    assert_eq!(deserialized.reference(0).unwrap().hash(), ref_cell_1.hash());
    assert_eq!(deserialized.reference(1).unwrap().hash(), ref_cell_2.hash());
    assert_eq!(root.hash(), deserialized.hash());
}

#[test]
fn test_boc_carries_dictionary() {
    let mut dict = Dict::new(64);
    for key in 0u64..3 {
        let mut value = Builder::new();
        value.store_u64(key + 100).unwrap();
        dict.set(key, DictValue::Ref(value.build().unwrap())).unwrap();
    }

    let mut builder = Builder::new();
    builder.store_dictionary(&dict).unwrap();
    let cell = builder.build().unwrap();

    let decoded = hex_to_boc(&boc_to_hex(&cell, true).unwrap()).unwrap();
    let parsed = Slice::new(decoded).load_dict(64).unwrap();
    assert_eq!(parsed.len(), 3);

    let DictValue::Cell(leaf) = parsed.get(&BigUint::from(2u32)).unwrap() else {
        panic!("parsed dictionary leaves are inline cells");
    };
    let mut leaf = Slice::new(leaf.clone());
    let mut value = Slice::new(leaf.load_reference().unwrap());
    assert_eq!(value.load_u64().unwrap(), 102);
}

#[test]
fn test_address_builder_integration() {
    let mut addr = Address::new(-1, [0x12; 32]);
    addr.set_test_only(true);
    addr.set_bounceable(false);

    let mut builder = Builder::new();
    builder.store_address(Some(&addr)).unwrap();
    let cell = builder.build().unwrap();

    // flags only affect the printable form
    assert_eq!(cell.bit_len(), 267);

    let mut plain = Builder::new();
    plain
        .store_address(Some(&Address::new(-1, [0x12; 32])))
        .unwrap();
    assert_eq!(cell.hash(), plain.build().unwrap().hash());
}

#[test]
fn test_var_uint_operations() {
    let mut builder = Builder::new();
    builder.store_var_uint(0x42, 4).unwrap();
    let cell = builder.build().unwrap();
    assert_eq!(cell.bit_len(), 4 + 8);

    let mut slice = Slice::new(cell);
    assert_eq!(slice.load_var_uint(4).unwrap(), 0x42);
}

#[test]
fn test_hash_consistency() {
    let cell1 = create_test_cell(vec![0x11, 0x22, 0x33], 24);

    let mut builder = CellBuilder::new();
    builder.store_byte(0x11).unwrap();
    builder.store_byte(0x22).unwrap();
    builder.store_byte(0x33).unwrap();
    let cell2 = builder.build().unwrap();

    let mut h_builder = Builder::new();
    h_builder.store_bytes(&[0x11, 0x22, 0x33]).unwrap();
    let cell3 = h_builder.build().unwrap();

    assert_eq!(cell1.hash(), cell2.hash());
    assert_eq!(cell2.hash(), cell3.hash());
}

#[test]
fn test_capacity_limits() {
    let max_data = vec![0xFF; MAX_CELL_BITS.div_ceil(8)];
    let max_cell = Cell::with_data(max_data.clone(), MAX_CELL_BITS).unwrap();
    assert_eq!(max_cell.bit_len(), MAX_CELL_BITS);
    assert!(Cell::with_data(vec![0xFF; 128], MAX_CELL_BITS + 1).is_err());

    let mut builder = Builder::new();
    builder.store_bits(&max_data, MAX_CELL_BITS).unwrap();
    assert!(builder.store_bit(true).is_err());

    let mut builder = Builder::new();
    for i in 0..MAX_CELL_REFS {
        builder
            .store_ref(create_test_cell(vec![i as u8], 8))
            .unwrap();
    }
    assert_eq!(builder.available_refs(), 0);
    assert!(builder.store_ref(create_test_cell(vec![0xFF], 8)).is_err());
}

#[test]
fn test_uint_range_is_checked() {
    let mut builder = Builder::new();
    assert!(builder.store_uint(8, 3).is_err());
    assert!(builder.store_uint(7, 3).is_ok());
    assert_eq!(builder.bit_len(), 3);
}
