use num_bigint::BigInt;
use serde_json::json;

use crate::models::tonapi::{TonapiAccount, TonapiMethodResult, TraceNode};
use crate::models::traits::{parse_stack_num, stack_arg};
use crate::models::{AccountStatus, GetMethodResult, RawAccount, StackValue};
use crate::tvm::{Builder, boc_to_hex};

#[test]
fn test_account_status_names() {
    assert_eq!("active".parse::<AccountStatus>().unwrap(), AccountStatus::Active);
    assert_eq!("uninitialized".parse::<AccountStatus>().unwrap(), AccountStatus::Uninit);
    assert_eq!("nonexist".parse::<AccountStatus>().unwrap(), AccountStatus::Nonexist);
    assert!("deleted".parse::<AccountStatus>().is_err());
    assert_eq!(AccountStatus::Frozen.to_string(), "frozen");
}

#[test]
fn test_raw_account_from_tonapi() {
    let mut builder = Builder::new();
    builder.store_u32(7).unwrap();
    let code = builder.build().unwrap();

    let account: TonapiAccount = serde_json::from_value(json!({
        "address": "0:abcd",
        "balance": 1500000000u64,
        "code": boc_to_hex(&code, false).unwrap(),
        "status": "active",
        "last_transaction_lt": 47000001,
        "last_transaction_hash": "deadbeef",
    }))
    .unwrap();

    let raw = RawAccount::try_from(account).unwrap();
    assert_eq!(raw.balance, 1_500_000_000);
    assert_eq!(raw.code.unwrap().hash(), code.hash());
    assert!(raw.data.is_none());
    assert_eq!(raw.status, AccountStatus::Active);
    assert_eq!(raw.last_transaction_lt, Some(47000001));
    assert_eq!(raw.last_transaction_hash.as_deref(), Some("deadbeef"));
}

#[test]
fn test_raw_account_with_library_code() {
    let code = format!("b5ee9c7201010101002300084202{}", "ab".repeat(32));
    let account: TonapiAccount = serde_json::from_value(json!({
        "address": "0:abcd",
        "balance": "250000000",
        "code": code,
        "status": "active",
    }))
    .unwrap();

    let raw = RawAccount::try_from(account).unwrap();
    let code = raw.code.unwrap();
    assert!(code.is_exotic());
    assert_eq!(code.bit_len(), 264);
    assert_eq!(code.library_hash(), Some([0xAB; 32]));
    assert_eq!(raw.balance, 250_000_000);
}

#[test]
fn test_raw_account_defaults() {
    let account: TonapiAccount = serde_json::from_value(json!({"address": "0:abcd"})).unwrap();
    let raw = RawAccount::try_from(account).unwrap();
    assert_eq!(raw.balance, 0);
    assert_eq!(raw.status, AccountStatus::Uninit);
    assert_eq!(raw.last_transaction_lt, None);
}

#[test]
fn test_stack_numbers() {
    assert_eq!(parse_stack_num("0x1f").unwrap(), BigInt::from(31));
    assert_eq!(parse_stack_num("-0x10").unwrap(), BigInt::from(-16));
    assert_eq!(parse_stack_num("42").unwrap(), BigInt::from(42));
    assert!(parse_stack_num("0xzz").is_err());

    assert_eq!(stack_arg(&StackValue::Num(BigInt::from(255))).unwrap(), "0xff");
    assert_eq!(stack_arg(&StackValue::Num(BigInt::from(-1))).unwrap(), "-0x1");
    assert!(stack_arg(&StackValue::Null).is_err());
}

#[test]
fn test_method_result_conversion() {
    let result: TonapiMethodResult = serde_json::from_value(json!({
        "success": true,
        "exit_code": 0,
        "stack": [
            {"type": "num", "num": "0x05"},
            {"type": "null"},
            {"type": "tuple", "tuple": [{"type": "num", "num": "-0x1"}]},
        ],
    }))
    .unwrap();

    let result = GetMethodResult::try_from(result).unwrap();
    assert!(result.success);
    assert_eq!(result.stack.len(), 3);
    assert_eq!(result.stack[0].as_num(), Some(&BigInt::from(5)));
    assert_eq!(result.stack[1], StackValue::Null);
    assert_eq!(
        result.stack[2],
        StackValue::Tuple(vec![StackValue::Num(BigInt::from(-1))])
    );
}

#[test]
fn test_trace_node_shapes() {
    let wrapped: TraceNode = serde_json::from_value(json!({
        "transaction": {"hash": "aa", "success": true},
        "interfaces": ["wallet_v4r2"],
        "children": [],
    }))
    .unwrap();
    assert_eq!(wrapped.transaction().hash.as_deref(), Some("aa"));
    assert_eq!(wrapped.interfaces.as_deref(), Some(&["wallet_v4r2".to_string()][..]));

    let inline: TraceNode = serde_json::from_value(json!({
        "hash": "bb",
        "utime": 1700000000,
        "compute_phase": {},
    }))
    .unwrap();
    assert_eq!(inline.transaction().hash.as_deref(), Some("bb"));
    assert!(inline.transaction().compute_phase.as_ref().unwrap().is_empty());
}
