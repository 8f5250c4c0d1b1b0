use serde_json::{Value, json};

use crate::models::tonapi::TraceNode;
use crate::trace::{PhaseResult, Transaction, TransactionReceipt};

fn healthy_tx(hash: &str) -> Value {
    json!({
        "hash": hash,
        "lt": 47000001,
        "account": {"address": "0:1111111111111111111111111111111111111111111111111111111111111111"},
        "success": true,
        "utime": 1700000000,
        "total_fees": 1234567,
        "end_balance": 98765,
        "aborted": false,
        "block": "(0,8000000000000000,46000000)",
        "in_msg": {"op_code": "0x00000001"},
        "compute_phase": {"skipped": false, "success": true, "exit_code": 0},
        "action_phase": {"success": true, "result_code": 0},
    })
}

fn node(tx: Value, interfaces: &[&str], children: Vec<Value>) -> Value {
    json!({
        "transaction": tx,
        "interfaces": interfaces,
        "children": children,
    })
}

fn parse(value: Value) -> Transaction {
    let node: TraceNode = serde_json::from_value(value).unwrap();
    Transaction::from_trace(&node)
}

#[test]
fn test_healthy_root() {
    let tx = parse(node(healthy_tx("root"), &["wallet_v4r2"], vec![]));

    assert!(tx.success);
    assert_eq!(tx.error, None);
    assert_eq!(tx.hash, "root");
    assert_eq!(tx.block, "(0,8000000000000000,46000000)");
    assert_eq!(tx.timestamp, 1700000000);
    assert_eq!(tx.total_fees, 1234567);
    assert_eq!(tx.op_code.as_deref(), Some("0x00000001"));
    assert!(tx.account.unwrap().starts_with("0:1111"));

    let receipt = TransactionReceipt::from_transaction(parse(node(healthy_tx("root"), &[], vec![])), None);
    assert!(receipt.success);
    assert!(!receipt.batch_transaction);
    assert_eq!(receipt.error, None);
    assert_eq!(receipt.interfaces, None);
}

#[test]
fn test_inline_transaction_shape() {
    let tx = parse(healthy_tx("inline"));
    assert!(tx.success);
    assert_eq!(tx.hash, "inline");
    assert!(tx.children.is_empty());
}

#[test]
fn test_compute_skipped_no_state() {
    let mut failed = healthy_tx("skipped");
    failed["compute_phase"] = json!({"skipped": true, "skip_reason": "No state"});

    let tx = parse(node(
        failed,
        &[],
        vec![node(healthy_tx("child"), &[], vec![])],
    ));

    assert!(!tx.success);
    assert_eq!(tx.error.as_deref(), Some("no_state"));
    assert!(tx.children.is_empty());
    assert!(tx.interfaces.is_empty());
}

#[test]
fn test_cskip_no_state_marks_uninit() {
    let mut failed = healthy_tx("uninit");
    failed["compute_phase"] = json!({"skipped": true, "skip_reason": "cskip_no_state"});

    let tx = parse(node(failed.clone(), &[], vec![]));
    assert_eq!(tx.error.as_deref(), Some("cskip_no_state"));
    assert_eq!(tx.interfaces, vec!["uninit".to_string()]);

    let tx = parse(node(failed, &["wallet_v5r1"], vec![]));
    assert_eq!(tx.interfaces, vec!["wallet_v5r1".to_string()]);
}

#[test]
fn test_batch_of_three_children() {
    let children = (0..3)
        .map(|i| node(healthy_tx(&format!("child{}", i)), &["nft_item"], vec![]))
        .collect();
    let tx = parse(node(healthy_tx("root"), &["nft_collection"], children));
    assert_eq!(tx.children.len(), 3);

    let receipt = TransactionReceipt::from_transaction(tx, Some("abcd".to_string()));
    assert!(receipt.success);
    assert!(receipt.batch_transaction);
    assert_eq!(receipt.error, None);
    assert_eq!(receipt.block_hash.as_deref(), Some("abcd"));
    assert_eq!(receipt.hash, "root");

    let interfaces = receipt.interfaces.unwrap();
    assert!(interfaces.contains("nft_collection"));
    assert!(interfaces.contains("nft_item"));
    assert_eq!(interfaces.len(), 2);
}

#[test]
fn test_action_phase_failure() {
    let mut failed = healthy_tx("poor");
    failed["action_phase"] = json!({"success": false, "exit_code": 37});

    let tx = parse(node(failed, &[], vec![]));
    assert!(!tx.success);
    assert_eq!(tx.error.as_deref(), Some("not_enough_toncoin"));

    let receipt = TransactionReceipt::from_transaction(tx, None);
    assert!(!receipt.success);
    assert_eq!(receipt.error, Some(vec!["not_enough_toncoin".to_string()]));
}

#[test]
fn test_compute_failure_translates_exit_code() {
    let mut failed = healthy_tx("thrown");
    failed["compute_phase"] = json!({"skipped": false, "success": false, "exit_code": 401});

    let tx = parse(node(failed, &[], vec![]));
    assert_eq!(tx.error.as_deref(), Some("unknown_exit_code_401"));
}

#[test]
fn test_missing_phases() {
    let mut bare = healthy_tx("bare");
    bare.as_object_mut().unwrap().remove("compute_phase");
    bare["action_phase"] = json!({});

    let tx = parse(bare);
    assert_eq!(tx.compute_phase.skip_reason.as_deref(), Some("missing_phase_info"));
    assert!(tx.action_phase.skipped);
    assert_eq!(tx.error.as_deref(), Some("missing_phase_info"));
    assert!(!tx.success);
}

#[test]
fn test_skipped_without_reason() {
    let mut skipped = healthy_tx("skip");
    skipped["compute_phase"] = json!({"skipped": true});
    let tx = parse(skipped);
    assert_eq!(tx.compute_phase.skip_reason.as_deref(), Some("skipped"));
    assert_eq!(tx.error.as_deref(), Some("skipped"));

    let phase = PhaseResult {
        success: false,
        skipped: true,
        skip_reason: Some(String::new()),
        exit_code: None,
    };
    assert_eq!(phase.error(), None);
}

#[test]
fn test_aborted_without_error() {
    let mut aborted = healthy_tx("aborted");
    aborted["aborted"] = json!(true);

    let tx = parse(node(aborted, &[], vec![node(healthy_tx("child"), &[], vec![])]));
    assert!(!tx.success);
    assert_eq!(tx.error, None);
    assert!(tx.children.is_empty());

    // failed but without an error tag, so the receipt stays successful
    let receipt = TransactionReceipt::from_transaction(tx, None);
    assert!(receipt.success);
}

#[test]
fn test_errors_collected_depth_first() {
    let mut first = healthy_tx("first");
    first["compute_phase"] = json!({"success": false, "exit_code": 132});
    let mut second = healthy_tx("second");
    second["action_phase"] = json!({"success": false, "exit_code": 37});

    let nested = node(
        healthy_tx("middle"),
        &[],
        vec![node(first, &["nft_item"], vec![])],
    );
    let tx = parse(node(
        healthy_tx("root"),
        &[],
        vec![nested, node(second, &[], vec![])],
    ));

    let receipt = TransactionReceipt::from_transaction(tx, None);
    assert!(!receipt.success);
    assert!(receipt.batch_transaction);
    assert_eq!(
        receipt.error,
        Some(vec!["access_denied".to_string(), "not_enough_toncoin".to_string()])
    );
    assert!(receipt.interfaces.unwrap().contains("nft_item"));
}

#[test]
fn test_phase_error_accessor() {
    let failed = PhaseResult {
        success: false,
        skipped: false,
        skip_reason: None,
        exit_code: Some(-14),
    };
    assert_eq!(failed.error().as_deref(), Some("out_of_gas"));

    let ok = PhaseResult {
        success: true,
        skipped: false,
        skip_reason: None,
        exit_code: Some(0),
    };
    assert_eq!(ok.error(), None);
}
