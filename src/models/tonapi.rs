use serde::{Deserialize, Serialize};
use serde_json::Value;


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiAccountAddress {
    pub(crate) address: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) is_scam: Option<bool>,
    pub(crate) is_wallet: Option<bool>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiMessage {
    pub(crate) op_code: Option<String>,
    pub(crate) decoded_op_name: Option<String>,
    pub(crate) value: Option<i64>,
    pub(crate) source: Option<TonapiAccountAddress>,
    pub(crate) destination: Option<TonapiAccountAddress>,
}


/// Compute or action phase as reported by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiPhase {
    pub(crate) skipped: Option<bool>,
    pub(crate) skip_reason: Option<String>,
    pub(crate) success: Option<bool>,
    pub(crate) exit_code: Option<i64>,
    pub(crate) result_code: Option<i64>,
}

impl TonapiPhase {
    /// An object without a single known field carries no phase information
    pub fn is_empty(&self) -> bool {
        self.skipped.is_none()
            && self.skip_reason.is_none()
            && self.success.is_none()
            && self.exit_code.is_none()
            && self.result_code.is_none()
    }
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiTransaction {
    pub(crate) hash: Option<String>,
    pub(crate) lt: Option<i64>,
    pub(crate) account: Option<TonapiAccountAddress>,
    pub(crate) success: Option<bool>,
    pub(crate) aborted: Option<bool>,
    pub(crate) utime: Option<i64>,
    pub(crate) total_fees: Option<i64>,
    pub(crate) end_balance: Option<i64>,
    pub(crate) block: Option<String>,
    pub(crate) in_msg: Option<TonapiMessage>,
    pub(crate) compute_phase: Option<TonapiPhase>,
    pub(crate) action_phase: Option<TonapiPhase>,
}


/// One node of `/v2/traces/{hash}`.
///
/// Trace nodes wrap the transaction in a `transaction` field, while
/// `/v2/blockchain/transactions/{hash}` returns the transaction fields inline.
/// Both shapes deserialize into this struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceNode {
    pub(crate) transaction: Option<TonapiTransaction>,
    #[serde(flatten)]
    pub(crate) inline: TonapiTransaction,
    pub(crate) interfaces: Option<Vec<String>>,
    pub(crate) children: Option<Vec<TraceNode>>,
}

impl TraceNode {
    pub fn transaction(&self) -> &TonapiTransaction {
        self.transaction.as_ref().unwrap_or(&self.inline)
    }
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiAccount {
    pub(crate) address: Option<String>,
    pub(crate) balance: Option<Value>,
    pub(crate) code: Option<String>,
    pub(crate) data: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) last_transaction_lt: Option<Value>,
    pub(crate) last_transaction_hash: Option<String>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiBlock {
    pub(crate) workchain_id: Option<i32>,
    pub(crate) shard: Option<String>,
    pub(crate) seqno: Option<u32>,
    pub(crate) root_hash: Option<String>,
    pub(crate) file_hash: Option<String>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiStackEntry {
    pub(crate) r#type: Option<String>,
    pub(crate) num: Option<String>,
    pub(crate) cell: Option<String>,
    pub(crate) slice: Option<String>,
    pub(crate) tuple: Option<Vec<TonapiStackEntry>>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiMethodResult {
    pub(crate) success: Option<bool>,
    pub(crate) exit_code: Option<i64>,
    pub(crate) stack: Option<Vec<TonapiStackEntry>>,
    pub(crate) decoded: Option<Value>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiSendMessageRequest {
    pub(crate) boc: Option<String>,
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TonapiErrorBody {
    pub(crate) error: Option<String>,
}
