use crate::models::tonapi::{TonapiPhase, TraceNode};
use crate::trace::exit_code;

const MISSING_PHASE: &str = "missing_phase_info";

/// Outcome of one execution phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseResult {
    pub success: bool,
    pub skipped: bool,
    pub skip_reason: Option<String>,
    pub exit_code: Option<i64>,
}

/// `No state` becomes `no_state`
fn normalize_reason(reason: &str) -> String {
    reason.to_lowercase().replace(' ', "_")
}

impl PhaseResult {
    fn missing() -> Self {
        Self {
            success: false,
            skipped: true,
            skip_reason: Some(MISSING_PHASE.to_string()),
            exit_code: None,
        }
    }

    pub fn from_tonapi(phase: Option<&TonapiPhase>) -> Self {
        let phase = match phase {
            Some(phase) if !phase.is_empty() => phase,
            _ => return Self::missing(),
        };

        if phase.skipped.unwrap_or(false) {
            return Self {
                success: false,
                skipped: true,
                skip_reason: Some(
                    phase
                        .skip_reason
                        .clone()
                        .unwrap_or_else(|| "skipped".to_string()),
                ),
                exit_code: None,
            };
        }

        Self {
            success: phase.success.unwrap_or(false),
            skipped: false,
            skip_reason: None,
            exit_code: phase.exit_code.or(phase.result_code),
        }
    }

    pub fn error(&self) -> Option<String> {
        match &self.skip_reason {
            Some(reason) if self.skipped && !reason.is_empty() => Some(normalize_reason(reason)),
            _ if !self.success => exit_code::translate(self.exit_code),
            _ => None,
        }
    }
}

/// One node of a reconstructed transaction tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub hash: String,
    pub block: String,
    pub account: Option<String>,
    /// Raw success, cleared by abort or by any derived error
    pub success: bool,
    pub timestamp: i64,
    pub total_fees: i64,
    pub end_balance: i64,
    pub op_code: Option<String>,
    pub compute_phase: PhaseResult,
    pub action_phase: PhaseResult,
    pub error: Option<String>,
    /// Contract interfaces, e.g. `wallet_v5r1`, `nft_collection`, `nft_item`
    pub interfaces: Vec<String>,
    /// Only populated when this transaction succeeded
    pub children: Vec<Transaction>,
}

/// First failure of a transaction, checked compute phase first
fn derive_error(compute: &PhaseResult, action: &PhaseResult) -> Option<String> {
    if compute.skipped {
        return Some(match compute.skip_reason.as_deref() {
            Some(reason) if !reason.is_empty() => normalize_reason(reason),
            _ => "compute_phase_skipped".to_string(),
        });
    }
    if !compute.success {
        return exit_code::translate(compute.exit_code);
    }
    if !action.success {
        return exit_code::translate(action.exit_code);
    }
    None
}

impl Transaction {
    /// Rebuilds the transaction tree from a trace node, depth first
    pub fn from_trace(node: &TraceNode) -> Self {
        let tx = node.transaction();

        let compute_phase = PhaseResult::from_tonapi(tx.compute_phase.as_ref());
        let action_phase = PhaseResult::from_tonapi(tx.action_phase.as_ref());
        let error = derive_error(&compute_phase, &action_phase);

        let success =
            tx.success.unwrap_or(false) && !tx.aborted.unwrap_or(false) && error.is_none();

        let hash = tx.hash.clone().unwrap_or_default();
        let supplied = node.children.as_deref().unwrap_or_default();
        let children = if success {
            supplied.iter().map(Transaction::from_trace).collect()
        } else {
            if !supplied.is_empty() {
                log::trace!(
                    "Transaction {} failed ({:?}), dropping {} child transactions",
                    hash,
                    error,
                    supplied.len()
                );
            }
            Vec::new()
        };

        let mut interfaces = node.interfaces.clone().unwrap_or_default();
        if interfaces.is_empty() && error.as_deref() == Some("cskip_no_state") {
            interfaces.push("uninit".to_string());
        }

        Self {
            hash,
            block: tx.block.clone().unwrap_or_default(),
            account: tx.account.as_ref().and_then(|account| account.address.clone()),
            success,
            timestamp: tx.utime.unwrap_or(0),
            total_fees: tx.total_fees.unwrap_or(0),
            end_balance: tx.end_balance.unwrap_or(0),
            op_code: tx.in_msg.as_ref().and_then(|msg| msg.op_code.clone()),
            compute_phase,
            action_phase,
            error,
            interfaces,
            children,
        }
    }
}
