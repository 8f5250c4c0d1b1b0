use std::collections::BTreeSet;

use crate::trace::transaction::Transaction;

/// Collapsed view of a transaction tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    /// Hash of the tree root
    pub hash: String,
    /// Block of the tree root
    pub block: String,
    pub block_hash: Option<String>,
    /// True iff no node reported an error
    pub success: bool,
    /// True iff some node spawned two or more transactions
    pub batch_transaction: bool,
    pub raw_transaction: Transaction,
    /// Error tags in depth-first order
    pub error: Option<Vec<String>>,
    pub interfaces: Option<BTreeSet<String>>,
}

#[derive(Default)]
struct Collected {
    errors: Vec<String>,
    batch: bool,
    interfaces: BTreeSet<String>,
}

fn traverse(tx: &Transaction, acc: &mut Collected) {
    acc.interfaces.extend(tx.interfaces.iter().cloned());

    if !tx.success {
        if let Some(error) = &tx.error {
            acc.errors.push(error.clone());
            return;
        }
    }

    if tx.children.len() >= 2 {
        acc.batch = true;
    }
    for child in &tx.children {
        traverse(child, acc);
    }
}

impl TransactionReceipt {
    pub fn from_transaction(tx: Transaction, block_hash: Option<String>) -> Self {
        let mut acc = Collected::default();
        traverse(&tx, &mut acc);

        Self {
            hash: tx.hash.clone(),
            block: tx.block.clone(),
            block_hash,
            success: acc.errors.is_empty(),
            batch_transaction: acc.batch,
            error: (!acc.errors.is_empty()).then_some(acc.errors),
            interfaces: (!acc.interfaces.is_empty()).then_some(acc.interfaces),
            raw_transaction: tx,
        }
    }
}
