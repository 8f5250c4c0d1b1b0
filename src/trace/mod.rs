//! Transaction trace reconstruction and receipts
//!
//! A backend trace is parsed into a [`Transaction`] tree with a derived error
//! tag on each node, then collapsed into a [`TransactionReceipt`]. Execution
//! failures are data here, never Rust errors.

pub mod exit_code;
pub mod receipt;
pub mod transaction;
#[cfg(test)]
mod tests;

pub use receipt::TransactionReceipt;
pub use transaction::{PhaseResult, Transaction};
