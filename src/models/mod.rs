//! Backend wire models and the domain types they convert into

pub mod basic;
pub mod tonapi;
pub mod traits;
#[cfg(test)]
mod tests;

pub use basic::{AccountStatus, GetMethodResult, RawAccount, StackValue};
