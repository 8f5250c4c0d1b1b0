use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::tvm::Cell;


#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Uninit,
    Frozen,
    Nonexist,
}

impl FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AccountStatus::Active),
            "uninit" | "uninitialized" => Ok(AccountStatus::Uninit),
            "frozen" => Ok(AccountStatus::Frozen),
            "nonexist" => Ok(AccountStatus::Nonexist),
            other => Err(format!("Unknown account status '{}'", other)),
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountStatus::Active => "active",
            AccountStatus::Uninit => "uninit",
            AccountStatus::Frozen => "frozen",
            AccountStatus::Nonexist => "nonexist",
        };
        f.write_str(name)
    }
}


/// Account state as seen by every backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccount {
    pub balance: u128,
    pub code: Option<Arc<Cell>>,
    pub data: Option<Arc<Cell>>,
    pub status: AccountStatus,
    pub last_transaction_lt: Option<u64>,
    pub last_transaction_hash: Option<String>,
}


/// A TVM stack entry passed to or returned from a get-method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackValue {
    Null,
    Nan,
    Num(BigInt),
    Cell(Arc<Cell>),
    Slice(Arc<Cell>),
    Tuple(Vec<StackValue>),
}

impl StackValue {
    pub fn as_num(&self) -> Option<&BigInt> {
        match self {
            StackValue::Num(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_cell(&self) -> Option<&Arc<Cell>> {
        match self {
            StackValue::Cell(cell) | StackValue::Slice(cell) => Some(cell),
            _ => None,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMethodResult {
    pub success: bool,
    pub exit_code: i64,
    pub stack: Vec<StackValue>,
}
