use anyhow::{Result, anyhow, bail};
use num_bigint::{BigInt, Sign};
use serde_json::Value;

use crate::models::basic::{AccountStatus, GetMethodResult, RawAccount, StackValue};
use crate::models::tonapi::{TonapiAccount, TonapiMethodResult, TonapiStackEntry};
use crate::tvm::hex_to_boc;


/// Numbers arrive either as JSON numbers or as decimal strings
fn json_number<T: std::str::FromStr>(value: &Value) -> Option<T> {
    match value {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Parses `0x1f`, `-0x1f` or plain decimal
pub(crate) fn parse_stack_num(s: &str) -> Result<BigInt> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let magnitude = match digits.strip_prefix("0x") {
        Some(hex) => BigInt::parse_bytes(hex.as_bytes(), 16),
        None => BigInt::parse_bytes(digits.as_bytes(), 10),
    }
    .ok_or_else(|| anyhow!("Invalid stack number '{}'", s))?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// Renders a stack value the way the REST backend accepts get-method arguments
pub(crate) fn stack_arg(value: &StackValue) -> Result<String> {
    match value {
        StackValue::Num(n) => {
            let (sign, magnitude) = (n.sign(), n.magnitude());
            let prefix = if sign == Sign::Minus { "-" } else { "" };
            Ok(format!("{}0x{:x}", prefix, magnitude))
        }
        StackValue::Cell(cell) | StackValue::Slice(cell) => {
            crate::tvm::boc_to_hex(cell, false)
        }
        other => bail!("{:?} cannot be passed as a get-method argument", other),
    }
}


impl TryFrom<TonapiAccount> for RawAccount {
    type Error = anyhow::Error;

    fn try_from(account: TonapiAccount) -> Result<Self> {
        let balance = match &account.balance {
            Some(value) => json_number::<u128>(value)
                .ok_or_else(|| anyhow!("Invalid account balance {}", value))?,
            None => 0,
        };
        let code = match account.code.as_deref() {
            Some(hex) if !hex.is_empty() => Some(hex_to_boc(hex)?),
            _ => None,
        };
        let data = match account.data.as_deref() {
            Some(hex) if !hex.is_empty() => Some(hex_to_boc(hex)?),
            _ => None,
        };
        let status = account
            .status
            .as_deref()
            .unwrap_or("uninit")
            .parse::<AccountStatus>()
            .map_err(|e| anyhow!(e))?;
        let last_transaction_lt = account
            .last_transaction_lt
            .as_ref()
            .and_then(json_number::<u64>)
            .filter(|lt| *lt != 0);
        let last_transaction_hash = account.last_transaction_hash.filter(|h| !h.is_empty());

        Ok(RawAccount {
            balance,
            code,
            data,
            status,
            last_transaction_lt,
            last_transaction_hash,
        })
    }
}


impl TryFrom<TonapiStackEntry> for StackValue {
    type Error = anyhow::Error;

    fn try_from(entry: TonapiStackEntry) -> Result<Self> {
        let kind = entry.r#type.as_deref().unwrap_or("null");
        match kind {
            "null" => Ok(StackValue::Null),
            "nan" => Ok(StackValue::Nan),
            "num" => {
                let num = entry.num.ok_or_else(|| anyhow!("num entry without value"))?;
                Ok(StackValue::Num(parse_stack_num(&num)?))
            }
            "cell" => {
                let cell = entry.cell.ok_or_else(|| anyhow!("cell entry without value"))?;
                Ok(StackValue::Cell(hex_to_boc(&cell)?))
            }
            "slice" => {
                let slice = entry.slice.ok_or_else(|| anyhow!("slice entry without value"))?;
                Ok(StackValue::Slice(hex_to_boc(&slice)?))
            }
            "tuple" => {
                let items = entry
                    .tuple
                    .unwrap_or_default()
                    .into_iter()
                    .map(StackValue::try_from)
                    .collect::<Result<Vec<_>>>()?;
                Ok(StackValue::Tuple(items))
            }
            other => bail!("Unknown stack entry type '{}'", other),
        }
    }
}


impl TryFrom<TonapiMethodResult> for GetMethodResult {
    type Error = anyhow::Error;

    fn try_from(result: TonapiMethodResult) -> Result<Self> {
        let stack = result
            .stack
            .unwrap_or_default()
            .into_iter()
            .map(StackValue::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(GetMethodResult {
            success: result.success.unwrap_or(false),
            exit_code: result.exit_code.unwrap_or(0),
            stack,
        })
    }
}
