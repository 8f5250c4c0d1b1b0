//! Lite backend
//!
//! The ADNL transport is pluggable: anything able to run a get-method, push
//! an external message and fetch a serialized `ShardAccount` can back a
//! [`LiteserverClient`]. Account state is re-derived locally from the cell.

use std::sync::Arc;

use anyhow::{anyhow, bail};
use async_trait::async_trait;

use crate::client::base::{Client, ClientError, Result};
use crate::models::{AccountStatus, GetMethodResult, RawAccount, StackValue};
use crate::trace::TransactionReceipt;
use crate::tvm::{Address, Cell, Slice, deserialize_boc};
use crate::utils::method_name_to_id;


#[async_trait]
pub trait LiteTransport: Send + Sync {
    async fn run_smc_method(
        &self,
        address: &Address,
        method_id: u32,
        stack: Vec<StackValue>,
    ) -> Result<GetMethodResult>;

    async fn send_message(&self, boc: Vec<u8>) -> Result<()>;

    /// BoC of the account's `ShardAccount` at the latest masterchain block
    async fn get_shard_account(&self, address: &Address) -> Result<Vec<u8>>;
}


pub struct LiteserverClient<T: LiteTransport> {
    transport: T,
}

impl<T: LiteTransport> LiteserverClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}


/// Balance, state and code/data of an `Account` cell
struct AccountState {
    balance: u128,
    status: AccountStatus,
    code: Option<Arc<Cell>>,
    data: Option<Arc<Cell>>,
}

/// ```text
/// account_none$0 = Account;
/// account$1 addr:MsgAddressInt storage_stat:StorageInfo storage:AccountStorage = Account;
/// storage_info$_ used:StorageUsed storage_extra:StorageExtraInfo last_paid:uint32
///   due_payment:(Maybe Grams) = StorageInfo;
/// account_storage$_ last_trans_lt:uint64 balance:CurrencyCollection state:AccountState
///   = AccountStorage;
/// ```
fn parse_account(cell: Arc<Cell>) -> anyhow::Result<AccountState> {
    let mut slice = Slice::new(cell);
    if !slice.load_bit()? {
        return Ok(AccountState {
            balance: 0,
            status: AccountStatus::Nonexist,
            code: None,
            data: None,
        });
    }

    slice
        .load_address()?
        .ok_or_else(|| anyhow!("Account cell holds addr_none"))?;

    // storage_used$_ cells:(VarUInteger 7) bits:(VarUInteger 7)
    slice.load_var_uint(3)?;
    slice.load_var_uint(3)?;
    match slice.load_uint(3)? {
        0b000 => {}
        0b001 => slice.skip_bits(256)?,
        tag => bail!("Unknown storage_extra tag {:03b}", tag),
    }
    slice.skip_bits(32)?;
    if slice.load_bit()? {
        slice.load_coins()?;
    }

    slice.skip_bits(64)?;
    let balance = slice.load_coins()?;
    // extra currencies
    slice.load_maybe_ref()?;

    if slice.load_bit()? {
        // account_active$1 _:StateInit
        if slice.load_bit()? {
            slice.skip_bits(5)?;
        }
        if slice.load_bit()? {
            slice.skip_bits(2)?;
        }
        let code = slice.load_maybe_ref()?;
        let data = slice.load_maybe_ref()?;
        return Ok(AccountState {
            balance,
            status: AccountStatus::Active,
            code,
            data,
        });
    }

    let status = if slice.load_bit()? {
        // account_frozen$01 state_hash:bits256
        slice.skip_bits(256)?;
        AccountStatus::Frozen
    } else {
        AccountStatus::Uninit
    };

    Ok(AccountState {
        balance,
        status,
        code: None,
        data: None,
    })
}

/// `shard_account$_ account:^Account last_trans_hash:bits256 last_trans_lt:uint64`
pub fn parse_shard_account(boc: &[u8]) -> anyhow::Result<RawAccount> {
    let mut slice = Slice::new(deserialize_boc(boc)?);
    let account = parse_account(slice.load_reference()?)?;
    let last_trans_hash = slice.load_bytes(32)?;
    let last_trans_lt = slice.load_u64()?;

    Ok(RawAccount {
        balance: account.balance,
        code: account.code,
        data: account.data,
        status: account.status,
        last_transaction_lt: Some(last_trans_lt),
        last_transaction_hash: Some(hex::encode(last_trans_hash)),
    })
}

#[async_trait]
impl<T: LiteTransport> Client for LiteserverClient<T> {
    async fn run_get_method(
        &self,
        address: &str,
        method_name: &str,
        stack: Vec<StackValue>,
    ) -> Result<GetMethodResult> {
        let address = Address::parse(address)?;
        let method_id = method_name_to_id(method_name);
        log::debug!("run {} (id {}) on {}", method_name, method_id, address);
        self.transport.run_smc_method(&address, method_id, stack).await
    }

    async fn send_message(&self, boc: &str) -> Result<()> {
        let bytes = hex::decode(boc.trim()).map_err(|e| ClientError::Decode(e.into()))?;
        self.transport.send_message(bytes).await
    }

    async fn get_raw_account(&self, address: &str) -> Result<RawAccount> {
        let address = Address::parse(address)?;
        let boc = self.transport.get_shard_account(&address).await?;
        Ok(parse_shard_account(&boc)?)
    }

    async fn get_transaction(
        &self,
        _address: &str,
        _hash: &str,
    ) -> Result<Option<TransactionReceipt>> {
        Err(ClientError::Unsupported("get_transaction"))
    }

    async fn trace_transaction(&self, _hash: &str) -> Result<Option<TransactionReceipt>> {
        Err(ClientError::Unsupported("trace_transaction"))
    }

    async fn get_block_hash(&self, _block_id: &str) -> Result<Option<String>> {
        Err(ClientError::Unsupported("get_block_hash"))
    }
}
