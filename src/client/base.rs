use async_trait::async_trait;

use crate::models::tonapi::TraceNode;
use crate::models::{GetMethodResult, RawAccount, StackValue};
use crate::trace::{Transaction, TransactionReceipt};


#[derive(Debug, Clone)]
pub struct ClientParams {
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub is_testnet: bool,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            timeout: Some(10),
            api_key: None,
            base_url: None,
            is_testnet: false,
        }
    }
}


#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Entity not found")]
    NotFound,
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] anyhow::Error),
    #[error("{0} is not supported by this backend")]
    Unsupported(&'static str),
    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Maps `NotFound` to `None`, passes every other outcome through
pub fn found<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ClientError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}


/// Capabilities shared by every blockchain backend
#[async_trait]
pub trait Client: Send + Sync {
    async fn run_get_method(
        &self,
        address: &str,
        method_name: &str,
        stack: Vec<StackValue>,
    ) -> Result<GetMethodResult>;

    /// Broadcasts an external message given as hex BoC
    async fn send_message(&self, boc: &str) -> Result<()>;

    async fn get_raw_account(&self, address: &str) -> Result<RawAccount>;

    async fn get_account_balance(&self, address: &str) -> Result<u128> {
        Ok(self.get_raw_account(address).await?.balance)
    }

    async fn get_transaction(&self, address: &str, hash: &str)
        -> Result<Option<TransactionReceipt>>;

    async fn trace_transaction(&self, hash: &str) -> Result<Option<TransactionReceipt>>;

    async fn get_block_hash(&self, block_id: &str) -> Result<Option<String>>;
}


/// Reconstructs the transaction tree, then looks up the root block's hash
pub async fn receipt_from_trace<C: Client + ?Sized>(
    client: &C,
    node: &TraceNode,
) -> Result<TransactionReceipt> {
    let root = Transaction::from_trace(node);
    let block_hash = if root.block.is_empty() {
        None
    } else {
        client.get_block_hash(&root.block).await?
    };
    Ok(TransactionReceipt::from_transaction(root, block_hash))
}
