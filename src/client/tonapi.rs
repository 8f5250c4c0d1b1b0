use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::base::{Client, ClientError, ClientParams, Result, found, receipt_from_trace};
use crate::models::tonapi::{
    TonapiAccount, TonapiBlock, TonapiErrorBody, TonapiMethodResult, TonapiSendMessageRequest,
    TraceNode,
};
use crate::models::traits::stack_arg;
use crate::models::{GetMethodResult, RawAccount, StackValue};
use crate::trace::TransactionReceipt;

pub const TONAPI_MAINNET_URL: &str = "https://tonapi.io";
pub const TONAPI_TESTNET_URL: &str = "https://testnet.tonapi.io";


/// REST backend over tonapi.io
pub struct TonapiClient {
    params: ClientParams,
    base_url: String,
    client: reqwest::Client,
}

/// Error responses look like `{"error": "entity not found"}`
pub(crate) fn api_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<TonapiErrorBody>(body)
        .ok()
        .and_then(|e| e.error)
        .unwrap_or_else(|| body.trim().to_string());

    if status == 404 || message.to_lowercase().contains("not found") {
        ClientError::NotFound
    } else {
        ClientError::Api { status, message }
    }
}

impl TonapiClient {
    pub fn new(params: ClientParams) -> Result<Self> {
        let base_url = match &params.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None if params.is_testnet => TONAPI_TESTNET_URL.to_string(),
            None => TONAPI_MAINNET_URL.to_string(),
        };

        let mut headers = HeaderMap::new();
        if let Some(api_key) = &params.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| ClientError::Transport(format!("Invalid API key: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            params,
            base_url,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn params(&self) -> &ClientParams {
        &self.params
    }

    pub(crate) fn url(&self, method: &str, query: &[(&str, String)]) -> Result<Url> {
        let url = format!("{}/{}", self.base_url, method.trim_start_matches('/'));
        let parsed = if query.is_empty() {
            Url::parse(&url)
        } else {
            Url::parse_with_params(&url, query.iter().map(|(k, v)| (*k, v.as_str())))
        };
        parsed.map_err(|e| ClientError::Transport(format!("Invalid URL {}: {}", url, e)))
    }

    async fn read(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(api_error(status.as_u16(), &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, method: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(method, query)?;
        log::debug!("GET {}", url);
        let body = Self::read(self.client.get(url).send().await?).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post<B: Serialize + Sync>(&self, method: &str, body: &B) -> Result<String> {
        let url = self.url(method, &[])?;
        log::debug!("POST {}", url);
        Self::read(self.client.post(url).json(body).send().await?).await
    }

    /// Raw collection description from the NFT index
    pub async fn get_collection(&self, address: &str) -> Result<Value> {
        self.get(&format!("/v2/nfts/collections/{}", address), &[]).await
    }

    pub async fn get_collections(&self, addresses: &[String]) -> Result<Value> {
        let body = serde_json::json!({ "account_ids": addresses });
        let response: Value = serde_json::from_str(&self.post("/v2/nfts/collections/_bulk", &body).await?)?;
        Ok(response.get("nft_collections").cloned().unwrap_or(Value::Null))
    }

    async fn receipt(&self, method: &str) -> Result<Option<TransactionReceipt>> {
        match found(self.get::<TraceNode>(method, &[]).await)? {
            Some(node) => Ok(Some(receipt_from_trace(self, &node).await?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Client for TonapiClient {
    async fn run_get_method(
        &self,
        address: &str,
        method_name: &str,
        stack: Vec<StackValue>,
    ) -> Result<GetMethodResult> {
        let query = stack
            .iter()
            .map(|value| Ok(("args", stack_arg(value)?)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let method = format!("/v2/blockchain/accounts/{}/methods/{}", address, method_name);
        let result: TonapiMethodResult = self.get(&method, &query).await?;
        Ok(GetMethodResult::try_from(result)?)
    }

    async fn send_message(&self, boc: &str) -> Result<()> {
        let request = TonapiSendMessageRequest {
            boc: Some(boc.to_string()),
        };
        self.post("/v2/blockchain/message", &request).await?;
        Ok(())
    }

    async fn get_raw_account(&self, address: &str) -> Result<RawAccount> {
        let account: TonapiAccount = self
            .get(&format!("/v2/blockchain/accounts/{}", address), &[])
            .await?;
        Ok(RawAccount::try_from(account)?)
    }

    async fn get_transaction(
        &self,
        _address: &str,
        hash: &str,
    ) -> Result<Option<TransactionReceipt>> {
        self.receipt(&format!("/v2/blockchain/transactions/{}", hash)).await
    }

    async fn trace_transaction(&self, hash: &str) -> Result<Option<TransactionReceipt>> {
        self.receipt(&format!("/v2/traces/{}", hash)).await
    }

    async fn get_block_hash(&self, block_id: &str) -> Result<Option<String>> {
        let block = found(
            self.get::<TonapiBlock>(&format!("/v2/blockchain/blocks/{}", block_id), &[])
                .await,
        )?;
        Ok(block.and_then(|block| block.root_hash))
    }
}
