use clap::{Args, Parser, Subcommand};
use crate::client::{Client, ClientParams, TonapiClient};
use crate::nft::{
    CollectionContent, CollectionData, CollectionFamily, Collection, ContentKind, MintParams,
    NftContent, RoyaltyParams, SweetOffchainContent, build_admin_mint_body, build_mint_body,
};
use crate::trace::{TransactionReceipt, exit_code};
use crate::tvm::{Address, boc_to_hex, hex_to_boc};
use anyhow::{Result, anyhow, bail};
use std::time::Instant;

/// tonutils-nft CLI
#[derive(Parser, Debug)]
#[command(name = "tonutils-nft")]
#[command(about = "NFT collection tooling for TON", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub network: NetworkArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// REST backend settings
#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// tonapi.io API key
    #[arg(long, global = true, env = "TONAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Use testnet endpoints
    #[arg(long, global = true)]
    pub testnet: bool,
    /// Override the backend URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    pub timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the symbolic name of a TVM exit code
    TranslateExitCode {
        #[arg(allow_negative_numbers = true)]
        code: i64,
    },
    /// Build a mint message body and print it as hex BoC
    MintBody {
        /// Collection family
        #[arg(short, long)]
        family: CollectionFamily,
        /// Owner of the new item
        #[arg(short, long)]
        owner: String,
        /// Item index, omitted for sweet families
        #[arg(short, long)]
        index: Option<u64>,
        /// Item content URI (suffix for standard families)
        #[arg(short, long)]
        content: Option<String>,
        /// Common prefix of sweet item content
        #[arg(long)]
        prefix_uri: Option<String>,
        /// Editor of an editable item
        #[arg(long)]
        editor: Option<String>,
        /// Nanotons forwarded to the item
        #[arg(short, long, default_value = "20000000")]
        amount: u128,
        #[arg(short, long, default_value = "0")]
        query_id: u64,
        /// Use the privileged mint opcode
        #[arg(long)]
        admin: bool,
    },
    /// Compute the address a collection deploys to
    CollectionAddress {
        #[arg(short, long)]
        family: CollectionFamily,
        #[arg(short, long)]
        owner: String,
        /// Collection metadata URI
        #[arg(short, long)]
        uri: String,
        /// Common prefix of item metadata
        #[arg(short, long, default_value = "")]
        prefix_uri: String,
        #[arg(long, default_value = "50")]
        royalty_factor: u16,
        #[arg(long, default_value = "1000")]
        royalty_base: u16,
        /// Royalty destination, defaults to the owner
        #[arg(long)]
        royalty_address: Option<String>,
        /// Item code as hex BoC, defaults to the family's item code
        #[arg(long)]
        item_code: Option<String>,
    },
    /// Trace a transaction and print its receipt
    Trace {
        hash: String,
    },
    /// Print the raw state of an account
    Account {
        address: String,
    },
}

/// Item content of the shape the family mints with
pub fn mint_content(
    family: CollectionFamily,
    uri: Option<String>,
    prefix_uri: Option<String>,
) -> Result<Option<NftContent>> {
    let Some(uri) = uri else {
        return Ok(None);
    };
    let config = family.config();
    let kind = config
        .item_content
        .iter()
        .copied()
        .find(|kind| !matches!(kind, ContentKind::Onchain | ContentKind::ModifiedOnchain))
        .ok_or_else(|| anyhow!("{} items carry no content", family))?;

    Ok(Some(match kind {
        ContentKind::ModifiedOffchain => NftContent::ModifiedOffchain { uri },
        ContentKind::Sweet => {
            let prefix = prefix_uri.ok_or_else(|| anyhow!("--prefix-uri is required for {}", family))?;
            NftContent::Sweet(SweetOffchainContent::new(uri, prefix))
        }
        _ => NftContent::offchain(uri),
    }))
}

/// Offchain collection content of the shape the family expects
pub fn collection_content(family: CollectionFamily, uri: String, prefix_uri: String) -> Result<CollectionContent> {
    let config = family.config();
    if config.collection_content.contains(&ContentKind::Offchain) {
        Ok(CollectionContent::offchain(uri, prefix_uri))
    } else if config.collection_content.contains(&ContentKind::ModifiedOffchain) {
        Ok(CollectionContent::ModifiedOffchain { uri })
    } else if config.collection_content.contains(&ContentKind::Sweet) {
        Ok(CollectionContent::Sweet(SweetOffchainContent::new(uri, prefix_uri)))
    } else {
        bail!("{} has no offchain collection content", family)
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn create_client(&self) -> Result<TonapiClient> {
        let params = ClientParams {
            timeout: Some(self.network.timeout),
            api_key: self.network.api_key.clone(),
            base_url: self.network.base_url.clone(),
            is_testnet: self.network.testnet,
        };
        Ok(TonapiClient::new(params)?)
    }

    /// Execute the command
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::TranslateExitCode { code } => {
                match exit_code::translate(Some(*code)) {
                    Some(name) => println!("{}", name),
                    None => bail!("Exit code {} has no translation", code),
                }
                Ok(())
            }
            Commands::MintBody {
                family,
                owner,
                index,
                content,
                prefix_uri,
                editor,
                amount,
                query_id,
                admin,
            } => {
                let mut params = MintParams::new(Address::parse(owner)?)
                    .with_amount(*amount)
                    .with_query_id(*query_id);
                if let Some(index) = index {
                    params = params.with_index(*index);
                }
                if let Some(content) = mint_content(*family, content.clone(), prefix_uri.clone())? {
                    params = params.with_content(content);
                }
                if let Some(editor) = editor {
                    params = params.with_editor(Address::parse(editor)?);
                }

                let body = if *admin {
                    build_admin_mint_body(*family, &params)?
                } else {
                    build_mint_body(*family, &params)?
                };
                println!("{}", boc_to_hex(&body, false)?);
                Ok(())
            }
            Commands::CollectionAddress {
                family,
                owner,
                uri,
                prefix_uri,
                royalty_factor,
                royalty_base,
                royalty_address,
                item_code,
            } => {
                let owner = Address::parse(owner)?;
                let royalty_address = match royalty_address {
                    Some(address) => Address::parse(address)?,
                    None => owner.clone(),
                };
                let item_code = match (item_code, family.config().default_item_code) {
                    (Some(hex), _) => hex_to_boc(hex)?,
                    (None, Some(hex)) => hex_to_boc(hex)?,
                    (None, None) => bail!("--item-code is required for {}", family),
                };

                let data = CollectionData {
                    owner_address: owner,
                    next_item_index: 0,
                    content: collection_content(*family, uri.clone(), prefix_uri.clone())?,
                    royalty_params: RoyaltyParams::new(*royalty_factor, *royalty_base, royalty_address),
                    nft_item_code: item_code,
                };
                let address = Collection::new(*family, data)?.address()?;
                log::info!("Raw address: {}", address.to_hex());
                println!("{}", address.to_friendly(true, true, self.network.testnet));
                Ok(())
            }
            Commands::Trace { hash } => self.execute_trace(hash).await,
            Commands::Account { address } => self.execute_account(address).await,
        }
    }

    async fn execute_trace(&self, hash: &str) -> Result<()> {
        let client = self.create_client()?;

        let op_start = Instant::now();
        let receipt = client
            .trace_transaction(hash)
            .await?
            .ok_or_else(|| anyhow!("Transaction {} not found", hash))?;
        log::info!("⏱️  trace_transaction: {:.3}s", op_start.elapsed().as_secs_f64());

        print_receipt(&receipt);
        Ok(())
    }

    async fn execute_account(&self, address: &str) -> Result<()> {
        let client = self.create_client()?;

        let op_start = Instant::now();
        let account = client.get_raw_account(address).await?;
        log::info!("⏱️  get_raw_account: {:.3}s", op_start.elapsed().as_secs_f64());

        println!("Status: {}", account.status);
        println!("Balance: {}", account.balance);
        if let Some(code) = &account.code {
            println!("Code hash: {}", hex::encode(code.hash()));
        }
        if let Some(data) = &account.data {
            println!("Data hash: {}", hex::encode(data.hash()));
        }
        if let (Some(lt), Some(hash)) = (account.last_transaction_lt, &account.last_transaction_hash) {
            println!("Last transaction: {} ({})", hash, lt);
        }
        Ok(())
    }
}

fn print_receipt(receipt: &TransactionReceipt) {
    let root = &receipt.raw_transaction;
    let time = chrono::DateTime::from_timestamp(root.timestamp, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| root.timestamp.to_string());

    println!("Hash: {}", receipt.hash);
    println!("Block: {} ({})", receipt.block, receipt.block_hash.as_deref().unwrap_or("unknown hash"));
    println!("Time: {}", time);
    println!("Success: {}", receipt.success);
    println!("Batch: {}", receipt.batch_transaction);
    if let Some(errors) = &receipt.error {
        println!("Errors: {}", errors.join(", "));
    }
    if let Some(interfaces) = &receipt.interfaces {
        let names: Vec<&str> = interfaces.iter().map(String::as_str).collect();
        println!("Interfaces: {}", names.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mint_body_args() {
        let cli = Cli::try_parse_from([
            "tonutils-nft",
            "--testnet",
            "mint-body",
            "--family",
            "soulbound",
            "--owner",
            "0:0000000000000000000000000000000000000000000000000000000000000000",
            "--index",
            "3",
            "--content",
            "3.json",
        ])
        .unwrap();

        assert!(cli.network.testnet);
        match cli.command {
            Commands::MintBody { family, index, amount, .. } => {
                assert_eq!(family, CollectionFamily::Soulbound);
                assert_eq!(index, Some(3));
                assert_eq!(amount, 20_000_000);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_negative_exit_code() {
        let cli = Cli::try_parse_from(["tonutils-nft", "translate-exit-code", "-14"]).unwrap();
        assert!(matches!(cli.command, Commands::TranslateExitCode { code: -14 }));
        assert!(Cli::try_parse_from(["tonutils-nft", "mint-body", "--family", "bogus"]).is_err());
    }

    #[test]
    fn test_content_for_family() {
        let content = mint_content(CollectionFamily::SoulboundModified, Some("a".into()), None)
            .unwrap()
            .unwrap();
        assert_eq!(content.kind(), ContentKind::ModifiedOffchain);

        assert!(mint_content(CollectionFamily::SweetSoulbound, Some("a".into()), None).is_err());
        assert!(mint_content(CollectionFamily::SweetStandard, Some("a".into()), None).is_err());
        assert!(mint_content(CollectionFamily::Standard, None, None).unwrap().is_none());

        let collection = collection_content(CollectionFamily::SweetStandard, "c".into(), "p/".into()).unwrap();
        assert_eq!(collection.kind(), ContentKind::Sweet);
        let collection = collection_content(CollectionFamily::Editable, "c".into(), "p/".into()).unwrap();
        assert_eq!(collection.kind(), ContentKind::Offchain);
    }
}
