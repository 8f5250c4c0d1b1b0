//! Message bodies accepted by the collection contracts
//!
//! Every body starts with `op:uint32 query_id:uint64`. Batch mints carry a
//! `HashmapE 64` of per-item payloads keyed by item index.

use crate::nft::content::{CollectionContent, ContentKind, NftContent};
use crate::nft::family::{CollectionFamily, FamilyConfig, ItemLayout};
use crate::nft::op_codes::*;
use crate::nft::royalty::RoyaltyParams;
use crate::nft::{NftError, Result};
use crate::tvm::{Address, Builder, Cell, Dict, DictValue};
use std::sync::Arc;

/// Parameters of a single mint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintParams {
    pub owner: Address,
    /// Item index, required by every family except the sweet ones
    pub index: Option<u64>,
    pub content: Option<NftContent>,
    /// Soulbound only, defaults to the owner
    pub authority: Option<Address>,
    /// Soulbound only, defaults to 0
    pub revoked_at: Option<u64>,
    /// Editable only, defaults to the owner
    pub editor: Option<Address>,
    pub amount: u128,
    pub query_id: u64,
}

impl MintParams {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            index: None,
            content: None,
            authority: None,
            revoked_at: None,
            editor: None,
            amount: DEFAULT_MINT_AMOUNT,
            query_id: 0,
        }
    }

    pub fn with_index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_content(mut self, content: NftContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_authority(mut self, authority: Address) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_revoked_at(mut self, revoked_at: u64) -> Self {
        self.revoked_at = Some(revoked_at);
        self
    }

    pub fn with_editor(mut self, editor: Address) -> Self {
        self.editor = Some(editor);
        self
    }

    pub fn with_amount(mut self, amount: u128) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_query_id(mut self, query_id: u64) -> Self {
        self.query_id = query_id;
        self
    }
}

/// One entry of a batch mint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub owner: Address,
    pub content: Option<NftContent>,
    pub authority: Option<Address>,
    pub revoked_at: Option<u64>,
    pub editor: Option<Address>,
}

impl BatchItem {
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            content: None,
            authority: None,
            revoked_at: None,
            editor: None,
        }
    }

    pub fn with_content(mut self, content: NftContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_authority(mut self, authority: Address) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn with_revoked_at(mut self, revoked_at: u64) -> Self {
        self.revoked_at = Some(revoked_at);
        self
    }

    pub fn with_editor(mut self, editor: Address) -> Self {
        self.editor = Some(editor);
        self
    }
}

fn header(op: u32, query_id: u64) -> Result<Builder> {
    let mut builder = Builder::new();
    builder.store_u32(op)?;
    builder.store_u64(query_id)?;
    Ok(builder)
}

fn address_cell(address: &Address) -> Result<Arc<Cell>> {
    let mut builder = Builder::new();
    builder.store_address(Some(address))?;
    Ok(builder.build()?)
}

/// Validates item content against the family and serializes it
fn item_content(
    family: CollectionFamily,
    accepted: &[ContentKind],
    content: Option<&NftContent>,
) -> Result<Option<Arc<Cell>>> {
    match content {
        None if accepted.is_empty() => Ok(None),
        None => Err(NftError::MissingField("content")),
        Some(_) if accepted.is_empty() => Err(NftError::UnexpectedField("content")),
        Some(content) if !accepted.contains(&content.kind()) => {
            Err(NftError::IncompatibleContent {
                family,
                kind: content.kind(),
            })
        }
        Some(content) => Ok(Some(content.serialize()?)),
    }
}

fn required_content(content: Option<Arc<Cell>>) -> Result<Arc<Cell>> {
    content.ok_or(NftError::MissingField("content"))
}

/// Rejects optional fields that the family's layout does not carry
fn check_extras(
    layout: ItemLayout,
    authority: &Option<Address>,
    revoked_at: &Option<u64>,
    editor: &Option<Address>,
) -> Result<()> {
    if layout != ItemLayout::Soulbound {
        if authority.is_some() {
            return Err(NftError::UnexpectedField("authority"));
        }
        if revoked_at.is_some() {
            return Err(NftError::UnexpectedField("revoked_at"));
        }
    }
    if layout != ItemLayout::Editable && editor.is_some() {
        return Err(NftError::UnexpectedField("editor"));
    }
    Ok(())
}

fn mint_body(family: CollectionFamily, op: u32, params: &MintParams) -> Result<Arc<Cell>> {
    let config: &FamilyConfig = family.config();

    let accepted: &[ContentKind] = if config.mint_content {
        config.item_content
    } else {
        &[]
    };
    let content = item_content(family, accepted, params.content.as_ref())?;
    check_extras(
        config.layout,
        &params.authority,
        &params.revoked_at,
        &params.editor,
    )?;

    let mut body = header(op, params.query_id)?;
    match (config.indexed(), params.index) {
        (true, Some(index)) => {
            body.store_u64(index)?;
        }
        (true, None) => return Err(NftError::MissingField("index")),
        (false, Some(_)) => return Err(NftError::UnexpectedField("index")),
        (false, None) => {}
    }
    body.store_coins(params.amount)?;

    let owner = &params.owner;
    let mut item = Builder::new();
    match config.layout {
        ItemLayout::Standard | ItemLayout::Sweet => {
            item.store_address(Some(owner))?;
        }
        ItemLayout::Soulbound => {
            item.store_address(Some(owner))?;
            item.store_ref(required_content(content)?)?;
            item.store_address(Some(params.authority.as_ref().unwrap_or(owner)))?;
            item.store_u64(params.revoked_at.unwrap_or(0))?;
        }
        ItemLayout::SweetSoulbound => {
            item.store_address(Some(owner))?;
            item.store_ref(required_content(content)?)?;
        }
        ItemLayout::Editable => {
            item.store_address(Some(owner))?;
            item.store_address(Some(params.editor.as_ref().unwrap_or(owner)))?;
            item.store_ref(required_content(content)?)?;
        }
    }
    body.store_ref(item.build()?)?;

    log::debug!("built {} mint body for {}", family, owner);
    Ok(body.build()?)
}

/// Builds the body of a single mint
pub fn build_mint_body(family: CollectionFamily, params: &MintParams) -> Result<Arc<Cell>> {
    mint_body(family, NFT_MINT_OPCODE, params)
}

/// Builds the privileged mint of families that distinguish admin mints
pub fn build_admin_mint_body(family: CollectionFamily, params: &MintParams) -> Result<Arc<Cell>> {
    if !family.config().admin_mint {
        return Err(NftError::UnsupportedOperation {
            family,
            operation: "admin mint",
        });
    }
    mint_body(family, ADMIN_NFT_MINT_OPCODE, params)
}

fn batch_value(
    family: CollectionFamily,
    config: &FamilyConfig,
    item: &BatchItem,
    amount: u128,
) -> Result<Arc<Cell>> {
    let content = item_content(family, config.item_content, item.content.as_ref())?;
    check_extras(config.layout, &item.authority, &item.revoked_at, &item.editor)?;

    let owner = &item.owner;
    let mut value = Builder::new();
    let mut payload = Builder::new();

    match config.layout {
        ItemLayout::Standard => {
            payload.store_address(Some(owner))?;
            payload.store_ref(required_content(content)?)?;
            value.store_coins(amount)?;
            value.store_ref(payload.build()?)?;
        }
        ItemLayout::Sweet => {
            payload.store_ref(address_cell(owner)?)?;
            payload.store_coins(amount)?;
            value.store_ref(payload.build()?)?;
        }
        ItemLayout::Soulbound => {
            payload.store_address(Some(owner))?;
            payload.store_address(Some(item.authority.as_ref().unwrap_or(owner)))?;
            payload.store_u64(item.revoked_at.unwrap_or(0))?;
            payload.store_ref(required_content(content)?)?;
            value.store_coins(amount)?;
            value.store_ref(payload.build()?)?;
        }
        ItemLayout::Editable => {
            payload.store_address(Some(owner))?;
            payload.store_address(Some(item.editor.as_ref().unwrap_or(owner)))?;
            payload.store_ref(required_content(content)?)?;
            value.store_coins(amount)?;
            value.store_ref(payload.build()?)?;
        }
        ItemLayout::SweetSoulbound => {
            return Err(NftError::UnsupportedOperation {
                family,
                operation: "batch mint",
            });
        }
    }

    Ok(value.build()?)
}

/// Builds a batch mint of `items`, keyed `from_index`, `from_index + 1`, ...
///
/// An empty `items` fails with [`NftError::MissingField`] instead of sending a
/// body with an empty dictionary.
pub fn build_batch_mint_body(
    family: CollectionFamily,
    items: &[BatchItem],
    from_index: u64,
    amount_per_one: u128,
    query_id: u64,
) -> Result<Arc<Cell>> {
    let config = family.config();
    if !config.batch_mint {
        return Err(NftError::UnsupportedOperation {
            family,
            operation: "batch mint",
        });
    }
    if items.is_empty() {
        return Err(NftError::MissingField("batch items"));
    }

    let mut dict = Dict::new(64);
    for (offset, item) in items.iter().enumerate() {
        let key = from_index
            .checked_add(offset as u64)
            .ok_or(NftError::IndexOverflow(from_index))?;
        let value = batch_value(family, config, item, amount_per_one)?;
        dict.insert_new(key, DictValue::Cell(value))?;
    }

    let mut body = header(BATCH_NFT_MINT_OPCODE, query_id)?;
    body.store_dictionary(&dict)?;

    log::debug!(
        "built {} batch mint body: {} items from index {}",
        family,
        items.len(),
        from_index
    );
    Ok(body.build()?)
}

/// Asks the collection to send its spare balance back to the owner
pub fn build_return_balance_body(family: CollectionFamily, query_id: u64) -> Result<Arc<Cell>> {
    if !family.config().return_balance {
        return Err(NftError::UnsupportedOperation {
            family,
            operation: "return balance",
        });
    }
    Ok(header(RETURN_COLLECTION_BALANCE_OPCODE, query_id)?.build()?)
}

/// Replaces collection content and royalty parameters
pub fn build_edit_content_body(
    family: CollectionFamily,
    content: &CollectionContent,
    royalty_params: &RoyaltyParams,
    query_id: u64,
) -> Result<Arc<Cell>> {
    let config = family.config();
    if !config.editable {
        return Err(NftError::UnsupportedOperation {
            family,
            operation: "edit content",
        });
    }
    if !config.collection_content.contains(&content.kind()) {
        return Err(NftError::IncompatibleContent {
            family,
            kind: content.kind(),
        });
    }

    let mut body = header(COLLECTION_EDIT_CONTENT_OPCODE, query_id)?;
    body.store_ref(content.serialize()?)?;
    body.store_ref(royalty_params.serialize()?)?;
    Ok(body.build()?)
}

/// Transfers collection ownership
pub fn build_change_owner_body(
    family: CollectionFamily,
    new_owner: &Address,
    query_id: u64,
) -> Result<Arc<Cell>> {
    if !family.config().editable {
        return Err(NftError::UnsupportedOperation {
            family,
            operation: "change owner",
        });
    }

    let mut body = header(CHANGE_COLLECTION_OWNER_OPCODE, query_id)?;
    body.store_address(Some(new_owner))?;
    Ok(body.build()?)
}
