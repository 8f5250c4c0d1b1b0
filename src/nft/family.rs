use crate::nft::code::*;
use crate::nft::content::ContentKind;
use std::fmt;
use std::str::FromStr;

/// Supported collection contract families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionFamily {
    Standard,
    StandardModified,
    SweetStandard,
    Soulbound,
    SoulboundModified,
    SweetSoulbound,
    Editable,
}

/// Shape of the per-item payload a family's mint messages carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLayout {
    /// `^(owner)` on mint, `coins ^(owner ^content)` per batch item
    Standard,
    /// No index, `^(owner)` on mint, `^(^(owner) coins)` per batch item
    Sweet,
    /// `^(owner ^content authority revoked_at)` on mint,
    /// `coins ^(owner authority revoked_at ^content)` per batch item
    Soulbound,
    /// No index, `^(owner ^content)` on mint
    SweetSoulbound,
    /// `^(owner editor ^content)` on mint and per batch item
    Editable,
}

/// Static description of a collection family
#[derive(Debug)]
pub struct FamilyConfig {
    pub name: &'static str,
    /// Collection code as hex BoC
    pub code_hex: &'static str,
    /// Item code the family is usually deployed with, when it ships with the library
    pub default_item_code: Option<&'static str>,
    pub layout: ItemLayout,
    pub collection_content: &'static [ContentKind],
    /// Content kinds accepted for items, empty when items carry no content
    pub item_content: &'static [ContentKind],
    /// Whether a single mint carries item content
    pub mint_content: bool,
    pub batch_mint: bool,
    pub admin_mint: bool,
    pub return_balance: bool,
    pub editable: bool,
}

impl FamilyConfig {
    /// Mint messages carry an explicit item index
    pub fn indexed(&self) -> bool {
        !matches!(self.layout, ItemLayout::Sweet | ItemLayout::SweetSoulbound)
    }
}

const MODIFIED: &[ContentKind] = &[ContentKind::ModifiedOnchain, ContentKind::ModifiedOffchain];

static STANDARD: FamilyConfig = FamilyConfig {
    name: "standard",
    code_hex: STANDARD_COLLECTION_CODE,
    default_item_code: Some(NFT_STANDARD_ITEM_CODE),
    layout: ItemLayout::Standard,
    collection_content: &[ContentKind::Offchain],
    item_content: &[ContentKind::Offchain],
    mint_content: false,
    batch_mint: true,
    admin_mint: false,
    return_balance: false,
    editable: false,
};

static STANDARD_MODIFIED: FamilyConfig = FamilyConfig {
    name: "standard-modified",
    code_hex: STANDARD_MODIFIED_COLLECTION_CODE,
    default_item_code: Some(NFT_STANDARD_ITEM_CODE),
    layout: ItemLayout::Standard,
    collection_content: MODIFIED,
    item_content: MODIFIED,
    mint_content: false,
    batch_mint: true,
    admin_mint: false,
    return_balance: true,
    editable: false,
};

static SWEET_STANDARD: FamilyConfig = FamilyConfig {
    name: "sweet-standard",
    code_hex: SWEET_STANDARD_COLLECTION_CODE,
    default_item_code: Some(NFT_STANDARD_ITEM_CODE),
    layout: ItemLayout::Sweet,
    collection_content: &[ContentKind::Sweet],
    item_content: &[],
    mint_content: false,
    batch_mint: true,
    admin_mint: true,
    return_balance: false,
    editable: false,
};

static SOULBOUND: FamilyConfig = FamilyConfig {
    name: "soulbound",
    code_hex: SOULBOUND_COLLECTION_CODE,
    default_item_code: None,
    layout: ItemLayout::Soulbound,
    collection_content: &[ContentKind::Offchain],
    item_content: &[ContentKind::Offchain],
    mint_content: true,
    batch_mint: true,
    admin_mint: false,
    return_balance: false,
    editable: false,
};

static SOULBOUND_MODIFIED: FamilyConfig = FamilyConfig {
    name: "soulbound-modified",
    code_hex: SOULBOUND_MODIFIED_COLLECTION_CODE,
    default_item_code: None,
    layout: ItemLayout::Soulbound,
    collection_content: MODIFIED,
    item_content: MODIFIED,
    mint_content: true,
    batch_mint: true,
    admin_mint: false,
    return_balance: true,
    editable: false,
};

static SWEET_SOULBOUND: FamilyConfig = FamilyConfig {
    name: "sweet-soulbound",
    code_hex: SWEET_SOULBOUND_COLLECTION_CODE,
    default_item_code: None,
    layout: ItemLayout::SweetSoulbound,
    collection_content: &[ContentKind::Sweet],
    item_content: &[ContentKind::Sweet],
    mint_content: true,
    batch_mint: false,
    admin_mint: false,
    return_balance: false,
    editable: false,
};

static EDITABLE: FamilyConfig = FamilyConfig {
    name: "editable",
    code_hex: EDITABLE_COLLECTION_CODE,
    default_item_code: None,
    layout: ItemLayout::Editable,
    collection_content: &[ContentKind::Onchain, ContentKind::Offchain],
    item_content: &[ContentKind::Onchain, ContentKind::Offchain],
    mint_content: true,
    batch_mint: true,
    admin_mint: false,
    return_balance: false,
    editable: true,
};

impl CollectionFamily {
    pub const ALL: [CollectionFamily; 7] = [
        CollectionFamily::Standard,
        CollectionFamily::StandardModified,
        CollectionFamily::SweetStandard,
        CollectionFamily::Soulbound,
        CollectionFamily::SoulboundModified,
        CollectionFamily::SweetSoulbound,
        CollectionFamily::Editable,
    ];

    pub fn config(&self) -> &'static FamilyConfig {
        match self {
            CollectionFamily::Standard => &STANDARD,
            CollectionFamily::StandardModified => &STANDARD_MODIFIED,
            CollectionFamily::SweetStandard => &SWEET_STANDARD,
            CollectionFamily::Soulbound => &SOULBOUND,
            CollectionFamily::SoulboundModified => &SOULBOUND_MODIFIED,
            CollectionFamily::SweetSoulbound => &SWEET_SOULBOUND,
            CollectionFamily::Editable => &EDITABLE,
        }
    }
}

impl fmt::Display for CollectionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config().name)
    }
}

impl FromStr for CollectionFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionFamily::ALL
            .into_iter()
            .find(|family| family.config().name == s)
            .ok_or_else(|| {
                let names: Vec<&str> = CollectionFamily::ALL
                    .iter()
                    .map(|family| family.config().name)
                    .collect();
                format!("unknown collection family '{}', expected one of: {}", s, names.join(", "))
            })
    }
}
