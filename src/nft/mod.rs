//! NFT collection contracts: content encoders, collection data and message bodies
//!
//! Every supported collection family is described by a static [`FamilyConfig`]
//! record. Message builders are plain functions that look the record up and
//! reject content or operations the family does not support before a single
//! bit is written.

pub mod code;
pub mod collection;
pub mod content;
pub mod data;
pub mod family;
pub mod messages;
pub mod op_codes;
pub mod royalty;

pub use collection::Collection;
pub use content::{
    CollectionContent, ContentKind, NftContent, OnchainContent, SweetOffchainContent,
};
pub use data::CollectionData;
pub use family::{CollectionFamily, FamilyConfig};
pub use messages::{
    BatchItem, MintParams, build_admin_mint_body, build_batch_mint_body, build_change_owner_body,
    build_edit_content_body, build_mint_body, build_return_balance_body,
};
pub use royalty::RoyaltyParams;

/// Errors raised while building collection data or message bodies
#[derive(Debug, thiserror::Error)]
pub enum NftError {
    #[error("{operation} is not supported by the {family} collection")]
    UnsupportedOperation {
        family: CollectionFamily,
        operation: &'static str,
    },
    #[error("{kind} content cannot be used with the {family} collection")]
    IncompatibleContent {
        family: CollectionFamily,
        kind: ContentKind,
    },
    #[error("{0} is required by this collection")]
    MissingField(&'static str),
    #[error("{0} is not used by this collection")]
    UnexpectedField(&'static str),
    #[error("Item index overflows starting from {0}")]
    IndexOverflow(u64),
    #[error(transparent)]
    Cell(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, NftError>;
