//! Operation codes understood by the collection contracts

pub const NFT_MINT_OPCODE: u32 = 0x1;
pub const BATCH_NFT_MINT_OPCODE: u32 = 0x2;
pub const CHANGE_COLLECTION_OWNER_OPCODE: u32 = 0x3;
pub const COLLECTION_EDIT_CONTENT_OPCODE: u32 = 0x4;
pub const RETURN_COLLECTION_BALANCE_OPCODE: u32 = 0x5;
/// Privileged mint of the sweet standard collection
pub const ADMIN_NFT_MINT_OPCODE: u32 = 0x6;

/// Default forward amount attached to every minted item, in nanotons
pub const DEFAULT_MINT_AMOUNT: u128 = 20_000_000;
