use crate::nft::content::{CollectionContent, ContentKind};
use crate::nft::royalty::RoyaltyParams;
use crate::tvm::{Address, Builder, Cell, Slice};
use anyhow::{Result, anyhow};
use std::sync::Arc;

/// Persistent data of a collection contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionData {
    pub owner_address: Address,
    pub next_item_index: u64,
    pub content: CollectionContent,
    pub royalty_params: RoyaltyParams,
    /// Code every item contract is deployed with
    pub nft_item_code: Arc<Cell>,
}

impl CollectionData {
    /// `owner next_item_index:uint64 ^content ^nft_item_code ^royalty_params`
    pub fn serialize(&self) -> Result<Arc<Cell>> {
        let mut builder = Builder::new();
        builder.store_address(Some(&self.owner_address))?;
        builder.store_u64(self.next_item_index)?;
        builder.store_ref(self.content.serialize()?)?;
        builder.store_ref(self.nft_item_code.clone())?;
        builder.store_ref(self.royalty_params.serialize()?)?;
        builder.build()
    }

    pub fn parse(kind: ContentKind, cell: Arc<Cell>) -> Result<Self> {
        let mut slice = Slice::new(cell);
        let owner_address = slice
            .load_address()?
            .ok_or_else(|| anyhow!("Collection owner is addr_none"))?;
        let next_item_index = slice.load_u64()?;
        let content = CollectionContent::parse(kind, slice.load_reference()?)?;
        let nft_item_code = slice.load_reference()?;
        let royalty_params = RoyaltyParams::parse(slice.load_reference()?)?;

        Ok(Self {
            owner_address,
            next_item_index,
            content,
            royalty_params,
            nft_item_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nft::code::NFT_STANDARD_ITEM_CODE;
    use crate::tvm::hex_to_boc;

    fn sample() -> CollectionData {
        let owner = Address::new(0, [0x11; 32]);
        CollectionData {
            owner_address: owner.clone(),
            next_item_index: 7,
            content: CollectionContent::offchain("https://a/c.json", "https://a/"),
            royalty_params: RoyaltyParams::new(50, 1000, owner),
            nft_item_code: hex_to_boc(NFT_STANDARD_ITEM_CODE).unwrap(),
        }
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let data = sample();
        let first = data.serialize().unwrap();
        let second = data.serialize().unwrap();
        assert_eq!(first.hash(), second.hash());
        assert_eq!(first.bit_len(), 267 + 64);
        assert_eq!(first.reference_count(), 3);
    }

    #[test]
    fn test_parse_round_trip() {
        let data = sample();
        let parsed = CollectionData::parse(ContentKind::Offchain, data.serialize().unwrap()).unwrap();
        assert_eq!(parsed, data);
    }
}
