use crate::nft::data::CollectionData;
use crate::nft::family::CollectionFamily;
use crate::nft::{NftError, Result};
use crate::tvm::{Address, Builder, Cell, hex_to_boc};
use std::sync::Arc;

/// A collection contract ready to be deployed
#[derive(Debug, Clone)]
pub struct Collection {
    family: CollectionFamily,
    data: CollectionData,
    code: Arc<Cell>,
}

impl Collection {
    /// Checks the content against the family and loads the family's code
    pub fn new(family: CollectionFamily, data: CollectionData) -> Result<Self> {
        let config = family.config();
        let kind = data.content.kind();
        if !config.collection_content.contains(&kind) {
            return Err(NftError::IncompatibleContent { family, kind });
        }

        let code = hex_to_boc(config.code_hex)?;
        Ok(Self { family, data, code })
    }

    pub fn family(&self) -> CollectionFamily {
        self.family
    }

    pub fn data(&self) -> &CollectionData {
        &self.data
    }

    pub fn code(&self) -> &Arc<Cell> {
        &self.code
    }

    /// `StateInit` with code and data only:
    /// `split_depth:nothing special:nothing code:just data:just library:nothing`
    pub fn state_init(&self) -> Result<Arc<Cell>> {
        let mut builder = Builder::new();
        builder.store_uint(0b00110, 5)?;
        builder.store_ref(self.code.clone())?;
        builder.store_ref(self.data.serialize()?)?;
        Ok(builder.build()?)
    }

    /// Basechain address the collection is deployed at
    pub fn address(&self) -> Result<Address> {
        Ok(Address::new(0, self.state_init()?.hash()))
    }
}
