use crate::tvm::{Address, Builder, Cell, Slice};
use anyhow::{Result, anyhow, bail};
use std::sync::Arc;

/// Royalty as `factor / base` of each sale, paid to `address`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoyaltyParams {
    /// Numerator
    pub factor: u16,
    /// Denominator
    pub base: u16,
    pub address: Address,
}

impl RoyaltyParams {
    pub fn new(factor: u16, base: u16, address: Address) -> Self {
        Self {
            factor,
            base,
            address,
        }
    }

    /// `factor:uint16 base:uint16 destination:MsgAddress`
    ///
    /// Fails when `base` is zero, even though the layout itself could carry it.
    pub fn serialize(&self) -> Result<Arc<Cell>> {
        if self.base == 0 {
            bail!("Royalty base must be non-zero");
        }

        let mut builder = Builder::new();
        builder.store_uint(self.factor as u64, 16)?;
        builder.store_uint(self.base as u64, 16)?;
        builder.store_address(Some(&self.address))?;
        builder.build()
    }

    pub fn parse(cell: Arc<Cell>) -> Result<Self> {
        let mut slice = Slice::new(cell);
        let factor = slice.load_u16()?;
        let base = slice.load_u16()?;
        let address = slice
            .load_address()?
            .ok_or_else(|| anyhow!("Royalty destination is addr_none"))?;
        Ok(Self::new(factor, base, address))
    }

    /// Royalty share as a fraction
    pub fn share(&self) -> f64 {
        self.factor as f64 / self.base as f64
    }
}
