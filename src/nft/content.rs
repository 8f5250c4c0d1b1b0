//! Collection and item content encoders
//!
//! Offchain content is a `0x01` byte followed by a snake string. Onchain content
//! follows TEP-64: a `0x00` byte and a 256-bit keyed dictionary whose keys are
//! SHA-256 hashes of attribute names and whose values are `^(0x00 snake-data)`.

use crate::tvm::{Builder, Cell, Dict, DictValue, Slice};
use anyhow::{Result, anyhow, bail};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

const ONCHAIN_PREFIX: u8 = 0x00;
const OFFCHAIN_PREFIX: u8 = 0x01;
const SNAKE_PREFIX: u8 = 0x00;
const ATTRIBUTE_KEY_BITS: usize = 256;

/// Discriminant of a content variant, used for family compatibility checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Offchain,
    Onchain,
    ModifiedOffchain,
    ModifiedOnchain,
    Sweet,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Offchain => "offchain",
            ContentKind::Onchain => "onchain",
            ContentKind::ModifiedOffchain => "modified offchain",
            ContentKind::ModifiedOnchain => "modified onchain",
            ContentKind::Sweet => "sweet offchain",
        };
        f.write_str(name)
    }
}

/// TEP-64 onchain metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnchainContent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub image_data: Option<Vec<u8>>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
}

fn attribute_key(name: &str) -> BigUint {
    BigUint::from_bytes_be(&Sha256::digest(name.as_bytes()))
}

impl OnchainContent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(decimals);
        self
    }

    fn attributes(&self) -> Vec<(&'static str, Vec<u8>)> {
        let text = |name, value: &Option<String>| {
            value.as_ref().map(|v| (name, v.as_bytes().to_vec()))
        };

        [
            text("name", &self.name),
            text("description", &self.description),
            text("image", &self.image),
            self.image_data.clone().map(|data| ("image_data", data)),
            text("symbol", &self.symbol),
            self.decimals
                .map(|d| ("decimals", d.to_string().into_bytes())),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn serialize(&self) -> Result<Arc<Cell>> {
        let mut dict = Dict::new(ATTRIBUTE_KEY_BITS);
        for (name, value) in self.attributes() {
            let mut leaf = Builder::new();
            leaf.store_byte(SNAKE_PREFIX)?;
            leaf.store_snake_bytes(&value)?;
            dict.set(attribute_key(name), DictValue::Ref(leaf.build()?))?;
        }

        let mut builder = Builder::new();
        builder.store_byte(ONCHAIN_PREFIX)?;
        builder.store_dictionary(&dict)?;
        builder.build()
    }

    pub fn parse(cell: Arc<Cell>) -> Result<Self> {
        let mut slice = Slice::new(cell);
        let prefix = slice.load_byte()?;
        if prefix != ONCHAIN_PREFIX {
            bail!("Expected onchain content prefix, got {:#04x}", prefix);
        }
        let dict = slice.load_dict(ATTRIBUTE_KEY_BITS)?;

        let read = |name: &str| -> Result<Option<Vec<u8>>> {
            let leaf = match dict.get(&attribute_key(name)) {
                None => return Ok(None),
                Some(DictValue::Cell(leaf)) => leaf.clone(),
                Some(other) => bail!("Unexpected value for {}: {:?}", name, other),
            };
            let mut value = Slice::new(Slice::new(leaf).load_reference()?);
            let prefix = value.load_byte()?;
            if prefix != SNAKE_PREFIX {
                bail!("Unsupported content data prefix {:#04x} for {}", prefix, name);
            }
            value.load_snake_bytes().map(Some)
        };
        let read_text = |name: &str| -> Result<Option<String>> {
            read(name)?
                .map(|bytes| String::from_utf8(bytes).map_err(|e| anyhow!("{}: {}", name, e)))
                .transpose()
        };

        Ok(Self {
            name: read_text("name")?,
            description: read_text("description")?,
            image: read_text("image")?,
            image_data: read("image_data")?,
            symbol: read_text("symbol")?,
            decimals: read_text("decimals")?
                .map(|d| d.parse::<u8>())
                .transpose()?,
        })
    }
}

fn offchain_cell(uri: &str) -> Result<Arc<Cell>> {
    let mut builder = Builder::new();
    builder.store_byte(OFFCHAIN_PREFIX)?;
    builder.store_snake_string(uri)?;
    builder.build()
}

fn parse_offchain(cell: Arc<Cell>) -> Result<String> {
    let mut slice = Slice::new(cell);
    let prefix = slice.load_byte()?;
    if prefix != OFFCHAIN_PREFIX {
        bail!("Expected offchain content prefix, got {:#04x}", prefix);
    }
    slice.load_snake_string()
}

fn snake_cell(text: &str) -> Result<Arc<Cell>> {
    let mut builder = Builder::new();
    builder.store_snake_string(text)?;
    builder.build()
}

fn two_refs(first: Arc<Cell>, second: Arc<Cell>) -> Result<Arc<Cell>> {
    let mut builder = Builder::new();
    builder.store_ref(first)?;
    builder.store_ref(second)?;
    builder.build()
}

fn one_ref(cell: Arc<Cell>) -> Result<Arc<Cell>> {
    let mut builder = Builder::new();
    builder.store_ref(cell)?;
    builder.build()
}

/// Offchain content of the sweet contracts: a full URI plus a common prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweetOffchainContent {
    pub uri: String,
    pub prefix_uri: String,
}

impl SweetOffchainContent {
    pub fn new(uri: impl Into<String>, prefix_uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            prefix_uri: prefix_uri.into(),
        }
    }

    pub fn serialize(&self) -> Result<Arc<Cell>> {
        two_refs(offchain_cell(&self.uri)?, snake_cell(&self.prefix_uri)?)
    }

    pub fn parse(cell: Arc<Cell>) -> Result<Self> {
        let mut slice = Slice::new(cell);
        Ok(Self {
            uri: parse_offchain(slice.load_reference()?)?,
            prefix_uri: Slice::new(slice.load_reference()?).load_snake_string()?,
        })
    }
}

/// Content stored in the collection contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionContent {
    /// `^(0x01 uri)` followed by `^(common prefix)` for item URIs
    Offchain { uri: String, prefix_uri: String },
    /// `^(onchain metadata)` followed by an empty common content cell
    Onchain(OnchainContent),
    /// Single `^(0x01 uri)`
    ModifiedOffchain { uri: String },
    /// Single `^(onchain metadata)`
    ModifiedOnchain(OnchainContent),
    Sweet(SweetOffchainContent),
}

impl CollectionContent {
    pub fn offchain(uri: impl Into<String>, prefix_uri: impl Into<String>) -> Self {
        CollectionContent::Offchain {
            uri: uri.into(),
            prefix_uri: prefix_uri.into(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            CollectionContent::Offchain { .. } => ContentKind::Offchain,
            CollectionContent::Onchain(_) => ContentKind::Onchain,
            CollectionContent::ModifiedOffchain { .. } => ContentKind::ModifiedOffchain,
            CollectionContent::ModifiedOnchain(_) => ContentKind::ModifiedOnchain,
            CollectionContent::Sweet(_) => ContentKind::Sweet,
        }
    }

    pub fn serialize(&self) -> Result<Arc<Cell>> {
        match self {
            CollectionContent::Offchain { uri, prefix_uri } => {
                two_refs(offchain_cell(uri)?, snake_cell(prefix_uri)?)
            }
            CollectionContent::Onchain(content) => {
                two_refs(content.serialize()?, Builder::new().build()?)
            }
            CollectionContent::ModifiedOffchain { uri } => one_ref(offchain_cell(uri)?),
            CollectionContent::ModifiedOnchain(content) => one_ref(content.serialize()?),
            CollectionContent::Sweet(content) => content.serialize(),
        }
    }

    /// Reads content back, the layout is chosen by `kind`
    pub fn parse(kind: ContentKind, cell: Arc<Cell>) -> Result<Self> {
        let mut slice = Slice::new(cell.clone());
        Ok(match kind {
            ContentKind::Offchain => CollectionContent::Offchain {
                uri: parse_offchain(slice.load_reference()?)?,
                prefix_uri: Slice::new(slice.load_reference()?).load_snake_string()?,
            },
            ContentKind::Onchain => {
                CollectionContent::Onchain(OnchainContent::parse(slice.load_reference()?)?)
            }
            ContentKind::ModifiedOffchain => CollectionContent::ModifiedOffchain {
                uri: parse_offchain(slice.load_reference()?)?,
            },
            ContentKind::ModifiedOnchain => {
                CollectionContent::ModifiedOnchain(OnchainContent::parse(slice.load_reference()?)?)
            }
            ContentKind::Sweet => CollectionContent::Sweet(SweetOffchainContent::parse(cell)?),
        })
    }
}

/// Content attached to a single minted item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NftContent {
    /// Bare snake string appended to the collection's common prefix
    Offchain { suffix_uri: String },
    Onchain(OnchainContent),
    /// `0x01 uri` with the full URI
    ModifiedOffchain { uri: String },
    ModifiedOnchain(OnchainContent),
    Sweet(SweetOffchainContent),
}

impl NftContent {
    pub fn offchain(suffix_uri: impl Into<String>) -> Self {
        NftContent::Offchain {
            suffix_uri: suffix_uri.into(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            NftContent::Offchain { .. } => ContentKind::Offchain,
            NftContent::Onchain(_) => ContentKind::Onchain,
            NftContent::ModifiedOffchain { .. } => ContentKind::ModifiedOffchain,
            NftContent::ModifiedOnchain(_) => ContentKind::ModifiedOnchain,
            NftContent::Sweet(_) => ContentKind::Sweet,
        }
    }

    pub fn serialize(&self) -> Result<Arc<Cell>> {
        match self {
            NftContent::Offchain { suffix_uri } => snake_cell(suffix_uri),
            NftContent::Onchain(content) | NftContent::ModifiedOnchain(content) => {
                content.serialize()
            }
            NftContent::ModifiedOffchain { uri } => offchain_cell(uri),
            NftContent::Sweet(content) => content.serialize(),
        }
    }

    pub fn parse(kind: ContentKind, cell: Arc<Cell>) -> Result<Self> {
        Ok(match kind {
            ContentKind::Offchain => NftContent::Offchain {
                suffix_uri: Slice::new(cell).load_snake_string()?,
            },
            ContentKind::Onchain => NftContent::Onchain(OnchainContent::parse(cell)?),
            ContentKind::ModifiedOffchain => NftContent::ModifiedOffchain {
                uri: parse_offchain(cell)?,
            },
            ContentKind::ModifiedOnchain => {
                NftContent::ModifiedOnchain(OnchainContent::parse(cell)?)
            }
            ContentKind::Sweet => NftContent::Sweet(SweetOffchainContent::parse(cell)?),
        })
    }
}
