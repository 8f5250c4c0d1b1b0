//! Blockchain backends
//!
//! [`Client`] is the capability every backend offers. [`TonapiClient`] talks
//! to the tonapi.io REST API, [`LiteserverClient`] wraps a lite transport.

pub mod base;
pub mod lite;
pub mod tonapi;

pub use base::{Client, ClientError, ClientParams, found, receipt_from_trace};
pub use lite::{LiteTransport, LiteserverClient, parse_shard_account};
pub use tonapi::TonapiClient;
