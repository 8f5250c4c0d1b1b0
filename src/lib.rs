pub mod cli;
pub mod client;
pub mod crc;
pub mod models;
pub mod nft;
pub mod trace;
pub mod tvm;
pub mod utils;
