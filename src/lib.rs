pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod storage;
pub mod test_utils;

pub use error::{Result, TlError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
