// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type for the collection-loading path.
//!
//! Wallet errors are deliberately separate (see [`crate::wallet::WalletError`]):
//! the loader's failures abort a whole batch and surface a notice, while
//! wallet failures follow their own, quieter policy.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// A required configuration value is missing or invalid.
    Config(String),
    /// A JSON-RPC request to the node endpoint failed.
    Rpc(String),
    /// Contract return data could not be decoded.
    Abi(String),
    /// An HTTP fetch from the metadata gateway failed.
    Gateway(String),
    /// The metadata document was malformed or missing a required field.
    Metadata(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::Rpc(e) => write!(f, "RPC Error: {e}"),
            Error::Abi(e) => write!(f, "ABI Error: {e}"),
            Error::Gateway(e) => write!(f, "Gateway Error: {e}"),
            Error::Metadata(e) => write!(f, "Metadata Error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
