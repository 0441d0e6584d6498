// SPDX-License-Identifier: MPL-2.0
//! ERC-721 contract wrapper exposing the single read this application uses.

use super::{abi, JsonRpcProvider};
use crate::collection::TokenLedger;
use crate::error::Result;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Read-only view of one ERC-721 contract.
#[derive(Debug)]
pub struct Erc721Contract {
    provider: Arc<JsonRpcProvider>,
    address: String,
}

impl Erc721Contract {
    pub fn new(provider: Arc<JsonRpcProvider>, address: &str) -> Self {
        Self {
            provider,
            address: address.to_string(),
        }
    }

    /// Resolves the content locator for `token_id` via `eth_call`.
    pub async fn token_uri(&self, token_id: u64) -> Result<String> {
        let calldata = abi::token_uri_calldata(token_id);
        let raw = self.provider.eth_call(&self.address, &calldata).await?;
        abi::decode_string(&raw)
    }
}

impl TokenLedger for Erc721Contract {
    fn token_uri(&self, token_id: u64) -> BoxFuture<'_, Result<String>> {
        Box::pin(Erc721Contract::token_uri(self, token_id))
    }
}
