// SPDX-License-Identifier: MPL-2.0
//! Read-only access to the remote node.
//!
//! [`JsonRpcProvider`] speaks plain JSON-RPC 2.0 over HTTPS; the only
//! method this application needs is `eth_call`. [`Erc721Contract`] layers
//! the `tokenURI` ABI on top and implements the loader's
//! [`TokenLedger`](crate::collection::TokenLedger) seam.

pub mod abi;
mod contract;

pub use contract::Erc721Contract;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

const USER_AGENT: &str = concat!("NftLens/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC client bound to a single node endpoint.
pub struct JsonRpcProvider {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcProvider {
    /// Creates a provider for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rpc`] when the HTTP client cannot be constructed.
    pub fn new(url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Rpc(e.to_string()))?;
        Ok(Self {
            client,
            url: url.to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Sends a single JSON-RPC request and returns the `result` value.
    pub async fn request(&self, method: &str, params: Value) -> Result<Value> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Rpc(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Rpc(format!("HTTP status: {}", response.status())));
        }

        let response: RpcResponse = response
            .json()
            .await
            .map_err(|e| Error::Rpc(format!("malformed JSON-RPC response: {e}")))?;

        if let Some(err) = response.error {
            return Err(Error::Rpc(format!(
                "{} returned error {}: {}",
                method, err.code, err.message
            )));
        }
        response
            .result
            .ok_or_else(|| Error::Rpc(format!("{method} returned neither result nor error")))
    }

    /// Executes a read-only `eth_call` against `to` and returns the raw
    /// `0x`-prefixed return data.
    pub async fn eth_call(&self, to: &str, data: &str) -> Result<String> {
        let result = self
            .request("eth_call", json!([{ "to": to, "data": data }, "latest"]))
            .await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::Rpc("eth_call result is not a string".to_string()))
    }
}

impl std::fmt::Debug for JsonRpcProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcProvider")
            .field("url", &self.url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_monotonic() {
        let provider = JsonRpcProvider::new("https://rpc.example").unwrap();
        let first = provider.next_id.fetch_add(1, Ordering::Relaxed);
        let second = provider.next_id.fetch_add(1, Ordering::Relaxed);
        assert!(second > first);
    }

    #[test]
    fn rpc_request_serializes_to_the_wire_shape() {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 7,
            method: "eth_call",
            params: json!([{ "to": "0xabc", "data": "0xc87b56dd" }, "latest"]),
        };
        let wire = serde_json::to_value(&body).unwrap();
        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["id"], 7);
        assert_eq!(wire["method"], "eth_call");
        assert_eq!(wire["params"][1], "latest");
    }

    #[test]
    fn rpc_response_parses_error_objects() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#;
        let response: RpcResponse = serde_json::from_str(raw).unwrap();
        let err = response.error.expect("error object expected");
        assert_eq!(err.code, -32000);
        assert!(err.message.contains("reverted"));
        assert!(response.result.is_none());
    }
}
