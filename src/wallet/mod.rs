// SPDX-License-Identifier: MPL-2.0
//! Wallet connection.
//!
//! The wallet is an injected capability: the application never reaches for
//! ambient global state, it holds an optional [`WalletBridge`] and treats
//! its absence as "no wallet installed". The production bridge talks
//! JSON-RPC (`eth_requestAccounts`) to the endpoint named by
//! `NFT_LENS_WALLET_URL`; tests substitute mock bridges.
//!
//! There is no disconnect operation and no account/network change
//! subscription.

use crate::config;
use futures_util::future::BoxFuture;
use serde_json::json;
use std::fmt;

const USER_AGENT: &str = concat!("NftLens/", env!("CARGO_PKG_VERSION"));

/// EIP-1193 `userRejectedRequest` error code.
const USER_REJECTED_CODE: i64 = 4001;

/// Errors on the wallet path.
///
/// These never surface as notices; rejections and transport failures are
/// logged to stderr only. Bridge *absence* is not an error here: the
/// application models it as a missing [`WalletBridge`] and shows the
/// install prompt itself.
#[derive(Debug, Clone)]
pub enum WalletError {
    /// The user declined the account-access request.
    Rejected(String),
    /// The bridge call itself failed.
    Rpc(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::Rejected(msg) => write!(f, "Request rejected: {msg}"),
            WalletError::Rpc(msg) => write!(f, "Wallet RPC error: {msg}"),
        }
    }
}

impl std::error::Error for WalletError {}

/// Injected capability offering account access.
pub trait WalletBridge: Send + Sync {
    /// Requests account access; may require user approval in the wallet UI
    /// and may be rejected.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Rejected`] when the user declines, or
    /// [`WalletError::Rpc`] for transport failures.
    fn request_accounts(&self) -> BoxFuture<'_, Result<Vec<String>, WalletError>>;
}

/// Bridge backed by a wallet JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct RpcWalletBridge {
    client: reqwest::Client,
    url: String,
}

impl RpcWalletBridge {
    /// Creates a bridge for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Rpc`] when the HTTP client cannot be
    /// constructed.
    pub fn new(url: &str) -> Result<Self, WalletError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WalletError::Rpc(e.to_string()))?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    async fn eth_request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_requestAccounts",
            "params": [],
        });

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::Rpc(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WalletError::Rpc(format!(
                "HTTP status: {}",
                response.status()
            )));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WalletError::Rpc(format!("malformed response: {e}")))?;

        if let Some(err) = value.get("error") {
            let message = err
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error")
                .to_string();
            if err.get("code").and_then(|c| c.as_i64()) == Some(USER_REJECTED_CODE) {
                return Err(WalletError::Rejected(message));
            }
            return Err(WalletError::Rpc(message));
        }

        let accounts = value
            .get("result")
            .and_then(|r| r.as_array())
            .ok_or_else(|| WalletError::Rpc("result is not an account list".to_string()))?
            .iter()
            .filter_map(|a| a.as_str().map(str::to_string))
            .collect();
        Ok(accounts)
    }
}

impl WalletBridge for RpcWalletBridge {
    fn request_accounts(&self) -> BoxFuture<'_, Result<Vec<String>, WalletError>> {
        Box::pin(self.eth_request_accounts())
    }
}

/// Detects a wallet bridge in the host environment.
///
/// Returns `None` when no bridge endpoint is configured, which the UI
/// surfaces as an "install a wallet" notice on connect.
pub fn detect() -> Option<RpcWalletBridge> {
    let url = config::wallet_url()?;
    RpcWalletBridge::new(&url).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) struct MockBridge {
        pub outcome: Result<Vec<String>, WalletError>,
    }

    impl WalletBridge for MockBridge {
        fn request_accounts(&self) -> BoxFuture<'_, Result<Vec<String>, WalletError>> {
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    #[tokio::test]
    async fn mock_bridge_resolves_primary_address() {
        let bridge = MockBridge {
            outcome: Ok(vec!["0xABC123".to_string(), "0xDEF456".to_string()]),
        };
        let accounts = bridge.request_accounts().await.unwrap();
        assert_eq!(accounts.first().map(String::as_str), Some("0xABC123"));
    }

    #[tokio::test]
    async fn mock_bridge_propagates_rejection() {
        let bridge = MockBridge {
            outcome: Err(WalletError::Rejected("user denied".to_string())),
        };
        let err = bridge.request_accounts().await.unwrap_err();
        assert!(matches!(err, WalletError::Rejected(_)));
    }

    #[test]
    fn display_covers_all_variants() {
        assert!(format!("{}", WalletError::Rejected("denied".into())).contains("denied"));
        assert!(format!("{}", WalletError::Rpc("timeout".into())).contains("timeout"));
    }

    #[test]
    fn detect_returns_none_without_endpoint() {
        if std::env::var(crate::config::defaults::ENV_WALLET_URL).is_ok() {
            return;
        }
        assert!(detect().is_none());
    }
}
