// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences in
//! a `settings.toml` file plus the environment values read once at startup.
//!
//! The node endpoint URL is deliberately *not* part of `settings.toml`: it
//! is a deployment concern supplied through [`defaults::ENV_RPC_URL`] (or a
//! `--rpc-url` CLI override), and its absence aborts the loader before any
//! network call is made.

pub mod defaults;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "NftLens";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `id`, `en-US`).
    pub language: Option<String>,
    /// Collection contract address; defaults to
    /// [`defaults::DEFAULT_CONTRACT_ADDRESS`].
    #[serde(default)]
    pub contract_address: Option<String>,
    /// IPFS gateway prefix; defaults to [`defaults::DEFAULT_GATEWAY_URL`].
    #[serde(default)]
    pub gateway_url: Option<String>,
}

impl Config {
    /// The contract address to read the collection from.
    pub fn contract_address(&self) -> &str {
        self.contract_address
            .as_deref()
            .unwrap_or(defaults::DEFAULT_CONTRACT_ADDRESS)
    }

    /// The gateway prefix substituted for the `ipfs://` scheme.
    pub fn gateway_url(&self) -> &str {
        self.gateway_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_GATEWAY_URL)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Resolves the node endpoint URL: CLI override first, then the
/// [`defaults::ENV_RPC_URL`] environment variable.
///
/// # Errors
///
/// Returns [`Error::Config`] when neither source provides a URL. The caller
/// surfaces this as the generic load-failure notice.
pub fn rpc_url(cli_override: Option<String>) -> Result<String> {
    if let Some(url) = cli_override {
        return Ok(url);
    }
    std::env::var(defaults::ENV_RPC_URL)
        .ok()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| Error::Config(format!("{} is not set", defaults::ENV_RPC_URL)))
}

/// The wallet bridge endpoint, when one is installed in the environment.
pub fn wallet_url() -> Option<String> {
    std::env::var(defaults::ENV_WALLET_URL)
        .ok()
        .filter(|url| !url.is_empty())
}
