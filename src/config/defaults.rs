// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.
//!
//! # Categories
//!
//! - **Collection**: token range and the reserved id skipped during loading
//! - **Gateway**: content-address rewriting
//! - **Placeholders**: fallback metadata fields
//! - **Environment**: variable names read at startup

// ==========================================================================
// Collection Defaults
// ==========================================================================

/// Number of token ids queried on startup (`0..COLLECTION_SIZE`).
pub const COLLECTION_SIZE: u64 = 10;

/// Reserved token id that is never minted; skipped during loading.
pub const EXCLUDED_TOKEN_ID: u64 = 5;

/// Contract the collection is read from when `settings.toml` does not
/// override it.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x8a791620dd6260079bf849dc5567adc3f2fdc318";

// ==========================================================================
// Gateway Defaults
// ==========================================================================

/// Content-addressing scheme prefix rewritten to an HTTP gateway.
pub const IPFS_SCHEME: &str = "ipfs://";

/// HTTP gateway prefix substituted for [`IPFS_SCHEME`].
pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.pinata.cloud/ipfs/";

// ==========================================================================
// Metadata Placeholders
// ==========================================================================

/// Name shown when a metadata document omits `name`.
pub const PLACEHOLDER_NAME: &str = "Untitled";

/// Description shown when a metadata document omits `description`.
pub const PLACEHOLDER_DESCRIPTION: &str = "No description";

// ==========================================================================
// Environment Variables
// ==========================================================================

/// Required node endpoint URL; absence is fatal for the loader.
pub const ENV_RPC_URL: &str = "NFT_LENS_RPC_URL";

/// Optional wallet bridge endpoint; absence means no wallet is installed.
pub const ENV_WALLET_URL: &str = "NFT_LENS_WALLET_URL";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(COLLECTION_SIZE > 0);
    assert!(EXCLUDED_TOKEN_ID < COLLECTION_SIZE);
    assert!(!DEFAULT_GATEWAY_URL.is_empty());
    assert!(!IPFS_SCHEME.is_empty());
};
