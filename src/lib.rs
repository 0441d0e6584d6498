// SPDX-License-Identifier: MPL-2.0
//! `nft_lens` is a small NFT-collection gallery built with the Iced GUI
//! framework.
//!
//! On startup it reads a fixed range of token ids from an ERC-721 contract
//! through a read-only JSON-RPC endpoint, resolves each token's metadata
//! through an IPFS gateway, and renders the results as cards. A header
//! button connects a wallet bridge and shows the session account.

pub mod app;
pub mod chain;
pub mod collection;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod wallet;
