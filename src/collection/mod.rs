// SPDX-License-Identifier: MPL-2.0
//! The collection-loading sequence.
//!
//! [`load_collection`] turns a fixed range of token ids into an ordered
//! list of [`DisplayRecord`]s by querying a [`TokenLedger`] for each
//! token's content locator and a [`MetadataSource`] for the document
//! behind it. The sequence is strictly sequential: each fetch completes
//! before the next begins, so records always come out in ascending id
//! order. The first failure of any kind aborts the whole batch; partial
//! results are never returned.
//!
//! Both collaborators are trait seams so the sequence can be driven by
//! in-memory fakes in tests.

pub mod gateway;
pub mod metadata;

pub use gateway::{to_gateway_url, HttpGateway};
pub use metadata::TokenMetadata;

use crate::config::{defaults, Config};
use crate::error::Result;
use futures_util::future::BoxFuture;

/// Resolved, UI-ready representation of one collection item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    /// Token id; the loop index is the source of truth, not the chain.
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Gateway-rewritten image URL.
    pub image: String,
}

/// One-shot latch for the load sequence.
///
/// Frameworks may fire the initialization path more than once; the latch
/// guarantees at most one network batch per application lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    NotStarted,
    InFlight,
    Done,
}

impl LoadPhase {
    /// Latches `NotStarted` into `InFlight`.
    ///
    /// Returns `true` only for the caller that performed the transition;
    /// every later call is a no-op returning `false`.
    pub fn begin(&mut self) -> bool {
        if *self == LoadPhase::NotStarted {
            *self = LoadPhase::InFlight;
            true
        } else {
            false
        }
    }

    /// Marks the sequence finished, whatever its outcome.
    pub fn finish(&mut self) {
        *self = LoadPhase::Done;
    }

    pub fn is_in_flight(self) -> bool {
        self == LoadPhase::InFlight
    }
}

/// Runtime parameters of the load sequence.
#[derive(Debug, Clone)]
pub struct CollectionSettings {
    /// Token ids `0..size` are queried.
    pub size: u64,
    /// Reserved id skipped during loading.
    pub excluded_id: u64,
    /// HTTP prefix substituted for the `ipfs://` scheme.
    pub gateway_prefix: String,
}

impl CollectionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            size: defaults::COLLECTION_SIZE,
            excluded_id: defaults::EXCLUDED_TOKEN_ID,
            gateway_prefix: config.gateway_url().to_string(),
        }
    }
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            size: defaults::COLLECTION_SIZE,
            excluded_id: defaults::EXCLUDED_TOKEN_ID,
            gateway_prefix: defaults::DEFAULT_GATEWAY_URL.to_string(),
        }
    }
}

/// Maps token ids to content locators.
///
/// Implemented by [`crate::chain::Erc721Contract`]; tests substitute
/// in-memory fakes.
pub trait TokenLedger: Send + Sync {
    /// Resolves the content locator (URI) for `token_id`.
    ///
    /// # Errors
    ///
    /// Any error aborts the batch in [`load_collection`].
    fn token_uri(&self, token_id: u64) -> BoxFuture<'_, Result<String>>;
}

/// Fetches and parses the metadata document behind a locator.
///
/// Implemented by [`HttpGateway`]; tests substitute in-memory fakes.
pub trait MetadataSource: Send + Sync {
    /// Retrieves the document at `url`.
    ///
    /// # Errors
    ///
    /// Any error (network, non-success status, malformed JSON, missing
    /// required field) aborts the batch in [`load_collection`].
    fn fetch(&self, url: &str) -> BoxFuture<'_, Result<TokenMetadata>>;
}

/// Loads the collection: for each id in `[0, size)` except `excluded_id`,
/// resolves the token locator, rewrites it to a gateway URL, fetches the
/// metadata document, and appends the resolved record.
///
/// # Errors
///
/// Returns the first error encountered; no partial results.
pub async fn load_collection(
    ledger: &dyn TokenLedger,
    source: &dyn MetadataSource,
    settings: &CollectionSettings,
) -> Result<Vec<DisplayRecord>> {
    let mut records = Vec::with_capacity(settings.size.saturating_sub(1) as usize);

    for token_id in 0..settings.size {
        if token_id == settings.excluded_id {
            continue;
        }

        let locator = ledger.token_uri(token_id).await?;
        let metadata_url = to_gateway_url(&locator, &settings.gateway_prefix);
        let metadata = source.fetch(&metadata_url).await?;
        records.push(metadata.into_record(token_id, &settings.gateway_prefix));
    }

    Ok(records)
}
