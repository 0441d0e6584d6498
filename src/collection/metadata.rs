// SPDX-License-Identifier: MPL-2.0
//! Token metadata document as served by the gateway.

use super::{gateway, DisplayRecord};
use crate::config::defaults;
use serde::Deserialize;

/// JSON document resolved for one token.
///
/// `name` and `description` are optional and fall back to placeholders;
/// `image` is required, so a document without it fails deserialization and
/// thereby the whole batch.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub image: String,
}

impl TokenMetadata {
    /// Resolves this document into a display record for `token_id`.
    ///
    /// Empty strings count as absent, matching the defaulting behavior of
    /// the gallery this mirrors. The image locator goes through the same
    /// gateway rewriting as the token locator itself.
    pub fn into_record(self, token_id: u64, gateway_prefix: &str) -> DisplayRecord {
        DisplayRecord {
            id: token_id,
            name: self
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| defaults::PLACEHOLDER_NAME.to_string()),
            description: self
                .description
                .filter(|description| !description.is_empty())
                .unwrap_or_else(|| defaults::PLACEHOLDER_DESCRIPTION.to_string()),
            image: gateway::to_gateway_url(&self.image, gateway_prefix),
        }
    }
}
