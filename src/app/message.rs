// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::collection::DisplayRecord;
use crate::error::Error;
use crate::ui::{header, notice};
use crate::wallet::WalletError;
use iced::widget::image::Handle;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component events while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Kick off the collection load; latched to at most one batch per
    /// application lifetime.
    LoadRequested,
    /// Result of the whole load batch (all-or-nothing).
    CollectionLoaded(Result<Vec<DisplayRecord>, Error>),
    /// Result of one lazy card-image fetch.
    ImageFetched {
        token_id: u64,
        result: Result<Handle, Error>,
    },
    /// Header events (wallet connect button).
    Header(header::Event),
    /// Accounts returned by the wallet bridge, or the failure.
    WalletConnected(Result<Vec<String>, WalletError>),
    /// Notice banner events.
    Notice(notice::Event),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `id`, `en-US`).
    pub lang: Option<String>,
    /// Optional node endpoint override; takes precedence over the
    /// `NFT_LENS_RPC_URL` environment variable.
    pub rpc_url: Option<String>,
}
