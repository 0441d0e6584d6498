// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns all shared state (load phase, record list,
//! session account, pending notice) on the single UI thread and mutates
//! it only through `update`. Network work happens in `Task`s; the
//! collection batch is latched to run at most once per lifetime.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::chain::{Erc721Contract, JsonRpcProvider};
use crate::collection::{CollectionSettings, DisplayRecord, HttpGateway, LoadPhase, TokenLedger};
use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::I18n;
use crate::ui::notice::{Notice, Severity};
use crate::wallet::{self, WalletBridge};
use iced::widget::image::Handle;
use iced::{window, Task, Theme};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    settings: CollectionSettings,
    load_phase: LoadPhase,
    records: Vec<DisplayRecord>,
    images: HashMap<u64, Handle>,
    failed_images: HashSet<u64>,
    /// Session account; set once per successful connection, never cleared.
    account: Option<String>,
    notice: Option<Notice>,
    ledger: Option<Arc<dyn TokenLedger>>,
    gateway: Option<Arc<HttpGateway>>,
    wallet: Option<Arc<dyn WalletBridge>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("load_phase", &self.load_phase)
            .field("records", &self.records.len())
            .field("account", &self.account)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            settings: CollectionSettings::default(),
            load_phase: LoadPhase::default(),
            records: Vec::new(),
            images: HashMap::new(),
            failed_images: HashSet::new(),
            account: None,
            notice: None,
            ledger: None,
            gateway: None,
            wallet: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and kicks off the collection load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            settings: CollectionSettings::from_config(&config),
            ..Self::default()
        };

        app.wallet = wallet::detect().map(|bridge| Arc::new(bridge) as Arc<dyn WalletBridge>);

        match Self::build_services(flags.rpc_url, &config) {
            Ok((ledger, gateway)) => {
                app.ledger = Some(ledger);
                app.gateway = Some(gateway);
            }
            Err(error) => {
                eprintln!("Failed to initialize collection loading: {}", error);
                app.load_phase.finish();
                app.notice = Some(Notice::new(Severity::Error, "error-collection-load"));
                return (app, Task::none());
            }
        }

        let task = app.update(Message::LoadRequested);
        (app, task)
    }

    /// Wires the node provider, contract wrapper, and gateway client.
    fn build_services(
        rpc_override: Option<String>,
        config: &Config,
    ) -> Result<(Arc<dyn TokenLedger>, Arc<HttpGateway>)> {
        let rpc_url = config::rpc_url(rpc_override)?;
        let provider = Arc::new(JsonRpcProvider::new(&rpc_url)?);
        let contract = Erc721Contract::new(provider, config.contract_address());
        Ok((Arc::new(contract), Arc::new(HttpGateway::new()?)))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::header;
    use crate::wallet::WalletError;
    use futures_util::future::BoxFuture;

    struct StubLedger;

    impl TokenLedger for StubLedger {
        fn token_uri(&self, token_id: u64) -> BoxFuture<'_, Result<String>> {
            Box::pin(async move { Ok(format!("ipfs://QmStub/{token_id}.json")) })
        }
    }

    struct StubBridge {
        outcome: std::result::Result<Vec<String>, WalletError>,
    }

    impl WalletBridge for StubBridge {
        fn request_accounts(&self) -> BoxFuture<'_, std::result::Result<Vec<String>, WalletError>> {
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    fn app_with_services() -> App {
        App {
            ledger: Some(Arc::new(StubLedger)),
            gateway: Some(Arc::new(HttpGateway::new().unwrap())),
            ..App::default()
        }
    }

    fn records(ids: &[u64]) -> Vec<DisplayRecord> {
        ids.iter()
            .map(|&id| DisplayRecord {
                id,
                name: format!("Nocturnal #{id}"),
                description: "A night owl".to_string(),
                image: format!("https://gateway.pinata.cloud/ipfs/QmImg/{id}.png"),
            })
            .collect()
    }

    #[test]
    fn repeated_load_triggers_spawn_exactly_one_batch() {
        let ledger: Arc<dyn TokenLedger> = Arc::new(StubLedger);
        let mut app = App {
            ledger: Some(ledger.clone()),
            gateway: Some(Arc::new(HttpGateway::new().unwrap())),
            ..App::default()
        };
        // Each spawned batch moves one clone of the ledger handle into its
        // task, so the strong count observably counts batches.
        assert_eq!(Arc::strong_count(&ledger), 2);

        let _first = app.update(Message::LoadRequested);
        assert!(app.load_phase.is_in_flight());
        assert_eq!(Arc::strong_count(&ledger), 3);

        // A second trigger must not restart the sequence or spawn again.
        let _second = app.update(Message::LoadRequested);
        assert!(app.load_phase.is_in_flight());
        assert_eq!(Arc::strong_count(&ledger), 3);
    }

    #[test]
    fn load_requested_without_services_surfaces_failure() {
        let mut app = App::default();
        let _ = app.update(Message::LoadRequested);

        assert_eq!(app.load_phase, LoadPhase::Done);
        let notice = app.notice.expect("notice expected");
        assert_eq!(notice.message_key(), "error-collection-load");
        assert_eq!(notice.severity(), Severity::Error);
    }

    #[test]
    fn collection_loaded_ok_stores_records_in_order() {
        let mut app = app_with_services();
        let _ = app.update(Message::LoadRequested);
        let _ = app.update(Message::CollectionLoaded(Ok(records(&[0, 1, 2]))));

        assert_eq!(app.load_phase, LoadPhase::Done);
        assert_eq!(app.records.len(), 3);
        assert!(app.notice.is_none());
    }

    #[test]
    fn collection_loaded_err_clears_records_and_shows_one_notice() {
        let mut app = app_with_services();
        let _ = app.update(Message::LoadRequested);
        let _ = app.update(Message::CollectionLoaded(Err(Error::Gateway(
            "HTTP status: 500".to_string(),
        ))));

        assert!(app.records.is_empty());
        assert_eq!(app.load_phase, LoadPhase::Done);
        let notice = app.notice.expect("notice expected");
        assert_eq!(notice.message_key(), "error-collection-load");
    }

    #[test]
    fn load_cannot_restart_after_completion() {
        let mut app = app_with_services();
        let _ = app.update(Message::LoadRequested);
        let _ = app.update(Message::CollectionLoaded(Ok(records(&[0]))));
        let _ = app.update(Message::LoadRequested);

        assert_eq!(app.load_phase, LoadPhase::Done);
        assert_eq!(app.records.len(), 1);
    }

    #[test]
    fn image_fetched_ok_is_recorded_per_card() {
        let mut app = app_with_services();
        app.records = records(&[0, 1]);

        let handle = Handle::from_bytes(vec![0u8; 4]);
        let _ = app.update(Message::ImageFetched {
            token_id: 1,
            result: Ok(handle),
        });

        assert!(app.images.contains_key(&1));
        assert!(!app.failed_images.contains(&1));
    }

    #[test]
    fn image_fetch_failure_stays_local_to_the_card() {
        let mut app = app_with_services();
        app.records = records(&[0, 1]);

        let _ = app.update(Message::ImageFetched {
            token_id: 0,
            result: Err(Error::Gateway("HTTP status: 404".to_string())),
        });

        assert!(app.failed_images.contains(&0));
        assert!(app.notice.is_none());
        assert_eq!(app.records.len(), 2);
    }

    #[test]
    fn connect_without_bridge_shows_install_notice() {
        let mut app = App::default();
        let _ = app.update(Message::Header(header::Event::ConnectPressed));

        assert!(app.account.is_none());
        let notice = app.notice.expect("notice expected");
        assert_eq!(notice.message_key(), "error-wallet-missing");
        assert_eq!(notice.severity(), Severity::Warning);
    }

    #[tokio::test]
    async fn connect_with_bridge_sets_primary_address() {
        let bridge = StubBridge {
            outcome: Ok(vec!["0xABC123".to_string(), "0xDEF456".to_string()]),
        };
        let mut app = App {
            wallet: Some(Arc::new(bridge)),
            ..App::default()
        };

        // Drive the same path `update` performs, then feed the result back.
        let outcome = app
            .wallet
            .as_ref()
            .expect("bridge present")
            .request_accounts()
            .await;
        let _ = app.update(Message::WalletConnected(outcome));

        assert_eq!(app.account.as_deref(), Some("0xABC123"));
        assert!(app.notice.is_none());
    }

    #[test]
    fn wallet_rejection_leaves_state_unchanged_and_silent() {
        let mut app = App::default();
        let _ = app.update(Message::WalletConnected(Err(WalletError::Rejected(
            "user denied".to_string(),
        ))));

        assert!(app.account.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn wallet_empty_account_list_sets_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::WalletConnected(Ok(Vec::new())));
        assert!(app.account.is_none());
    }

    #[test]
    fn notice_dismissal_clears_the_banner() {
        let mut app = App::default();
        app.notice = Some(Notice::new(Severity::Error, "error-collection-load"));

        let _ = app.update(Message::Notice(crate::ui::notice::Event::Dismissed));
        assert!(app.notice.is_none());
    }

    #[test]
    fn title_uses_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "NFT Lens");
    }
}
