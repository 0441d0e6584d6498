// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::collection::{self, DisplayRecord};
use crate::error::Error;
use crate::ui::header;
use crate::ui::notice::{Event as NoticeEvent, Notice, Severity};
use iced::widget::image::Handle;
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LoadRequested => self.begin_load(),
            Message::CollectionLoaded(result) => self.collection_loaded(result),
            Message::ImageFetched { token_id, result } => {
                match result {
                    Ok(handle) => {
                        self.images.insert(token_id, handle);
                    }
                    Err(error) => {
                        eprintln!("Failed to fetch image for token {}: {}", token_id, error);
                        self.failed_images.insert(token_id);
                    }
                }
                Task::none()
            }
            Message::Header(header::Event::ConnectPressed) => self.connect_wallet(),
            Message::WalletConnected(Ok(accounts)) => {
                match accounts.into_iter().next() {
                    Some(address) => self.account = Some(address),
                    None => eprintln!("Wallet bridge returned no accounts"),
                }
                Task::none()
            }
            Message::WalletConnected(Err(error)) => {
                // Rejections are logged, never surfaced as a notice.
                eprintln!("Failed to connect wallet: {}", error);
                Task::none()
            }
            Message::Notice(NoticeEvent::Dismissed) => {
                self.notice = None;
                Task::none()
            }
        }
    }

    /// Starts the collection batch if it has not started yet.
    fn begin_load(&mut self) -> Task<Message> {
        if !self.load_phase.begin() {
            return Task::none();
        }

        let (Some(ledger), Some(gateway)) = (self.ledger.clone(), self.gateway.clone()) else {
            self.load_phase.finish();
            self.notice = Some(Notice::new(Severity::Error, "error-collection-load"));
            return Task::none();
        };

        let settings = self.settings.clone();
        Task::perform(
            async move {
                collection::load_collection(ledger.as_ref(), gateway.as_ref(), &settings).await
            },
            Message::CollectionLoaded,
        )
    }

    /// Applies the batch result: either the full record list plus lazy
    /// image fetches, or an empty gallery with a single failure notice.
    fn collection_loaded(
        &mut self,
        result: Result<Vec<DisplayRecord>, Error>,
    ) -> Task<Message> {
        self.load_phase.finish();
        match result {
            Ok(records) => {
                self.records = records;
                self.fetch_card_images()
            }
            Err(error) => {
                eprintln!("Failed to load collection: {}", error);
                self.records = Vec::new();
                self.notice = Some(Notice::new(Severity::Error, "error-collection-load"));
                Task::none()
            }
        }
    }

    /// Spawns one background fetch per card image.
    fn fetch_card_images(&mut self) -> Task<Message> {
        let Some(gateway) = self.gateway.clone() else {
            return Task::none();
        };

        let fetches = self
            .records
            .iter()
            .map(|record| {
                let gateway = gateway.clone();
                let url = record.image.clone();
                let token_id = record.id;
                Task::perform(
                    async move { gateway.fetch_image(&url).await },
                    move |result| Message::ImageFetched {
                        token_id,
                        result: result.map(|bytes| Handle::from_bytes(bytes)),
                    },
                )
            })
            .collect::<Vec<_>>();

        Task::batch(fetches)
    }

    /// Requests account access, or prompts for a wallet when none exists.
    fn connect_wallet(&mut self) -> Task<Message> {
        match self.wallet.clone() {
            None => {
                self.notice = Some(Notice::new(Severity::Warning, "error-wallet-missing"));
                Task::none()
            }
            Some(bridge) => Task::perform(
                async move { bridge.request_accounts().await },
                Message::WalletConnected,
            ),
        }
    }
}
