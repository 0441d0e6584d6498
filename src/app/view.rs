// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::design_tokens::{palette, typography};
use crate::ui::{gallery, header, notice};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let header = header::view(header::ViewContext {
            i18n: &self.i18n,
            account: self.account.as_deref(),
        })
        .map(Message::Header);

        let mut column = Column::new().push(header);

        if let Some(pending) = &self.notice {
            column = column.push(notice::view(pending, &self.i18n).map(Message::Notice));
        }

        let body: Element<'_, Message> = if self.load_phase.is_in_flight() {
            centered_text(self.i18n.tr("loading-collection"), typography::BODY_LG)
        } else if self.records.is_empty() {
            centered_text(self.i18n.tr("gallery-empty"), typography::BODY)
        } else {
            gallery::view(gallery::ViewContext {
                i18n: &self.i18n,
                records: &self.records,
                images: &self.images,
                failed_images: &self.failed_images,
            })
        };

        column
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn centered_text<'a>(content: String, size: f32) -> Element<'a, Message> {
    Container::new(Text::new(content).size(size).color(palette::GRAY_400))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
