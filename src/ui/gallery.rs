// SPDX-License-Identifier: MPL-2.0
//! Record grid rendered once the collection has loaded.
//!
//! Purely presentational: cards emit no events, so the view is generic
//! over the application message type. Card images arrive lazily after the
//! batch; until then each card shows a pending placeholder, and a failed
//! image downgrades the placeholder instead of surfacing a notice.

use crate::collection::DisplayRecord;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{scrollable, Column, Container, Image, Row, Text};
use iced::{alignment, Element, Length};
use std::collections::{HashMap, HashSet};

const CARDS_PER_ROW: usize = 3;

/// Context required to render the gallery grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub records: &'a [DisplayRecord],
    /// Decoded card images, keyed by token id.
    pub images: &'a HashMap<u64, Handle>,
    /// Token ids whose image fetch failed.
    pub failed_images: &'a HashSet<u64>,
}

/// Renders the gallery as a scrollable grid of cards.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::LG);

    for chunk in ctx.records.chunks(CARDS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::LG);
        for record in chunk {
            row = row.push(card(
                record,
                ctx.images.get(&record.id),
                ctx.failed_images.contains(&record.id),
                ctx.i18n,
            ));
        }
        grid = grid.push(row);
    }

    let content = Container::new(grid)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG);

    scrollable(content).width(Length::Fill).height(Length::Fill).into()
}

fn card<'a, Message: 'a>(
    record: &'a DisplayRecord,
    handle: Option<&Handle>,
    image_failed: bool,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let artwork: Element<'a, Message> = match handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .into(),
        None => {
            let key = if image_failed {
                "image-failed"
            } else {
                "image-pending"
            };
            Container::new(
                Text::new(i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
        }
    };

    let name = Text::new(record.name.as_str()).size(typography::TITLE_SM);
    let description = Text::new(record.description.as_str())
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(artwork)
        .push(name)
        .push(description);

    Container::new(body)
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}
