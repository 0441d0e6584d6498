// SPDX-License-Identifier: MPL-2.0
//! Gallery header: collection title plus the wallet area.
//!
//! The wallet area shows a connect button until a session account exists,
//! then the connected address. There is no disconnect control.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Events emitted by the header.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    ConnectPressed,
}

/// Context required to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Connected session account, when one exists.
    pub account: Option<&'a str>,
}

/// Renders the header row.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Event> {
    let title = Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_MD);

    let wallet_area: Element<'_, Event> = match ctx.account {
        Some(address) => {
            let mut args = FluentArgs::new();
            args.set("address", address);
            Text::new(ctx.i18n.tr_args("connected-as", &args))
                .size(typography::BODY)
                .color(palette::GRAY_200)
                .into()
        }
        None => button(Text::new(ctx.i18n.tr("connect-wallet")).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press(Event::ConnectPressed)
            .into(),
    };

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(wallet_area);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .into()
}
