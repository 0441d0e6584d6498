// SPDX-License-Identifier: MPL-2.0
//! Single-slot notice banner for user feedback.
//!
//! The application surfaces at most one notice at a time (a load failure or
//! the install-a-wallet prompt), so this is a banner with a dismiss button
//! rather than a toast queue. Notices never auto-dismiss.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length};

/// Severity of a notice; selects the banner accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    fn accent(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// One user-facing notice, referencing a Fluent message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    severity: Severity,
    message_key: &'static str,
}

impl Notice {
    pub fn new(severity: Severity, message_key: &'static str) -> Self {
        Self {
            severity,
            message_key,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message_key(&self) -> &'static str {
        self.message_key
    }
}

/// Events emitted by the banner.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    Dismissed,
}

/// Renders the notice banner.
pub fn view<'a>(notice: &Notice, i18n: &'a I18n) -> Element<'a, Event> {
    let message = Text::new(i18n.tr(notice.message_key())).size(typography::BODY);

    let dismiss = button(Text::new(i18n.tr("notice-dismiss")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary)
        .on_press(Event::Dismissed);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(message)
        .push(Space::new().width(Length::Fill))
        .push(dismiss);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::banner(notice.severity().accent()))
        .into()
}
