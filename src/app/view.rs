// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::swipe_button::SwipeButton;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};

/// Everything the demo view reads from the application state.
pub struct ViewContext<'a> {
    pub swipe: &'a SwipeButton,
    pub confirmations: u32,
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = text("Swipe to confirm").size(typography::TITLE_MD);

    let track =
        container(ctx.swipe.view(Message::Swipe)).width(Length::Fixed(sizing::DEMO_TRACK_WIDTH));

    let counter = text(format!("Confirmed {} time(s)", ctx.confirmations)).size(typography::BODY);

    let controls = row![
        button(text("Reload").size(typography::BODY))
            .on_press(Message::Reload)
            .style(button_styles::secondary),
        button(text("Reload with default text").size(typography::BODY))
            .on_press(Message::ReloadWithDefaultText)
            .style(button_styles::primary),
    ]
    .spacing(spacing::SM);

    let mut content = column![title, track, counter, controls]
        .spacing(spacing::LG)
        .align_x(Alignment::Center);

    if let Some(warning) = ctx.warning {
        content = content.push(text(format!("Attributes: {warning}")).size(typography::BODY));
    }

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::SURFACE.into()),
            ..container::Style::default()
        })
        .into()
}
