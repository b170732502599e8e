// SPDX-License-Identifier: MPL-2.0
//! Button styles for the demo controls.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled accent button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.85,
            ..palette::ACCENT
        },
        button::Status::Disabled => palette::GRAY_200,
        button::Status::Active | button::Status::Pressed => palette::ACCENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Outlined button for secondary actions.
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT,
        button::Status::Active | button::Status::Disabled => palette::GRAY_200,
    };

    button::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: palette::GRAY_900,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}
