// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Confirm button: brand green block with white label.
pub fn confirm(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let background = match status {
        button::Status::Hovered => colors.brand_hover,
        button::Status::Disabled => palette::GRAY_300,
        button::Status::Active | button::Status::Pressed => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::SM
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Text-like button used for "retry" and "back" actions.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_hover,
        button::Status::Disabled => colors.text_placeholder,
        button::Status::Active => colors.brand_primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
