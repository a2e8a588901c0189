// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window screen background.
pub fn screen(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_body),
        ..Default::default()
    }
}

/// Darkened square holding the arrow on the confirm button.
pub fn icon_shade(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::ICON_SHADE,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline notice shown under a picker whose list failed to load or is empty.
pub fn notice(is_error: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let accent = if is_error {
            colors.error
        } else {
            colors.text_placeholder
        };

        container::Style {
            background: Some(Background::Color(colors.surface_input)),
            text_color: Some(accent),
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}
