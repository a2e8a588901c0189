// SPDX-License-Identifier: MPL-2.0
//! Picker styles for the location selector.

use crate::ui::design_tokens::{border, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::pick_list;
use iced::{Background, Border, Theme};

/// Rounded white field with a light outline and a gray chevron.
pub fn field(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let colors = ColorScheme::for_theme(theme);

    let border_color = match status {
        pick_list::Status::Active => colors.input_border,
        _ => colors.brand_primary,
    };

    pick_list::Style {
        text_color: colors.text_input,
        placeholder_color: colors.text_placeholder,
        handle_color: palette::GRAY_200,
        background: Background::Color(colors.surface_input),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
    }
}
