// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes and theme mode handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_input: Color,
    pub input_border: Color,

    // Text colors
    pub text_heading: Color,
    pub text_body: Color,
    pub text_input: Color,
    pub text_placeholder: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_hover: Color,

    // Semantic colors
    pub error: Color,
}

impl ColorScheme {
    /// Light theme, matching the original mobile screen.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::GRAY_100,
            surface_input: palette::WHITE,
            input_border: palette::GRAY_100,

            text_heading: palette::HEADING,
            text_body: palette::GRAY_400,
            text_input: palette::GRAY_400,
            text_placeholder: palette::GRAY_300,

            brand_primary: palette::PRIMARY_500,
            brand_hover: palette::PRIMARY_400,

            error: palette::ERROR_500,
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_input: palette::GRAY_800,
            input_border: palette::GRAY_700,

            text_heading: palette::WHITE,
            text_body: palette::GRAY_200,
            text_input: palette::GRAY_100,
            text_placeholder: palette::GRAY_300,

            brand_primary: palette::PRIMARY_600,
            brand_hover: palette::PRIMARY_500,

            error: palette::ERROR_500,
        }
    }

    /// Picks the scheme matching an Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        let bg = theme.extended_palette().background.base.color;
        if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Returns the Iced theme for this mode.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
