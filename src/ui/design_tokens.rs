// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (Ecoleta brand)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use ecoleta::ui::design_tokens::{palette, spacing, sizing};

let button_height = sizing::CONTROL_HEIGHT; // 60px
let padding = spacing::XL; // 32px
let accent = palette::PRIMARY_500;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.15, 0.15, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.424, 0.424, 0.502); // #6C6C80
    pub const GRAY_300: Color = Color::from_rgb(0.627, 0.627, 0.698); // #A0A0B2
    pub const GRAY_200: Color = Color::from_rgb(0.698, 0.698, 0.698); // #B2B2B2
    pub const GRAY_100: Color = Color::from_rgb(0.941, 0.941, 0.961); // #F0F0F5

    // Brand colors
    pub const PRIMARY_400: Color = Color::from_rgb(0.365, 0.855, 0.588);
    pub const PRIMARY_500: Color = Color::from_rgb(0.204, 0.796, 0.475); // #34CB79
    pub const PRIMARY_600: Color = Color::from_rgb(0.165, 0.690, 0.404);
    pub const HEADING: Color = Color::from_rgb(0.196, 0.129, 0.325); // #322153

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Darkening layer on the confirm button icon area.
    pub const ICON_SHADE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    /// Height of pickers and the confirm button.
    pub const CONTROL_HEIGHT: f32 = 60.0;

    /// Max width of the hero title and description.
    pub const HERO_MAX_WIDTH: f32 = 260.0;

    /// Home screen logo height.
    pub const LOGO_HEIGHT: f32 = 48.0;

    /// Home background artwork box, anchored top-left.
    pub const BACKGROUND_WIDTH: f32 = 274.0;
    pub const BACKGROUND_HEIGHT: f32 = 368.0;

    /// Width of the selector footer column.
    pub const FORM_WIDTH: f32 = 360.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero title on the home screen.
    pub const TITLE_XL: f32 = 32.0;

    /// Page headings.
    pub const TITLE_LG: f32 = 24.0;

    /// Form inputs, button labels, description text.
    pub const BODY_LG: f32 = 16.0;

    /// Standard body text.
    pub const BODY: f32 = 14.0;

    /// Hints, captions.
    pub const CAPTION: f32 = 12.0;

    /// Line height of the hero description (24px at 16px).
    pub const DESCRIPTION_LINE_HEIGHT: f32 = 1.5;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - picker outline
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::ICON_SHADE > 0.0 && opacity::ICON_SHADE < 1.0);

    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
