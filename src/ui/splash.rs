// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown while bundled fonts are registered.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length, Theme};

pub fn view<'a, Message: 'static>(
    i18n: &I18n,
    theme: &Theme,
    rotation: f32,
) -> Element<'a, Message> {
    let colors = ColorScheme::for_theme(theme);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(AnimatedSpinner::new(colors.brand_primary, rotation).into_element())
        .push(text(i18n.tr("splash-loading")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::screen)
        .into()
}
