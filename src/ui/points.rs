// SPDX-License-Identifier: MPL-2.0
//! Collection points screen.
//!
//! Receives the confirmed selection. Listing actual collection points is not
//! part of this application; the screen echoes the query it was opened with.

use crate::domain::location::{PointsQuery, UNSET_SENTINEL};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::fonts;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, Column, Container};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the points screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a PointsQuery,
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Back,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Back => Event::Back,
    }
}

/// Value to display for one half of the query; the placeholder becomes a label.
fn display_value(i18n: &I18n, value: &str) -> String {
    if value == UNSET_SENTINEL {
        i18n.tr("points-unset")
    } else {
        value.to_string()
    }
}

/// Description key; a partial selection says that results are not narrowed.
fn description_key(query: &PointsQuery) -> &'static str {
    if query.is_complete() {
        "points-description"
    } else {
        "points-description-partial"
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let region = display_value(i18n, &ctx.query.region);
    let locality = display_value(i18n, &ctx.query.locality);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .max_width(sizing::FORM_WIDTH)
        .push(
            button(text(format!("← {}", i18n.tr("points-back-button"))).size(typography::BODY))
                .on_press(Message::Back)
                .style(styles::button::link),
        )
        .push(
            text(i18n.tr("points-title"))
                .font(fonts::TITLE)
                .size(typography::TITLE_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_heading),
                }),
        )
        .push(text(i18n.tr(description_key(ctx.query))).font(fonts::BODY))
        .push(
            text(i18n.tr_with_args("points-region", &[("region", &region)]))
                .font(fonts::BODY)
                .size(typography::BODY_LG),
        )
        .push(
            text(i18n.tr_with_args("points-locality", &[("locality", &locality)]))
                .font(fonts::BODY)
                .size(typography::BODY_LG),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn back_message_becomes_back_event() {
        assert_eq!(update(&Message::Back), Event::Back);
    }

    #[test]
    fn placeholder_is_shown_as_not_selected() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(display_value(&i18n, "0"), "(not selected)");
        assert_eq!(display_value(&i18n, "Santos"), "Santos");
    }

    #[test]
    fn partial_selection_uses_partial_description() {
        let complete = PointsQuery {
            region: "SP".into(),
            locality: "Santos".into(),
        };
        let partial = PointsQuery {
            region: "SP".into(),
            locality: UNSET_SENTINEL.into(),
        };
        assert_eq!(description_key(&complete), "points-description");
        assert_eq!(description_key(&partial), "points-description-partial");
    }
}
