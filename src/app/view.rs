// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::domain::location::PointsQuery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::fonts;
use crate::ui::images::HomeImages;
use crate::ui::location_selector::{self, ViewContext as SelectorViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::points::{self, ViewContext as PointsViewContext};
use crate::ui::splash;
use crate::ui::styles;
use iced::widget::{pick_list, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length, Theme};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a Theme,
    pub screen: Screen,
    pub fonts_loading: bool,
    pub spinner_rotation: f32,
    pub selector: &'a location_selector::State,
    pub images: &'a HomeImages,
    pub points_query: Option<&'a PointsQuery>,
    pub notifications: &'a notifications::Manager,
}

/// Language picker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageOption {
    locale: LanguageIdentifier,
    label: String,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn language_options(i18n: &I18n) -> Vec<LanguageOption> {
    i18n.available_locales
        .iter()
        .map(|locale| LanguageOption {
            locale: locale.clone(),
            label: i18n.tr(&format!("language-name-{locale}")),
        })
        .collect()
}

/// Renders the current screen with toasts layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.fonts_loading {
        return splash::view(ctx.i18n, ctx.theme, ctx.spinner_rotation);
    }

    let current: Element<'_, Message> = match (ctx.screen, ctx.points_query) {
        (Screen::Points, Some(query)) => points::view(PointsViewContext {
            i18n: ctx.i18n,
            query,
        })
        .map(Message::Points),
        _ => view_home(&ctx),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current)
        .push(toasts)
        .into()
}

fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let options = language_options(ctx.i18n);
    let selected = options
        .iter()
        .find(|option| &option.locale == ctx.i18n.current_locale())
        .cloned();

    let language = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text(ctx.i18n.tr("language-label"))
                .font(fonts::BODY)
                .size(typography::CAPTION),
        )
        .push(
            pick_list(options, selected, |option: LanguageOption| {
                Message::LanguageSelected(option.locale)
            })
            .font(fonts::BODY)
            .text_size(typography::CAPTION)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::pick_list::field),
        );

    let header = Container::new(language)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding([spacing::XS, spacing::XL])
        .style(styles::container::screen);

    let selector = location_selector::view(
        ctx.selector,
        SelectorViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
        },
    )
    .map(Message::Selector);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(selector)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn language_options_use_native_names() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let labels: Vec<String> = language_options(&i18n)
            .into_iter()
            .map(|option| option.to_string())
            .collect();
        assert_eq!(labels, vec!["English", "Português"]);
    }
}
