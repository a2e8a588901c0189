// SPDX-License-Identifier: MPL-2.0
//! Rendering of the home screen: hero text, the two pickers and the confirm button.

use super::component::{Message, State};
use super::state::Candidates;
use crate::application::port::DirectoryError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::fonts;
use crate::ui::images::HomeImages;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::text::LineHeight;
use iced::widget::{
    button, container, image, pick_list, text, Column, Container, Row, Space, Stack,
};
use iced::{alignment, ContentFit, Element, Length, Theme};
use std::fmt;

/// Contextual data needed to render the selector.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a HomeImages,
}

/// A picker entry: the "nothing selected" row or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Unset(String),
    Value(T),
}

impl<T> Choice<T> {
    pub fn into_value(self) -> Option<T> {
        match self {
            Choice::Unset(_) => None,
            Choice::Value(value) => Some(value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Unset(label) => f.write_str(label),
            Choice::Value(value) => value.fmt(f),
        }
    }
}

/// Builds the option list: the unset entry first, then the service's order.
pub fn choices<T: Clone>(placeholder: &str, candidates: &Candidates<T>) -> Vec<Choice<T>> {
    std::iter::once(Choice::Unset(placeholder.to_string()))
        .chain(candidates.items().iter().cloned().map(Choice::Value))
        .collect()
}

/// Localized text for a directory failure.
pub fn error_text(i18n: &I18n, error: &DirectoryError) -> String {
    match error {
        DirectoryError::Status(code) => {
            i18n.tr_with_args(error.i18n_key(), &[("status", &code.to_string())])
        }
        _ => i18n.tr(error.i18n_key()),
    }
}

/// Renders the home screen.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let selector = state.selector();
    let i18n = ctx.i18n;

    let mut hero = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::HERO_MAX_WIDTH);
    if let Some(logo) = &ctx.images.logo {
        hero = hero.push(
            image(logo.clone())
                .height(Length::Fixed(sizing::LOGO_HEIGHT))
                .content_fit(ContentFit::Contain),
        );
    }
    let hero = hero
        .push(
            text(i18n.tr("home-title"))
                .font(fonts::TITLE)
                .size(typography::TITLE_XL)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_heading),
                }),
        )
        .push(
            text(i18n.tr("home-description"))
                .font(fonts::BODY)
                .size(typography::BODY_LG)
                .line_height(LineHeight::Relative(typography::DESCRIPTION_LINE_HEIGHT)),
        );

    let region_placeholder = i18n.tr("region-placeholder");
    let region_picker = pick_list(
        choices(&region_placeholder, selector.regions()),
        selector.selected_region().cloned().map(Choice::Value),
        |choice| Message::RegionSelected(choice.into_value()),
    )
    .placeholder(region_placeholder)
    .font(fonts::BODY)
    .padding([spacing::MD, spacing::LG])
    .width(Length::Fill)
    .style(styles::pick_list::field);

    let locality_placeholder = i18n.tr("locality-placeholder");
    let locality_picker = pick_list(
        choices(&locality_placeholder, selector.localities()),
        selector.selected_locality().cloned().map(Choice::Value),
        |choice| Message::LocalitySelected(choice.into_value()),
    )
    .placeholder(locality_placeholder)
    .font(fonts::BODY)
    .padding([spacing::MD, spacing::LG])
    .width(Length::Fill)
    .style(styles::pick_list::field);

    let mut form = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .max_width(sizing::FORM_WIDTH)
        .push(region_picker);
    if let Some(status) = list_status(
        i18n,
        selector.regions(),
        "region-loading",
        "region-empty",
        Message::RetryRegions,
    ) {
        form = form.push(status);
    }

    form = form.push(locality_picker);
    if selector.selected_region().is_some() {
        if let Some(status) = list_status(
            i18n,
            selector.localities(),
            "locality-loading",
            "locality-empty",
            Message::RetryLocalities,
        ) {
            form = form.push(status);
        }
    }

    form = form
        .push(Space::new().height(spacing::XS))
        .push(confirm_button(i18n, selector.can_confirm()));

    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .push(hero)
        .push(Space::new().height(Length::Fill))
        .push(form);

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
    if let Some(background) = &ctx.images.background {
        layers = layers.push(
            image(background.clone())
                .width(Length::Fixed(sizing::BACKGROUND_WIDTH))
                .height(Length::Fixed(sizing::BACKGROUND_HEIGHT))
                .content_fit(ContentFit::Contain),
        );
    }

    Container::new(layers.push(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}

/// Loading caption, empty notice or failure notice with a retry action.
fn list_status<'a, T>(
    i18n: &I18n,
    candidates: &Candidates<T>,
    loading_key: &str,
    empty_key: &str,
    retry: Message,
) -> Option<Element<'a, Message>> {
    if candidates.is_loading() {
        return Some(
            text(i18n.tr(loading_key))
                .font(fonts::BODY)
                .size(typography::CAPTION)
                .into(),
        );
    }

    if let Some(error) = candidates.failure() {
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                text(error_text(i18n, error))
                    .size(typography::CAPTION)
                    .width(Length::Fill),
            )
            .push(
                button(text(i18n.tr("retry-button")).size(typography::CAPTION))
                    .on_press(retry)
                    .style(styles::button::link),
            );
        return Some(
            Container::new(row)
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(styles::container::notice(true))
                .into(),
        );
    }

    if candidates.is_empty_result() {
        return Some(
            Container::new(text(i18n.tr(empty_key)).size(typography::CAPTION))
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(styles::container::notice(false))
                .into(),
        );
    }

    None
}

fn confirm_button<'a>(i18n: &I18n, enabled: bool) -> Element<'a, Message> {
    let arrow = container(text("→").size(typography::TITLE_LG))
        .width(Length::Fixed(sizing::CONTROL_HEIGHT))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::icon_shade);

    let label = container(
        text(i18n.tr("confirm-button"))
            .font(fonts::BUTTON)
            .size(typography::BODY_LG),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(Row::new().push(arrow).push(label))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CONTROL_HEIGHT))
        .on_press_maybe(enabled.then_some(Message::Confirm))
        .style(styles::button::confirm)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::location::Region;
    use crate::infrastructure::OfflineDirectory;
    use iced::widget::image::Handle;
    use std::sync::Arc;

    #[test]
    fn unset_choice_displays_placeholder() {
        let choice: Choice<Region> = Choice::Unset("Select a state".into());
        assert_eq!(choice.to_string(), "Select a state");
        assert_eq!(choice.into_value(), None);
    }

    #[test]
    fn value_choice_displays_value() {
        let choice = Choice::Value(Region::new("SP"));
        assert_eq!(choice.to_string(), "SP");
        assert_eq!(choice.into_value(), Some(Region::new("SP")));
    }

    #[test]
    fn choices_put_unset_entry_first() {
        let candidates = Candidates::<Region>::default();
        let options = choices("Select a state", &candidates);
        assert_eq!(options, vec![Choice::Unset("Select a state".into())]);
    }

    #[test]
    fn home_renders_with_and_without_artwork() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let state = State::new(Arc::new(OfflineDirectory::new("offline")), false);
        let artwork = HomeImages {
            logo: Some(Handle::from_rgba(1, 1, vec![0, 0, 0, 255])),
            background: Some(Handle::from_rgba(1, 1, vec![255, 255, 255, 255])),
        };

        for images in [&HomeImages::default(), &artwork] {
            let _element = view(
                &state,
                ViewContext {
                    i18n: &i18n,
                    images,
                },
            );
        }
    }

    #[test]
    fn status_error_text_includes_code() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let message = error_text(&i18n, &DirectoryError::Status(503));
        assert!(message.contains("503"), "got {message}");
    }
}
