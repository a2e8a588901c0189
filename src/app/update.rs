// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::{Message, Screen};
use crate::config::{self, Config};
use crate::domain::location::PointsQuery;
use crate::i18n::fluent::I18n;
use crate::ui::fonts::FontLoading;
use crate::ui::location_selector::{self, Effect as SelectorEffect};
use crate::ui::notifications::{self, Notification};
use crate::ui::points::{self, Event as PointsEvent};
use iced::{font, Task};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Spinner advance per tick, in radians.
const SPINNER_STEP: f32 = 0.15;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub screen: &'a mut Screen,
    pub selector: &'a mut location_selector::State,
    pub points_query: &'a mut Option<PointsQuery>,
    pub fonts: &'a mut FontLoading,
    pub spinner_rotation: &'a mut f32,
    pub notifications: &'a mut notifications::Manager,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Selector(message) => handle_selector_message(ctx, message),
        Message::Points(message) => handle_points_message(ctx, &message),
        Message::FontLoaded(result) => {
            handle_font_loaded(ctx, &result);
            Task::none()
        }
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::LanguageSelected(locale) => {
            handle_language_selected(ctx, locale);
            Task::none()
        }
        Message::Tick(_) => {
            if !ctx.fonts.is_done() {
                *ctx.spinner_rotation += SPINNER_STEP;
            }
            ctx.notifications.tick();
            Task::none()
        }
    }
}

pub fn handle_selector_message(
    ctx: &mut UpdateContext<'_>,
    message: location_selector::Message,
) -> Task<Message> {
    let (effect, task) = ctx.selector.update(message);

    match effect {
        SelectorEffect::None => {}
        SelectorEffect::Navigate(query) => {
            *ctx.points_query = Some(query);
            *ctx.screen = Screen::Points;
        }
        SelectorEffect::ShowWarning { key, args } => {
            ctx.notifications
                .push(Notification::warning(key).with_args(args));
        }
        SelectorEffect::Recovered { key } => ctx.notifications.dismiss_key(key),
        SelectorEffect::SelectionIncomplete => ctx
            .notifications
            .push(Notification::info("notification-selection-incomplete")),
    }

    task.map(Message::Selector)
}

pub fn handle_points_message(ctx: &mut UpdateContext<'_>, message: &points::Message) -> Task<Message> {
    match points::update(message) {
        // The selector keeps its state, so going back shows the same picks
        PointsEvent::Back => *ctx.screen = Screen::Home,
    }
    Task::none()
}

pub fn handle_font_loaded(ctx: &mut UpdateContext<'_>, result: &Result<(), font::Error>) {
    if ctx.fonts.finish(result) {
        tracing::debug!(failed = ctx.fonts.failed(), "font loading finished");
        if ctx.fonts.failed() > 0 {
            ctx.notifications
                .push(Notification::warning("notification-font-load-error"));
        }
    }
}

pub fn handle_language_selected(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) {
    if ctx.i18n.current_locale() == &locale {
        return;
    }
    ctx.i18n.set_locale(locale.clone());
    ctx.config.general.language = Some(locale.to_string());

    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        tracing::warn!(error = %err, "failed to save settings");
        ctx.notifications
            .push(Notification::error("notification-config-save-error"));
    }
}
