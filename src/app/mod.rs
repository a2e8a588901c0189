// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home and points screens.
//!
//! The `App` struct wires together the location selector, localization,
//! notifications and settings, and translates component effects into
//! navigation or toasts.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::DirectoryService;
use crate::config::{self, Config, DEFAULT_DIRECTORY_URL, DEFAULT_REQUIRE_COMPLETE_SELECTION};
use crate::domain::location::PointsQuery;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{IbgeDirectory, OfflineDirectory};
use crate::ui::fonts::{self, FontLoading};
use crate::ui::images::HomeImages;
use crate::ui::location_selector;
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 440.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Explicit settings directory; `None` resolves through [`paths`].
    config_dir: Option<PathBuf>,
    theme: Theme,
    screen: Screen,
    selector: location_selector::State,
    points_query: Option<PointsQuery>,
    fonts: FontLoading,
    images: HomeImages,
    spinner_rotation: f32,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("points_query", &self.points_query)
            .field("fonts", &self.fonts)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the directory adapter, falling back to the default endpoint when
/// the configured one is unusable.
///
/// Returns the adapter and the i18n key of a warning to show, if any.
fn build_directory(
    base_url: &str,
    config: &config::DirectoryConfig,
) -> (Arc<dyn DirectoryService>, Option<&'static str>) {
    match IbgeDirectory::new(base_url, config) {
        Ok(directory) => {
            tracing::info!(base_url = %directory.base_url(), "using directory service");
            (Arc::new(directory), None)
        }
        Err(err) => {
            tracing::warn!(error = %err, "directory URL rejected, using default");
            let warning = Some("notification-directory-url-invalid");
            match IbgeDirectory::new(DEFAULT_DIRECTORY_URL, config) {
                Ok(directory) => (Arc::new(directory), warning),
                Err(err) => {
                    tracing::error!(error = %err, "no usable directory client");
                    (Arc::new(OfflineDirectory::new(err.to_string())), warning)
                }
            }
        }
    }
}

impl App {
    /// Creates the application around an already-built directory adapter.
    fn with_directory(
        config: Config,
        config_dir: Option<PathBuf>,
        i18n: I18n,
        directory: Arc<dyn DirectoryService>,
    ) -> Self {
        let require_complete = config
            .selector
            .require_complete_selection
            .unwrap_or(DEFAULT_REQUIRE_COMPLETE_SELECTION);

        Self {
            i18n,
            theme: config.general.theme_mode.to_theme(),
            config,
            config_dir,
            screen: Screen::Home,
            selector: location_selector::State::new(directory, require_complete),
            points_query: None,
            fonts: FontLoading::default(),
            images: HomeImages::load(),
            spinner_rotation: 0.0,
            notifications: notifications::Manager::new(),
        }
    }

    /// Boot: settings, locale, directory adapter, then fonts and the region
    /// fetch in parallel.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let base_url = config
            .directory
            .resolve_base_url(flags.directory_url.as_deref());
        let (directory, directory_warning) = build_directory(&base_url, &config.directory);

        let mut app = Self::with_directory(config, None, i18n, directory);

        for key in config_warning.iter().map(String::as_str).chain(directory_warning) {
            app.notifications.push(Notification::warning(key));
        }

        let task = app.boot_tasks();
        (app, task)
    }

    fn boot_tasks(&mut self) -> Task<Message> {
        let (font_count, font_task) = fonts::load_all(Message::FontLoaded);
        tracing::debug!(count = font_count, "loading bundled fonts");
        self.fonts = FontLoading::new(font_count);

        let fetch = self.selector.mount().map(Message::Selector);
        Task::batch([font_task, fetch])
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            !self.fonts.is_done(),
            self.notifications.has_notifications(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            config_dir: &self.config_dir,
            screen: &mut self.screen,
            selector: &mut self.selector,
            points_query: &mut self.points_query,
            fonts: &mut self.fonts,
            spinner_rotation: &mut self.spinner_rotation,
            notifications: &mut self.notifications,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            screen: self.screen,
            fonts_loading: !self.fonts.is_done(),
            spinner_rotation: self.spinner_rotation,
            selector: &self.selector,
            images: &self.images,
            points_query: self.points_query.as_ref(),
            notifications: &self.notifications,
        })
    }
}
