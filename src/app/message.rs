// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::ui::location_selector;
use crate::ui::notifications;
use crate::ui::points;
use iced::font;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub enum Message {
    Selector(location_selector::Message),
    Points(points::Message),
    /// One bundled font finished registering.
    FontLoaded(Result<(), font::Error>),
    Notification(notifications::NotificationMessage),
    LanguageSelected(LanguageIdentifier),
    Tick(Instant),
}

/// Runtime flags passed from the CLI into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ECOLETA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory service base URL.
    /// Takes precedence over `ECOLETA_DIRECTORY_URL` and the config file.
    pub directory_url: Option<String>,
}
