// SPDX-License-Identifier: MPL-2.0
//! Bundled font families.
//!
//! Font files dropped into `assets/fonts/` are embedded at build time and
//! registered with Iced during boot. Widgets refer to families by name; if a
//! family never loads, Iced falls back to its default font.

use iced::font::{self, Family, Weight};
use iced::{Font, Task};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/fonts/"]
struct FontAssets;

/// Hero title: Ubuntu Bold.
pub const TITLE: Font = Font {
    family: Family::Name("Ubuntu"),
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Body text: Roboto Regular.
pub const BODY: Font = Font {
    family: Family::Name("Roboto"),
    ..Font::DEFAULT
};

/// Button labels: Roboto Medium.
pub const BUTTON: Font = Font {
    family: Family::Name("Roboto"),
    weight: Weight::Medium,
    ..Font::DEFAULT
};

fn is_font_file(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".ttf") || lower.ends_with(".otf")
}

/// Registers every embedded font file.
///
/// Returns the number of load results the task will produce and the task
/// itself; each result is delivered through `on_loaded`.
pub fn load_all<Message: Send + 'static>(
    on_loaded: fn(Result<(), font::Error>) -> Message,
) -> (usize, Task<Message>) {
    let tasks: Vec<Task<Message>> = FontAssets::iter()
        .filter(|name| is_font_file(name))
        .filter_map(|name| FontAssets::get(&name))
        .map(|file| font::load(file.data).map(on_loaded))
        .collect();

    (tasks.len(), Task::batch(tasks))
}

/// Tracks outstanding font loads so the splash screen knows when to leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontLoading {
    pending: usize,
    failed: usize,
}

impl FontLoading {
    #[must_use]
    pub fn new(pending: usize) -> Self {
        Self { pending, failed: 0 }
    }

    /// Records one finished load. Returns `true` when this was the last one.
    pub fn finish(&mut self, result: &Result<(), font::Error>) -> bool {
        if self.pending == 0 {
            return false;
        }
        if let Err(err) = result {
            tracing::warn!(error = ?err, "failed to load bundled font");
            self.failed += 1;
        }
        self.pending -= 1;
        self.pending == 0
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.pending == 0
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }
}
