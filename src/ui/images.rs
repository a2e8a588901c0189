// SPDX-License-Identifier: MPL-2.0
//! Bundled home screen artwork.
//!
//! Image files dropped into `assets/images/` are embedded at build time. The
//! home screen draws the logo above the hero text and the background behind
//! the whole screen; each one is skipped when its file is absent or is not a
//! PNG/JPEG image.

use iced::widget::image::Handle;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct ImageAssets;

pub const LOGO_FILE: &str = "logo.png";
pub const BACKGROUND_FILE: &str = "home-background.png";

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

fn is_supported_image(bytes: &[u8]) -> bool {
    bytes.starts_with(PNG_SIGNATURE) || bytes.starts_with(JPEG_SIGNATURE)
}

/// Image handles used by the home screen.
#[derive(Debug, Clone, Default)]
pub struct HomeImages {
    pub logo: Option<Handle>,
    pub background: Option<Handle>,
}

impl HomeImages {
    /// Builds the handles from the embedded asset folder.
    #[must_use]
    pub fn load() -> Self {
        Self::from_lookup(|name| ImageAssets::get(name).map(|file| file.data.into_owned()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<Vec<u8>>) -> Self {
        let handle = |name: &str| match lookup(name) {
            Some(bytes) if is_supported_image(&bytes) => Some(Handle::from_bytes(bytes)),
            Some(_) => {
                tracing::warn!(file = name, "ignoring bundled image with unknown format");
                None
            }
            None => {
                tracing::debug!(file = name, "bundled image not present");
                None
            }
        };

        Self {
            logo: handle(LOGO_FILE),
            background: handle(BACKGROUND_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(&[0, 0, 0, 13]);
        bytes
    }

    #[test]
    fn missing_files_are_skipped() {
        let images = HomeImages::from_lookup(|_| None);
        assert!(images.logo.is_none());
        assert!(images.background.is_none());
    }

    #[test]
    fn each_file_is_resolved_independently() {
        let images =
            HomeImages::from_lookup(|name| (name == LOGO_FILE).then(png_bytes));
        assert!(images.logo.is_some());
        assert!(images.background.is_none());
    }

    #[test]
    fn non_image_content_is_skipped() {
        let images = HomeImages::from_lookup(|_| Some(b"# not an image".to_vec()));
        assert!(images.logo.is_none());
        assert!(images.background.is_none());
    }

    #[test]
    fn jpeg_signature_is_accepted() {
        assert!(is_supported_image(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(is_supported_image(&png_bytes()));
        assert!(!is_supported_image(&[]));
    }

    #[test]
    fn embedded_folder_loads_without_panicking() {
        let images = HomeImages::load();
        // Whatever ships in the folder must be a real image or be skipped
        if let Some(file) = ImageAssets::get(LOGO_FILE) {
            assert_eq!(images.logo.is_some(), is_supported_image(&file.data));
        } else {
            assert!(images.logo.is_none());
        }
    }
}
