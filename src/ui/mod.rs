// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an update function returning an effect or event for
//! the application, and a `view` taking a `ViewContext`.
//!
//! # Screens
//!
//! - [`location_selector`] - Home screen with the state and city pickers
//! - [`points`] - Collection points screen reached after confirming
//! - [`splash`] - Shown while bundled fonts load
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notifications
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Widget style functions
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light/Dark/System theme handling
//! - [`fonts`] - Embedded font families

pub mod design_tokens;
pub mod fonts;
pub mod images;
pub mod location_selector;
pub mod notifications;
pub mod points;
pub mod splash;
pub mod styles;
pub mod theming;
pub mod widgets;
