// SPDX-License-Identifier: MPL-2.0
//! `ecoleta` is the entry screen of a waste collection marketplace built
//! with the Iced GUI framework.
//!
//! The user picks a Brazilian state and one of its cities from lists served
//! by the IBGE directory API, then confirms to open the collection points
//! screen for that location.
//!
//! # Layers
//!
//! - [`domain`]: region/locality value types and the navigation payload
//! - [`application`]: the directory service port
//! - [`infrastructure`]: the IBGE HTTP adapter
//! - [`ui`] and [`app`]: Iced components and the application shell

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
