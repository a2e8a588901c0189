// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`directory`]: Region and locality lookup
//!
//! # Example
//!
//! ```ignore
//! use ecoleta::application::port::DirectoryService;
//! use ecoleta::domain::location::Region;
//!
//! async fn first_city(directory: &dyn DirectoryService) -> Option<String> {
//!     let cities = directory.localities(&Region::new("SP")).await.ok()?;
//!     cities.first().map(|c| c.name().to_string())
//! }
//! ```

pub mod directory;

pub use directory::{DirectoryError, DirectoryService};
