// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so the selection rules can be
//! tested without a GUI runtime or a network.
//!
//! # Modules
//!
//! - [`location`]: Geographic value objects ([`Region`](location::Region),
//!   [`Locality`](location::Locality)) and the navigation payload
//!   ([`PointsQuery`](location::PointsQuery))

pub mod location;
