// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the UI and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer talks to ports, never to concrete adapters

pub mod port;
