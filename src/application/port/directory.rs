// SPDX-License-Identifier: MPL-2.0
//! Geographic directory port definition.
//!
//! This module defines the [`DirectoryService`] trait used by the location
//! selector to fetch candidate regions and localities.
//!
//! # Design Notes
//!
//! - Methods return boxed `'static` futures so callers can hand them straight
//!   to `iced::Task::perform`
//! - The trait is `Send + Sync` so a single adapter can be shared behind an `Arc`
//! - No caching and no retries happen behind this trait

use crate::domain::location::{Locality, Region};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// DirectoryError
// =============================================================================

/// Errors that can occur while querying the directory service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The request could not be sent or the connection failed (includes timeouts).
    Request(String),

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// The response body was not the expected JSON shape.
    Decode(String),
}

impl DirectoryError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DirectoryError::Request(_) => "error-directory-request",
            DirectoryError::Status(_) => "error-directory-status",
            DirectoryError::Decode(_) => "error-directory-decode",
        }
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Request(msg) => write!(f, "Directory request failed: {msg}"),
            DirectoryError::Status(code) => write!(f, "Directory returned HTTP status {code}"),
            DirectoryError::Decode(msg) => write!(f, "Invalid directory response: {msg}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

// =============================================================================
// DirectoryService
// =============================================================================

/// Read-only lookup of regions and the localities they contain.
///
/// Results preserve the order in which the service returns them.
pub trait DirectoryService: Send + Sync {
    /// Fetches every region code, ordered by the service's display name.
    fn regions(&self) -> BoxFuture<'static, Result<Vec<Region>, DirectoryError>>;

    /// Fetches the localities of `region`.
    fn localities(&self, region: &Region) -> BoxFuture<'static, Result<Vec<Locality>, DirectoryError>>;
}
