// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Directory**: IBGE lookup endpoint and request timeout
//! - **Selector**: Confirmation policy

// ==========================================================================
// Directory Defaults
// ==========================================================================

/// Base URL of the IBGE "localidades" API.
pub const DEFAULT_DIRECTORY_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Environment variable overriding the directory base URL.
pub const ENV_DIRECTORY_URL: &str = "ECOLETA_DIRECTORY_URL";

/// Default per-request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Selector Defaults
// ==========================================================================

/// Whether confirming requires both a region and a locality.
///
/// Off by default: an incomplete selection is forwarded with the `"0"`
/// placeholder, as the mobile app always did.
pub const DEFAULT_REQUIRE_COMPLETE_SELECTION: bool = false;
