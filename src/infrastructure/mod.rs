// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters implementing application ports.
//!
//! - [`ibge`]: HTTP client for the IBGE "localidades" directory
//! - [`offline`]: fallback that fails every request

pub mod ibge;
pub mod offline;

pub use ibge::IbgeDirectory;
pub use offline::OfflineDirectory;
