// SPDX-License-Identifier: MPL-2.0
//! Geographic value objects.
//!
//! A [`Region`] is a top-level administrative division identified by a short
//! code (a Brazilian UF such as `SP`). A [`Locality`] is a named city inside a
//! region. Both are kept as opaque strings: the directory service is the only
//! authority on which values exist.

mod newtypes;
mod points_query;

pub use newtypes::{Locality, Region};
pub use points_query::{PointsQuery, UNSET_SENTINEL};
