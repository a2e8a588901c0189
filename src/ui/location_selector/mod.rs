// SPDX-License-Identifier: MPL-2.0
//! Home screen: cascading state and city pickers backed by the directory service.
//!
//! - [`state`]: pure selection state machine with stale-response protection
//! - [`component`]: message handling and fetch tasks
//! - [`view`]: rendering

pub mod component;
pub mod state;
pub mod view;

pub use component::{Effect, Message, State};
pub use state::{Candidates, FetchStatus, Outcome, Phase, Selector};
pub use view::{view, ViewContext};
