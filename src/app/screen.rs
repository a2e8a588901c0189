// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// State and city pickers.
    #[default]
    Home,
    /// Collection points for the confirmed selection.
    Points,
}
