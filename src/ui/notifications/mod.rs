// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Toasts report recoverable problems (directory unreachable, settings not
//! saved) without blocking the selector. At most three are shown at once;
//! extra ones wait in a queue.
//!
//! - [`notification`]: `Notification` and `Severity`
//! - [`manager`]: queueing, auto-dismiss and dismissal
//! - [`toast`]: rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
