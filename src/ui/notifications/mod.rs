// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Short, non-blocking messages about what just happened: a profile update,
//! a new post, a file that could not be decoded. Toasts stack in the
//! bottom-right corner; at most three are shown and the rest wait in a queue.
//!
//! Messages are i18n keys resolved at render time, so a toast follows a
//! language switch while it is on screen.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-post-created"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
