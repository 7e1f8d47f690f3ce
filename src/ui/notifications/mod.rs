// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for submission feedback.
//!
//! A single toast is visible at a time. It reports the outcome of a
//! submission and dismisses itself after a fixed delay.
//!
//! # Components
//!
//! - [`notification`] - `Notification` data and its border pulse
//! - [`timer`] - `DismissTimer`, a cancellable one-shot task
//! - [`toast`] - `Toast`, the on-screen pairing of both
//!
//! # Usage
//!
//! ```ignore
//! let (toast, task) = Toast::show(Notification::success(text), Message::ToastExpired);
//! self.toast = Some(toast); // drops, and so cancels, the previous timer
//! ```

mod notification;
mod timer;
mod toast;

pub use notification::{pulse_color, Kind, Notification};
pub use timer::{countdown, DismissTimer, TimerId};
pub use toast::Toast;
