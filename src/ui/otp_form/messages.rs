// SPDX-License-Identifier: MPL-2.0
//! Message and event types for the OTP form.

use crate::domain::otp::{OtpCode, SlotIndex};
use crate::ui::notifications::TimerId;
use iced::keyboard;
use std::time::Instant;

/// Messages handled by the form.
#[derive(Debug, Clone)]
pub enum Message {
    /// New full content of a slot after a keystroke.
    SlotInput { index: SlotIndex, value: String },
    /// Key press seen after the focused slot handled it.
    KeyPressed(keyboard::Key),
    /// A paste happened in a slot; the payload is read from the clipboard.
    SlotPasted(SlotIndex),
    /// Raw clipboard text, if any.
    ClipboardRead(Option<String>),
    /// Enter pressed in a slot or submit button clicked.
    Submit,
    /// Dismissal timer fired.
    ToastExpired(TimerId),
    /// Animation clock.
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// All six digits were submitted.
    Submitted(OtpCode),
    /// Submission attempted with `filled` of six slots filled.
    Rejected { filled: usize },
    PasteApplied,
    PasteIgnored,
    /// The visible notification was dismissed by its timer.
    NotificationDismissed,
}
