// SPDX-License-Identifier: MPL-2.0
//! Six-slot OTP entry form.
//!
//! This module follows the "state down, messages up" pattern: the form owns
//! the digits, the focus handles and the visible toast, and reports what
//! happened to the parent through [`Event`].

use crate::domain::otp::{DigitSequence, SlotIndex, OTP_LENGTH};
use crate::ui::notifications::Toast;
use iced::widget::Id;
use std::time::Instant;

mod component;
mod messages;
mod view;

pub use component::ViewContext;
pub use messages::{Event, Message};

/// Local UI state for the form.
#[derive(Debug)]
pub struct State {
    digits: DigitSequence,
    /// Focus handles, one per slot.
    slot_ids: [Id; OTP_LENGTH],
    /// Slot the form last focused.
    focused: SlotIndex,
    toast: Option<Toast>,
    /// Last slot edit, consumed by the key press that caused it.
    last_edit: Option<SlotEdit>,
    /// Clock used for the toast animation, advanced by `Message::Tick`.
    now: Instant,
}

/// A slot edit awaiting its key press.
///
/// A focused input publishes its new value before the key event reaches
/// subscriptions, so `was_empty` is the slot's state before the keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotEdit {
    index: SlotIndex,
    was_empty: bool,
}
