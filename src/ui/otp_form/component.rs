// SPDX-License-Identifier: MPL-2.0
//! Form operations and the update entry point.

use super::{view, Event, Message, SlotEdit, State};
use crate::domain::otp::{DigitSequence, OtpCode, SlotEntry, SlotIndex};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Notification, Toast};
use iced::keyboard::{key, Key};
use iced::widget::{operation, Id};
use iced::{clipboard, Element, Task};
use std::time::Instant;

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates an empty form with slot 0 as the focus target.
    #[must_use]
    pub fn new() -> Self {
        Self {
            digits: DigitSequence::new(),
            slot_ids: std::array::from_fn(|_| Id::unique()),
            focused: SlotIndex::FIRST,
            toast: None,
            last_edit: None,
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }

    #[must_use]
    pub fn focused(&self) -> SlotIndex {
        self.focused
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Whether the animation clock needs to run.
    #[must_use]
    pub fn has_toast(&self) -> bool {
        self.toast.is_some()
    }

    pub(super) fn slot_id(&self, index: SlotIndex) -> Id {
        self.slot_ids[index.value()].clone()
    }

    pub(super) fn now(&self) -> Instant {
        self.now
    }

    /// Task focusing the first slot, for use at startup.
    pub fn focus_first(&mut self) -> Task<Message> {
        self.focus(SlotIndex::FIRST)
    }

    /// Render the form.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }

    pub fn update(&mut self, message: Message, i18n: &I18n) -> (Event, Task<Message>) {
        match message {
            Message::SlotInput { index, value } => {
                self.last_edit = Some(SlotEdit {
                    index,
                    was_empty: self.digits.is_empty_at(index),
                });
                (Event::None, self.set_digit(index, &value))
            }
            Message::KeyPressed(key) => {
                // Delete and other keys also empty an input; only Backspace navigates
                match (key, self.last_edit.take()) {
                    (Key::Named(key::Named::Backspace), Some(edit)) if edit.was_empty => {
                        (Event::None, self.backspace(edit.index))
                    }
                    _ => (Event::None, Task::none()),
                }
            }
            Message::SlotPasted(index) => {
                self.focused = index;
                (
                    Event::None,
                    clipboard::read().map(Message::ClipboardRead),
                )
            }
            Message::ClipboardRead(contents) => self.paste(contents.as_deref().unwrap_or_default()),
            Message::Submit => self.submit(i18n),
            Message::ToastExpired(id) => {
                if self.toast.as_ref().is_some_and(|toast| toast.timer_id() == id) {
                    self.toast = None;
                    (Event::NotificationDismissed, Task::none())
                } else {
                    (Event::None, Task::none())
                }
            }
            Message::Tick(now) => {
                self.now = now;
                (Event::None, Task::none())
            }
        }
    }

    /// Proposes `value` as the new content of slot `index`.
    ///
    /// Anything other than a single ASCII digit or the empty string is
    /// ignored. A digit moves focus to the next slot, if any.
    pub fn set_digit(&mut self, index: SlotIndex, value: &str) -> Task<Message> {
        let Some(entry) = SlotEntry::parse(value) else {
            return Task::none();
        };

        self.focused = index;
        self.digits.set(index, entry);

        match (entry, index.next()) {
            (SlotEntry::Digit(_), Some(next)) => self.focus(next),
            _ => Task::none(),
        }
    }

    /// Backspace in slot `index`; moves focus back only from an empty slot.
    pub fn backspace(&mut self, index: SlotIndex) -> Task<Message> {
        self.focused = index;
        if !self.digits.is_empty_at(index) {
            return Task::none();
        }
        match index.previous() {
            Some(previous) => self.focus(previous),
            None => Task::none(),
        }
    }

    /// Fills every slot from a pasted code and focuses the last slot.
    ///
    /// Text that is not six digits after trimming is ignored.
    pub fn paste(&mut self, text: &str) -> (Event, Task<Message>) {
        match OtpCode::from_paste(text) {
            Some(code) => {
                self.digits.fill(&code);
                (Event::PasteApplied, self.focus(SlotIndex::LAST))
            }
            None => (Event::PasteIgnored, Task::none()),
        }
    }

    /// Validates the slots and shows the outcome notification.
    pub fn submit(&mut self, i18n: &I18n) -> (Event, Task<Message>) {
        match self.digits.code() {
            Some(code) => {
                let value = code.to_string();
                let text = i18n.tr_with_args("otp-submitted", &[("code", value.as_str())]);
                let show = self.show(Notification::success(text));
                self.digits.clear();
                let focus = self.focus(SlotIndex::FIRST);
                (Event::Submitted(code), Task::batch([show, focus]))
            }
            None => {
                let filled = self.digits.filled_count();
                let show = self.show(Notification::failure(i18n.tr("otp-incomplete")));
                (Event::Rejected { filled }, show)
            }
        }
    }

    /// Replaces the visible toast; the previous dismissal is cancelled.
    fn show(&mut self, notification: Notification) -> Task<Message> {
        self.now = notification.shown_at();
        let (toast, task) = Toast::show(notification, Message::ToastExpired);
        self.toast = Some(toast);
        task
    }

    fn focus(&mut self, index: SlotIndex) -> Task<Message> {
        self.focused = index;
        operation::focus(self.slot_id(index))
    }
}
