// SPDX-License-Identifier: MPL-2.0
//! The fixed-length digit sequence behind the six input slots.

use super::code::OtpCode;
use super::newtypes::{Digit, SlotEntry, SlotIndex, OTP_LENGTH};

/// Ordered sequence of six slots, each empty or holding one digit.
///
/// The length never changes; only slot contents do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSequence([Option<Digit>; OTP_LENGTH]);

impl DigitSequence {
    /// Creates a sequence with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the digit in a slot, if any.
    #[must_use]
    pub fn get(&self, index: SlotIndex) -> Option<Digit> {
        self.0[index.value()]
    }

    /// Returns whether a slot is empty.
    #[must_use]
    pub fn is_empty_at(&self, index: SlotIndex) -> bool {
        self.get(index).is_none()
    }

    /// Returns the slot content as displayed in its input.
    #[must_use]
    pub fn slot_text(&self, index: SlotIndex) -> String {
        self.get(index).map(|d| d.to_string()).unwrap_or_default()
    }

    /// Applies a validated entry to one slot.
    pub fn set(&mut self, index: SlotIndex, entry: SlotEntry) {
        self.0[index.value()] = entry.digit();
    }

    /// Replaces every slot with the digits of a code.
    pub fn fill(&mut self, code: &OtpCode) {
        self.0 = (*code.digits()).map(Some);
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.0 = [None; OTP_LENGTH];
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// Concatenation of the filled slots, left to right.
    #[must_use]
    pub fn concatenated(&self) -> String {
        self.0.iter().flatten().map(|d| d.as_char()).collect()
    }

    /// Returns the complete code when all six slots are filled.
    #[must_use]
    pub fn code(&self) -> Option<OtpCode> {
        let mut digits = [Digit::ZERO; OTP_LENGTH];
        for (target, slot) in digits.iter_mut().zip(self.0) {
            *target = slot?;
        }
        Some(OtpCode::from_digits(digits))
    }
}
