// SPDX-License-Identifier: MPL-2.0
//! OTP newtypes.
//!
//! Type-safe wrappers for slot positions and digit values, so that the
//! form logic never has to re-check bounds or character classes.

use std::fmt;

/// Number of slots composing an OTP.
pub const OTP_LENGTH: usize = 6;

// =============================================================================
// SlotIndex
// =============================================================================

/// Position of a slot in the OTP, guaranteed to be within `0..OTP_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// The leftmost slot.
    pub const FIRST: Self = Self(0);

    /// The rightmost slot.
    pub const LAST: Self = Self(OTP_LENGTH - 1);

    /// Creates a slot index, returning `None` when out of range.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index < OTP_LENGTH).then_some(Self(index))
    }

    /// Returns the raw index.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns the slot to the right, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Returns the slot to the left, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// Returns whether this is the rightmost slot.
    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// Iterates over every slot from left to right.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..OTP_LENGTH).map(Self)
    }
}

impl Default for SlotIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Digit
// =============================================================================

/// A single ASCII decimal digit (`'0'..='9'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// The digit zero.
    pub const ZERO: Self = Self(b'0');

    /// Creates a digit from a character, returning `None` for anything that
    /// is not an ASCII decimal digit.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Self(c as u8))
    }

    /// Returns the digit as a character.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// SlotEntry
// =============================================================================

/// A keystroke proposed for one slot, after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEntry {
    /// The slot is being emptied.
    Clear,
    /// The slot receives a digit.
    Digit(Digit),
}

impl SlotEntry {
    /// Validates a proposed slot value.
    ///
    /// Returns `None` when the value must be rejected: more than one
    /// character, a space, or anything that is not a decimal digit.
    /// The empty string is accepted and clears the slot.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Some(Self::Clear),
            (Some(c), None) => Digit::from_char(c).map(Self::Digit),
            (Some(_), Some(_)) => None,
        }
    }

    /// Returns the digit carried by this entry, if any.
    #[must_use]
    pub fn digit(self) -> Option<Digit> {
        match self {
            Self::Clear => None,
            Self::Digit(digit) => Some(digit),
        }
    }
}
