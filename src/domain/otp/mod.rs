// SPDX-License-Identifier: MPL-2.0
//! One-time password domain types.

pub mod code;
pub mod newtypes;
pub mod sequence;

pub use code::OtpCode;
pub use newtypes::{Digit, SlotEntry, SlotIndex, OTP_LENGTH};
pub use sequence::DigitSequence;
