// SPDX-License-Identifier: MPL-2.0
//! Complete one-time password values.

use super::newtypes::{Digit, OTP_LENGTH};
use std::fmt;

/// A complete OTP: exactly six ASCII decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OtpCode([Digit; OTP_LENGTH]);

impl OtpCode {
    /// Creates a code from six digits.
    #[must_use]
    pub fn from_digits(digits: [Digit; OTP_LENGTH]) -> Self {
        Self(digits)
    }

    /// Parses a string made of exactly six ASCII digits, without trimming.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut digits = [Digit::ZERO; OTP_LENGTH];
        let mut chars = text.chars();
        for slot in &mut digits {
            *slot = chars.next().and_then(Digit::from_char)?;
        }
        chars.next().is_none().then_some(Self(digits))
    }

    /// Parses clipboard text: surrounding whitespace is trimmed, then the
    /// remainder must be exactly six ASCII digits.
    #[must_use]
    pub fn from_paste(text: &str) -> Option<Self> {
        Self::parse(text.trim())
    }

    /// Returns the digits in slot order.
    #[must_use]
    pub fn digits(&self) -> &[Digit; OTP_LENGTH] {
        &self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|digit| write!(f, "{digit}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_six_digits() {
        let code = OtpCode::parse("451239").expect("valid code");
        assert_eq!(code.to_string(), "451239");
    }

    #[test]
    fn parse_rejects_wrong_length_or_content() {
        assert!(OtpCode::parse("").is_none());
        assert!(OtpCode::parse("12345").is_none());
        assert!(OtpCode::parse("1234567").is_none());
        assert!(OtpCode::parse("12a456").is_none());
        assert!(OtpCode::parse("12 456").is_none());
        assert!(OtpCode::parse(" 123456").is_none());
    }

    #[test]
    fn from_paste_trims_surrounding_whitespace() {
        let code = OtpCode::from_paste("  123456\n").expect("valid paste");
        assert_eq!(code.to_string(), "123456");
        assert!(OtpCode::from_paste("\t098765 ").is_some());
    }

    #[test]
    fn from_paste_does_not_accept_inner_whitespace_or_partial_codes() {
        assert!(OtpCode::from_paste("123 456").is_none());
        assert!(OtpCode::from_paste("  1234 ").is_none());
        assert!(OtpCode::from_paste("code: 123456").is_none());
    }

    #[test]
    fn digits_keep_slot_order() {
        let code = OtpCode::parse("907132").expect("valid code");
        let chars: String = code.digits().iter().map(|d| d.as_char()).collect();
        assert_eq!(chars, "907132");
    }
}
