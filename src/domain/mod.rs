// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no dependency outside `std`.
//!
//! Everything here can be exercised without a window, a runtime or a
//! renderer, which keeps the form rules testable in isolation.
//!
//! # Modules
//!
//! - [`otp`]: slot positions, digits, the six-slot sequence and complete codes
//!   ([`SlotIndex`](otp::SlotIndex), [`DigitSequence`](otp::DigitSequence),
//!   [`OtpCode`](otp::OtpCode))

pub mod otp;
