// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Translation files embedded in the binary from `assets/i18n/`
//! - Message arguments (e.g. the submitted code)
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
