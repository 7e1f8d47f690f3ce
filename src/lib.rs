// SPDX-License-Identifier: MPL-2.0
//! `otp_entry` is a six-digit one-time-password entry form built with the
//! Iced GUI framework.
//!
//! It demonstrates auto-advancing input slots, paste-to-fill, client-side
//! validation and a self-dismissing toast, with Fluent localization, user
//! preferences and an exportable diagnostics log.

#![doc(html_root_url = "https://docs.rs/otp_entry/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
