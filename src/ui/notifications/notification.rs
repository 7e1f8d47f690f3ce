// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum, plus the
//! border pulse used while a notification is on screen.

use crate::config::NOTIFICATION_PULSE_PERIOD_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Outcome a notification reports; determines its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Failure,
}

impl Kind {
    /// Card background for this kind.
    #[must_use]
    pub fn background(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_BG,
            Kind::Failure => palette::FAILURE_BG,
        }
    }

    /// The two colors the border alternates between.
    #[must_use]
    pub fn pulse_colors(self) -> (Color, Color) {
        match self {
            Kind::Success => (palette::NOTIFY_BLUE, palette::NOTIFY_GREEN),
            Kind::Failure => (palette::NOTIFY_RED, palette::NOTIFY_ORANGE),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    kind: Kind,
    /// Already-localized text.
    message: String,
    shown_at: Instant,
}

impl Notification {
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(Kind::Failure, message)
    }

    /// Overrides the display start, for deterministic rendering.
    #[must_use]
    pub fn with_shown_at(mut self, shown_at: Instant) -> Self {
        self.shown_at = shown_at;
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Time on screen as of `now`; zero if `now` precedes the display start.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.shown_at)
    }

    /// Current border color as of `now`.
    #[must_use]
    pub fn border_color(&self, now: Instant) -> Color {
        pulse_color(self.kind, self.elapsed(now))
    }
}

/// Border color after `elapsed` on screen.
///
/// Goes from the first pulse color to the second and back once per period.
#[must_use]
pub fn pulse_color(kind: Kind, elapsed: Duration) -> Color {
    let (from, to) = kind.pulse_colors();
    let period = u128::from(NOTIFICATION_PULSE_PERIOD_MS);
    #[allow(clippy::cast_precision_loss)]
    let phase = (elapsed.as_millis() % period) as f32 / period as f32;
    let t = if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    };
    mix(from, to, t)
}

fn mix(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}
