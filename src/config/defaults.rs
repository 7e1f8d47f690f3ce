// SPDX-License-Identifier: MPL-2.0
//! Centralized constants.
//!
//! The timing values are fixed literals of the form, not user settings;
//! they live here so every module reads the same numbers.

// ==========================================================================
// Notification Timing
// ==========================================================================

/// Delay before a visible notification dismisses itself (milliseconds).
pub const NOTIFICATION_DISMISS_MS: u64 = 3000;

/// Period of one full border pulse cycle on a notification (milliseconds).
pub const NOTIFICATION_PULSE_PERIOD_MS: u64 = 2000;

/// Interval of the animation clock while a notification is visible (milliseconds).
pub const ANIMATION_TICK_MS: u64 = 50;

// ==========================================================================
// Diagnostics
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

/// Capacity of the channel between diagnostics handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 256;
