// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events from the form and the application shell are captured in a
//! memory-bounded circular buffer and can be exported as a JSON report
//! when the window closes.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with bounded capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-fed storage

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
