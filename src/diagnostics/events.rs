// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions on the OTP form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A complete code was submitted.
    ///
    /// Stands in for the call to a verification service, so the value
    /// itself is recorded.
    SubmitCode {
        /// The six submitted digits.
        code: String,
    },

    /// Submission attempted with empty slots.
    RejectSubmission {
        /// Number of filled slots at submission time.
        filled: usize,
    },

    /// A clipboard paste filled the whole form.
    ApplyPaste,

    /// A clipboard paste was not a six-digit code.
    IgnorePaste,

    /// The visible notification was dismissed by its timer.
    DismissNotification,
}

/// Application lifecycle changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// The window was opened.
    Started {
        /// Locale selected for the UI.
        locale: String,
    },

    /// The window is closing.
    Shutdown,
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        /// The specific action performed.
        action: UserAction,
    },

    /// Application lifecycle change.
    AppState {
        /// The new state.
        state: AppStateEvent,
    },

    /// Non-critical warning (e.g. unreadable settings file).
    Warning {
        /// Brief description of the warning
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::ApplyPaste,
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn submit_code_serializes_with_value() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::SubmitCode {
                code: "451239".to_string(),
            },
        };

        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains("\"action\":\"submit_code\""));
        assert!(json.contains("\"code\":\"451239\""));
    }

    #[test]
    fn app_state_round_trips_through_json() {
        let kind = DiagnosticEventKind::AppState {
            state: AppStateEvent::Started {
                locale: "en-US".to_string(),
            },
        };
        let json = serde_json::to_string(&kind).expect("serialize");
        let back: DiagnosticEventKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, kind);
    }

    #[test]
    fn warning_deserializes_from_json() {
        let json = r#"{"type":"warning","message":"settings unreadable"}"#;
        let event: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        match event {
            DiagnosticEventKind::Warning { message } => {
                assert_eq!(message, "settings unreadable");
            }
            _ => panic!("expected Warning variant"),
        }
    }
}
