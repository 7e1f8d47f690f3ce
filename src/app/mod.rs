// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form, localization,
//! theming and diagnostics.
//!
//! The `App` struct wires together the domains (OTP form, notifications,
//! localization, diagnostics) and translates messages into side effects like
//! focus changes, clipboard reads or the report written on exit.

pub mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY};
use crate::diagnostics::{
    AppStateEvent, DiagnosticsCollector, DiagnosticsHandle, UserAction,
};
use crate::i18n::fluent::I18n;
use crate::ui::otp_form;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 440.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    form: otp_form::State,
    theme: Theme,
    diagnostics: DiagnosticsCollector,
    diagnostics_handle: DiagnosticsHandle,
    /// Where the diagnostics report goes on exit, if anywhere.
    report_path: Option<PathBuf>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("form", &self.form)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

/// Window settings: the close request is intercepted so the diagnostics
/// report can be written before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Boot must be `Fn`; the flags are consumed on the single call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    /// Builds the initial state from an already loaded configuration.
    pub fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let diagnostics = DiagnosticsCollector::new(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
        let diagnostics_handle = diagnostics.handle();

        if let Some(key) = config_warning {
            diagnostics_handle.log_warning(key);
        }
        diagnostics_handle.log_state(AppStateEvent::Started {
            locale: i18n.current_locale().to_string(),
        });
        log::debug!("Starting with locale {}", i18n.current_locale());

        let mut app = App {
            i18n,
            form: otp_form::State::new(),
            theme: config.general.theme_mode.resolve(),
            diagnostics,
            diagnostics_handle,
            report_path: flags.diagnostics_path,
        };
        app.diagnostics.process_pending();

        let focus = app.form.focus_first().map(Message::Form);
        (app, focus)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.form.has_toast()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Form(form_message) => {
                let (event, task) = self.form.update(form_message, &self.i18n);
                self.handle_form_event(event);
                task.map(Message::Form)
            }
            Message::Tick(now) => {
                let (_, task) = self
                    .form
                    .update(otp_form::Message::Tick(now), &self.i18n);
                task.map(Message::Form)
            }
            Message::WindowCloseRequested(id) => {
                self.shutdown();
                window::close(id)
            }
        };

        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
        })
    }

    #[must_use]
    pub fn form(&self) -> &otp_form::State {
        &self.form
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    fn handle_form_event(&mut self, event: otp_form::Event) {
        let action = match event {
            otp_form::Event::None => return,
            otp_form::Event::Submitted(code) => {
                log::info!("OTP submitted: {code}");
                UserAction::SubmitCode {
                    code: code.to_string(),
                }
            }
            otp_form::Event::Rejected { filled } => {
                log::debug!("Submission rejected with {filled} of 6 slots filled");
                UserAction::RejectSubmission { filled }
            }
            otp_form::Event::PasteApplied => UserAction::ApplyPaste,
            otp_form::Event::PasteIgnored => {
                log::debug!("Ignoring paste that is not a six-digit code");
                UserAction::IgnorePaste
            }
            otp_form::Event::NotificationDismissed => UserAction::DismissNotification,
        };
        self.diagnostics_handle.log_action(action);
    }

    /// Records shutdown and writes the report if one was requested.
    fn shutdown(&mut self) {
        self.diagnostics_handle.log_state(AppStateEvent::Shutdown);
        let Some(path) = self.report_path.as_deref() else {
            return;
        };
        if let Err(err) = self.diagnostics.export_to_file(path) {
            log::error!("Failed to write diagnostics report: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticReport};
    use crate::domain::otp::SlotIndex;
    use tempfile::tempdir;

    fn app_with(flags: Flags) -> App {
        let (app, _task) = App::with_config(
            Flags {
                lang: Some("en-US".to_string()),
                ..flags
            },
            &Config::default(),
            None,
        );
        app
    }

    fn type_code(app: &mut App, code: &str) {
        for (i, c) in code.chars().enumerate() {
            let _ = app.update(Message::Form(otp_form::Message::SlotInput {
                index: SlotIndex::new(i).expect("index in range"),
                value: c.to_string(),
            }));
        }
    }

    fn actions(app: &App) -> Vec<UserAction> {
        app.diagnostics()
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::UserAction { action } => Some(action.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn startup_records_started_state() {
        let app = app_with(Flags::default());
        assert!(app.diagnostics().iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::Started { locale }
            } if locale == "en-US"
        )));
        assert_eq!(app.title(), "Enter OTP");
    }

    #[test]
    fn config_warning_is_recorded() {
        let (app, _task) = App::with_config(
            Flags::default(),
            &Config::default(),
            Some(config::CONFIG_LOAD_WARNING.to_string()),
        );
        assert!(app.diagnostics().iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::Warning { message } if message == config::CONFIG_LOAD_WARNING
        )));
    }

    #[test]
    fn successful_submission_is_recorded_with_code() {
        let mut app = app_with(Flags::default());
        type_code(&mut app, "451239");
        let _ = app.update(Message::Form(otp_form::Message::Submit));

        assert_eq!(
            actions(&app),
            vec![UserAction::SubmitCode {
                code: "451239".to_string()
            }]
        );
        assert_eq!(app.form().digits().filled_count(), 0);
    }

    #[test]
    fn rejected_submission_is_recorded_with_fill_count() {
        let mut app = app_with(Flags::default());
        type_code(&mut app, "45");
        let _ = app.update(Message::Form(otp_form::Message::Submit));

        assert_eq!(actions(&app), vec![UserAction::RejectSubmission { filled: 2 }]);
    }

    #[test]
    fn tick_is_forwarded_to_form() {
        let mut app = app_with(Flags::default());
        let _ = app.update(Message::Form(otp_form::Message::Submit));
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.form().has_toast());
    }

    #[test]
    fn close_request_writes_report_when_requested() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("diagnostics.json");
        let mut app = app_with(Flags {
            diagnostics_path: Some(path.clone()),
            ..Flags::default()
        });

        let _ = app.update(Message::Form(otp_form::Message::ClipboardRead(Some(
            " 123456 ".to_string(),
        ))));
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        let written = std::fs::read_to_string(&path).expect("report written");
        let report: DiagnosticReport = serde_json::from_str(&written).expect("valid report");
        assert!(written.contains("apply_paste"));
        assert!(written.contains("shutdown"));
        assert_eq!(report.metadata.event_count, report.events.len());
    }

    #[test]
    fn close_request_without_path_writes_nothing() {
        let mut app = app_with(Flags::default());
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(app.diagnostics().iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::Shutdown
            }
        )));
    }
}
