// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the visible notification.
//!
//! A `Toast` pairs a [`Notification`] with its [`DismissTimer`]; the timer
//! lives and dies with the toast.

use super::notification::{Kind, Notification};
use super::timer::{DismissTimer, TimerId};
use crate::config::NOTIFICATION_DISMISS_MS;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, Container, Text};
use iced::{alignment, Color, Element, Length, Task, Theme};
use std::time::{Duration, Instant};

/// A notification currently on screen.
#[derive(Debug)]
pub struct Toast {
    notification: Notification,
    timer: DismissTimer,
}

impl Toast {
    /// Shows `notification` and schedules its dismissal.
    ///
    /// `on_expire` builds the parent's dismissal message.
    pub fn show<M>(
        notification: Notification,
        on_expire: impl Fn(TimerId) -> M + Send + 'static,
    ) -> (Self, Task<M>)
    where
        M: Send + 'static,
    {
        let (timer, task) =
            DismissTimer::start(Duration::from_millis(NOTIFICATION_DISMISS_MS), on_expire);
        (
            Self {
                notification,
                timer,
            },
            task,
        )
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn timer_id(&self) -> TimerId {
        self.timer.id()
    }

    /// Renders the toast card as of `now`.
    pub fn view<'a, M: 'a>(&'a self, now: Instant) -> Element<'a, M> {
        let kind = self.notification.kind();
        let accent = self.notification.border_color(now);

        let message = Text::new(self.notification.message()).size(typography::BODY_LG);

        Container::new(message)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .style(move |theme: &Theme| toast_container_style(theme, kind, accent))
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(_theme: &Theme, kind: Kind, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(kind.background())),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::futures::StreamExt;
    use iced_runtime::Action;

    #[derive(Debug, Clone)]
    enum Message {
        Expired(TimerId),
    }

    fn expired_ids(messages: &[Message]) -> Vec<TimerId> {
        messages
            .iter()
            .map(|Message::Expired(id)| *id)
            .collect()
    }

    /// Runs a task to completion and collects its output messages.
    async fn outputs(task: Task<Message>) -> Vec<Message> {
        let Some(stream) = iced_runtime::task::into_stream(task) else {
            return Vec::new();
        };
        stream
            .filter_map(|action| async move {
                match action {
                    Action::Output(message) => Some(message),
                    _ => None,
                }
            })
            .collect()
            .await
    }

    #[test]
    fn show_keeps_notification_and_timer() {
        let (toast, _task) = Toast::show(Notification::success("done"), Message::Expired);
        assert_eq!(toast.notification().message(), "done");
        assert!(!toast.timer.is_cancelled());
    }

    #[test]
    fn replacing_toast_gets_a_new_timer() {
        let (first, _t1) = Toast::show(Notification::success("a"), Message::Expired);
        let first_id = first.timer_id();
        let (second, _t2) = Toast::show(Notification::failure("b"), Message::Expired);
        assert_ne!(first_id, second.timer_id());
    }

    #[tokio::test(start_paused = true)]
    async fn live_toast_expires_after_dismiss_delay() {
        let (toast, task) = Toast::show(Notification::success("done"), Message::Expired);
        let start = tokio::time::Instant::now();

        let messages = outputs(task).await;

        let delay = Duration::from_millis(NOTIFICATION_DISMISS_MS);
        assert_eq!(expired_ids(&messages), vec![toast.timer_id()]);
        assert!(start.elapsed() >= delay);
        assert!(start.elapsed() < delay + Duration::from_millis(5));
    }

    #[tokio::test(start_paused = true)]
    async fn replaced_toast_never_expires() {
        let (first, first_task) = Toast::show(Notification::success("a"), Message::Expired);
        let (second, second_task) = Toast::show(Notification::failure("b"), Message::Expired);
        let mut visible = first;
        assert!(!visible.timer.is_cancelled());
        visible = second;

        assert!(outputs(first_task).await.is_empty());
        assert_eq!(
            expired_ids(&outputs(second_task).await),
            vec![visible.timer_id()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_toast_never_expires() {
        let (toast, task) = Toast::show(Notification::failure("gone"), Message::Expired);
        drop(toast);

        assert!(outputs(task).await.is_empty());
    }

    #[test]
    fn style_uses_kind_background_and_white_text() {
        let style = toast_container_style(&Theme::Light, Kind::Failure, palette::NOTIFY_RED);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::FAILURE_BG))
        );
        assert_eq!(style.text_color, Some(palette::WHITE));
        assert_eq!(style.border.color, palette::NOTIFY_RED);
    }
}
