// SPDX-License-Identifier: MPL-2.0
//! One-shot auto-dismiss timer.
//!
//! A [`DismissTimer`] owns the abort handle of the scheduled task. Dropping
//! or replacing the timer aborts the task, so a dismissed notification never
//! receives a late expiry message. The [`TimerId`] lets the receiver discard
//! a message that was already in flight when the timer was replaced.

use iced::task::Handle;
use iced::Task;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Unique identifier for a scheduled dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A scheduled dismissal that is cancelled when dropped.
pub struct DismissTimer {
    id: TimerId,
    handle: Handle,
}

impl std::fmt::Debug for DismissTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissTimer")
            .field("id", &self.id)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl DismissTimer {
    /// Schedules `on_expire(id)` after `delay`.
    ///
    /// The returned task must be handed to the runtime; the timer must be
    /// kept alive for as long as the dismissal should stay scheduled.
    pub fn start<M>(
        delay: Duration,
        on_expire: impl Fn(TimerId) -> M + Send + 'static,
    ) -> (Self, Task<M>)
    where
        M: Send + 'static,
    {
        let id = TimerId::next();
        let (task, handle) = Task::perform(countdown(delay), move |()| on_expire(id)).abortable();

        (
            Self {
                id,
                handle: handle.abort_on_drop(),
            },
            task,
        )
    }

    #[must_use]
    pub fn id(&self) -> TimerId {
        self.id
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

/// Resolves once `delay` has passed on the tokio clock.
///
/// The sleep is created on first poll, so building the future does not
/// need a runtime context.
pub async fn countdown(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NOTIFICATION_DISMISS_MS;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Expired,
    }

    #[test]
    fn ids_are_unique() {
        let (a, _task_a) = DismissTimer::start(Duration::from_secs(1), |_| Message::Expired);
        let (b, _task_b) = DismissTimer::start(Duration::from_secs(1), |_| Message::Expired);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn live_timer_is_not_cancelled() {
        let (timer, _task) = DismissTimer::start(Duration::from_secs(1), |_| Message::Expired);
        assert!(!timer.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_waits_for_full_delay() {
        let delay = Duration::from_millis(NOTIFICATION_DISMISS_MS);

        let early = tokio::time::timeout(delay - Duration::from_millis(1), countdown(delay)).await;
        assert!(early.is_err(), "countdown finished before the delay");

        let on_time = tokio::time::timeout(delay, countdown(delay)).await;
        assert!(on_time.is_ok());
    }
}
