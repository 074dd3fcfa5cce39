//! Submission lifecycle and the simulated network delay.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::event::{FormEvent, Ticket};

/// Default simulated submission latency, in milliseconds.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// Default simulated submission latency.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS);

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Waiting for the simulated submission identified by `ticket` to finish.
    Submitting { ticket: Ticket },
}

impl SubmissionState {
    /// Returns `true` while a submission is in flight.
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting { .. })
    }
}

/// Handle to a scheduled [`FormEvent::SubmitElapsed`] notification.
#[derive(Debug)]
pub struct SubmitTimer {
    ticket: Ticket,
    handle: JoinHandle<()>,
}

impl SubmitTimer {
    /// Schedules `SubmitElapsed(ticket)` to be sent on `tx` after `delay`.
    pub fn start(delay: Duration, ticket: Ticket, tx: UnboundedSender<FormEvent>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(FormEvent::SubmitElapsed(ticket));
        });
        Self { ticket, handle }
    }

    /// Returns the ticket this timer will report.
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Cancels the timer; no event is sent if it has not fired yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Returns `true` once the timer has fired or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;
    use tokio::sync::mpsc::error::TryRecvError;

    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
        assert!(!SubmissionState::Idle.is_submitting());
        assert!(SubmissionState::Submitting { ticket: Ticket(1) }.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = SubmitTimer::start(DEFAULT_SUBMIT_DELAY, Ticket(3), tx);
        assert_eq!(timer.ticket(), Ticket(3));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        tokio::time::sleep(Duration::from_millis(2)).await;
        match rx.try_recv() {
            Ok(FormEvent::SubmitElapsed(ticket)) => assert_eq!(ticket, Ticket(3)),
            other => panic!("expected SubmitElapsed, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = SubmitTimer::start(DEFAULT_SUBMIT_DELAY, Ticket(1), tx);
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(timer.is_finished());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
    }
}
