//! Checkout Countdown Timer
//!
//! Drives "time left to complete checkout". A spawned worker decrements a
//! watch-published counter once per second and parks when it reaches zero;
//! `reset()` restores the initial value and resumes ticking. The worker is
//! cancelled when the handle drops, so no orphaned timers survive a
//! teardown.
//!
//! Missed ticks are skipped, not replayed: each tick accounts for exactly
//! one second regardless of scheduling delays.

use tokio::sync::{mpsc, watch};
use tokio::time::{Duration, MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Handle to a running countdown.
///
/// Must be created from within a Tokio runtime.
#[derive(Debug)]
pub struct Countdown {
    initial_seconds: i64,
    seconds: watch::Receiver<i64>,
    reset_tx: mpsc::UnboundedSender<()>,
    shutdown: CancellationToken,
}

impl Countdown {
    /// Start a countdown from `initial_seconds`.
    ///
    /// Negative values clamp to zero: the countdown starts already
    /// expired and never counts below zero.
    pub fn start(initial_seconds: i64) -> Self {
        let initial = initial_seconds.max(0);
        let (seconds_tx, seconds_rx) = watch::channel(initial);
        let (reset_tx, reset_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();

        let worker = CountdownWorker {
            initial,
            seconds: seconds_tx,
            reset: reset_rx,
            shutdown: shutdown.clone(),
        };
        tokio::spawn(worker.run());

        Self {
            initial_seconds: initial,
            seconds: seconds_rx,
            reset_tx,
            shutdown,
        }
    }

    /// The value the countdown starts from (and resets to)
    pub fn initial_seconds(&self) -> i64 {
        self.initial_seconds
    }

    /// Seconds remaining
    pub fn seconds_left(&self) -> i64 {
        *self.seconds.borrow()
    }

    /// Whether the countdown has reached zero
    pub fn is_expired(&self) -> bool {
        self.seconds_left() == 0
    }

    /// Watch receiver for consumers that render the remaining time
    pub fn subscribe(&self) -> watch::Receiver<i64> {
        self.seconds.clone()
    }

    /// Restore the initial value and resume ticking if expired
    pub fn reset(&self) {
        let _ = self.reset_tx.send(());
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Worker task owning the tick loop
struct CountdownWorker {
    initial: i64,
    seconds: watch::Sender<i64>,
    reset: mpsc::UnboundedReceiver<()>,
    shutdown: CancellationToken,
}

impl CountdownWorker {
    async fn run(mut self) {
        let mut tick = interval(Duration::from_secs(1));
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick is immediate; push it one full second out
        tick.reset();

        loop {
            if *self.seconds.borrow() == 0 {
                // Expired: park until reset or shutdown, no further ticking
                tokio::select! {
                    _ = self.shutdown.cancelled() => return,
                    msg = self.reset.recv() => {
                        if msg.is_none() {
                            return;
                        }
                        self.seconds.send_replace(self.initial);
                        tick.reset();
                    }
                }
                continue;
            }

            tokio::select! {
                _ = self.shutdown.cancelled() => return,
                msg = self.reset.recv() => {
                    if msg.is_none() {
                        return;
                    }
                    self.seconds.send_replace(self.initial);
                    tick.reset();
                }
                _ = tick.tick() => {
                    self.seconds.send_modify(|seconds| *seconds -= 1);
                }
            }
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_counts_down_and_stops_at_zero() {
        let countdown = Countdown::start(3);
        assert_eq!(countdown.seconds_left(), 3);
        assert!(!countdown.is_expired());

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert_eq!(countdown.seconds_left(), 0);
        assert!(countdown.is_expired());

        // No further ticking once expired
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(countdown.seconds_left(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_intermediate_values() {
        let countdown = Countdown::start(10);

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(countdown.seconds_left(), 9);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(countdown.seconds_left(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_initial_and_resumes() {
        let countdown = Countdown::start(3);

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(countdown.is_expired());

        countdown.reset();
        // Let the worker process the reset message
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(countdown.seconds_left(), 3);
        assert!(!countdown.is_expired());

        // Ticking resumed
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(countdown.seconds_left(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_while_running_restarts_from_initial() {
        let countdown = Countdown::start(10);

        tokio::time::sleep(Duration::from_millis(4100)).await;
        assert_eq!(countdown.seconds_left(), 6);

        countdown.reset();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(countdown.seconds_left(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_initial_clamps_to_zero() {
        let countdown = Countdown::start(-5);

        assert_eq!(countdown.initial_seconds(), 0);
        assert_eq!(countdown.seconds_left(), 0);
        assert!(countdown.is_expired());

        // Never decrements below zero
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(countdown.seconds_left(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribe_observes_ticks() {
        let countdown = Countdown::start(2);
        let mut rx = countdown.subscribe();

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_worker() {
        let countdown = Countdown::start(10);
        let mut rx = countdown.subscribe();

        drop(countdown);

        // Worker exits on cancellation and drops its sender
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(rx.changed().await.is_err());
    }
}
