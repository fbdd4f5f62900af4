//! Loading gate.
//!
//! A timed overlay that delays the first paint of the selected screen for a
//! configured minimum duration. Progress is synthetic: a timer advances it by
//! randomized increments on a fixed tick, independent of any real work, then
//! forces it to 100 and completes after a short grace delay. There is no
//! failure path; the gate always completes unless cancelled.
//!
//! Cancellation is explicit: dropping or cancelling the gate aborts the timer
//! task, and a cancelled gate never fires its completion callback.

use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Timing configuration for the loading gate.
#[derive(Debug, Clone, Copy)]
pub struct LoadingGateConfig {
    /// Minimum time the gate stays up, regardless of progress.
    pub min_duration: Duration,
    /// Polling interval for the synthetic progress counter.
    pub tick_interval: Duration,
    /// Pause between forcing progress to 100 and completing.
    pub grace_delay: Duration,
}

impl Default for LoadingGateConfig {
    /// Stock timings: 2 s minimum, 150 ms ticks, 300 ms grace.
    fn default() -> Self {
        Self {
            min_duration: Duration::from_millis(2000),
            tick_interval: Duration::from_millis(150),
            grace_delay: Duration::from_millis(300),
        }
    }
}

/// A running loading gate.
///
/// Created with [`LoadingGate::start`]; observable through [`is_loading`]
/// and [`progress`]. The timer task is aborted when the gate is cancelled or
/// dropped, so a disposed gate cannot invoke its callback.
///
/// [`is_loading`]: LoadingGate::is_loading
/// [`progress`]: LoadingGate::progress
#[derive(Debug)]
pub struct LoadingGate {
    progress: watch::Receiver<f64>,
    loading: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl LoadingGate {
    /// Start a gate with no completion callback.
    #[must_use]
    pub fn start(config: LoadingGateConfig) -> Self {
        Self::start_with(config, || {})
    }

    /// Start a gate that runs `on_complete` once, after the minimum duration
    /// and grace delay have elapsed.
    #[must_use]
    pub fn start_with(
        config: LoadingGateConfig,
        on_complete: impl FnOnce() + Send + 'static,
    ) -> Self {
        let (progress_tx, progress_rx) = watch::channel(0.0_f64);
        let (loading_tx, loading_rx) = watch::channel(true);

        let task = tokio::spawn(async move {
            let started = Instant::now();
            let mut ticker = time::interval(config.tick_interval);
            // The first tick of a tokio interval fires immediately.
            ticker.tick().await;

            while started.elapsed() < config.min_duration {
                ticker.tick().await;
                let current = *progress_tx.borrow();
                if current < 100.0 {
                    // Faster early, slower near the end, like real loads.
                    let increment = if current < 50.0 {
                        rand::rng().random_range(2.0..10.0)
                    } else {
                        rand::rng().random_range(1.0..5.0)
                    };
                    let _ = progress_tx.send((current + increment).min(100.0));
                }
            }

            let _ = progress_tx.send(100.0);
            time::sleep(config.grace_delay).await;
            let _ = loading_tx.send(false);
            on_complete();
        });

        Self {
            progress: progress_rx,
            loading: loading_rx,
            task,
        }
    }

    /// Whether the gate is still up.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Current synthetic progress in `[0, 100]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress.borrow().clamp(0.0, 100.0)
    }

    /// Wait until the gate completes.
    ///
    /// Returns `true` on completion, `false` if the gate was cancelled first.
    pub async fn wait(&self) -> bool {
        let mut loading = self.loading.clone();
        loading.wait_for(|still_loading| !*still_loading).await.is_ok()
    }

    /// Cancel the gate: abort the timer task without completing.
    ///
    /// The completion callback will not run. `is_loading` keeps reporting
    /// `true`; callers deciding what to render should treat a cancelled gate
    /// the same as a disposed screen.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for LoadingGate {
    fn drop(&mut self) {
        self.task.abort();
    }
}
