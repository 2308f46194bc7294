//! Debouncing for drag input.
//!
//! Slider and chart handles emit a value per frame. Only the last value of
//! a burst is committed to the session, once no input arrived for the
//! quiet period.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

/// Coalesces a burst of values into the last one.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records a value, replacing any pending one and restarting the quiet period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Returns the pending value once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.quiet => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Returns the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.quiet)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Spawns a task forwarding debounced values from `input` to the returned receiver.
///
/// A pending value is flushed when `input` closes. The task ends when
/// either side of the pipeline is dropped.
pub fn spawn_debounced<T>(
    quiet: Duration,
    mut input: mpsc::Receiver<T>,
) -> (mpsc::Receiver<T>, JoinHandle<()>)
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    let handle = tokio::spawn(async move {
        let mut debouncer = Debouncer::new(quiet);
        loop {
            let deadline = debouncer
                .deadline()
                .unwrap_or_else(|| Instant::now() + quiet);

            tokio::select! {
                received = input.recv() => match received {
                    Some(value) => debouncer.push(value, Instant::now()),
                    None => {
                        if let Some(value) = debouncer.flush() {
                            if tx.send(value).await.is_err() {
                                debug!("Debounce output dropped before final flush");
                            }
                        }
                        debug!("Debounce input closed");
                        break;
                    }
                },
                _ = sleep_until(deadline), if debouncer.is_pending() => {
                    if let Some(value) = debouncer.poll(Instant::now()) {
                        if tx.send(value).await.is_err() {
                            debug!("Debounce output dropped");
                            break;
                        }
                    }
                }
            }
        }
    });

    (rx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_collapses_to_last_value() {
        let start = Instant::now();
        let quiet = Duration::from_millis(500);
        let mut debouncer = Debouncer::new(quiet);

        debouncer.push(1, start);
        debouncer.push(2, start + Duration::from_millis(100));
        debouncer.push(3, start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(600)), None);
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(700))
        );
        assert_eq!(debouncer.poll(start + Duration::from_millis(700)), Some(3));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_flush() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        assert_eq!(debouncer.flush(), None::<u8>);
        debouncer.push(7u8, Instant::now());
        assert_eq!(debouncer.flush(), Some(7));
        assert_eq!(debouncer.deadline(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_debouncer_emits_last_value() {
        let (tx, input) = mpsc::channel(16);
        let (mut output, handle) = spawn_debounced(Duration::from_millis(500), input);

        for value in [10, 20, 30] {
            tx.send(value).await.unwrap();
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(output.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(output.recv().await, Some(30));

        tx.send(40).await.unwrap();
        drop(tx);
        assert_eq!(output.recv().await, Some(40));
        assert_eq!(output.recv().await, None);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_into_dropped_output_ends_task() {
        let (tx, input) = mpsc::channel(16);
        let (output, handle) = spawn_debounced(Duration::from_millis(500), input);
        drop(output);

        tx.send(1u8).await.unwrap();
        drop(tx);
        handle.await.unwrap();
    }
}
