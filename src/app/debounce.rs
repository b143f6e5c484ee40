//! Input debouncing for the interactive mode.

use std::time::Duration;

use tokio::sync::mpsc;

/// Yields the latest value from a channel once input has been quiet for `window`.
///
/// Every value received inside the window replaces the pending one, so a burst
/// of keystrokes or pasted lines produces a single evaluation.
pub struct Debouncer<T> {
    rx: mpsc::Receiver<T>,
    window: Duration,
}

impl<T> Debouncer<T> {
    pub fn new(rx: mpsc::Receiver<T>, window: Duration) -> Self {
        Self { rx, window }
    }

    /// Creates a sender and a debouncer reading from it.
    pub fn channel(window: Duration, capacity: usize) -> (mpsc::Sender<T>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx, window))
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Waits for the next settled value.
    ///
    /// A value still pending when every sender is dropped is returned
    /// immediately. `None` means the channel is closed and drained.
    pub async fn next(&mut self) -> Option<T> {
        let mut pending = self.rx.recv().await?;
        loop {
            match tokio::time::timeout(self.window, self.rx.recv()).await {
                Ok(Some(newer)) => pending = newer,
                Ok(None) | Err(_) => return Some(pending),
            }
        }
    }

    /// Waits for the next burst and returns every value in it, in order.
    ///
    /// `None` means the channel is closed and drained.
    pub async fn next_batch(&mut self) -> Option<Vec<T>> {
        let mut batch = vec![self.rx.recv().await?];
        loop {
            match tokio::time::timeout(self.window, self.rx.recv()).await {
                Ok(Some(value)) => batch.push(value),
                Ok(None) | Err(_) => return Some(batch),
            }
        }
    }
}
