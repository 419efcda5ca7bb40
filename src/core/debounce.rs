//! Trailing-edge debouncing for rapidly changing input values

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A raw input value and its debounced, committed counterpart.
///
/// Every call to [`set`](Debounced::set) cancels the pending timer and
/// schedules a fresh one for `quiet_period` later, so at most one timer is
/// ever in flight and a timer firing for value V is only honored if no newer
/// value arrived after V was scheduled. The committed value travels over a
/// `tokio::sync::watch` channel; observers subscribe and react to each
/// settle.
///
/// Re-committing a value equal to the one already committed produces no
/// notification, so observers never see a flicker.
///
/// Dropping the handle cancels the pending timer: a torn-down view can never
/// receive a late commit.
///
/// [`set`](Debounced::set) spawns the timer task and therefore must be
/// called from within a Tokio runtime.
pub struct Debounced<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    quiet_period: Duration,
    tx: Arc<watch::Sender<T>>,
    rx: watch::Receiver<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debounced<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a debounced value with the given initial committed value
    pub fn new(initial: T, quiet_period: Duration) -> Self {
        let (tx, rx) = watch::channel(initial);
        Self {
            quiet_period,
            tx: Arc::new(tx),
            rx,
            pending: None,
        }
    }

    /// Feed a raw value change.
    ///
    /// Cancels any pending commit and schedules `value` to be committed
    /// after the quiet period, unless another change arrives first.
    pub fn set(&mut self, value: T) {
        self.cancel();
        let tx = Arc::clone(&self.tx);
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            tx.send_if_modified(|current| {
                if *current != value {
                    *current = value;
                    true
                } else {
                    false
                }
            });
        }));
    }

    /// The last committed value
    pub fn committed(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Subscribe to future commits
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.rx.clone()
    }

    /// Whether a commit is currently scheduled
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the pending commit, if any
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    /// The configured quiet period
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }
}

impl<T> Drop for Debounced<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Instant, sleep, timeout};

    const WINDOW: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_commits_once_after_quiet_period() {
        let mut query = Debounced::new(String::new(), WINDOW);
        let mut rx = query.subscribe();
        let start = Instant::now();

        // "Tanaka" typed character by character, 100ms apart
        for (i, text) in ["T", "Ta", "Tan", "Tana", "Tanak", "Tanaka"]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                sleep(Duration::from_millis(100)).await;
            }
            query.set(text.to_string());
        }

        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow_and_update(), "Tanaka");
        // one commit, exactly one quiet period after the last keystroke
        assert_eq!(start.elapsed(), Duration::from_millis(500) + WINDOW);

        let more = timeout(Duration::from_secs(5), rx.changed()).await;
        assert!(more.is_err(), "no further commit expected");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_changes_each_commit() {
        let mut query = Debounced::new(0u32, WINDOW);
        let mut rx = query.subscribe();

        query.set(1);
        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow_and_update(), 1);

        query.set(2);
        rx.changed().await.expect("sender alive");
        assert_eq!(*rx.borrow_and_update(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_equal_value_does_not_flicker() {
        let mut query = Debounced::new("shoes".to_string(), WINDOW);
        let mut rx = query.subscribe();

        query.set("shoes".to_string());
        let notified = timeout(Duration::from_secs(5), rx.changed()).await;
        assert!(notified.is_err(), "re-setting the committed value is silent");
        assert_eq!(query.committed(), "shoes");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending_commit() {
        let mut query = Debounced::new(String::new(), WINDOW);
        let mut rx = query.subscribe();

        query.set("abandoned".to_string());
        assert!(query.is_pending());
        query.cancel();

        let notified = timeout(Duration::from_secs(5), rx.changed()).await;
        assert!(notified.is_err());
        assert_eq!(query.committed(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_commit() {
        let mut query = Debounced::new(String::new(), WINDOW);
        let mut rx = query.subscribe();

        query.set("late".to_string());
        drop(query);

        // channel closes without a value ever being committed
        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), "");
    }
}
