//! Polling utilities — fetch loops, debounce windows, stale-response guards.
//!
//! The backend has no push channel, so every live view polls. These helpers
//! encode the three interaction patterns the dashboard needs:
//!
//! - [`interval_stream`] — fetch-then-sleep loop; dropping the stream stops
//!   the loop, which is how a view cancels its poller on teardown.
//! - [`Debouncer`] — restart-on-keystroke quiet window for autocomplete;
//!   superseded windows never dispatch a request.
//! - [`RequestSequencer`] — monotonic tickets so a slow in-flight response
//!   can never overwrite state written by a newer one.
//!
//! Everything here is runtime-agnostic (`futures-timer`), same as the HTTP
//! retry delays.

use futures_util::stream::Stream;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Repeatedly run `fetch`, yielding each result, then sleeping `period`.
///
/// The first fetch fires immediately. Errors are yielded like successes; the
/// loop keeps going so one failed poll does not kill a ticker.
pub fn interval_stream<T, F, Fut>(period: Duration, mut fetch: F) -> impl Stream<Item = T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = T>,
{
    async_stream::stream! {
        loop {
            yield fetch().await;
            futures_timer::Delay::new(period).await;
        }
    }
}

/// Restartable quiet window for search-as-you-type.
///
/// Every call to [`wait`](Self::wait) opens a new window and invalidates any
/// window still pending. A call resolves `true` only if it is still the
/// newest when its window elapses; callers dispatch the network request on
/// `true` and drop the keystroke otherwise.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: AtomicU64::new(0),
        }
    }

    /// Wait out the quiet window. `false` means a newer call superseded this one.
    pub async fn wait(&self) -> bool {
        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        futures_timer::Delay::new(self.window).await;
        self.generation.load(Ordering::SeqCst) == my_generation
    }
}

/// Monotonic request tickets for fast-polling views.
///
/// A poller takes a ticket with [`begin`](Self::begin) before dispatching,
/// and calls [`accept`](Self::accept) when the response lands. A response is
/// accepted only if nothing newer has been applied yet, so a slow response
/// racing a fresher one can never clobber state.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. Tickets start at 1; 0 means "nothing applied".
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Try to apply the response for `ticket`. Returns `false` (and logs)
    /// when a newer response already won.
    pub fn accept(&self, ticket: u64) -> bool {
        let mut newest = self.applied.load(Ordering::SeqCst);
        loop {
            if ticket <= newest {
                tracing::warn!(ticket, newest, "Dropping stale poll response");
                return false;
            }
            match self.applied.compare_exchange(
                newest,
                ticket,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(current) => newest = current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::sync::atomic::AtomicU32;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_interval_stream_yields_in_order() {
        let counter = Arc::new(AtomicU32::new(0));
        let stream = {
            let counter = counter.clone();
            interval_stream(Duration::from_millis(1), move || {
                let counter = counter.clone();
                async move { counter.fetch_add(1, Ordering::SeqCst) }
            })
        };
        let first_three: Vec<u32> = stream.take(3).collect().await;
        assert_eq!(first_three, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_interval_stream_stops_when_dropped() {
        let counter = Arc::new(AtomicU32::new(0));
        {
            let counter = counter.clone();
            let stream = interval_stream(Duration::from_millis(1), move || {
                let counter = counter.clone();
                async move { counter.fetch_add(1, Ordering::SeqCst) }
            });
            let _ = Box::pin(stream).next().await;
        }
        let after_drop = counter.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(counter.load(Ordering::SeqCst), after_drop);
    }

    #[tokio::test]
    async fn test_debouncer_quiet_window_fires() {
        let debouncer = Debouncer::new(Duration::from_millis(5));
        assert!(debouncer.wait().await);
    }

    #[tokio::test]
    async fn test_debouncer_superseded_window_dropped() {
        let debouncer = Arc::new(Debouncer::new(Duration::from_millis(20)));
        let first = {
            let debouncer = debouncer.clone();
            tokio::spawn(async move { debouncer.wait().await })
        };
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = debouncer.wait().await;
        assert!(second);
        assert!(!first.await.unwrap());
    }

    #[test]
    fn test_sequencer_accepts_in_order() {
        let seq = RequestSequencer::new();
        let t1 = seq.begin();
        let t2 = seq.begin();
        assert!(seq.accept(t1));
        assert!(seq.accept(t2));
    }

    #[test]
    fn test_sequencer_rejects_stale_response() {
        let seq = RequestSequencer::new();
        let slow = seq.begin();
        let fast = seq.begin();
        // The newer request's response arrives first.
        assert!(seq.accept(fast));
        assert!(!seq.accept(slow));
    }

    #[test]
    fn test_sequencer_rejects_duplicate_apply() {
        let seq = RequestSequencer::new();
        let t = seq.begin();
        assert!(seq.accept(t));
        assert!(!seq.accept(t));
    }
}
