//! Integration tests for the debouncer's coalescing guarantees.
//!
//! All timing runs on tokio's paused clock, so the quiet-period arithmetic
//! is exact and the tests finish instantly.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::{Arc, Mutex};
use std::time::Duration;

use typeahead_runtime::Debouncer;

fn recording_debouncer(delay_ms: u64) -> (Debouncer<String>, Arc<Mutex<Vec<String>>>) {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&fired);
    let debouncer = Debouncer::new(Duration::from_millis(delay_ms), move |query: String| {
        sink.lock().unwrap().push(query);
    });
    (debouncer, fired)
}

/// Triggers at t=0, 50, 90, 130 ms with a 100 ms window fire exactly once,
/// at t=230 ms, carrying the query from the t=130 ms event.
#[tokio::test(start_paused = true)]
async fn coalesces_burst_into_single_fire() {
    let (mut debouncer, fired) = recording_debouncer(100);

    debouncer.schedule("a".to_owned());
    tokio::time::sleep(Duration::from_millis(50)).await;
    debouncer.schedule("as".to_owned());
    tokio::time::sleep(Duration::from_millis(40)).await;
    debouncer.schedule("asu".to_owned());
    tokio::time::sleep(Duration::from_millis(40)).await;
    debouncer.schedule("asun".to_owned());

    // t=229 ms: one tick short of the quiet window, nothing fired.
    tokio::time::sleep(Duration::from_millis(99)).await;
    assert!(fired.lock().unwrap().is_empty());

    // t=231 ms: the window ended at 230 ms with the last query.
    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(*fired.lock().unwrap(), vec!["asun".to_owned()]);

    // No duplicate fire ever arrives for the same run.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(fired.lock().unwrap().len(), 1);
}

/// Every quiet run fires independently; the debouncer is reusable.
#[tokio::test(start_paused = true)]
async fn fires_once_per_quiet_run() {
    let (mut debouncer, fired) = recording_debouncer(100);

    debouncer.schedule("first".to_owned());
    tokio::time::sleep(Duration::from_millis(150)).await;
    debouncer.schedule("second".to_owned());
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(
        *fired.lock().unwrap(),
        vec!["first".to_owned(), "second".to_owned()]
    );
}

/// `cancel()` invalidates a pending timer without firing.
#[tokio::test(start_paused = true)]
async fn cancel_suppresses_pending_fire() {
    let (mut debouncer, fired) = recording_debouncer(100);

    debouncer.schedule("doomed".to_owned());
    debouncer.cancel();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(fired.lock().unwrap().is_empty());
    assert!(!debouncer.is_armed());

    // Cancel with nothing pending is a no-op.
    debouncer.cancel();
}

/// Dropping the debouncer tears the timer down deterministically.
#[tokio::test(start_paused = true)]
async fn drop_aborts_pending_timer() {
    let fired = Arc::new(Mutex::new(Vec::new()));
    {
        let sink = Arc::clone(&fired);
        let mut debouncer = Debouncer::new(Duration::from_millis(100), move |query: String| {
            sink.lock().unwrap().push(query);
        });
        debouncer.schedule("doomed".to_owned());
    }
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(fired.lock().unwrap().is_empty());
}

/// A zero quiet period collapses to an immediate, synchronous fire — the
/// path explicit submit actions use.
#[tokio::test(start_paused = true)]
async fn zero_delay_bypasses_the_window() {
    let (mut debouncer, fired) = recording_debouncer(0);

    debouncer.schedule("submit".to_owned());
    assert_eq!(*fired.lock().unwrap(), vec!["submit".to_owned()]);

    debouncer.schedule("again".to_owned());
    assert_eq!(fired.lock().unwrap().len(), 2);
}
