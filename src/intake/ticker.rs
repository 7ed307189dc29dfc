//! Cancellable periodic task
//!
//! A dedicated thread waits on a crossbeam `tick` channel and runs the
//! callback once per interval. Each callback runs while holding the handle's
//! gate, and `cancel()` takes the same gate, so once `cancel()` returns no
//! callback is running and none will run again.

use crossbeam_channel::{bounded, select, tick, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Returned by the tick callback to keep going or stop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Handle to a running periodic task
pub struct TickHandle {
    gate: Arc<Mutex<bool>>,
    cancel_tx: Option<Sender<()>>,
}

impl TickHandle {
    /// Start calling `on_tick` every `interval`, first call one interval from now
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> TickControl + Send + 'static,
    {
        let gate = Arc::new(Mutex::new(false));
        let (cancel_tx, cancel_rx) = bounded::<()>(1);
        let thread_gate = Arc::clone(&gate);

        let spawned = thread::Builder::new()
            .name("sip-ticker".to_string())
            .spawn(move || {
                let ticker = tick(interval);
                loop {
                    select! {
                        recv(cancel_rx) -> _ => break,
                        recv(ticker) -> _ => {
                            let cancelled = thread_gate.lock();
                            if *cancelled {
                                break;
                            }
                            if on_tick() == TickControl::Stop {
                                break;
                            }
                        }
                    }
                }
                debug!("Sip ticker stopped");
            });

        // The worker is detached; it exits on its own once cancelled
        if let Err(e) = spawned {
            warn!("Failed to spawn sip ticker: {}", e);
            *gate.lock() = true;
        }

        Self {
            gate,
            cancel_tx: Some(cancel_tx),
        }
    }

    /// Stop the task. Waits for an in-flight callback, then guarantees no more.
    pub fn cancel(&mut self) {
        *self.gate.lock() = true;
        // Dropping the sender wakes the thread so it exits promptly
        self.cancel_tx.take();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.gate.lock()
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_ticks_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let mut handle = TickHandle::spawn(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            TickControl::Continue
        });

        thread::sleep(Duration::from_millis(60));
        handle.cancel();
        let after_cancel = count.load(Ordering::SeqCst);
        assert!(after_cancel > 0);

        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut handle = TickHandle::spawn(Duration::from_millis(5), || TickControl::Continue);
        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
        drop(handle);
    }

    #[test]
    fn test_stop_from_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let handle = TickHandle::spawn(Duration::from_millis(2), move || {
            if counter.fetch_add(1, Ordering::SeqCst) + 1 >= 3 {
                TickControl::Stop
            } else {
                TickControl::Continue
            }
        });

        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), 3);
        // Nothing runs after the callback asked to stop
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn test_cancel_waits_for_in_flight_tick() {
        let done = Arc::new(AtomicUsize::new(0));
        let started = Arc::new(AtomicUsize::new(0));
        let (d, s) = (Arc::clone(&done), Arc::clone(&started));
        let mut handle = TickHandle::spawn(Duration::from_millis(1), move || {
            s.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(20));
            d.fetch_add(1, Ordering::SeqCst);
            TickControl::Continue
        });

        while started.load(Ordering::SeqCst) == 0 {
            thread::sleep(Duration::from_millis(1));
        }
        handle.cancel();
        // Every started tick finished before cancel returned
        assert_eq!(started.load(Ordering::SeqCst), done.load(Ordering::SeqCst));
    }
}
