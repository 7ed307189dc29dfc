//! Thread-safe owner of the fill state
//!
//! The UI calls `press_start` / `press_end` / `reset`; a tick thread applies
//! sips while the press is held. All mutation happens under one mutex, and
//! every change is persisted and broadcast to subscribers in mutation order.
//!
//! Lock order is ticker slot, then ticker gate, then accumulator, then
//! subscribers. The tick thread only ever takes the last three.

use super::accumulator::{FillState, IntakeGoal, SipAccumulator, SipState, TickOutcome};
use super::ticker::{TickControl, TickHandle};
use crate::storage::{PreferenceStore, FILL_FRACTION_KEY};
use crate::WaterlineError;
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Notifications for the render layer
#[derive(Clone, Debug, PartialEq)]
pub enum IntakeEvent {
    /// A sip changed the fill state
    Changed(FillState),
    /// The goal was reached; ticking stopped
    Exhausted,
    /// Fill state went back to empty
    Reset(FillState),
    /// Press state changed
    StateChanged(SipState),
    /// The fill fraction could not be written to the preference store
    PersistFailed(WaterlineError),
}

struct Shared {
    accumulator: Mutex<SipAccumulator>,
    store: Option<Arc<dyn PreferenceStore>>,
    subscribers: Mutex<Vec<Sender<IntakeEvent>>>,
}

impl Shared {
    fn notify(&self, event: IntakeEvent) {
        self.subscribers
            .lock()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn persist(&self, fill: FillState) {
        if let Some(store) = &self.store {
            if let Err(e) = store.set_f64(FILL_FRACTION_KEY, fill.fraction) {
                warn!("Failed to persist fill fraction: {}", e);
                self.notify(IntakeEvent::PersistFailed(e));
            }
        }
    }

    /// One tick of the sip timer. Runs on the ticker thread.
    fn on_tick(&self) -> TickControl {
        let mut accumulator = self.accumulator.lock();
        match accumulator.tick() {
            TickOutcome::Sipped(fill) => {
                self.persist(fill);
                self.notify(IntakeEvent::Changed(fill));
                TickControl::Continue
            }
            TickOutcome::Exhausted => {
                info!("Daily goal reached");
                self.notify(IntakeEvent::Exhausted);
                self.notify(IntakeEvent::StateChanged(SipState::Idle));
                TickControl::Stop
            }
            TickOutcome::Ignored => TickControl::Stop,
        }
    }
}

/// Owns the fill state and the sip timer
pub struct SipController {
    shared: Arc<Shared>,
    ticker: Mutex<Option<TickHandle>>,
    interval: Duration,
}

impl SipController {
    /// Create a controller starting from an empty fill state
    pub fn new(goal: IntakeGoal, interval: Duration) -> Self {
        Self::with_accumulator(SipAccumulator::new(goal), interval, None)
    }

    /// Create a controller restored from the store's persisted fraction
    pub fn restore(
        goal: IntakeGoal,
        interval: Duration,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        let fraction = store.get_f64_or(FILL_FRACTION_KEY, 0.0);
        let accumulator = SipAccumulator::from_fraction(goal, fraction);
        info!(
            "Restored fill fraction {:.3} ({} ml remaining)",
            accumulator.fill().fraction,
            accumulator.fill().remaining
        );
        Self::with_accumulator(accumulator, interval, Some(store))
    }

    fn with_accumulator(
        accumulator: SipAccumulator,
        interval: Duration,
        store: Option<Arc<dyn PreferenceStore>>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                accumulator: Mutex::new(accumulator),
                store,
                subscribers: Mutex::new(Vec::new()),
            }),
            ticker: Mutex::new(None),
            interval,
        }
    }

    /// Receive every subsequent change, in order
    pub fn subscribe(&self) -> Receiver<IntakeEvent> {
        let (tx, rx) = unbounded();
        self.shared.subscribers.lock().push(tx);
        rx
    }

    pub fn snapshot(&self) -> FillState {
        self.shared.accumulator.lock().fill()
    }

    pub fn fraction(&self) -> f64 {
        self.snapshot().fraction
    }

    pub fn state(&self) -> SipState {
        self.shared.accumulator.lock().state()
    }

    pub fn goal(&self) -> IntakeGoal {
        self.shared.accumulator.lock().goal()
    }

    pub fn tick_interval(&self) -> Duration {
        self.interval
    }

    /// Start sipping. No-op while already accumulating.
    pub fn press_start(&self) {
        let mut slot = self.ticker.lock();

        {
            let mut accumulator = self.shared.accumulator.lock();
            if !accumulator.press_start() {
                return;
            }
            self.shared.notify(IntakeEvent::StateChanged(SipState::Accumulating));
        }

        // A previous ticker may still exist if it stopped itself on exhaustion
        if let Some(mut previous) = slot.take() {
            previous.cancel();
        }

        let shared = Arc::clone(&self.shared);
        *slot = Some(TickHandle::spawn(self.interval, move || shared.on_tick()));
        debug!("Sip timer started ({:?} interval)", self.interval);
    }

    /// Stop sipping. Once this returns no further sip is applied.
    pub fn press_end(&self) {
        let mut slot = self.ticker.lock();
        if let Some(ticker) = slot.as_mut() {
            ticker.cancel();
        }
        *slot = None;

        let mut accumulator = self.shared.accumulator.lock();
        if accumulator.press_end() {
            self.shared.notify(IntakeEvent::StateChanged(SipState::Idle));
            debug!("Sip timer stopped at {:.3}", accumulator.fill().fraction);
        }
    }

    /// Empty the tracker and stop any running sip timer
    pub fn reset(&self) {
        let mut slot = self.ticker.lock();
        if let Some(ticker) = slot.as_mut() {
            ticker.cancel();
        }
        *slot = None;

        let mut accumulator = self.shared.accumulator.lock();
        let was_accumulating = accumulator.state().is_accumulating();
        accumulator.reset();
        let fill = accumulator.fill();

        self.shared.persist(fill);
        if was_accumulating {
            self.shared.notify(IntakeEvent::StateChanged(SipState::Idle));
        }
        self.shared.notify(IntakeEvent::Reset(fill));
        info!("Intake reset");
    }
}

impl Drop for SipController {
    fn drop(&mut self) {
        if let Some(mut ticker) = self.ticker.lock().take() {
            ticker.cancel();
        }
    }
}
