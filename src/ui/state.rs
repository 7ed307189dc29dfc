//! Application state management
//!
//! This module provides the central state for the Waterline UI. The fill
//! state itself lives in the `SipController`; this struct caches the latest
//! snapshot and tracks view-only state.

use crate::config::TrackerConfig;
use crate::intake::{FillState, IntakeEvent, SipController, SipState};
use crate::stats::{DrinkRecord, MockStatistics, StatisticsSource};
use crate::storage::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use crate::wave::PhaseClock;
use crate::{Result, WaterlineError};
use crossbeam_channel::Receiver;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tabs along the bottom of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Statistics,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Statistics, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Statistics => "Statistics",
            Tab::Settings => "Settings",
        }
    }
}

/// Central application state
pub struct AppState {
    /// Tracker configuration
    pub config: TrackerConfig,

    /// Owner of the fill state and sip timer
    pub controller: SipController,

    /// Latest fill state seen from the controller
    pub fill: FillState,

    /// Latest press state seen from the controller
    pub sip_state: SipState,

    /// Whether the drink button is held
    pub is_pressing: bool,

    /// Currently selected tab
    pub selected_tab: Tab,

    /// Drives the wave animation
    pub phase_clock: PhaseClock,

    /// Records shown on the statistics tab
    pub records: Vec<DrinkRecord>,

    /// Set once the goal has been reached since the last reset
    pub goal_reached: bool,

    /// Last error message
    pub last_error: Option<String>,

    events: Receiver<IntakeEvent>,
}

impl AppState {
    /// Create state backed by the preference file from `config`
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;

        let path = config
            .preferences_path
            .clone()
            .or_else(FilePreferenceStore::default_path);

        let mut load_error = None;
        let store: Arc<dyn PreferenceStore> = match path {
            Some(path) => match FilePreferenceStore::open(&path) {
                Ok(store) => {
                    info!("Using preferences at {}", path.display());
                    Arc::new(store)
                }
                Err(e) => {
                    warn!("Ignoring unreadable preferences {}: {}", path.display(), e);
                    load_error = Some(e);
                    Arc::new(MemoryPreferenceStore::new())
                }
            },
            None => {
                warn!("No config directory available, progress will not be saved");
                load_error = Some(WaterlineError::StorageError(
                    "no config directory".to_string(),
                ));
                Arc::new(MemoryPreferenceStore::new())
            }
        };

        let mut state = Self::with_store(config, store);
        state.last_error = load_error.map(|e| e.user_message());
        Ok(state)
    }

    /// Create state with an explicit store
    pub fn with_store(config: TrackerConfig, store: Arc<dyn PreferenceStore>) -> Self {
        let controller = SipController::restore(config.goal(), config.tick_interval(), store);
        let events = controller.subscribe();
        let fill = controller.snapshot();

        Self {
            phase_clock: PhaseClock::from_secs(config.phase_period_secs),
            records: MockStatistics::default().records(),
            goal_reached: fill.is_complete(),
            config,
            controller,
            fill,
            sip_state: SipState::Idle,
            is_pressing: false,
            selected_tab: Tab::Home,
            last_error: None,
            events,
        }
    }

    /// In-memory state with default config, for tests and previews
    pub fn in_memory() -> Self {
        Self::with_store(
            TrackerConfig::default(),
            Arc::new(MemoryPreferenceStore::new()),
        )
    }

    /// Drink button went down
    pub fn press_start(&mut self) {
        if self.is_pressing {
            return;
        }
        self.is_pressing = true;
        self.controller.press_start();
    }

    /// Drink button came up
    pub fn press_end(&mut self) {
        if !self.is_pressing {
            return;
        }
        self.is_pressing = false;
        self.controller.press_end();
    }

    /// Switch tabs. Leaving home releases a held drink button.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab != Tab::Home {
            self.press_end();
        }
        self.selected_tab = tab;
    }

    /// Empty the tracker
    pub fn reset(&mut self) {
        self.controller.reset();
        self.poll_events();
    }

    /// Drain controller events into the cached view state
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                IntakeEvent::Changed(fill) => {
                    self.fill = fill;
                }
                IntakeEvent::Exhausted => {
                    self.goal_reached = true;
                    debug!("Goal reached, sip timer idle");
                }
                IntakeEvent::Reset(fill) => {
                    self.fill = fill;
                    self.goal_reached = false;
                }
                IntakeEvent::StateChanged(state) => {
                    self.sip_state = state;
                }
                IntakeEvent::PersistFailed(e) => {
                    self.last_error = Some(e.user_message());
                }
            }
        }
    }

    /// Current wave phase from the animation clock
    pub fn wave_phase(&self) -> f32 {
        self.phase_clock.phase()
    }

    /// Liters drunk so far
    pub fn consumed_liters(&self) -> f64 {
        self.fill.consumed_liters(&self.controller.goal())
    }
}
