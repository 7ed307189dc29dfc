//! Tracker configuration
//!
//! Goal, sip size, tick rate and wave rendering constants. Loaded from an
//! optional TOML file; every field has a default so a partial file works.

use crate::intake::IntakeGoal;
use crate::wave::WaveParameters;
use crate::{Result, WaterlineError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable pointing at a TOML config file
pub const CONFIG_ENV_VAR: &str = "WATERLINE_CONFIG";

/// Configuration for the tracker
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Daily goal in milliliters
    pub total_goal_ml: u32,

    /// Milliliters added per tick while the drink button is held
    pub sip_amount_ml: u32,

    /// Interval between sips while holding
    pub tick_interval_ms: u64,

    /// Wave amplitude as a fraction of half the wave band height
    pub wave_strength: f32,

    /// Number of full sine periods across the window width
    pub wave_frequency: f32,

    /// Height of the band the wave surface is drawn in
    pub wave_height: f32,

    /// Pushes the surface down so an empty tracker shows no water
    pub lowering_offset: f32,

    /// Seconds for the wave phase to complete one loop
    pub phase_period_secs: f32,

    /// Preference file location; the platform config dir when unset
    pub preferences_path: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            total_goal_ml: 2100,
            sip_amount_ml: 5,
            tick_interval_ms: 100,
            wave_strength: 0.1,
            wave_frequency: 3.5,
            wave_height: 70.0,
            lowering_offset: 80.0,
            phase_period_secs: 1.5,
            preferences_path: None,
        }
    }
}

impl TrackerConfig {
    /// Load a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WaterlineError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: TrackerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `WATERLINE_CONFIG` if set, otherwise use defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Set the goal and sip amount
    pub fn with_goal(mut self, total_goal_ml: u32, sip_amount_ml: u32) -> Self {
        self.total_goal_ml = total_goal_ml;
        self.sip_amount_ml = sip_amount_ml;
        self
    }

    /// Set the tick interval
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Store preferences at an explicit path
    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = Some(path.into());
        self
    }

    pub fn goal(&self) -> IntakeGoal {
        IntakeGoal::new(self.total_goal_ml, self.sip_amount_ml)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn wave_parameters(&self) -> WaveParameters {
        WaveParameters::new(self.wave_strength, self.wave_frequency)
    }

    /// Goal expressed in liters, for display
    pub fn goal_liters(&self) -> f64 {
        self.total_goal_ml as f64 / 1000.0
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.total_goal_ml == 0 {
            return Err(WaterlineError::ConfigError(
                "total_goal_ml must be greater than zero".to_string(),
            ));
        }
        if self.sip_amount_ml == 0 {
            return Err(WaterlineError::ConfigError(
                "sip_amount_ml must be greater than zero".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(WaterlineError::ConfigError(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if !self.phase_period_secs.is_finite() || self.phase_period_secs <= 0.0 {
            return Err(WaterlineError::ConfigError(format!(
                "phase_period_secs must be positive, got {}",
                self.phase_period_secs
            )));
        }
        Ok(())
    }
}
