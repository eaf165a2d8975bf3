use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    CLOSED_FORM_DURATION, CLOSED_FORM_SAMPLES, CRATER_HEIGHT, GRAVITY, MAX_STEPS, TIME_STEP,
};
use crate::errors::SimulationError;
use crate::parameters::launch::LaunchParameters;
use crate::parameters::projectile::ProjectilePhysicalParameters;

/// Where the drag run starts vertically.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialHeight {
    /// Fixed crater height, independent of the launch parameters.
    #[default]
    Crater,
    /// Same height as the drag-free run.
    Launch,
}

impl InitialHeight {
    pub fn resolve(&self, launch: &LaunchParameters) -> f64 {
        match self {
            InitialHeight::Crater => CRATER_HEIGHT,
            InitialHeight::Launch => launch.initial_height,
        }
    }
}

/// Which value the report shows as the drag run's final speed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalSpeedMode {
    /// Speed of the last recorded state.
    #[default]
    Literal,
    /// Magnitude built from the smallest vx and the smallest vy seen in flight.
    AxisMinima,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity: f64,         // m/s²
    pub time_step: f64,       // s
    pub max_steps: usize,
    pub sample_count: usize,  // closed-form grid points
    pub sample_duration: f64, // s
    pub initial_height: InitialHeight,
    pub final_speed: FinalSpeedMode,
}

impl SimulationConfig {
    /// Evenly spaced closed-form sample times over `[0, sample_duration]`, endpoints included.
    pub fn sample_times(&self) -> Vec<f64> {
        match self.sample_count {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let spacing = self.sample_duration / (n - 1) as f64;
                (0..n).map(|i| i as f64 * spacing).collect()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.gravity > 0.0 && self.gravity.is_finite()) {
            return Err(SimulationError::ConfigError(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(SimulationError::ConfigError(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if !(self.sample_duration >= 0.0 && self.sample_duration.is_finite()) {
            return Err(SimulationError::ConfigError(format!(
                "sample_duration must be non-negative, got {}",
                self.sample_duration
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravity: GRAVITY,
            time_step: TIME_STEP,
            max_steps: MAX_STEPS,
            sample_count: CLOSED_FORM_SAMPLES,
            sample_duration: CLOSED_FORM_DURATION,
            initial_height: InitialHeight::default(),
            final_speed: FinalSpeedMode::default(),
        }
    }
}

/// Everything one run needs, as read from a TOML file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub launch: LaunchParameters,
    pub projectile: ProjectilePhysicalParameters,
    pub simulation: SimulationConfig,
}

impl Scenario {
    pub fn from_toml_str(contents: &str) -> Result<Self, SimulationError> {
        toml::from_str(contents).map_err(|e| SimulationError::ConfigError(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            SimulationError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let scenario = Self::from_toml_str(&contents)?;
        log::debug!("Loaded scenario from {}", path.display());
        Ok(scenario)
    }
}
