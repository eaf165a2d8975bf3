use serde::Deserialize;

use crate::constants::{
    DEFAULT_INITIAL_HEIGHT, DEFAULT_INITIAL_SPEED, DEFAULT_LAUNCH_ANGLE, INITIAL_HEIGHT_RANGE,
    INITIAL_SPEED_RANGE, LAUNCH_ANGLE_RANGE,
};
use crate::errors::SimulationError;
use crate::utils::vector2d::Vector2D;

/// How the projectile leaves the crater.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LaunchParameters {
    pub initial_speed: f64,  // m/s
    pub launch_angle: f64,   // degrees above horizontal
    pub initial_height: f64, // m
}

impl LaunchParameters {
    pub fn new(initial_speed: f64, launch_angle: f64, initial_height: f64) -> Self {
        LaunchParameters {
            initial_speed,
            launch_angle,
            initial_height,
        }
    }

    pub fn initial_velocity(&self) -> Vector2D {
        Vector2D::from_polar_degrees(self.initial_speed, self.launch_angle)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        SimulationError::check_range("initial_speed", self.initial_speed, INITIAL_SPEED_RANGE)?;
        SimulationError::check_range("launch_angle", self.launch_angle, LAUNCH_ANGLE_RANGE)?;
        SimulationError::check_range("initial_height", self.initial_height, INITIAL_HEIGHT_RANGE)
    }
}

impl Default for LaunchParameters {
    fn default() -> Self {
        LaunchParameters::new(
            DEFAULT_INITIAL_SPEED,
            DEFAULT_LAUNCH_ANGLE,
            DEFAULT_INITIAL_HEIGHT,
        )
    }
}
