use std::f64::consts::PI;

use serde::Deserialize;

use crate::constants::{
    AIR_DENSITY_FACTOR, ALTITUDE_LAPSE, ALTITUDE_RANGE, CELSIUS_OFFSET, DEFAULT_ALTITUDE,
    DEFAULT_DENSITY, DEFAULT_DIAMETER, DEFAULT_TEMPERATURE, DENSITY_RANGE, DIAMETER_RANGE,
    TEMPERATURE_RANGE,
};
use crate::errors::SimulationError;

/// The ejected block and the air it flies through.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectilePhysicalParameters {
    pub diameter: f64,    // m
    pub density: f64,     // kg/m³
    pub altitude: f64,    // m above sea level
    pub temperature: f64, // °C
}

impl ProjectilePhysicalParameters {
    pub fn new(diameter: f64, density: f64, altitude: f64, temperature: f64) -> Self {
        ProjectilePhysicalParameters {
            diameter,
            density,
            altitude,
            temperature,
        }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn frontal_area(&self) -> f64 {
        PI * self.radius().powi(2)
    }

    /// Mass of a solid sphere of this diameter and density.
    pub fn mass(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius().powi(3) * self.density
    }

    /// Empirical air density at the configured altitude and temperature.
    pub fn air_density(&self) -> f64 {
        AIR_DENSITY_FACTOR * (1.0 - self.altitude * ALTITUDE_LAPSE)
            / (self.temperature + CELSIUS_OFFSET)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        SimulationError::check_range("diameter", self.diameter, DIAMETER_RANGE)?;
        SimulationError::check_range("density", self.density, DENSITY_RANGE)?;
        SimulationError::check_range("altitude", self.altitude, ALTITUDE_RANGE)?;
        SimulationError::check_range("temperature", self.temperature, TEMPERATURE_RANGE)
    }
}

impl Default for ProjectilePhysicalParameters {
    fn default() -> Self {
        ProjectilePhysicalParameters::new(
            DEFAULT_DIAMETER,
            DEFAULT_DENSITY,
            DEFAULT_ALTITUDE,
            DEFAULT_TEMPERATURE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_geometry() {
        let projectile = ProjectilePhysicalParameters::new(0.6, 2600.0, 5426.0, 20.0);
        assert_relative_eq!(projectile.radius(), 0.3, epsilon = EPSILON);
        assert_relative_eq!(projectile.frontal_area(), PI * 0.09, epsilon = EPSILON);
        assert_relative_eq!(
            projectile.mass(),
            (4.0 / 3.0) * PI * 0.027 * 2600.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_air_density_formula() {
        let projectile = ProjectilePhysicalParameters::new(0.6, 2600.0, 5426.0, 20.0);
        let expected = 348.42 * (1.0 - 5426.0 * 1.05e-4) / 293.0;
        assert_relative_eq!(projectile.air_density(), expected, epsilon = EPSILON);
        assert_relative_eq!(projectile.air_density(), 0.511654, epsilon = 1e-5);
    }

    #[test]
    fn test_air_density_at_sea_level() {
        let projectile = ProjectilePhysicalParameters::new(0.2, 2100.0, 0.0, 15.0);
        assert_relative_eq!(projectile.air_density(), 348.42 / 288.0, epsilon = EPSILON);
    }

    #[test]
    fn test_air_density_thins_with_altitude() {
        let low = ProjectilePhysicalParameters::new(0.4, 2400.0, 1000.0, 10.0);
        let high = ProjectilePhysicalParameters::new(0.4, 2400.0, 8000.0, 10.0);
        assert!(high.air_density() < low.air_density());
        assert!(high.air_density() > 0.0);
    }

    #[test]
    fn test_absolute_zero_degenerates() {
        // -273 °C is inside the accepted range but zeroes the denominator
        let projectile = ProjectilePhysicalParameters::new(0.4, 2400.0, 1000.0, -273.0);
        assert!(projectile.validate().is_ok());
        assert!(projectile.air_density().is_infinite());
    }

    #[test]
    fn test_validate() {
        assert!(ProjectilePhysicalParameters::default().validate().is_ok());
        assert!(ProjectilePhysicalParameters::new(0.7, 2600.0, 0.0, 20.0)
            .validate()
            .is_err());
        assert!(ProjectilePhysicalParameters::new(0.6, 2000.0, 0.0, 20.0)
            .validate()
            .is_err());
        assert!(ProjectilePhysicalParameters::new(0.6, 2600.0, 9000.0, 20.0)
            .validate()
            .is_err());
        assert!(ProjectilePhysicalParameters::new(0.6, 2600.0, 0.0, 60.0)
            .validate()
            .is_err());
    }
}
