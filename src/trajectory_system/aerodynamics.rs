use crate::errors::SimulationError;
use crate::parameters::projectile::ProjectilePhysicalParameters;
use crate::utils::vector2d::Vector2D;

/// Drag quantities derived once per run from the projectile and launch speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragCoefficients {
    pub radius: f64,           // m
    pub frontal_area: f64,     // m²
    pub mass: f64,             // kg
    pub air_density: f64,      // kg/m³
    pub drag_coefficient: f64, // dimensionless k
    pub drag_constant: f64,    // lumped D = rho_air * k * A / 2, kg/m
}

impl DragCoefficients {
    /// Derives the coefficients without validating anything; degenerate inputs give NaN/inf.
    ///
    /// The drag coefficient is scaled so that drag balances gravity at the launch
    /// speed, which is why `initial_speed` takes part in the derivation.
    pub fn derive(
        projectile: &ProjectilePhysicalParameters,
        initial_speed: f64,
        gravity: f64,
    ) -> Self {
        let radius = projectile.radius();
        let frontal_area = projectile.frontal_area();
        let mass = projectile.mass();
        let air_density = projectile.air_density();
        let drag_coefficient =
            (2.0 * mass * gravity) / (air_density * frontal_area * initial_speed.powi(2));
        let drag_constant = (air_density * drag_coefficient * frontal_area) / 2.0;

        DragCoefficients {
            radius,
            frontal_area,
            mass,
            air_density,
            drag_coefficient,
            drag_constant,
        }
    }

    /// Coefficients for a drag-free body of the given mass.
    pub fn vacuum(mass: f64) -> Self {
        DragCoefficients {
            radius: 0.0,
            frontal_area: 0.0,
            mass,
            air_density: 0.0,
            drag_coefficient: 0.0,
            drag_constant: 0.0,
        }
    }

    /// D/m, the factor multiplying `v * v_axis` in the acceleration terms.
    pub fn drag_per_mass(&self) -> f64 {
        self.drag_constant / self.mass
    }

    /// Acceleration from gravity and quadratic drag.
    ///
    /// `speed` is passed separately from `velocity` so the integrator can pair an
    /// older speed magnitude with newer components.
    pub fn acceleration(&self, speed: f64, velocity: Vector2D, gravity: f64) -> Vector2D {
        let k = self.drag_per_mass();
        Vector2D::new(-k * speed * velocity.x, -gravity - k * speed * velocity.y)
    }

    /// Rejects coefficients that would make the integrator diverge or produce NaN.
    pub fn check(&self) -> Result<(), SimulationError> {
        let named = [
            ("frontal area", self.frontal_area),
            ("mass", self.mass),
            ("air density", self.air_density),
            ("drag coefficient", self.drag_coefficient),
            ("drag constant", self.drag_constant),
        ];
        for (name, value) in named {
            if !value.is_finite() || value <= 0.0 {
                log::warn!("Degenerate {}: {}", name, value);
                return Err(SimulationError::NumericDegeneracy(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-9;

    fn reference_projectile() -> ProjectilePhysicalParameters {
        ProjectilePhysicalParameters::new(0.6, 2600.0, 5426.0, 20.0)
    }

    #[test]
    fn test_derive_reference_values() {
        let projectile = reference_projectile();
        let coefficients = DragCoefficients::derive(&projectile, 250.0, 9.8);

        let expected_k = (2.0 * projectile.mass() * 9.8)
            / (projectile.air_density() * projectile.frontal_area() * 250.0_f64.powi(2));
        let expected_d = projectile.air_density() * expected_k * projectile.frontal_area() / 2.0;

        assert_relative_eq!(coefficients.drag_coefficient, expected_k, epsilon = EPSILON);
        assert_relative_eq!(coefficients.drag_constant, expected_d, epsilon = EPSILON);
        assert_relative_eq!(coefficients.mass, 294.0530723, epsilon = 1e-6);
        assert_relative_eq!(coefficients.drag_coefficient, 0.637431, epsilon = 1e-5);
    }

    #[test]
    fn test_drag_balances_gravity_at_launch_speed() {
        for (diameter, density, speed) in [(0.2, 2100.0, 150.0), (0.45, 2350.0, 210.0)] {
            let projectile = ProjectilePhysicalParameters::new(diameter, density, 3000.0, 5.0);
            let coefficients = DragCoefficients::derive(&projectile, speed, 9.8);
            assert_relative_eq!(
                coefficients.drag_per_mass() * speed * speed,
                9.8,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_acceleration_terms() {
        let coefficients = DragCoefficients::derive(&reference_projectile(), 250.0, 9.8);
        let velocity = Vector2D::new(100.0, -50.0);
        let accel = coefficients.acceleration(120.0, velocity, 9.8);
        let k = coefficients.drag_per_mass();

        assert_relative_eq!(accel.x, -k * 120.0 * 100.0, epsilon = EPSILON);
        assert_relative_eq!(accel.y, -9.8 + k * 120.0 * 50.0, epsilon = EPSILON);
    }

    #[test]
    fn test_vacuum_has_only_gravity() {
        let accel = DragCoefficients::vacuum(10.0).acceleration(
            300.0,
            Vector2D::new(200.0, 150.0),
            9.8,
        );
        assert_eq!(accel, Vector2D::new(-0.0, -9.8));
    }

    #[test]
    fn test_check_accepts_reference() {
        let coefficients = DragCoefficients::derive(&reference_projectile(), 250.0, 9.8);
        assert!(coefficients.check().is_ok());
    }

    #[test]
    fn test_check_rejects_degenerate_air() {
        let frozen = ProjectilePhysicalParameters::new(0.6, 2600.0, 5426.0, -273.0);
        let coefficients = DragCoefficients::derive(&frozen, 250.0, 9.8);
        assert!(matches!(
            coefficients.check(),
            Err(SimulationError::NumericDegeneracy(_))
        ));
    }

    #[test]
    fn test_check_rejects_vacuum() {
        assert!(DragCoefficients::vacuum(5.0).check().is_err());
    }
}
