use crate::utils::vector2d::Vector2D;

use super::aerodynamics::DragCoefficients;

/// Snapshot of the projectile at one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub time: f64,
    pub position: Vector2D,
    pub speed: f64,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
}

impl KinematicState {
    /// State at t = 0: launch velocity at `launch_site` with the matching drag acceleration.
    pub fn launch(
        launch_site: Vector2D,
        initial_speed: f64,
        initial_velocity: Vector2D,
        coefficients: &DragCoefficients,
        gravity: f64,
    ) -> Self {
        KinematicState {
            time: 0.0,
            position: launch_site,
            speed: initial_speed,
            velocity: initial_velocity,
            acceleration: coefficients.acceleration(initial_speed, initial_velocity, gravity),
        }
    }

    /// One explicit step of the reference scheme.
    ///
    /// Velocity advances with the current acceleration. Position advances with
    /// the current velocity plus the half-step acceleration correction. The new
    /// acceleration pairs the current speed magnitude with the new velocity
    /// components.
    pub fn advance(&self, delta_time: f64, coefficients: &DragCoefficients, gravity: f64) -> Self {
        let velocity = self.velocity + self.acceleration * delta_time;
        let speed = velocity.magnitude();
        let position = self.position
            + self.velocity * delta_time
            + self.acceleration * 0.5 * delta_time.powi(2);
        let acceleration = coefficients.acceleration(self.speed, velocity, gravity);

        KinematicState {
            time: self.time + delta_time,
            position,
            speed,
            velocity,
            acceleration,
        }
    }

    pub fn is_below_ground(&self) -> bool {
        self.position.y < 0.0
    }
}
