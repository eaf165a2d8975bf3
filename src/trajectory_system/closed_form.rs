use crate::parameters::launch::LaunchParameters;
use crate::utils::vector2d::Vector2D;

/// One sample of the drag-free parabola.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub time: f64,
    pub position: Vector2D,
}

/// Analytic impact figures of the drag-free flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub flight_time: f64,          // s
    pub final_vertical_speed: f64, // m/s, negative when falling
    pub final_speed: f64,          // m/s
    pub final_distance: f64,       // m
}

/// Drag-free projectile motion from the launch parameters alone.
///
/// Every method is a pure function of the launch parameters and gravity.
/// Angles outside (0°, 90°) are not rejected here.
#[derive(Debug, Clone, Copy)]
pub struct ClosedFormSolver {
    launch: LaunchParameters,
    initial_velocity: Vector2D,
    gravity: f64,
}

impl ClosedFormSolver {
    pub fn new(launch: LaunchParameters, gravity: f64) -> Self {
        ClosedFormSolver {
            launch,
            initial_velocity: launch.initial_velocity(),
            gravity,
        }
    }

    pub fn initial_velocity(&self) -> Vector2D {
        self.initial_velocity
    }

    pub fn position_at(&self, time: f64) -> Vector2D {
        Vector2D::new(
            self.initial_velocity.x * time,
            -(self.gravity / 2.0) * time.powi(2)
                + self.initial_velocity.y * time
                + self.launch.initial_height,
        )
    }

    pub fn trajectory(&self, times: &[f64]) -> Vec<TrajectoryPoint> {
        times
            .iter()
            .map(|&time| TrajectoryPoint {
                time,
                position: self.position_at(time),
            })
            .collect()
    }

    /// Positive root of `h0 + v0y*t - (g/2)*t² = 0`.
    pub fn flight_time(&self) -> f64 {
        let vy = self.initial_velocity.y;
        let discriminant = vy.powi(2) + 2.0 * self.gravity * self.launch.initial_height;
        (vy + discriminant.sqrt()) / self.gravity
    }

    pub fn impact(&self) -> Impact {
        let flight_time = self.flight_time();
        let final_vertical_speed = self.initial_velocity.y - self.gravity * flight_time;
        Impact {
            flight_time,
            final_vertical_speed,
            final_speed: Vector2D::new(self.initial_velocity.x, final_vertical_speed).magnitude(),
            final_distance: self.initial_velocity.x * flight_time,
        }
    }

    /// Time and height of the single maximum of y(t).
    pub fn apex(&self) -> (f64, f64) {
        let time = self.initial_velocity.y / self.gravity;
        (time, self.position_at(time).y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const G: f64 = 9.8;

    fn bisect_landing(solver: &ClosedFormSolver) -> f64 {
        // y is positive at the apex and negative well past the analytic landing time
        let (mut lo, _) = solver.apex();
        let mut hi = 1_000.0;
        for _ in 0..200 {
            let mid = 0.5 * (lo + hi);
            if solver.position_at(mid).y > 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }

    #[test]
    fn test_starts_at_initial_height() {
        for &(speed, angle, height) in &[(250.0, 48.5, 3800.0), (150.0, 40.0, 0.0), (200.0, 75.0, 1234.0)] {
            let solver = ClosedFormSolver::new(LaunchParameters::new(speed, angle, height), G);
            let origin = solver.position_at(0.0);
            assert_eq!(origin.x, 0.0);
            assert_eq!(origin.y, height);
        }
    }

    #[test]
    fn test_ground_level_flight_time_is_classic_formula() {
        for &(speed, angle) in &[(150.0, 40.0), (200.0, 45.0), (250.0, 63.2)] {
            let solver = ClosedFormSolver::new(LaunchParameters::new(speed, angle, 0.0), G);
            let expected = 2.0 * speed * f64::to_radians(angle).sin() / G;
            assert_relative_eq!(solver.flight_time(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_flight_time_matches_root_finding() {
        let solver = ClosedFormSolver::new(LaunchParameters::new(250.0, 45.0, 3800.0), G);
        let t_total = solver.flight_time();
        assert_abs_diff_eq!(t_total, bisect_landing(&solver), epsilon = 1e-6);
        assert_abs_diff_eq!(solver.position_at(t_total).y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(t_total, 51.2, epsilon = 0.05);
    }

    #[test]
    fn test_impact_figures() {
        let solver = ClosedFormSolver::new(LaunchParameters::new(250.0, 48.5, 3800.0), G);
        let impact = solver.impact();
        let v0 = solver.initial_velocity();

        assert_relative_eq!(
            impact.final_vertical_speed,
            v0.y - G * impact.flight_time,
            epsilon = 1e-9
        );
        assert!(impact.final_vertical_speed < 0.0);
        assert_relative_eq!(impact.final_distance, v0.x * impact.flight_time, epsilon = 1e-9);
        // Energy conservation: v_f² = v0² + 2 g h0
        assert_relative_eq!(
            impact.final_speed,
            (250.0_f64.powi(2) + 2.0 * G * 3800.0).sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_horizontal_motion_is_linear() {
        let solver = ClosedFormSolver::new(LaunchParameters::new(220.0, 52.0, 500.0), G);
        let vx = solver.initial_velocity().x;
        for t in [0.5, 3.0, 17.25, 60.0] {
            assert_relative_eq!(solver.position_at(t).x, vx * t, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_single_maximum_at_apex() {
        let launch = LaunchParameters::new(230.0, 55.0, 3800.0);
        let solver = ClosedFormSolver::new(launch, G);
        let times: Vec<f64> = (0..2000).map(|i| i as f64 * 100.0 / 1999.0).collect();
        let points = solver.trajectory(&times);

        let ys: Vec<f64> = points.iter().map(|p| p.position.y).collect();
        let peak_index = ys
            .iter()
            .enumerate()
            .fold(0, |best, (i, &y)| if y > ys[best] { i } else { best });

        assert!(ys[..peak_index].windows(2).all(|w| w[1] > w[0]));
        assert!(ys[peak_index..].windows(2).all(|w| w[1] < w[0]));

        let (apex_time, apex_height) = solver.apex();
        assert_relative_eq!(apex_time, 230.0 * f64::to_radians(55.0).sin() / G, epsilon = 1e-9);
        assert_abs_diff_eq!(points[peak_index].time, apex_time, epsilon = 100.0 / 1999.0);
        assert!(apex_height >= ys[peak_index]);
    }

    #[test]
    fn test_vertical_launch_has_no_range() {
        let solver = ClosedFormSolver::new(LaunchParameters::new(250.0, 90.0, 3800.0), G);
        let times: Vec<f64> = (0..200).map(|i| i as f64 * 0.5).collect();
        for point in solver.trajectory(&times) {
            assert_abs_diff_eq!(point.position.x, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_trajectory_is_repeatable() {
        let solver = ClosedFormSolver::new(LaunchParameters::default(), G);
        let times: Vec<f64> = (0..500).map(|i| i as f64 * 0.2).collect();
        assert_eq!(solver.trajectory(&times), solver.trajectory(&times));
    }
}
