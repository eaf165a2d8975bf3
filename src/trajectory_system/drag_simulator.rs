use crate::parameters::config::{FinalSpeedMode, SimulationConfig};
use crate::parameters::launch::LaunchParameters;
use crate::utils::vector2d::Vector2D;

use super::aerodynamics::DragCoefficients;
use super::kinematics::KinematicState;

/// Why the integration loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The last state is the first one found below y = 0.
    GroundImpact,
    /// All steps were used with the projectile still at or above y = 0.
    StepBudgetExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSummary {
    pub max_distance: f64, // m
    pub max_height: f64,   // m
    pub max_time: f64,     // s
    /// Speed of the last recorded state.
    pub final_speed: f64,
    /// `hypot(min vx, min vy)` over the whole flight.
    pub axis_minima_speed: f64,
    pub termination: Termination,
}

impl DragSummary {
    pub fn reported_final_speed(&self, mode: FinalSpeedMode) -> f64 {
        match mode {
            FinalSpeedMode::Literal => self.final_speed,
            FinalSpeedMode::AxisMinima => self.axis_minima_speed,
        }
    }
}

/// Append-only sequence of states, one per step, starting at t = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct DragTrajectory {
    states: Vec<KinematicState>,
    termination: Termination,
}

impl DragTrajectory {
    pub fn states(&self) -> &[KinematicState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn last(&self) -> &KinematicState {
        // A trajectory always holds at least the launch state
        &self.states[self.states.len() - 1]
    }

    pub fn column<F: Fn(&KinematicState) -> f64>(&self, field: F) -> Vec<f64> {
        self.states.iter().map(field).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.column(|s| s.time)
    }

    pub fn xs(&self) -> Vec<f64> {
        self.column(|s| s.position.x)
    }

    pub fn ys(&self) -> Vec<f64> {
        self.column(|s| s.position.y)
    }

    pub fn speeds(&self) -> Vec<f64> {
        self.column(|s| s.speed)
    }

    pub fn velocities_x(&self) -> Vec<f64> {
        self.column(|s| s.velocity.x)
    }

    pub fn velocities_y(&self) -> Vec<f64> {
        self.column(|s| s.velocity.y)
    }

    pub fn accelerations_x(&self) -> Vec<f64> {
        self.column(|s| s.acceleration.x)
    }

    pub fn accelerations_y(&self) -> Vec<f64> {
        self.column(|s| s.acceleration.y)
    }

    fn max_of<F: Fn(&KinematicState) -> f64>(&self, field: F) -> f64 {
        self.states.iter().map(field).fold(f64::NEG_INFINITY, f64::max)
    }

    fn min_of<F: Fn(&KinematicState) -> f64>(&self, field: F) -> f64 {
        self.states.iter().map(field).fold(f64::INFINITY, f64::min)
    }

    pub fn summary(&self) -> DragSummary {
        let min_vx = self.min_of(|s| s.velocity.x);
        let min_vy = self.min_of(|s| s.velocity.y);

        DragSummary {
            max_distance: self.max_of(|s| s.position.x),
            max_height: self.max_of(|s| s.position.y),
            max_time: self.max_of(|s| s.time),
            final_speed: self.last().speed,
            axis_minima_speed: Vector2D::new(min_vx, min_vy).magnitude(),
            termination: self.termination,
        }
    }
}

/// Integrates a launch under quadratic drag with a fixed step.
///
/// `D` and `m` are taken as given; zero or negative values are not guarded.
#[derive(Debug, Clone, Copy)]
pub struct DragSimulator {
    launch: LaunchParameters,
    coefficients: DragCoefficients,
    launch_height: f64,
    gravity: f64,
    time_step: f64,
    max_steps: usize,
}

impl DragSimulator {
    pub fn new(
        launch: LaunchParameters,
        coefficients: DragCoefficients,
        config: &SimulationConfig,
    ) -> Self {
        DragSimulator {
            launch,
            coefficients,
            launch_height: config.initial_height.resolve(&launch),
            gravity: config.gravity,
            time_step: config.time_step,
            max_steps: config.max_steps,
        }
    }

    pub fn with_launch_height(mut self, launch_height: f64) -> Self {
        self.launch_height = launch_height;
        self
    }

    pub fn launch_height(&self) -> f64 {
        self.launch_height
    }

    pub fn run(&self) -> DragTrajectory {
        let mut state = KinematicState::launch(
            Vector2D::new(0.0, self.launch_height),
            self.launch.initial_speed,
            self.launch.initial_velocity(),
            &self.coefficients,
            self.gravity,
        );

        let mut states = Vec::with_capacity(self.max_steps.min(4096) + 1);
        states.push(state);
        let mut termination = Termination::StepBudgetExhausted;

        for _ in 0..self.max_steps {
            state = state.advance(self.time_step, &self.coefficients, self.gravity);
            states.push(state);

            if state.is_below_ground() {
                termination = Termination::GroundImpact;
                break;
            }
        }

        log::debug!(
            "Drag run finished after {} steps ({:?}) at t = {:.2} s",
            states.len() - 1,
            termination,
            state.time
        );

        DragTrajectory {
            states,
            termination,
        }
    }
}
