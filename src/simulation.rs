use crate::constants::DISPLAY_HEIGHT_MARGIN;
use crate::errors::SimulationError;
use crate::parameters::config::{Scenario, SimulationConfig};
use crate::parameters::launch::LaunchParameters;
use crate::parameters::projectile::ProjectilePhysicalParameters;
use crate::trajectory_system::aerodynamics::DragCoefficients;
use crate::trajectory_system::closed_form::{ClosedFormSolver, Impact, TrajectoryPoint};
use crate::trajectory_system::drag_simulator::{DragSimulator, DragSummary, DragTrajectory};

/// One validated run of both trajectory models.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub launch: LaunchParameters,
    pub projectile: ProjectilePhysicalParameters,
    pub config: SimulationConfig,
}

#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub launch: LaunchParameters,
    pub projectile: ProjectilePhysicalParameters,
    pub config: SimulationConfig,
    pub closed_form: Vec<TrajectoryPoint>,
    pub impact: Impact,
    pub apex: (f64, f64), // (s, m)
    pub coefficients: DragCoefficients,
    pub drag: DragTrajectory,
    pub drag_summary: DragSummary,
}

impl SimulationReport {
    /// Highest sampled drag-free point plus a fixed margin, the plot ceiling for both curves.
    pub fn display_height(&self) -> f64 {
        self.closed_form
            .iter()
            .map(|p| p.position.y)
            .fold(f64::NEG_INFINITY, f64::max)
            + DISPLAY_HEIGHT_MARGIN
    }

    pub fn drag_final_speed(&self) -> f64 {
        self.drag_summary
            .reported_final_speed(self.config.final_speed)
    }
}

impl Simulation {
    pub fn new(
        launch: LaunchParameters,
        projectile: ProjectilePhysicalParameters,
        config: SimulationConfig,
    ) -> Self {
        Simulation {
            launch,
            projectile,
            config,
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Simulation::new(scenario.launch, scenario.projectile, scenario.simulation)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.launch.validate()?;
        self.projectile.validate()?;
        self.config.validate()
    }

    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        self.validate()?;
        log::info!(
            "Simulating launch at {:.1} m/s, {:.1}°, from {:.0} m",
            self.launch.initial_speed,
            self.launch.launch_angle,
            self.launch.initial_height
        );

        let solver = ClosedFormSolver::new(self.launch, self.config.gravity);
        let closed_form = solver.trajectory(&self.config.sample_times());
        let impact = solver.impact();

        let coefficients =
            DragCoefficients::derive(&self.projectile, self.launch.initial_speed, self.config.gravity);
        log::debug!(
            "Derived coefficients: mass = {:.3} kg, air density = {:.5} kg/m³, k = {:.5}, D = {:.6}",
            coefficients.mass,
            coefficients.air_density,
            coefficients.drag_coefficient,
            coefficients.drag_constant
        );
        coefficients.check()?;

        let drag = DragSimulator::new(self.launch, coefficients, &self.config).run();
        let drag_summary = drag.summary();
        log::info!(
            "Drag-free range {:.1} m in {:.2} s; with drag {:.1} m in {:.2} s",
            impact.final_distance,
            impact.flight_time,
            drag_summary.max_distance,
            drag_summary.max_time
        );

        Ok(SimulationReport {
            launch: self.launch,
            projectile: self.projectile,
            config: self.config,
            closed_form,
            impact,
            apex: solver.apex(),
            coefficients,
            drag,
            drag_summary,
        })
    }
}
