use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{DENSITY_RANGE, DIAMETER_RANGE, INITIAL_SPEED_RANGE, LAUNCH_ANGLE_RANGE};
use crate::errors::SimulationError;
use crate::parameters::config::Scenario;
use crate::parameters::launch::LaunchParameters;
use crate::parameters::projectile::ProjectilePhysicalParameters;
use crate::simulation::Simulation;

use super::drag_simulator::Termination;

/// Reduced outcome of one run in an ensemble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleMember {
    pub launch: LaunchParameters,
    pub projectile: ProjectilePhysicalParameters,
    pub closed_form_range: f64,
    pub closed_form_flight_time: f64,
    pub drag_range: f64,
    pub drag_max_height: f64,
    pub drag_flight_time: f64,
    pub termination: Termination,
}

/// Range bounds over all members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_drag_range: f64,
    pub max_drag_range: f64,
    pub min_closed_form_range: f64,
    pub max_closed_form_range: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleReport {
    pub members: Vec<EnsembleMember>,
}

impl EnsembleReport {
    /// `None` when the ensemble is empty.
    pub fn envelope(&self) -> Option<Envelope> {
        if self.members.is_empty() {
            return None;
        }
        let mut envelope = Envelope {
            min_drag_range: f64::INFINITY,
            max_drag_range: f64::NEG_INFINITY,
            min_closed_form_range: f64::INFINITY,
            max_closed_form_range: f64::NEG_INFINITY,
        };
        for member in &self.members {
            envelope.min_drag_range = envelope.min_drag_range.min(member.drag_range);
            envelope.max_drag_range = envelope.max_drag_range.max(member.drag_range);
            envelope.min_closed_form_range =
                envelope.min_closed_form_range.min(member.closed_form_range);
            envelope.max_closed_form_range =
                envelope.max_closed_form_range.max(member.closed_form_range);
        }
        Some(envelope)
    }
}

/// Repeats a base scenario over varied launch and projectile parameters.
#[derive(Debug, Clone)]
pub struct Ensemble {
    base: Scenario,
}

impl Ensemble {
    pub fn new(base: Scenario) -> Self {
        Ensemble { base }
    }

    fn run_member(
        &self,
        launch: LaunchParameters,
        projectile: ProjectilePhysicalParameters,
    ) -> Result<EnsembleMember, SimulationError> {
        let report = Simulation::new(launch, projectile, self.base.simulation).run()?;
        Ok(EnsembleMember {
            launch,
            projectile,
            closed_form_range: report.impact.final_distance,
            closed_form_flight_time: report.impact.flight_time,
            drag_range: report.drag_summary.max_distance,
            drag_max_height: report.drag_summary.max_height,
            drag_flight_time: report.drag_summary.max_time,
            termination: report.drag_summary.termination,
        })
    }

    /// Base scenario at each of the given launch angles.
    pub fn angle_sweep(&self, angles: &[f64]) -> Result<EnsembleReport, SimulationError> {
        let members = angles
            .iter()
            .map(|&angle| {
                let launch = LaunchParameters {
                    launch_angle: angle,
                    ..self.base.launch
                };
                self.run_member(launch, self.base.projectile)
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Angle sweep finished: {} runs", members.len());
        Ok(EnsembleReport { members })
    }

    /// Draws launch speed, launch angle, diameter and density uniformly within their bounds.
    pub fn random<R: Rng>(
        &self,
        runs: usize,
        rng: &mut R,
    ) -> Result<EnsembleReport, SimulationError> {
        let mut members = Vec::with_capacity(runs);
        for _ in 0..runs {
            let launch = LaunchParameters {
                initial_speed: rng.gen_range(INITIAL_SPEED_RANGE.0..=INITIAL_SPEED_RANGE.1),
                launch_angle: rng.gen_range(LAUNCH_ANGLE_RANGE.0..=LAUNCH_ANGLE_RANGE.1),
                ..self.base.launch
            };
            let projectile = ProjectilePhysicalParameters {
                diameter: rng.gen_range(DIAMETER_RANGE.0..=DIAMETER_RANGE.1),
                density: rng.gen_range(DENSITY_RANGE.0..=DENSITY_RANGE.1),
                ..self.base.projectile
            };
            members.push(self.run_member(launch, projectile)?);
        }
        log::info!("Random ensemble finished: {} runs", members.len());
        Ok(EnsembleReport { members })
    }

    pub fn seeded(&self, runs: usize, seed: u64) -> Result<EnsembleReport, SimulationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.random(runs, &mut rng)
    }
}
