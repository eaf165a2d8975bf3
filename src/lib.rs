pub mod constants;
pub mod errors;
pub mod parameters;
pub mod simulation;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use errors::SimulationError;
pub use parameters::config::{FinalSpeedMode, InitialHeight, Scenario, SimulationConfig};
pub use parameters::launch::LaunchParameters;
pub use parameters::projectile::ProjectilePhysicalParameters;
pub use simulation::{Simulation, SimulationReport};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::DragCoefficients;
pub use trajectory_system::closed_form::{ClosedFormSolver, Impact, TrajectoryPoint};
pub use trajectory_system::drag_simulator::{
    DragSimulator, DragSummary, DragTrajectory, Termination,
};
pub use trajectory_system::ensemble::{Ensemble, EnsembleMember, EnsembleReport, Envelope};
pub use trajectory_system::kinematics::KinematicState;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
