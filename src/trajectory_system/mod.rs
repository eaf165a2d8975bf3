pub mod aerodynamics;
pub mod closed_form;
pub mod drag_simulator;
pub mod ensemble;
pub mod kinematics;
