use crate::simulation::SimulationReport;
use crate::trajectory_system::drag_simulator::Termination;
use crate::trajectory_system::ensemble::EnsembleReport;

/// Collects human-readable sections describing finished runs.
pub struct Telemetry {
    pub log: Vec<String>,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry { log: Vec::new() }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_distance(distance: f64) -> String {
        if distance.abs() >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    fn format_speed(speed: f64) -> String {
        format!("{:.2} m/s ({:.0} km/h)", speed, speed * 3.6)
    }

    fn table(title: &str, rows: &[(&str, String)]) -> String {
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let mut out = format!("--- {} ---\n", title);
        for (label, value) in rows {
            out.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
        }
        out
    }

    pub fn collect_report(&mut self, report: &SimulationReport) {
        let velocity = report.launch.initial_velocity();
        self.log.push(Self::table(
            "Drag-free initial values",
            &[
                ("Angle (rad)", format!("{:.6}", report.launch.launch_angle.to_radians())),
                ("Initial vx", format!("{:.4} m/s", velocity.x)),
                ("Initial vy", format!("{:.4} m/s", velocity.y)),
                ("Gravity", format!("{} m/s²", report.config.gravity)),
            ],
        ));

        let c = &report.coefficients;
        self.log.push(Self::table(
            "Drag initial values",
            &[
                ("Radius", format!("{:.4} m", c.radius)),
                ("Frontal area", format!("{:.6} m²", c.frontal_area)),
                ("Mass", format!("{:.4} kg", c.mass)),
                ("Air density", format!("{:.6} kg/m³", c.air_density)),
                ("Drag coefficient (k)", format!("{:.6}", c.drag_coefficient)),
                ("Drag constant (D)", format!("{:.6} kg/m", c.drag_constant)),
            ],
        ));

        let summary = &report.drag_summary;
        let mut comparison = Self::table(
            "Trajectory comparison (without drag | with drag)",
            &[
                (
                    "Max distance",
                    format!(
                        "{} | {}",
                        Self::format_distance(report.impact.final_distance),
                        Self::format_distance(summary.max_distance)
                    ),
                ),
                (
                    "Max height",
                    format!(
                        "{} | {}",
                        Self::format_distance(report.display_height()),
                        Self::format_distance(summary.max_height)
                    ),
                ),
                (
                    "Flight time",
                    format!(
                        "{} | {}",
                        Self::format_time(report.impact.flight_time),
                        Self::format_time(summary.max_time)
                    ),
                ),
                (
                    "Final speed",
                    format!(
                        "{} | {}",
                        Self::format_speed(report.impact.final_speed),
                        Self::format_speed(report.drag_final_speed())
                    ),
                ),
            ],
        );
        if summary.termination == Termination::StepBudgetExhausted {
            comparison.push_str(&format!(
                "Warning: drag run stopped after {} steps before reaching the ground\n",
                report.config.max_steps
            ));
        }
        self.log.push(comparison);
    }

    pub fn collect_ensemble(&mut self, report: &EnsembleReport) {
        let mut out = String::from("--- Ensemble ---\n");
        for (i, member) in report.members.iter().enumerate() {
            out.push_str(&format!(
                "#{:<3} v0 = {:>6.1} m/s  angle = {:>5.1}°  d = {:.2} m  rho = {:>6.0} kg/m³  range: {} | {}\n",
                i + 1,
                member.launch.initial_speed,
                member.launch.launch_angle,
                member.projectile.diameter,
                member.projectile.density,
                Self::format_distance(member.closed_form_range),
                Self::format_distance(member.drag_range),
            ));
        }
        if let Some(envelope) = report.envelope() {
            out.push_str(&format!(
                "Range without drag: {} to {}\nRange with drag:    {} to {}\n",
                Self::format_distance(envelope.min_closed_form_range),
                Self::format_distance(envelope.max_closed_form_range),
                Self::format_distance(envelope.min_drag_range),
                Self::format_distance(envelope.max_drag_range),
            ));
        }
        self.log.push(out);
    }

    pub fn render(&self) -> String {
        self.log.join("\n")
    }

    pub fn display_data(&self) {
        println!("{}", self.render());
    }
}
