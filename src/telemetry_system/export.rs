use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::Writer;
use serde::Serialize;

use crate::errors::SimulationError;
use crate::simulation::SimulationReport;
use crate::trajectory_system::closed_form::TrajectoryPoint;
use crate::trajectory_system::drag_simulator::DragTrajectory;

pub const CLOSED_FORM_FILE: &str = "closed_form.csv";
pub const DRAG_FILE: &str = "drag.csv";

#[derive(Serialize)]
struct ClosedFormRow {
    t: f64,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct DragRow {
    t: f64,
    x: f64,
    y: f64,
    v: f64,
    vx: f64,
    vy: f64,
    ax: f64,
    ay: f64,
}

pub fn write_closed_form<W: Write>(
    writer: W,
    points: &[TrajectoryPoint],
) -> Result<(), SimulationError> {
    let mut csv_writer = Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(ClosedFormRow {
            t: point.time,
            x: point.position.x,
            y: point.position.y,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_drag<W: Write>(writer: W, trajectory: &DragTrajectory) -> Result<(), SimulationError> {
    let mut csv_writer = Writer::from_writer(writer);
    for state in trajectory.states() {
        csv_writer.serialize(DragRow {
            t: state.time,
            x: state.position.x,
            y: state.position.y,
            v: state.speed,
            vx: state.velocity.x,
            vy: state.velocity.y,
            ax: state.acceleration.x,
            ay: state.acceleration.y,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes both series into `dir`, creating it if needed. Returns the two file paths.
pub fn export_report<P: AsRef<Path>>(
    dir: P,
    report: &SimulationReport,
) -> Result<(PathBuf, PathBuf), SimulationError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let closed_form_path = dir.join(CLOSED_FORM_FILE);
    write_closed_form(fs::File::create(&closed_form_path)?, &report.closed_form)?;

    let drag_path = dir.join(DRAG_FILE);
    write_drag(fs::File::create(&drag_path)?, &report.drag)?;

    log::info!(
        "Exported {} and {}",
        closed_form_path.display(),
        drag_path.display()
    );
    Ok((closed_form_path, drag_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::config::Scenario;
    use crate::simulation::Simulation;

    #[test]
    fn test_closed_form_csv() {
        let report = Simulation::from_scenario(&Scenario::default()).run().unwrap();
        let mut buffer = Vec::new();
        write_closed_form(&mut buffer, &report.closed_form[..3]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "t,x,y");
        assert_eq!(lines.len(), 4);
        let first: Vec<f64> = lines[1].split(',').map(|v| v.parse().unwrap()).collect();
        assert_eq!(first, vec![0.0, 0.0, 3800.0]);
    }

    #[test]
    fn test_drag_csv_has_one_row_per_state() {
        let report = Simulation::from_scenario(&Scenario::default()).run().unwrap();
        let mut buffer = Vec::new();
        write_drag(&mut buffer, &report.drag).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("t,x,y,v,vx,vy,ax,ay"));
        assert_eq!(lines.count(), report.drag.len());
    }

    #[test]
    fn test_export_report_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");
        let report = Simulation::from_scenario(&Scenario::default()).run().unwrap();

        let (closed_form, drag) = export_report(&target, &report).unwrap();
        assert!(closed_form.exists());
        assert!(drag.exists());
        assert_eq!(drag.file_name().unwrap(), DRAG_FILE);
    }
}
