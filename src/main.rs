use std::path::PathBuf;

use clap::Parser;
use volcano_simulation::telemetry_system::export::export_report;
use volcano_simulation::*;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Volcanic ejecta trajectory with and without air drag"
)]
struct Cli {
    /// TOML scenario file; missing fields fall back to the reference eruption
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial speed in m/s [150, 250]
    #[arg(long)]
    speed: Option<f64>,

    /// Launch angle in degrees [40, 90]
    #[arg(long)]
    angle: Option<f64>,

    /// Initial height in m [0, 3800]
    #[arg(long)]
    height: Option<f64>,

    /// Volcano altitude above sea level in m [0, 8850]
    #[arg(long)]
    altitude: Option<f64>,

    /// Ambient temperature in °C [-273, 58]
    #[arg(long)]
    temperature: Option<f64>,

    /// Projectile diameter in m [0.2, 0.6]
    #[arg(long)]
    diameter: Option<f64>,

    /// Projectile density in kg/m³ [2100, 2600]
    #[arg(long)]
    density: Option<f64>,

    /// Start the drag run at the launch height instead of the crater height
    #[arg(long, default_value_t = false)]
    drag_from_launch_height: bool,

    /// Directory for closed_form.csv and drag.csv
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Also run the study angle sweep and this many random launches
    #[arg(long)]
    ensemble: Option<usize>,

    /// Seed for the random ensemble
    #[arg(long, default_value_t = 2021)]
    seed: u64,
}

impl Cli {
    fn scenario(&self) -> Result<Scenario, SimulationError> {
        let mut scenario = match &self.config {
            Some(path) => Scenario::load(path)?,
            None => Scenario::default(),
        };

        let launch = &mut scenario.launch;
        launch.initial_speed = self.speed.unwrap_or(launch.initial_speed);
        launch.launch_angle = self.angle.unwrap_or(launch.launch_angle);
        launch.initial_height = self.height.unwrap_or(launch.initial_height);

        let projectile = &mut scenario.projectile;
        projectile.altitude = self.altitude.unwrap_or(projectile.altitude);
        projectile.temperature = self.temperature.unwrap_or(projectile.temperature);
        projectile.diameter = self.diameter.unwrap_or(projectile.diameter);
        projectile.density = self.density.unwrap_or(projectile.density);

        if self.drag_from_launch_height {
            scenario.simulation.initial_height = InitialHeight::Launch;
        }
        Ok(scenario)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let scenario = cli.scenario()?;

    let report = Simulation::from_scenario(&scenario).run()?;
    let mut telemetry = Telemetry::new();
    telemetry.collect_report(&report);

    if let Some(dir) = &cli.export_dir {
        export_report(dir, &report)?;
    }

    if let Some(runs) = cli.ensemble {
        let ensemble = Ensemble::new(scenario);
        telemetry.collect_ensemble(&ensemble.angle_sweep(&STUDY_ANGLES)?);
        telemetry.collect_ensemble(&ensemble.seeded(runs, cli.seed)?);
    }

    telemetry.display_data();

    Ok(())
}
