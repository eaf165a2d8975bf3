// Physical Constants
pub const GRAVITY: f64 = 9.8; // m/s²

// Air density model: rho = AIR_DENSITY_FACTOR * (1 - altitude * ALTITUDE_LAPSE) / (T + CELSIUS_OFFSET)
pub const AIR_DENSITY_FACTOR: f64 = 348.42;
pub const ALTITUDE_LAPSE: f64 = 1.05e-4; // per meter
pub const CELSIUS_OFFSET: f64 = 273.0; // °C -> K, as used by the density formula

// Simulation Parameters
pub const TIME_STEP: f64 = 0.05; // s
pub const MAX_STEPS: usize = 20_000;
pub const CLOSED_FORM_SAMPLES: usize = 2_000;
pub const CLOSED_FORM_DURATION: f64 = 100.0; // s

// Height of the crater above the surrounding basin, used as the drag run's start height
pub const CRATER_HEIGHT: f64 = 3_800.0; // m

// Extra headroom added to the drag-free apex for display
pub const DISPLAY_HEIGHT_MARGIN: f64 = 500.0; // m

// Launch parameter bounds
pub const INITIAL_SPEED_RANGE: (f64, f64) = (150.0, 250.0); // m/s
pub const LAUNCH_ANGLE_RANGE: (f64, f64) = (40.0, 90.0); // degrees
pub const INITIAL_HEIGHT_RANGE: (f64, f64) = (0.0, 3_800.0); // m

// Projectile parameter bounds
pub const DIAMETER_RANGE: (f64, f64) = (0.2, 0.6); // m
pub const DENSITY_RANGE: (f64, f64) = (2_100.0, 2_600.0); // kg/m³
pub const ALTITUDE_RANGE: (f64, f64) = (0.0, 8_850.0); // m above sea level
pub const TEMPERATURE_RANGE: (f64, f64) = (-273.0, 58.0); // °C

// Reference scenario (Popocatépetl)
pub const DEFAULT_INITIAL_SPEED: f64 = 250.0;
pub const DEFAULT_LAUNCH_ANGLE: f64 = 48.5;
pub const DEFAULT_INITIAL_HEIGHT: f64 = 3_800.0;
pub const DEFAULT_DIAMETER: f64 = 0.6;
pub const DEFAULT_DENSITY: f64 = 2_600.0;
pub const DEFAULT_ALTITUDE: f64 = 5_426.0;
pub const DEFAULT_TEMPERATURE: f64 = 20.0;

// Launch angles compared in the eruption study
pub const STUDY_ANGLES: [f64; 4] = [41.5, 43.5, 45.0, 48.5];
