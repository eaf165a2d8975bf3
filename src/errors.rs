use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {name} = {value} (expected {min}..={max})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}

impl SimulationError {
    pub(crate) fn check_range(name: &'static str, value: f64, range: (f64, f64)) -> Result<(), Self> {
        let (min, max) = range;
        // NaN fails both comparisons and is rejected here too
        if value >= min && value <= max {
            Ok(())
        } else {
            Err(SimulationError::InvalidParameter {
                name,
                value,
                min,
                max,
            })
        }
    }
}

impl From<csv::Error> for SimulationError {
    fn from(err: csv::Error) -> Self {
        SimulationError::ExportError(err.to_string())
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::ExportError(err.to_string())
    }
}
