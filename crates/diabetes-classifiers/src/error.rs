use std::error::Error;
use std::fmt;

/// Errors raised while encoding user selections or running a prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// A categorical label outside the options offered by its control.
    Configuration { field: &'static str, label: String },
    /// A feature vector that cannot be fed to the model (wrong length,
    /// non-finite value, indicator outside {0, 1}).
    InvalidInput(String),
}

impl PredictionError {
    pub fn configuration(field: &'static str, label: &str) -> Self {
        PredictionError::Configuration {
            field,
            label: label.to_string(),
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        PredictionError::InvalidInput(reason.into())
    }
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PredictionError::Configuration { field, label } => {
                write!(f, "Unrecognized value '{}' for {}", label, field)
            }
            PredictionError::InvalidInput(reason) => write!(f, "Invalid feature vector: {}", reason),
        }
    }
}

impl Error for PredictionError {}
