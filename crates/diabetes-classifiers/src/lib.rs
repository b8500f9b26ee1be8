//! diabetes-classifiers: feature encoding and model wrappers for diabetes
//! risk prediction.
//!
//! The crate turns the handful of health metrics collected by the web form
//! (see [`controls`]) into the fixed ten-column [`FeatureVector`] the trained
//! classifier expects, and wraps the loaded classifier in a [`Predictor`]
//! that validates its input before every inference call.
//!
//! Models are described by a small JSON artifact ([`config::ModelArtifact`])
//! so the same predictor can serve a logistic regression or a GBDT ensemble.
pub mod config;
pub mod controls;
pub mod encoding;
pub mod error;
pub mod feature_vector;
pub mod models;
pub mod predictor;

pub use encoding::{encode, Gender, RawSelections, SmokingStatus, YesNo};
pub use error::PredictionError;
pub use feature_vector::{FeatureVector, FEATURE_NAMES, N_FEATURES};
pub use predictor::{Label, Prediction, Predictor};
