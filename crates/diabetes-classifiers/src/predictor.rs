//! The prediction entry point: a loaded model plus its decision threshold.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{load_model_artifact, ModelArtifact};
use crate::error::PredictionError;
use crate::feature_vector::{FeatureVector, N_FEATURES};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::factory::build_model;

/// Binary prediction outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    NonDiabetic = 0,
    Diabetic = 1,
}

impl Label {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn headline(self) -> &'static str {
        match self {
            Label::Diabetic => "Prediction: Diabetic",
            Label::NonDiabetic => "Prediction: Non-Diabetic",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Label::Diabetic => {
                "It appears that you are at risk for diabetes. Consider consulting a healthcare provider for further analysis."
            }
            Label::NonDiabetic => {
                "You are not at high risk for diabetes based on the input provided. Keep maintaining a healthy lifestyle!"
            }
        }
    }

    /// CSS color of the headline.
    pub fn color(self) -> &'static str {
        match self {
            Label::Diabetic => "red",
            Label::NonDiabetic => "green",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Diabetic => write!(f, "Diabetic"),
            Label::NonDiabetic => write!(f, "Non-Diabetic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: Label,
    /// Positive-class probability reported by the model.
    pub probability: f32,
}

/// A loaded classifier, immutable for the life of the process and safe to
/// share between request handlers.
pub struct Predictor {
    model: Box<dyn ClassifierModel>,
    threshold: f32,
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("model", &self.model.name())
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl Predictor {
    pub fn new(model: Box<dyn ClassifierModel>, threshold: f32) -> Result<Self> {
        if model.n_features() != N_FEATURES {
            anyhow::bail!(
                "Model expects {} features but the encoder produces {}",
                model.n_features(),
                N_FEATURES
            );
        }
        if !(threshold > 0.0 && threshold < 1.0) {
            anyhow::bail!("Decision threshold must lie in (0, 1), got {}", threshold);
        }
        Ok(Self { model, threshold })
    }

    /// Build from an artifact whose referenced files live under `base_dir`.
    pub fn from_artifact(artifact: &ModelArtifact, base_dir: &Path) -> Result<Self> {
        artifact.check_layout()?;
        let model = build_model(artifact, base_dir)?;
        Self::new(model, artifact.threshold)
    }

    /// Load the model artifact at `path`. Any failure here means no
    /// prediction can be served.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let artifact = load_model_artifact(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let predictor = Self::from_artifact(&artifact, base_dir)
            .with_context(|| format!("Invalid model artifact: {}", path.display()))?;
        log::info!(
            "[Diabetes::Predictor] Loaded {} model from {} (threshold {})",
            predictor.model_name(),
            path.display(),
            predictor.threshold
        );
        Ok(predictor)
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn predict(&self, vector: &FeatureVector) -> Result<Label, PredictionError> {
        Ok(self.predict_with_probability(vector)?.label)
    }

    pub fn predict_with_probability(&self, vector: &FeatureVector) -> Result<Prediction, PredictionError> {
        vector.validate()?;
        Ok(self.infer(&vector.to_vec()))
    }

    /// Predict from positional values, validating length and content first.
    pub fn predict_raw(&self, values: &[f32]) -> Result<Prediction, PredictionError> {
        let vector = FeatureVector::from_slice(values)?;
        Ok(self.infer(&vector.to_vec()))
    }

    fn infer(&self, row: &[f32]) -> Prediction {
        let probability = self.model.predict_proba(row);
        let label = if probability >= self.threshold {
            Label::Diabetic
        } else {
            Label::NonDiabetic
        };
        log::debug!(
            "[Diabetes::Predictor] {:?} -> {} (p={:.4})",
            row,
            label,
            probability
        );
        Prediction { label, probability }
    }
}
