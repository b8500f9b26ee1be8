use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::feature_vector::FEATURE_NAMES;

/// On-disk description of a trained classifier.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelArtifact {
    /// Column order the model was trained on.
    pub feature_names: Vec<String>,

    /// Positive-class probability at or above which a row is Diabetic.
    #[serde(default = "default_threshold")]
    pub threshold: f32,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types and their parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ModelType {
    /// Standardize, dot with `weights`, add `intercept`, sigmoid.
    LogisticRegression {
        means: Vec<f64>,
        stds: Vec<f64>,
        weights: Vec<f64>,
        intercept: f64,
    },
    /// Tree ensemble saved with `gbdt::gradient_boost::GBDT::save_model`.
    /// Relative paths resolve against the artifact's directory.
    GBDT { path: String },
}

fn default_threshold() -> f32 {
    0.5
}

impl ModelType {
    pub fn name(&self) -> &'static str {
        match self {
            ModelType::LogisticRegression { .. } => "logistic_regression",
            ModelType::GBDT { .. } => "gbdt",
        }
    }
}

impl ModelArtifact {
    pub fn new(model_type: ModelType) -> Self {
        Self {
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            threshold: default_threshold(),
            model_type,
        }
    }

    /// Fail unless the artifact was trained on exactly [`FEATURE_NAMES`], in
    /// that order, and carries a usable threshold.
    pub fn check_layout(&self) -> Result<()> {
        if self.feature_names.len() != FEATURE_NAMES.len()
            || self
                .feature_names
                .iter()
                .zip(FEATURE_NAMES.iter())
                .any(|(a, b)| a != b)
        {
            anyhow::bail!(
                "Model columns {:?} do not match the encoder's columns {:?}",
                self.feature_names,
                FEATURE_NAMES
            );
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            anyhow::bail!("Model threshold must lie in (0, 1), got {}", self.threshold);
        }
        Ok(())
    }
}

/// Load a model artifact from a JSON file.
pub fn load_model_artifact<P: AsRef<Path>>(path: P) -> Result<ModelArtifact> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read model artifact: {}", path.as_ref().display()))?;
    let artifact: ModelArtifact = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse model artifact: {}", path.as_ref().display()))?;
    Ok(artifact)
}

/// Write a model artifact as pretty JSON.
pub fn save_model_artifact<P: AsRef<Path>>(artifact: &ModelArtifact, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(artifact)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write model artifact: {}", path.as_ref().display()))?;
    Ok(())
}
