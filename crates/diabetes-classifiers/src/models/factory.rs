use std::path::Path;

use anyhow::Result;

use crate::config::{ModelArtifact, ModelType};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::gbdt::GBDTClassifier;
use crate::models::logistic::LogisticRegressionClassifier;

/// Build a boxed classifier from a loaded artifact. `base_dir` is the
/// directory the artifact was read from; model files referenced by the
/// artifact are resolved against it.
pub fn build_model(artifact: &ModelArtifact, base_dir: &Path) -> Result<Box<dyn ClassifierModel>> {
    let n_features = artifact.feature_names.len();

    let model: Box<dyn ClassifierModel> = match &artifact.model_type {
        ModelType::LogisticRegression {
            means,
            stds,
            weights,
            intercept,
        } => {
            if weights.len() != n_features {
                anyhow::bail!(
                    "Logistic regression has {} weights for {} feature columns",
                    weights.len(),
                    n_features
                );
            }
            Box::new(LogisticRegressionClassifier::new(
                means.clone(),
                stds.clone(),
                weights.clone(),
                *intercept,
            )?)
        }
        ModelType::GBDT { path } => {
            let model_path = base_dir.join(path);
            Box::new(GBDTClassifier::load(&model_path, n_features)?)
        }
    };

    log::debug!(
        "[Diabetes::Models] Built {} model over {} features",
        model.name(),
        model.n_features()
    );
    Ok(model)
}
