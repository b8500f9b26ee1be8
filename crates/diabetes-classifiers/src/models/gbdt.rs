use std::path::Path;

use anyhow::{Context, Result};
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;

use crate::models::classifier_trait::ClassifierModel;

/// Gradient Boosting Decision Tree (GBDT) classifier loaded from a model
/// file written by the `gbdt` crate.
pub struct GBDTClassifier {
    model: GBDT,
    n_features: usize,
}

impl GBDTClassifier {
    pub fn new(model: GBDT, n_features: usize) -> Self {
        GBDTClassifier { model, n_features }
    }

    pub fn load<P: AsRef<Path>>(path: P, n_features: usize) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("GBDT model file does not exist: {}", path.display());
        }
        let filename = path
            .to_str()
            .with_context(|| format!("GBDT model path is not valid UTF-8: {}", path.display()))?;
        // gbdt reports load failures as a non-Send boxed error
        let model = GBDT::load_model(filename)
            .map_err(|e| anyhow::anyhow!("Failed to load GBDT model {}: {}", path.display(), e))?;
        Ok(Self::new(model, n_features))
    }
}

impl ClassifierModel for GBDTClassifier {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, x: &[f32]) -> f32 {
        let mut test_x = DataVec::new();
        test_x.push(Data::new_test_data(x.to_vec(), None));
        let predictions = self.model.predict(&test_x);
        predictions[0].clamp(0.0, 1.0)
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbdt::config::Config;

    /// Tiny ensemble where the first column separates the classes.
    fn fit_toy_model() -> GBDT {
        let mut config = Config::new();
        config.set_feature_size(2);
        config.set_shrinkage(0.1);
        config.set_max_depth(3);
        config.set_iterations(20);
        config.set_debug(false);
        config.set_training_optimization_level(2);
        config.set_loss("LogLikelyhood");

        let rows: [([f32; 2], f32); 6] = [
            ([1.0, 0.0], 1.0),
            ([0.0, 1.0], -1.0),
            ([1.0, 0.1], 1.0),
            ([0.0, 0.9], -1.0),
            ([1.1, 0.0], 1.0),
            ([0.0, 1.2], -1.0),
        ];
        let mut train_x = DataVec::new();
        for (features, label) in rows.iter() {
            train_x.push(Data::new_training_data(features.to_vec(), 1.0, *label, None));
        }

        let mut gbdt = GBDT::new(&config);
        gbdt.fit(&mut train_x);
        gbdt
    }

    #[test]
    fn test_gbdt_classifier_separates_classes() {
        let classifier = GBDTClassifier::new(fit_toy_model(), 2);
        let positive = classifier.predict_proba(&[1.0, 0.0]);
        let negative = classifier.predict_proba(&[0.0, 1.0]);

        assert!((0.0..=1.0).contains(&positive));
        assert!((0.0..=1.0).contains(&negative));
        assert!(positive > negative, "positive {} <= negative {}", positive, negative);
    }

    #[test]
    fn test_gbdt_load_missing_file_errors() {
        let err = GBDTClassifier::load("/nonexistent/model.gbdt", 2).err().unwrap();
        assert!(err.to_string().contains("does not exist"));
    }
}
