use anyhow::Result;

use crate::models::classifier_trait::ClassifierModel;

/// Logistic regression over standardized features.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegressionClassifier {
    means: Vec<f64>,
    stds: Vec<f64>,
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticRegressionClassifier {
    pub fn new(means: Vec<f64>, stds: Vec<f64>, weights: Vec<f64>, intercept: f64) -> Result<Self> {
        let n = weights.len();
        if n == 0 {
            anyhow::bail!("Logistic regression needs at least one weight");
        }
        if means.len() != n || stds.len() != n {
            anyhow::bail!(
                "Logistic regression parameter lengths differ: {} means, {} stds, {} weights",
                means.len(),
                stds.len(),
                n
            );
        }
        if let Some(idx) = stds.iter().position(|s| !s.is_finite() || *s <= 0.0) {
            anyhow::bail!("Standard deviation for feature {} must be positive, got {}", idx, stds[idx]);
        }
        let all_finite = means
            .iter()
            .chain(weights.iter())
            .chain(std::iter::once(&intercept))
            .all(|v| v.is_finite());
        if !all_finite {
            anyhow::bail!("Logistic regression parameters must be finite numbers");
        }

        Ok(Self {
            means,
            stds,
            weights,
            intercept,
        })
    }

    /// Linear score before the sigmoid.
    pub fn decision_function(&self, x: &[f32]) -> f64 {
        self.weights
            .iter()
            .zip(self.means.iter().zip(self.stds.iter()))
            .zip(x.iter())
            .fold(self.intercept, |z, ((w, (mean, std)), value)| {
                z + w * ((*value as f64 - mean) / std)
            })
    }
}

impl ClassifierModel for LogisticRegressionClassifier {
    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn predict_proba(&self, x: &[f32]) -> f32 {
        let z = self.decision_function(x);
        (1.0 / (1.0 + (-z).exp())) as f32
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
