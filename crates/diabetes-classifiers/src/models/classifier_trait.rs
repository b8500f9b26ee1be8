/// Contract shared by every loaded classifier.
///
/// Models are read-only once built, so implementations must be safe to share
/// across request handlers.
pub trait ClassifierModel: Send + Sync {
    /// Number of positional features a row must carry.
    fn n_features(&self) -> usize;

    /// Positive-class probability (0..1) for a single row. Callers validate
    /// the row length against [`ClassifierModel::n_features`] first.
    fn predict_proba(&self, x: &[f32]) -> f32;

    /// Optional human readable name for the model
    fn name(&self) -> &str { "classifier" }
}
