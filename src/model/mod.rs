pub mod forest;
pub mod profile;
pub mod synthetic;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("empty training data")]
    EmptyData,
    #[error("training matrix has {cells} cells, not divisible into rows of {n_features} features")]
    RaggedMatrix { cells: usize, n_features: usize },
    #[error("{rows} training rows but {labels} labels")]
    LabelMismatch { rows: usize, labels: usize },
    #[error("forest needs at least one estimator")]
    NoEstimators,
    #[error("{0} estimators exceed the forest limit")]
    TooManyEstimators(usize),
    #[error("forest fit failed: {0}")]
    Fit(String),
    #[error("row has {got} features, model expects {expected}")]
    RowWidth { got: usize, expected: usize },
    #[error("forest prediction failed: {0}")]
    Predict(String),
    #[error("forest returned no prediction")]
    EmptyPrediction,
}

/// The one capability the predictor needs from a fitted model.
pub trait Regressor {
    fn n_features(&self) -> usize;
    fn predict_row(&self, row: &[f64]) -> Result<f64, ModelError>;
}

pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
