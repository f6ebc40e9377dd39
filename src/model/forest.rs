//! Random-forest regressor over dense `f64` rows, fitted with smartcore.

use std::fmt;

use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::model::{ModelError, Regressor};

type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub max_depth: Option<u16>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub seed: u64,
}

pub struct ResistanceForest {
    inner: Forest,
    n_features: usize,
    n_trees: usize,
}

impl ResistanceForest {
    /// Fits on a row-major matrix of `n_features` columns. Every split
    /// considers all features; bootstrap draws follow `params.seed`.
    pub fn fit(
        data: &[f64],
        n_features: usize,
        targets: &[f64],
        params: &ForestParams,
    ) -> Result<Self, ModelError> {
        if params.n_estimators == 0 {
            return Err(ModelError::NoEstimators);
        }
        if data.is_empty() || targets.is_empty() || n_features == 0 {
            return Err(ModelError::EmptyData);
        }
        if data.len() % n_features != 0 {
            return Err(ModelError::RaggedMatrix {
                cells: data.len(),
                n_features,
            });
        }
        let n_rows = data.len() / n_features;
        if n_rows != targets.len() {
            return Err(ModelError::LabelMismatch {
                rows: n_rows,
                labels: targets.len(),
            });
        }

        let n_trees = params
            .n_estimators
            .try_into()
            .map_err(|_| ModelError::TooManyEstimators(params.n_estimators))?;
        let mut parameters = RandomForestRegressorParameters::default()
            .with_n_trees(n_trees)
            .with_m(n_features)
            .with_min_samples_split(params.min_samples_split)
            .with_min_samples_leaf(params.min_samples_leaf)
            .with_seed(params.seed);
        if let Some(depth) = params.max_depth {
            parameters = parameters.with_max_depth(depth);
        }

        let x = DenseMatrix::new(n_rows, n_features, data.to_vec(), false);
        let y = targets.to_vec();
        let inner =
            Forest::fit(&x, &y, parameters).map_err(|err| ModelError::Fit(err.to_string()))?;

        Ok(Self {
            inner,
            n_features,
            n_trees: params.n_estimators,
        })
    }

    pub fn n_trees(&self) -> usize {
        self.n_trees
    }
}

impl fmt::Debug for ResistanceForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResistanceForest")
            .field("n_trees", &self.n_trees)
            .field("n_features", &self.n_features)
            .finish_non_exhaustive()
    }
}

impl Regressor for ResistanceForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_row(&self, row: &[f64]) -> Result<f64, ModelError> {
        if row.len() != self.n_features {
            return Err(ModelError::RowWidth {
                got: row.len(),
                expected: self.n_features,
            });
        }
        let x = DenseMatrix::new(1, self.n_features, row.to_vec(), false);
        let predicted = self
            .inner
            .predict(&x)
            .map_err(|err| ModelError::Predict(err.to_string()))?;
        predicted.first().copied().ok_or(ModelError::EmptyPrediction)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/forest.rs"]
mod tests;
