use std::sync::OnceLock;

use crate::input::features::{FEATURE_NAMES, FeatureError, FeatureOrder};
use crate::model::forest::{ForestParams, ResistanceForest};
use crate::model::profile::ModelProfile;
use crate::model::synthetic::synthesize;
use crate::model::{ModelError, Regressor};

static TRAINED: OnceLock<Result<TrainedModel, TrainError>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    #[error("training failure: {0}")]
    TrainingFailure(#[from] ModelError),
    #[error("invalid training feature order: {0}")]
    FeatureOrder(#[from] FeatureError),
}

/// A fitted forest together with the column order it was trained on.
#[derive(Debug)]
pub struct TrainedModel {
    forest: ResistanceForest,
    feature_order: FeatureOrder,
    profile: ModelProfile,
    n_training_rows: usize,
}

impl TrainedModel {
    pub fn new(
        forest: ResistanceForest,
        feature_order: FeatureOrder,
        profile: ModelProfile,
        n_training_rows: usize,
    ) -> Self {
        Self {
            forest,
            feature_order,
            profile,
            n_training_rows,
        }
    }

    pub fn regressor(&self) -> &dyn Regressor {
        &self.forest
    }

    pub fn forest(&self) -> &ResistanceForest {
        &self.forest
    }

    pub fn feature_order(&self) -> &FeatureOrder {
        &self.feature_order
    }

    pub fn profile(&self) -> &ModelProfile {
        &self.profile
    }

    pub fn n_training_rows(&self) -> usize {
        self.n_training_rows
    }
}

/// Process-wide model. The first caller trains; every caller, including
/// concurrent ones, gets the same instance.
pub fn train() -> Result<&'static TrainedModel, TrainError> {
    TRAINED
        .get_or_init(|| train_with(&ModelProfile::default_v1()))
        .as_ref()
        .map_err(Clone::clone)
}

/// Uncached fit from an explicit profile.
pub fn train_with(profile: &ModelProfile) -> Result<TrainedModel, TrainError> {
    let training = synthesize(profile);
    let order = FeatureOrder::from_names(&FEATURE_NAMES)?;
    let data = order.matrix(&training.rows);

    let params = ForestParams {
        n_estimators: profile.n_estimators,
        max_depth: profile.max_depth,
        min_samples_split: profile.min_samples_split,
        min_samples_leaf: profile.min_samples_leaf,
        seed: profile.seed,
    };
    let forest = ResistanceForest::fit(&data, order.len(), &training.labels, &params)?;

    tracing::info!(
        rows = training.rows.len(),
        trees = forest.n_trees(),
        seed = profile.seed,
        "synthetic resistance model fitted"
    );

    Ok(TrainedModel::new(forest, order, profile.clone(), training.rows.len()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_train.rs"]
mod tests;
