use crate::input::PatientInput;
use crate::input::features::FeatureVector;
use crate::model::{ModelError, clip01};
use crate::pipeline::stage2_train::TrainedModel;
use crate::pipeline::stage4_trend::{TumorTrend, project_trend};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    #[error("feature order has {order} columns but the model expects {model}")]
    FeatureOrderMismatch { order: usize, model: usize },
    #[error("model evaluation failed: {0}")]
    Model(#[from] ModelError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub resistance_score: f64,
    pub features: FeatureVector,
}

impl PredictionResult {
    /// Score bounded to [0, 1] for progress-style display.
    pub fn progress(&self) -> f64 {
        clip01(self.resistance_score)
    }
}

pub fn predict(
    features: &FeatureVector,
    model: &TrainedModel,
) -> Result<PredictionResult, PredictError> {
    let order = model.feature_order();
    let regressor = model.regressor();
    if order.len() != regressor.n_features() {
        return Err(PredictError::FeatureOrderMismatch {
            order: order.len(),
            model: regressor.n_features(),
        });
    }

    let row = order.row(features);
    let resistance_score = regressor.predict_row(&row)?;
    tracing::debug!(resistance_score, "resistance score predicted");

    Ok(PredictionResult {
        resistance_score,
        features: *features,
    })
}

pub fn predict_and_project(
    input: &PatientInput,
    model: &TrainedModel,
) -> Result<(PredictionResult, TumorTrend), PredictError> {
    let prediction = predict(&input.features(), model)?;
    let trend = project_trend(input, prediction.resistance_score, model.profile());
    Ok((prediction, trend))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_predict.rs"]
mod tests;
