use crate::input::InputError;
use crate::pipeline::stage2_train::TrainError;
use crate::pipeline::stage3_predict::PredictError;
use crate::pipeline::stage5_report::ReportError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Train(#[from] TrainError),
    #[error(transparent)]
    Predict(#[from] PredictError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
