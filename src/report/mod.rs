pub mod json;
pub mod text;

use crate::input::PatientInput;
use crate::input::features::FeatureOrder;
use crate::model::profile::ModelProfile;
use crate::pipeline::stage3_predict::PredictionResult;
use crate::pipeline::stage4_trend::TumorTrend;

pub const PROGRESS_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct ReportData<'a> {
    pub tool_name: String,
    pub tool_version: String,
    pub git_hash: Option<String>,

    pub input: &'a PatientInput,
    pub prediction: &'a PredictionResult,
    pub trend: &'a TumorTrend,

    pub feature_order: &'a FeatureOrder,
    pub profile: &'a ModelProfile,
}

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Fixed-width bar for a value in [0, 1]; out-of-range values saturate.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let f = crate::model::clip01(fraction);
    let filled = ((f * width as f64).round() as usize).min(width);
    let mut out = String::with_capacity(width + 2);
    out.push('[');
    out.extend(std::iter::repeat_n('#', filled));
    out.extend(std::iter::repeat_n('-', width - filled));
    out.push(']');
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
