use serde::Serialize;

use crate::input::PatientInput;
use crate::pipeline::stage4_trend::TrendPoint;
use crate::report::ReportData;

#[derive(Debug, Serialize)]
pub struct SummaryJson<'a> {
    pub tool: ToolMeta<'a>,
    pub input: &'a PatientInput,
    pub features: Vec<NamedValue>,
    pub model: ModelMeta,
    pub resistance_score: f64,
    pub progress: f64,
    pub trend: &'a [TrendPoint],
}

#[derive(Debug, Serialize)]
pub struct ToolMeta<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub git_hash: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct NamedValue {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct ModelMeta {
    pub kind: &'static str,
    pub seed: u64,
    pub n_samples: usize,
    pub n_estimators: usize,
    pub field_order: Vec<&'static str>,
}

pub fn build_summary<'a>(data: &'a ReportData<'a>) -> SummaryJson<'a> {
    // Same column order the model saw.
    let features = data
        .feature_order
        .fields()
        .iter()
        .map(|&f| NamedValue {
            name: f.name(),
            value: data.prediction.features.value(f),
        })
        .collect();

    SummaryJson {
        tool: ToolMeta {
            name: &data.tool_name,
            version: &data.tool_version,
            git_hash: data.git_hash.as_deref(),
        },
        input: data.input,
        features,
        model: ModelMeta {
            kind: "random_forest_regressor",
            seed: data.profile.seed,
            n_samples: data.profile.n_samples,
            n_estimators: data.profile.n_estimators,
            field_order: data.feature_order.names(),
        },
        resistance_score: data.prediction.resistance_score,
        progress: data.prediction.progress(),
        trend: &data.trend.points,
    }
}

pub fn render_summary_json(data: &ReportData<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_summary(data))
}
