use serde::Serialize;

use crate::input::PatientInput;
use crate::model::profile::ModelProfile;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: u32,
    pub burden: f64,
}

/// Projected ctDNA burden at months 0, 3, 6, 9 and 12.
#[derive(Debug, Clone, PartialEq)]
pub struct TumorTrend {
    pub points: [TrendPoint; 5],
}

/// The first two points are the measured values; the rest extrapolate
/// `month3 * (1 + score * k)` for each fixed multiplier `k`. The score is
/// used unclamped.
pub fn project_trend(input: &PatientInput, score: f64, profile: &ModelProfile) -> TumorTrend {
    let months = profile.trend_months;
    let [k6, k9, k12] = profile.trend_multipliers;
    let month3 = f64::from(input.ct_month3);
    let burdens = [
        f64::from(input.ct_baseline),
        month3,
        month3 * (1.0 + score * k6),
        month3 * (1.0 + score * k9),
        month3 * (1.0 + score * k12),
    ];

    let points = std::array::from_fn(|i| TrendPoint {
        month: months[i],
        burden: burdens[i],
    });
    TumorTrend { points }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_trend.rs"]
mod tests;
