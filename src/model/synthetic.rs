use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::input::features::FeatureVector;
use crate::model::profile::{LabelWeights, ModelProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub rows: Vec<FeatureVector>,
    pub labels: Vec<f64>,
}

/// Draws the synthetic cohort. Columns are drawn whole, in field order
/// (ras, msi, nol3, ct_trend), from a generator seeded with `profile.seed`.
pub fn synthesize(profile: &ModelProfile) -> TrainingSet {
    let mut rng = ChaCha20Rng::seed_from_u64(profile.seed);
    let n = profile.n_samples;

    let ras = draw_binary(&mut rng, n);
    let msi = draw_binary(&mut rng, n);
    let nol3 = draw_unit(&mut rng, n);
    let ct_trend = draw_unit(&mut rng, n);

    let rows = (0..n)
        .map(|i| FeatureVector {
            ras: ras[i],
            msi: msi[i],
            nol3: nol3[i],
            ct_trend: ct_trend[i],
        })
        .collect::<Vec<_>>();
    let labels = rows
        .iter()
        .map(|row| synthetic_label(row, &profile.label))
        .collect();

    TrainingSet { rows, labels }
}

pub fn synthetic_label(row: &FeatureVector, weights: &LabelWeights) -> f64 {
    row.ras * weights.ras + row.nol3 * weights.nol3 + (1.0 - row.ct_trend) * weights.ct_response
}

fn draw_binary(rng: &mut ChaCha20Rng, n: usize) -> Vec<f64> {
    (0..n).map(|_| f64::from(rng.gen_range(0u8..2))).collect()
}

fn draw_unit(rng: &mut ChaCha20Rng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(0.0..1.0)).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/synthetic.rs"]
mod tests;
