#[derive(Debug, Clone)]
pub struct ModelProfile {
    pub seed: u64,
    pub n_samples: usize,
    pub n_estimators: usize,
    pub max_depth: Option<u16>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub label: LabelWeights,
    pub trend_months: [u32; 5],
    pub trend_multipliers: [f64; 3],
}

/// `label = ras * w_ras + nol3 * w_nol3 + (1 - ct_trend) * w_ct_response`
#[derive(Debug, Clone, Copy)]
pub struct LabelWeights {
    pub ras: f64,
    pub nol3: f64,
    pub ct_response: f64,
}

impl ModelProfile {
    pub fn default_v1() -> Self {
        Self {
            seed: 42,
            n_samples: 100,
            n_estimators: 50,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            label: LabelWeights {
                ras: 0.5,
                nol3: 0.4,
                ct_response: 0.3,
            },
            trend_months: [0, 3, 6, 9, 12],
            trend_multipliers: [1.0, 3.0, 8.0],
        }
    }
}
