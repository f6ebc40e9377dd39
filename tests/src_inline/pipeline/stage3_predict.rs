use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::*;
use crate::input::features::{FEATURE_NAMES, FeatureOrder};
use crate::input::{MsiStatus, RasStatus};
use crate::model::Regressor;
use crate::model::forest::{ForestParams, ResistanceForest};
use crate::model::profile::ModelProfile;
use crate::pipeline::stage2_train::train;

fn patient() -> PatientInput {
    PatientInput {
        ras: RasStatus::Mutant,
        msi: MsiStatus::Mss,
        nol3: 0.6,
        ct_baseline: 500,
        ct_month3: 100,
    }
}

#[test]
fn test_row_follows_declared_field_order() {
    let model = train().unwrap();
    let order = model.feature_order();
    let features = patient().features();
    let row = order.row(&features);
    for (i, name) in order.names().iter().enumerate() {
        let expected = match *name {
            "ras" => features.ras,
            "msi" => features.msi,
            "nol3" => features.nol3,
            "ct_trend" => features.ct_trend,
            other => panic!("unexpected feature {other}"),
        };
        assert_eq!(row[i].to_bits(), expected.to_bits());
    }
    assert_eq!(order.names(), FEATURE_NAMES.to_vec());
}

#[test]
fn test_prediction_uses_model_once_per_row() {
    let model = train().unwrap();
    let features = patient().features();
    let result = predict(&features, model).unwrap();
    let direct = model
        .regressor()
        .predict_row(&model.feature_order().row(&features))
        .unwrap();
    assert_eq!(result.resistance_score.to_bits(), direct.to_bits());
    assert_eq!(result.features, features);
}

#[test]
fn test_predict_and_project_idempotent() {
    let model = train().unwrap();
    let input = patient();
    let (p1, t1) = predict_and_project(&input, model).unwrap();
    let (p2, t2) = predict_and_project(&input, model).unwrap();
    assert_eq!(p1.resistance_score.to_bits(), p2.resistance_score.to_bits());
    for (a, b) in t1.points.iter().zip(&t2.points) {
        assert_eq!(a.month, b.month);
        assert_eq!(a.burden.to_bits(), b.burden.to_bits());
    }
}

#[test]
fn test_trend_uses_predicted_score() {
    let model = train().unwrap();
    let input = patient();
    let (prediction, trend) = predict_and_project(&input, model).unwrap();
    let s = prediction.resistance_score;
    assert_eq!(trend.points[0].burden, 500.0);
    assert_eq!(trend.points[1].burden, 100.0);
    assert!((trend.points[4].burden - 100.0 * (1.0 + s * 8.0)).abs() < 1e-9);
}

#[test]
fn test_zero_baseline_predicts_without_error() {
    let model = train().unwrap();
    let input = PatientInput {
        ct_baseline: 0,
        ct_month3: 0,
        ..patient()
    };
    let (prediction, trend) = predict_and_project(&input, model).unwrap();
    assert_eq!(prediction.features.ct_trend, 0.0);
    assert!(prediction.resistance_score.is_finite());
    assert!(trend.points.iter().all(|p| p.burden == 0.0));
}

#[test]
fn test_scores_finite_across_widget_bounds() {
    let model = train().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for _ in 0..1000 {
        let input = PatientInput {
            ras: if rng.gen_range(0..2) == 1 {
                RasStatus::Mutant
            } else {
                RasStatus::WildType
            },
            msi: if rng.gen_range(0..2) == 1 {
                MsiStatus::MsiH
            } else {
                MsiStatus::Mss
            },
            nol3: rng.gen_range(0.0..=1.0),
            ct_baseline: rng.gen_range(0..=1000),
            ct_month3: rng.gen_range(0..=1000),
        };
        assert!(input.validate().is_ok());
        let (prediction, trend) = predict_and_project(&input, model).unwrap();
        assert!(prediction.resistance_score.is_finite());
        assert!(trend.points.iter().all(|p| p.burden.is_finite()));
    }
}

#[test]
fn test_progress_is_clamped_score() {
    let features = patient().features();
    let high = PredictionResult {
        resistance_score: 1.4,
        features,
    };
    let low = PredictionResult {
        resistance_score: -0.1,
        features,
    };
    assert_eq!(high.progress(), 1.0);
    assert_eq!(low.progress(), 0.0);
    assert_eq!(high.resistance_score, 1.4);
}

#[test]
fn test_feature_order_mismatch_rejected() {
    let data = vec![
        0.0, 0.0, 0.0, //
        1.0, 1.0, 1.0, //
        0.0, 1.0, 0.0, //
        1.0, 0.0, 1.0,
    ];
    let targets = vec![0.0, 1.0, 0.3, 0.7];
    let params = ForestParams {
        n_estimators: 2,
        max_depth: None,
        min_samples_split: 2,
        min_samples_leaf: 1,
        seed: 1,
    };
    let forest = ResistanceForest::fit(&data, 3, &targets, &params).unwrap();
    assert_eq!(forest.n_features(), 3);
    let order = FeatureOrder::from_names(&FEATURE_NAMES).unwrap();
    let model = TrainedModel::new(forest, order, ModelProfile::default_v1(), 4);

    let err = predict(&patient().features(), &model).unwrap_err();
    assert_eq!(err, PredictError::FeatureOrderMismatch { order: 4, model: 3 });
}
