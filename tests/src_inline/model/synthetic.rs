use super::*;

#[test]
fn test_cohort_shape_and_ranges() {
    let set = synthesize(&ModelProfile::default_v1());
    assert_eq!(set.rows.len(), 100);
    assert_eq!(set.labels.len(), 100);
    for row in &set.rows {
        assert!(row.ras == 0.0 || row.ras == 1.0);
        assert!(row.msi == 0.0 || row.msi == 1.0);
        assert!((0.0..1.0).contains(&row.nol3));
        assert!((0.0..1.0).contains(&row.ct_trend));
    }
}

#[test]
fn test_both_binary_levels_drawn() {
    let set = synthesize(&ModelProfile::default_v1());
    let ras_mutant = set.rows.iter().filter(|r| r.ras == 1.0).count();
    let msi_high = set.rows.iter().filter(|r| r.msi == 1.0).count();
    assert!(ras_mutant > 0 && ras_mutant < 100);
    assert!(msi_high > 0 && msi_high < 100);
}

#[test]
fn test_labels_follow_fixed_formula() {
    let set = synthesize(&ModelProfile::default_v1());
    for (row, label) in set.rows.iter().zip(&set.labels) {
        let expected = 0.5 * row.ras + 0.4 * row.nol3 + 0.3 * (1.0 - row.ct_trend);
        assert!((label - expected).abs() < 1e-12);
        assert!((0.0..=1.2).contains(label));
    }
}

#[test]
fn test_label_ignores_msi() {
    let weights = ModelProfile::default_v1().label;
    let base = FeatureVector {
        ras: 1.0,
        msi: 0.0,
        nol3: 0.5,
        ct_trend: 0.5,
    };
    let msi_high = FeatureVector { msi: 1.0, ..base };
    assert_eq!(
        synthetic_label(&base, &weights).to_bits(),
        synthetic_label(&msi_high, &weights).to_bits()
    );
    assert!((synthetic_label(&base, &weights) - 0.85).abs() < 1e-12);
}

#[test]
fn test_same_seed_identical_cohort() {
    let profile = ModelProfile::default_v1();
    let a = synthesize(&profile);
    let b = synthesize(&profile);
    assert_eq!(a, b);
    for (x, y) in a.rows.iter().zip(&b.rows) {
        assert_eq!(x.nol3.to_bits(), y.nol3.to_bits());
        assert_eq!(x.ct_trend.to_bits(), y.ct_trend.to_bits());
    }
}

#[test]
fn test_different_seed_different_cohort() {
    let mut profile = ModelProfile::default_v1();
    let a = synthesize(&profile);
    profile.seed = 43;
    let b = synthesize(&profile);
    assert_ne!(a, b);
}

// Bit patterns of the first four rows drawn from seed 42. A change in the
// generator, its stream, or the draw order shows up here.
#[test]
fn test_seed_42_cohort_golden_rows() {
    let set = synthesize(&ModelProfile::default_v1());
    let expected: [(f64, f64, u64, u64, u64); 4] = [
        (1.0, 1.0, 0x3fd4bf189a198ed4, 0x3fe3368a9dd96e48, 0x3fe7fc41bc43e1e2),
        (1.0, 0.0, 0x3fbcadb251a6ab80, 0x3fe955f15a5ac9e4, 0x3fe36ee6e8f9e59c),
        (1.0, 1.0, 0x3fdff687f18bf05c, 0x3fe5f66b9c6849f2, 0x3fe967614e2fe6b0),
        (0.0, 0.0, 0x3fe4b6e8e4f05138, 0x3fd04c7066409160, 0x3fdee1cbcbace22a),
    ];
    for (i, (ras, msi, nol3, ct_trend, label)) in expected.into_iter().enumerate() {
        let row = &set.rows[i];
        assert_eq!(row.ras, ras, "row {i} ras");
        assert_eq!(row.msi, msi, "row {i} msi");
        assert_eq!(row.nol3.to_bits(), nol3, "row {i} nol3");
        assert_eq!(row.ct_trend.to_bits(), ct_trend, "row {i} ct_trend");
        assert_eq!(set.labels[i].to_bits(), label, "row {i} label");
    }
}

#[test]
fn test_seed_42_cohort_golden_counts() {
    let set = synthesize(&ModelProfile::default_v1());
    let ras_mutant = set.rows.iter().filter(|r| r.ras == 1.0).count();
    let msi_high = set.rows.iter().filter(|r| r.msi == 1.0).count();
    assert_eq!(ras_mutant, 50);
    assert_eq!(msi_high, 54);
}
