//! Property-based tests for the growth-percentile engine
//!
//! Covers the numerical contracts that must hold for arbitrary inputs:
//! CDF monotonicity and symmetry, Z-score clamping, interpolation bounds,
//! and curve-shape invariants.

use proptest::prelude::*;

use crecer::{
    calculate_z_score, compute_growth_percentile, generate_reference_curve, lms_for_age,
    z_score_to_percentile, Gender, GrowthStandard, LmsRecord, Measurement, CANONICAL_PERCENTILES,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_percentile_always_in_range(z in -20.0f64..20.0) {
        let p = z_score_to_percentile(z);
        prop_assert!((0.0..=100.0).contains(&p));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_cdf_monotone_non_decreasing(a in -10.0f64..10.0, b in -10.0f64..10.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(z_score_to_percentile(lo) <= z_score_to_percentile(hi));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_cdf_symmetric_about_zero(z in 0.0f64..8.0) {
        let sum = z_score_to_percentile(z) + z_score_to_percentile(-z);
        // Each side rounds to 1 decimal independently.
        prop_assert!((sum - 100.0).abs() <= 0.1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_z_score_always_clamped(
        value in 0.01f64..500.0,
        l in -2.0f64..2.0,
        m in 0.1f64..200.0,
        s in 0.01f64..0.5,
    ) {
        let lms = LmsRecord { age_months: 0.0, l, m, s };
        let z = calculate_z_score(value, &lms).unwrap();
        prop_assert!((-3.5..=3.5).contains(&z), "z = {z}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_median_value_scores_zero(
        l in -2.0f64..2.0,
        m in 0.1f64..200.0,
        s in 0.01f64..0.5,
    ) {
        let lms = LmsRecord { age_months: 0.0, l, m, s };
        let z = calculate_z_score(m, &lms).unwrap();
        prop_assert!(z.abs() <= 0.01, "z(M) = {z}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_interpolated_params_stay_within_neighbor_bounds(age in 0.0f64..216.0) {
        let table = crecer::select_dataset(
            Measurement::Weight,
            Gender::Male,
            GrowthStandard::Who,
        ).unwrap();
        let lms = lms_for_age(age, table).unwrap();

        let m_min = table.iter().map(|r| r.m).fold(f64::INFINITY, f64::min);
        let m_max = table.iter().map(|r| r.m).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(lms.m >= m_min && lms.m <= m_max);
        prop_assert!(lms.s > 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_percentile_monotone_in_value(
        base in 1.0f64..30.0,
        bump in 0.1f64..20.0,
        age in 0.0f64..216.0,
    ) {
        let lighter = compute_growth_percentile(
            Measurement::Weight, base, age, Gender::Female, GrowthStandard::Who,
        ).unwrap();
        let heavier = compute_growth_percentile(
            Measurement::Weight, base + bump, age, Gender::Female, GrowthStandard::Who,
        ).unwrap();
        // Equality allowed: 1-decimal rounding and the +-3.5 clamp can
        // flatten nearby or extreme values onto the same percentile.
        prop_assert!(heavier.percentile >= lighter.percentile);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_curve_arrays_always_equal_length(max_age in 0u32..240) {
        let curve = generate_reference_curve(
            Measurement::Height,
            Gender::Male,
            GrowthStandard::Who,
            max_age,
        ).unwrap();

        let lengths: Vec<usize> = CANONICAL_PERCENTILES
            .iter()
            .map(|&p| curve.points(p).unwrap().len())
            .collect();
        prop_assert!(lengths.windows(2).all(|w| w[0] == w[1]));
        prop_assert_eq!(lengths[0], (max_age.min(216) + 1) as usize);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_engine_never_panics_on_hostile_inputs(
        value in -1000.0f64..1000.0,
        age in -100.0f64..500.0,
    ) {
        // Every failure must surface as a typed error, never a panic.
        let _ = compute_growth_percentile(
            Measurement::Weight, value, age, Gender::Male, GrowthStandard::Who,
        );
    }
}
