//! Property-based tests for pricing and duration invariants.
//!
//! - Price falls strictly as yield rises
//! - Yield equal to coupon prices at par
//! - Duration of a positive schedule lies strictly inside (0, T)
//! - Back-loaded schedules have longer duration than front-loaded ones

use approx::assert_relative_eq;
use bondrisk_analytics::prelude::*;
use proptest::prelude::*;

// =============================================================================
// PRICING
// =============================================================================

proptest! {
    #[test]
    fn price_strictly_decreasing_in_yield(
        y in -0.5f64..0.5,
        bump in 1e-4f64..0.5,
        coupon in 0.0f64..0.15,
        maturity in 1u32..60,
        principal in 1.0f64..1_000.0,
    ) {
        let low = price_from_yield(y, coupon, maturity, principal).unwrap();
        let high = price_from_yield(y + bump, coupon, maturity, principal).unwrap();
        prop_assert!(high < low, "P({}) = {} not below P({}) = {}", y + bump, high, y, low);
    }

    #[test]
    fn par_when_yield_equals_coupon(
        coupon in 0.0f64..0.2,
        maturity in 1u32..100,
        principal in 1.0f64..10_000.0,
    ) {
        let price = price_from_yield(coupon, coupon, maturity, principal).unwrap();
        prop_assert!((price - principal).abs() <= principal * 1e-9);
    }

    #[test]
    fn yield_at_or_below_minus_one_rejected(y in -10.0f64..=-1.0) {
        let err = price_from_yield(y, 0.05, 10, 100.0).unwrap_err();
        prop_assert!(matches!(err, BondRiskError::InvalidYield { .. }), "unexpected error: {:?}", err);
        prop_assert!(duration(&[1.0, 1.0], y).is_err());
    }
}

// =============================================================================
// DURATION
// =============================================================================

proptest! {
    #[test]
    fn duration_strictly_inside_schedule(
        flows in prop::collection::vec(1e-3f64..100.0, 2..60),
        y in 0.0f64..1.0,
    ) {
        let d = duration(&flows, y).unwrap();
        prop_assert!(d > 0.0);
        prop_assert!(d < flows.len() as f64);
    }

    #[test]
    fn back_loaded_outlasts_front_loaded(
        n in 2usize..50,
        y in 0.0f64..0.3,
        heavy in 1.0f64..10.0,
    ) {
        let mut front = vec![1.0; n];
        let mut back = vec![1.0; n];
        front[0] += heavy;
        back[n - 1] += heavy;

        prop_assert!(duration(&back, y).unwrap() > duration(&front, y).unwrap());
    }

    #[test]
    fn duration_is_scale_invariant(
        flows in prop::collection::vec(1e-3f64..100.0, 1..40),
        y in 0.0f64..0.5,
        scale in 0.01f64..100.0,
    ) {
        let scaled: Vec<f64> = flows.iter().map(|cf| cf * scale).collect();
        let d = duration(&flows, y).unwrap();
        let ds = duration(&scaled, y).unwrap();
        prop_assert!((d - ds).abs() <= 1e-9 * d.max(1.0));
    }

    #[test]
    fn plank_weights_reproduce_duration(
        flows in prop::collection::vec(1e-3f64..100.0, 1..40),
        y in 0.0f64..0.5,
    ) {
        let weights = plank_weights(&flows, y).unwrap();
        let total: f64 = weights.iter().map(|w| w.present_value).sum();
        let centre: f64 = weights
            .iter()
            .map(|w| (w.timing - 1) as f64 * w.present_value)
            .sum::<f64>()
            / total;
        let d = duration(&flows, y).unwrap();
        prop_assert!((centre / (1.0 + y) - d).abs() <= 1e-9 * d.max(1.0));
    }
}

// =============================================================================
// REFERENCE SCENARIOS
// =============================================================================

#[test]
fn treasury_vs_mortgage() {
    let treasury = BondParameters::new(0.04, 30, 1.0).unwrap().cash_flows();
    let mortgage = CashFlowSchedule::level(0.08, 30).unwrap();

    let dt = duration(treasury.payments(), 0.05).unwrap();
    let dm = duration(mortgage.payments(), 0.05).unwrap();

    assert_relative_eq!(dt, 15.14, epsilon = 0.01);
    assert_relative_eq!(dm, 10.45, epsilon = 0.01);
    assert!(dt > dm);
}

#[test]
fn early_sale_loses_about_forty_four_percent() {
    let purchase = price_from_yield(0.02, 0.02, 30, 100.0).unwrap();
    let sale = price_from_yield(0.05, 0.02, 28, 100.0).unwrap();
    let loss_fraction = (purchase - sale) / purchase;

    assert_relative_eq!(purchase, 100.0, epsilon = 1e-9);
    assert_relative_eq!(sale, 55.31, epsilon = 0.01);
    assert_relative_eq!(loss_fraction, 0.447, epsilon = 0.001);

    let outcome = SaleScenario::default().evaluate().unwrap();
    assert_relative_eq!(outcome.loss_fraction, loss_fraction, epsilon = 1e-12);
}

#[test]
fn degenerate_schedules() {
    for flows in [vec![], vec![0.0; 30]] {
        let err = duration(&flows, 0.05).unwrap_err();
        assert!(matches!(err, BondRiskError::DegenerateSchedule { .. }));
    }
}
