//! Property and scaling tests for the costing engine.
//!
//! These exercise the public costing API without any I/O:
//! 1. Cost breakdown totals stay consistent after every mutation
//! 2. Summation adds estimates and combines errors in quadrature
//! 3. Duplicated designs scale hardware linearly
//! 4. Ranking is a permutation ordered by cost

use approx::assert_relative_eq;
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

use constellation_cost::domain::costing::{
    self, ConstellationAggregator, ConstellationContext, CostBreakdown, SpacecraftRank,
};
use constellation_cost::domain::foundation::{FiscalYear, TechReadinessLevel};
use constellation_cost::domain::mission::{
    Constellation, LaunchSpec, MissionContext, MissionRequest, PayloadSpec, SpacecraftSpec,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn small_sat(dry_mass: f64) -> SpacecraftSpec {
    SpacecraftSpec {
        total_dry_mass: dry_mass,
        propellant_mass: 10.0,
        begin_life_power: 400.0,
        end_life_power: 320.0,
        pointing_accuracy: 0.1,
        incl: 53.0,
        tech_readiness_level: TechReadinessLevel::new(7),
        payload: vec![PayloadSpec {
            name: "Optical/Imager".into(),
            total_mass: 25.0,
            peak_power: 60.0,
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn mission(spacecraft: Vec<SpacecraftSpec>, fiscal_year: i32) -> MissionRequest {
    MissionRequest {
        constellation: Constellation {
            design_life: 60.0,
            spacecraft,
        },
        context: MissionContext {
            mission_director: "Government".into(),
            fiscal_year: FiscalYear::new(fiscal_year),
            launch: LaunchSpec {
                vehicle: "Falcon 9".into(),
                total_number: 1,
                ..Default::default()
            },
            ground_stations: Vec::new(),
        },
    }
}

// =============================================================================
// Cost breakdown properties
// =============================================================================

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn total_tracks_rdte_and_tfu_after_every_mutation(
        total in 0.0f64..1.0e7,
        error in 0.0f64..1.0e6,
        rdte_weight in 0.0f64..1.0,
        new_tfu in 0.0f64..1.0e7,
        new_tfu_error in 0.0f64..1.0e6,
    ) {
        let mut cost = CostBreakdown::split(total, error, rdte_weight, 1.0 - rdte_weight, FiscalYear::new(2010));

        for _ in 0..2 {
            let t = cost.total();
            prop_assert_eq!(t.estimate, cost.rdte().estimate + cost.tfu().estimate);
            let (r, u) = (cost.rdte().standard_error, cost.tfu().standard_error);
            prop_assert_eq!(t.standard_error, (r * r + u * u).sqrt());
            prop_assert_eq!(t.fiscal_year, FiscalYear::new(2010));
            cost.set_tfu(new_tfu, new_tfu_error, 1.0);
        }
    }

    #[test]
    fn split_weights_scale_estimate_linearly_and_error_by_root(
        total in 1.0f64..1.0e7,
        error in 0.0f64..1.0e6,
        rdte_weight in 0.0f64..1.0,
    ) {
        let cost = CostBreakdown::split(total, error, rdte_weight, 1.0 - rdte_weight, FiscalYear::BASE);

        assert_relative_eq!(cost.total().estimate, total, max_relative = 1e-12);
        assert_relative_eq!(cost.rdte().standard_error, error * rdte_weight.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(cost.total().standard_error, error, max_relative = 1e-9, epsilon = 1e-9);
    }

    #[test]
    fn summation_adds_estimates_and_errors_in_quadrature(
        parts in proptest::collection::vec((0.0f64..1.0e6, 0.0f64..1.0e5, 0.0f64..1.0e6, 0.0f64..1.0e5), 0..12),
    ) {
        let fy = FiscalYear::new(2017);
        let breakdowns: Vec<CostBreakdown> = parts
            .iter()
            .map(|&(r, re, t, te)| {
                let mut b = CostBreakdown::new(fy);
                b.set_rdte(r, re, 1.0);
                b.set_tfu(t, te, 1.0);
                b
            })
            .collect();

        let sum = CostBreakdown::sum(&breakdowns, fy);

        let rdte: f64 = parts.iter().map(|p| p.0).sum();
        let rdte_var: f64 = parts.iter().map(|p| p.1 * p.1).sum();
        let tfu: f64 = parts.iter().map(|p| p.2).sum();
        assert_relative_eq!(sum.rdte().estimate, rdte, max_relative = 1e-9, epsilon = 1e-6);
        assert_relative_eq!(sum.rdte().standard_error, rdte_var.sqrt(), max_relative = 1e-9, epsilon = 1e-6);
        assert_relative_eq!(sum.tfu().estimate, tfu, max_relative = 1e-9, epsilon = 1e-6);
        prop_assert_eq!(sum.fiscal_year(), fy);
        prop_assert!(sum.total().estimate >= 0.0);
    }

    #[test]
    fn ranks_are_a_cost_ordered_permutation(
        costs in proptest::collection::vec(0.0f64..1.0e6, 1..20),
    ) {
        let ranks = SpacecraftRank::rank_all(&costs, FiscalYear::new(2015), 1.2);

        let mut seen: Vec<usize> = ranks.iter().map(|r| r.rank).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (1..=costs.len()).collect::<Vec<_>>());

        for pair in ranks.windows(2) {
            prop_assert!(pair[0].total_cost <= pair[1].total_cost);
            prop_assert!(pair[0].rank < pair[1].rank);
        }
    }
}

// =============================================================================
// Constellation scaling
// =============================================================================

#[test]
fn duplicated_design_scales_hardware_linearly() {
    let two = costing::estimate(&mission(vec![small_sat(150.0); 2], 2010));
    let four = costing::estimate(&mission(vec![small_sat(150.0); 4], 2010));

    assert_relative_eq!(
        four.hardware.rdte().estimate,
        2.0 * two.hardware.rdte().estimate,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        four.hardware.tfu().estimate,
        2.0 * two.hardware.tfu().estimate,
        max_relative = 1e-12
    );
}

#[test]
fn duplicates_are_costed_once() {
    let ctx = ConstellationContext::from_request(&mission(
        vec![small_sat(150.0), small_sat(150.0), small_sat(300.0)],
        2010,
    ));

    assert_eq!(ctx.designs(), 2);
    assert_eq!(ctx.spacecraft_with_design(0), 2);
    let records = ctx.spacecraft_costs();
    assert_eq!(records[0].total_cost, records[1].total_cost);
    assert_ne!(records[0].total_cost, records[2].total_cost);
}

#[test]
fn hardware_follows_inflation_exactly() {
    let base = costing::estimate(&mission(vec![small_sat(150.0); 3], 2000));
    let later = costing::estimate(&mission(vec![small_sat(150.0); 3], 2010));
    let ratio = FiscalYear::new(2010).inflation_ratio() / FiscalYear::new(2000).inflation_ratio();

    assert_relative_eq!(
        later.hardware.total().estimate,
        base.hardware.total().estimate * ratio,
        max_relative = 1e-12
    );
    assert_eq!(later.hardware.fiscal_year(), FiscalYear::new(2010));
}

#[test]
fn lifecycle_is_the_sum_of_the_five_categories() {
    let result = costing::estimate(&mission(vec![small_sat(150.0), small_sat(220.0)], 2015));

    let categories = [
        &result.hardware,
        &result.iat,
        &result.program,
        &result.ground,
        &result.launch_ops,
    ];
    let total: f64 = categories.iter().map(|c| c.total().estimate).sum();
    let rdte: f64 = categories.iter().map(|c| c.rdte().estimate).sum();
    let tfu: f64 = categories.iter().map(|c| c.tfu().estimate).sum();

    assert_relative_eq!(result.lifecycle.total().estimate, total, max_relative = 1e-12);
    assert_relative_eq!(result.non_recurring.total().estimate, rdte, max_relative = 1e-12);
    assert_relative_eq!(result.recurring.total().estimate, tfu, max_relative = 1e-12);
    assert_eq!(result.lifecycle.tfu().estimate, 0.0);
    assert_eq!(result.recurring.rdte().estimate, 0.0);
}

#[test]
fn aggregation_is_repeatable() {
    let ctx = ConstellationContext::from_request(&mission(vec![small_sat(150.0); 3], 2015));
    let first = ConstellationAggregator::aggregate(&ctx);
    let second = ConstellationAggregator::aggregate(&ctx);

    assert_eq!(first, second);
}

#[test]
fn ranking_follows_spacecraft_totals() {
    let request = mission(
        vec![small_sat(400.0), small_sat(100.0), small_sat(250.0), small_sat(100.0)],
        2015,
    );
    let ctx = ConstellationContext::from_request(&request);
    let result = ConstellationAggregator::aggregate(&ctx);

    let mut expected: Vec<usize> = (0..4).collect();
    expected.sort_by(|&a, &b| {
        let cost = |i: usize| ctx.spacecraft_costs()[i].total_cost.total().estimate;
        cost(a).total_cmp(&cost(b))
    });
    let order: Vec<usize> = result.spacecraft_rank.iter().map(|r| r.spacecraft_index).collect();

    assert_eq!(order, expected);
    // Identical designs tie and keep input order.
    let first_small = order.iter().position(|&i| i == 1).unwrap();
    assert_eq!(order[first_small + 1], 3);
}
