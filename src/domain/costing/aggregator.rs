//! Constellation Aggregator - rolls per-design costs up to the constellation.
//!
//! Every figure is computed once per design and multiplied by the number of
//! spacecraft built to it, then converted to the context fiscal year.

use super::{
    ConstellationContext, ConstellationResult, CostBreakdown, Diagnostic, Diagnostics,
    SpacecraftCostRecord, SpacecraftRank, SubsystemKind,
};
use crate::domain::foundation::{CostEstimate, FiscalYear};

/// Learning curve factor for 1-9 copies.
pub const LEARNING_FEW_COPIES: f64 = 0.95;
/// Learning curve factor for 10-50 copies.
pub const LEARNING_MANY_COPIES: f64 = 0.90;
/// Learning curve factor beyond 50 copies.
pub const LEARNING_FLEET: f64 = 0.85;

/// Mission class thresholds on FY2013 spacecraft RDTE (k$).
const MISSION_CLASS_TABLE: [(f64, f64); 4] = [
    (120.0e3, 1.0),
    (400.0e3, 2.0),
    (800.0e3, 3.0),
    (f64::INFINITY, 6.0),
];

/// Below this FY2013 RDTE a mission is class 0.25.
const SMALL_MISSION_THRESHOLD: f64 = 60.0e3;

/// Pure aggregation of a constellation context.
pub struct ConstellationAggregator;

impl ConstellationAggregator {
    /// Computes every category, the derived totals and the ranking.
    pub fn aggregate(ctx: &ConstellationContext) -> ConstellationResult {
        let mut diagnostics = ctx.diagnostics().clone();

        let hardware = Self::hardware(ctx);
        let iat = Self::category(ctx, SubsystemKind::Iat, &mut diagnostics);
        let program = Self::category(ctx, SubsystemKind::Program, &mut diagnostics);
        let ground = Self::category(ctx, SubsystemKind::Ground, &mut diagnostics);
        let launch_ops = Self::category(ctx, SubsystemKind::LaunchOps, &mut diagnostics);
        let operations = Self::operations(ctx, &hardware);

        let fy = ctx.fiscal_year();
        let categories = [&hardware, &iat, &program, &ground, &launch_ops];
        let zero = CostEstimate::zero(fy);
        let non_recurring =
            CostBreakdown::from_parts(Self::sum_slot(&categories, fy, |c| c.rdte()), zero, fy);
        let recurring =
            CostBreakdown::from_parts(zero, Self::sum_slot(&categories, fy, |c| c.tfu()), fy);
        let lifecycle =
            CostBreakdown::from_parts(Self::sum_slot(&categories, fy, |c| c.total()), zero, fy);

        let spacecraft_totals: Vec<f64> = ctx
            .spacecraft_costs()
            .iter()
            .map(|r| r.total_cost.total().estimate)
            .collect();
        let spacecraft_rank = SpacecraftRank::rank_all(&spacecraft_totals, fy, ctx.inflation_factor());

        tracing::info!(
            designs = ctx.designs(),
            planes = ctx.planes(),
            design_life = ctx.design_life(),
            context_factor = ctx.context_factor(),
            lifecycle = lifecycle.total().estimate,
            hardware = hardware.total().estimate,
            operations = operations.total().estimate,
            fiscal_year = %fy,
            diagnostics = diagnostics.len(),
            "constellation cost aggregated"
        );

        ConstellationResult {
            hardware,
            iat,
            program,
            ground,
            launch_ops,
            operations,
            non_recurring,
            recurring,
            lifecycle,
            spacecraft_rank,
            diagnostics,
        }
    }

    /// Learning curve factor for a number of copies of one design.
    pub fn learning_factor(copies: usize) -> f64 {
        if copies < 10 {
            LEARNING_FEW_COPIES
        } else if copies <= 50 {
            LEARNING_MANY_COPIES
        } else {
            LEARNING_FLEET
        }
    }

    /// Spacecraft hardware: RDTE scaled by heritage, TFU by learning.
    pub fn hardware(ctx: &ConstellationContext) -> CostBreakdown {
        let inflation = ctx.inflation_factor();
        let (rdte, tfu) = Self::per_design(ctx).fold(
            (CostEstimate::zero(ctx.fiscal_year()), CostEstimate::zero(ctx.fiscal_year())),
            |(rdte, tfu), (_, copies, record)| {
                let n = copies as f64;
                let heritage = record.heritage_factor * inflation;
                let learning = Self::learning_factor(copies) * inflation;
                (
                    rdte.combine(&record.total_cost.rdte().scaled(n * heritage)),
                    tfu.combine(&record.total_cost.tfu().scaled(n * learning)),
                )
            },
        );
        CostBreakdown::from_parts(rdte, tfu, ctx.fiscal_year())
    }

    /// A programmatic category summed over designs.
    ///
    /// Launch operations also carry the launch vehicle purchase as TFU.
    pub fn category(
        ctx: &ConstellationContext,
        kind: SubsystemKind,
        diagnostics: &mut Diagnostics,
    ) -> CostBreakdown {
        let inflation = ctx.inflation_factor();
        let fy = ctx.fiscal_year();
        let mut rdte = CostEstimate::zero(fy);
        let mut tfu = CostEstimate::zero(fy);

        for (design, copies, record) in Self::per_design(ctx) {
            let Some(subsystem) = record.subsystem(kind) else {
                diagnostics.push(Diagnostic::MissingSubsystem {
                    design,
                    subsystem: kind,
                });
                continue;
            };
            let factor = copies as f64 * inflation;
            rdte = rdte.combine(&subsystem.cost.rdte().scaled(factor));
            tfu = tfu.combine(&subsystem.cost.tfu().scaled(factor));
        }

        if kind == SubsystemKind::LaunchOps {
            let launch = CostEstimate::new(ctx.estimate_launch_cost() * inflation, 0.0, fy);
            tfu = tfu.combine(&launch);
        }

        CostBreakdown::from_parts(rdte, tfu, fy)
    }

    /// Mission class from spacecraft RDTE in FY2013 k$; 0 when undefined.
    pub fn mission_class(rdte_fy2013: f64) -> f64 {
        if rdte_fy2013 < SMALL_MISSION_THRESHOLD {
            return 0.25;
        }
        MISSION_CLASS_TABLE
            .iter()
            .find(|(upper, _)| rdte_fy2013 <= *upper)
            .map(|(_, class)| *class)
            .unwrap_or(0.0)
    }

    /// Mission operations from hardware RDTE and fleet size: checkout as
    /// RDTE, prime operations as TFU.
    pub fn operations(ctx: &ConstellationContext, hardware: &CostBreakdown) -> CostBreakdown {
        let inflation = ctx.inflation_factor();
        let reference = FiscalYear::OPERATIONS_REFERENCE.inflation_ratio();
        let rdte_fy2013 = hardware.rdte().estimate * reference / inflation;
        let class = Self::mission_class(rdte_fy2013);
        let spacecraft = ctx.spacecraft_to_be_built() as f64;

        let prime = 533.8 * class.powf(0.8868) * spacecraft.powf(0.1814) * inflation / reference;
        let checkout = 1.95 * prime;

        let fy = ctx.fiscal_year();
        CostBreakdown::from_parts(
            CostEstimate::new(checkout, 0.297 * checkout, fy),
            CostEstimate::new(prime, 0.242 * prime, fy),
            fy,
        )
    }

    /// `(design, copies, first record)` for each design in index order.
    fn per_design(
        ctx: &ConstellationContext,
    ) -> impl Iterator<Item = (usize, usize, &SpacecraftCostRecord)> + '_ {
        (0..ctx.designs()).filter_map(move |design| {
            let copies = ctx.spacecraft_with_design(design);
            ctx.spacecraft_costs()
                .get(ctx.first_spacecraft_with_design(design))
                .map(|record| (design, copies, record))
        })
    }

    fn sum_slot(
        categories: &[&CostBreakdown],
        fy: FiscalYear,
        slot: impl Fn(&CostBreakdown) -> &CostEstimate,
    ) -> CostEstimate {
        categories
            .iter()
            .fold(CostEstimate::zero(fy), |sum, c| sum.combine(slot(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TechReadinessLevel;
    use crate::domain::mission::{
        Constellation, LaunchSpec, MissionContext, MissionRequest, SpacecraftSpec,
    };
    use approx::assert_relative_eq;

    fn spacecraft(dry_mass: f64) -> SpacecraftSpec {
        SpacecraftSpec {
            total_dry_mass: dry_mass,
            begin_life_power: 200.0,
            end_life_power: 150.0,
            pointing_accuracy: 1.0,
            tech_readiness_level: TechReadinessLevel::new(7),
            ..Default::default()
        }
    }

    fn context(fleet: Vec<SpacecraftSpec>, fiscal_year: i32, vehicle: &str, launches: i32) -> ConstellationContext {
        ConstellationContext::from_request(&MissionRequest {
            constellation: Constellation {
                design_life: 36.0,
                spacecraft: fleet,
            },
            context: MissionContext {
                mission_director: "Government".into(),
                fiscal_year: FiscalYear::new(fiscal_year),
                launch: LaunchSpec {
                    vehicle: vehicle.into(),
                    total_number: launches,
                    ..Default::default()
                },
                ground_stations: Vec::new(),
            },
        })
    }

    // -------------------------------------------------------------------------
    // Learning and mission class tables
    // -------------------------------------------------------------------------

    #[test]
    fn learning_factor_boundaries() {
        assert_eq!(ConstellationAggregator::learning_factor(1), 0.95);
        assert_eq!(ConstellationAggregator::learning_factor(9), 0.95);
        assert_eq!(ConstellationAggregator::learning_factor(10), 0.90);
        assert_eq!(ConstellationAggregator::learning_factor(50), 0.90);
        assert_eq!(ConstellationAggregator::learning_factor(51), 0.85);
    }

    #[test]
    fn mission_class_boundaries() {
        assert_eq!(ConstellationAggregator::mission_class(59_999.0), 0.25);
        assert_eq!(ConstellationAggregator::mission_class(60_000.0), 1.0);
        assert_eq!(ConstellationAggregator::mission_class(120_000.0), 1.0);
        assert_eq!(ConstellationAggregator::mission_class(400_000.0), 2.0);
        assert_eq!(ConstellationAggregator::mission_class(800_000.0), 3.0);
        assert_eq!(ConstellationAggregator::mission_class(800_001.0), 6.0);
        assert_eq!(ConstellationAggregator::mission_class(f64::NAN), 0.0);
    }

    // -------------------------------------------------------------------------
    // Hardware
    // -------------------------------------------------------------------------

    #[test]
    fn hardware_scales_one_design_by_copies() {
        let one = context(vec![spacecraft(150.0)], 2000, "", 0);
        let three = context(vec![spacecraft(150.0); 3], 2000, "", 0);

        let h1 = ConstellationAggregator::hardware(&one);
        let h3 = ConstellationAggregator::hardware(&three);

        assert_eq!(three.designs(), 1);
        assert_relative_eq!(h3.rdte().estimate, 3.0 * h1.rdte().estimate, epsilon = 1e-6);
        assert_relative_eq!(h3.tfu().estimate, 3.0 * h1.tfu().estimate, epsilon = 1e-6);
    }

    #[test]
    fn hardware_applies_heritage_and_learning() {
        let ctx = context(vec![spacecraft(150.0)], 2000, "", 0);
        let record = &ctx.spacecraft_costs()[0];
        let hardware = ConstellationAggregator::hardware(&ctx);

        assert_relative_eq!(hardware.rdte().estimate, record.total_cost.rdte().estimate * 0.4, epsilon = 1e-9);
        assert_relative_eq!(hardware.tfu().estimate, record.total_cost.tfu().estimate * 0.95, epsilon = 1e-9);
        assert_eq!(hardware.fiscal_year(), FiscalYear::new(2000));
    }

    #[test]
    fn hardware_inflates_to_context_year() {
        let base = ConstellationAggregator::hardware(&context(vec![spacecraft(150.0)], 2000, "", 0));
        let later = ConstellationAggregator::hardware(&context(vec![spacecraft(150.0)], 2017, "", 0));
        let ratio = FiscalYear::new(2017).inflation_ratio();

        assert_relative_eq!(later.total().estimate, base.total().estimate * ratio, epsilon = 1e-6);
        assert_eq!(later.fiscal_year(), FiscalYear::new(2017));
    }

    // -------------------------------------------------------------------------
    // Categories
    // -------------------------------------------------------------------------

    #[test]
    fn launch_ops_adds_vehicle_purchase() {
        let without = context(vec![spacecraft(150.0)], 2000, "", 0);
        let with = context(vec![spacecraft(150.0)], 2000, "Delta II", 2);

        let a = ConstellationAggregator::category(&without, SubsystemKind::LaunchOps, &mut Diagnostics::new());
        let b = ConstellationAggregator::category(&with, SubsystemKind::LaunchOps, &mut Diagnostics::new());

        assert_relative_eq!(b.tfu().estimate - a.tfu().estimate, 110_000.0, epsilon = 1e-6);
        assert_relative_eq!(b.tfu().standard_error, a.tfu().standard_error, epsilon = 1e-9);
    }

    #[test]
    fn missing_category_contributes_zero_and_reports() {
        let mut odd = spacecraft(150.0);
        odd.total_dry_mass = f64::NAN;
        let ctx = context(vec![odd], 2000, "", 0);

        let mut diagnostics = Diagnostics::new();
        let iat = ConstellationAggregator::category(&ctx, SubsystemKind::Iat, &mut diagnostics);

        assert_eq!(iat.total().estimate, 0.0);
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::MissingSubsystem {
                design: 0,
                subsystem: SubsystemKind::Iat
            }]
        );
    }

    // -------------------------------------------------------------------------
    // Operations and derived totals
    // -------------------------------------------------------------------------

    #[test]
    fn operations_follow_class_and_fleet_size() {
        let ctx = context(vec![spacecraft(150.0); 4], 2000, "", 0);
        let hardware = ConstellationAggregator::hardware(&ctx);
        let operations = ConstellationAggregator::operations(&ctx, &hardware);

        let class = ConstellationAggregator::mission_class(hardware.rdte().estimate * 1.308);
        let prime = 533.8 * class.powf(0.8868) * 4.0_f64.powf(0.1814) / 1.308;
        assert_relative_eq!(operations.tfu().estimate, prime, epsilon = 1e-9);
        assert_relative_eq!(operations.rdte().estimate, 1.95 * prime, epsilon = 1e-9);
        assert_relative_eq!(operations.tfu().standard_error, 0.242 * prime, epsilon = 1e-9);
    }

    #[test]
    fn empty_constellation_is_all_zero() {
        let result = ConstellationAggregator::aggregate(&context(Vec::new(), 2017, "", 0));

        assert_eq!(result.hardware.total().estimate, 0.0);
        assert_eq!(result.lifecycle.total().estimate, 0.0);
        assert_eq!(result.operations.total().estimate, 0.0);
        assert!(result.spacecraft_rank.is_empty());
    }

    #[test]
    fn derived_totals_exclude_operations() {
        let result = ConstellationAggregator::aggregate(&context(vec![spacecraft(150.0)], 2017, "Falcon 9", 1));
        let categories = [
            &result.hardware,
            &result.iat,
            &result.program,
            &result.ground,
            &result.launch_ops,
        ];

        let rdte: f64 = categories.iter().map(|c| c.rdte().estimate).sum();
        let tfu: f64 = categories.iter().map(|c| c.tfu().estimate).sum();
        assert_relative_eq!(result.non_recurring.rdte().estimate, rdte, epsilon = 1e-6);
        assert_eq!(result.non_recurring.tfu().estimate, 0.0);
        assert_relative_eq!(result.recurring.tfu().estimate, tfu, epsilon = 1e-6);
        assert_eq!(result.recurring.rdte().estimate, 0.0);
        assert_relative_eq!(result.lifecycle.total().estimate, rdte + tfu, epsilon = 1e-6);
        assert!(result.operations.total().estimate > 0.0);
    }

    #[test]
    fn aggregation_is_repeatable() {
        let ctx = context(vec![spacecraft(150.0), spacecraft(400.0)], 2017, "Falcon 9", 2);
        assert_eq!(ConstellationAggregator::aggregate(&ctx), ConstellationAggregator::aggregate(&ctx));
    }
}
