//! CubeSat Model - fixed price buckets by total mass.

use super::{category_shares, RegimeEstimate, SpacecraftInput};
use crate::domain::costing::CostBreakdown;
use crate::domain::foundation::FiscalYear;

/// Upper mass bound (kg, inclusive) and price of each bucket for CubeSats
/// flown in a constellation.
const CONSTELLATION_PRICES: [(f64, f64); 8] = [
    (1.0, 100_000.0),
    (1.25, 200_000.0),
    (4.0, 350_000.0),
    (5.0, 100_000.0),
    (8.0, 105_000.0),
    (10.0, 100_000.0),
    (12.0, 120_000.0),
    (15.0, 200_000.0),
];

/// Buckets for a CubeSat flown alone.
const SINGLE_PRICES: [(f64, f64); 5] = [
    (1.0, 100_000.0),
    (1.25, 200_000.0),
    (4.0, 350_000.0),
    (10.0, 125_000.0),
    (12.0, 200_000.0),
];

/// Price above the last bucket.
const HEAVY_PRICE: f64 = 800_000.0;

/// Decision table costing for spacecraft up to 20 kg.
pub struct CubeSatModel;

impl CubeSatModel {
    /// Whole-spacecraft price for a total mass.
    pub fn price(total_mass: f64, in_constellation: bool) -> f64 {
        let buckets: &[(f64, f64)] = if in_constellation {
            &CONSTELLATION_PRICES
        } else {
            &SINGLE_PRICES
        };
        buckets
            .iter()
            .find(|(upper, _)| total_mass <= *upper)
            .map(|(_, price)| *price)
            .unwrap_or(HEAVY_PRICE)
    }

    /// Splits the price evenly into RDTE and TFU and derives the four
    /// programmatic categories from it. No bus subsystems are costed.
    pub fn estimate(input: &SpacecraftInput<'_>) -> RegimeEstimate {
        let price = Self::price(input.total_mass, input.in_constellation);
        let total_cost = CostBreakdown::split(price, 0.0, 0.5, 0.5, FiscalYear::BASE);

        let subsystems = category_shares(
            &input.budget,
            total_cost.total().estimate,
            total_cost.total().standard_error,
        );

        RegimeEstimate {
            total_cost,
            subsystems,
        }
    }
}
