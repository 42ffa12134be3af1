//! Constellation Result - aggregated costs, spacecraft ranking and the
//! result document.

use serde::{Deserialize, Serialize};

use super::{CostBreakdown, Diagnostic, Diagnostics};
use crate::domain::foundation::{CostEstimate, FiscalYear};

/// Position of one spacecraft when the fleet is ordered by cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacecraftRank {
    pub spacecraft_index: usize,
    /// Spacecraft total cost estimate, FY2000 k$.
    pub total_cost: f64,
    pub fiscal_year: FiscalYear,
    /// 1 is cheapest.
    pub rank: usize,
    #[serde(skip)]
    pub inflation_factor: f64,
}

impl SpacecraftRank {
    /// Cost used for ordering.
    pub fn comparable_cost(&self) -> f64 {
        self.total_cost / self.inflation_factor
    }

    /// Ranks spacecraft by cost, cheapest first.
    ///
    /// The sort is stable, so equal costs keep input order. NaN costs rank
    /// last.
    pub fn rank_all(total_costs: &[f64], fiscal_year: FiscalYear, inflation_factor: f64) -> Vec<Self> {
        let mut ranks: Vec<Self> = total_costs
            .iter()
            .enumerate()
            .map(|(spacecraft_index, &total_cost)| Self {
                spacecraft_index,
                total_cost,
                fiscal_year,
                rank: 0,
                inflation_factor,
            })
            .collect();

        ranks.sort_by(|a, b| a.comparable_cost().total_cmp(&b.comparable_cost()));
        for (position, entry) in ranks.iter_mut().enumerate() {
            entry.rank = position + 1;
        }
        ranks
    }
}

/// Full costing outcome for one constellation.
///
/// Category breakdowns are in the context fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstellationResult {
    pub hardware: CostBreakdown,
    pub iat: CostBreakdown,
    pub program: CostBreakdown,
    pub ground: CostBreakdown,
    pub launch_ops: CostBreakdown,
    pub operations: CostBreakdown,
    /// Quadrature sum of the category RDTE, carried in the RDTE slot.
    pub non_recurring: CostBreakdown,
    /// Quadrature sum of the category TFU, carried in the TFU slot.
    pub recurring: CostBreakdown,
    /// Quadrature sum of the category totals, carried in the RDTE slot.
    pub lifecycle: CostBreakdown,
    pub spacecraft_rank: Vec<SpacecraftRank>,
    pub diagnostics: Diagnostics,
}

impl ConstellationResult {
    /// The result document.
    pub fn report(&self) -> CostReport {
        CostReport {
            lifecycle_cost: *self.lifecycle.total(),
            hardware_cost: *self.hardware.total(),
            iat_cost: *self.iat.total(),
            program_cost: *self.program.total(),
            ground_cost: *self.ground.total(),
            launch_cost: *self.launch_ops.total(),
            operations_cost: *self.operations.total(),
            non_recurring_cost: *self.non_recurring.total(),
            recurring_cost: *self.recurring.total(),
            spacecraft_rank: self.spacecraft_rank.clone(),
        }
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

/// Result document: the total of every category plus the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    pub lifecycle_cost: CostEstimate,
    pub hardware_cost: CostEstimate,
    pub iat_cost: CostEstimate,
    pub program_cost: CostEstimate,
    pub ground_cost: CostEstimate,
    pub launch_cost: CostEstimate,
    pub operations_cost: CostEstimate,
    pub non_recurring_cost: CostEstimate,
    pub recurring_cost: CostEstimate,
    #[serde(default)]
    pub spacecraft_rank: Vec<SpacecraftRank>,
}
