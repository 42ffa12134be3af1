//! Cost Breakdown - RDTE and TFU estimates with a derived total, plus the
//! CER selection rules used by the subsystem models.

use serde::Serialize;

use crate::domain::foundation::{CostEstimate, FiscalYear};

/// Width of the tolerance band added to each side of a CER calibration
/// range, as a fraction of the range width.
pub const CER_RANGE_BUFFER: f64 = 0.25;

/// RDTE and TFU cost with their total.
///
/// `total` is recomputed on every mutation:
/// `total.estimate = rdte.estimate + tfu.estimate` and
/// `total.standard_error = sqrt(rdte.se² + tfu.se²)`. All three carry the
/// breakdown's fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    rdte: CostEstimate,
    tfu: CostEstimate,
    total: CostEstimate,
}

impl CostBreakdown {
    /// An all-zero breakdown in the given fiscal year.
    pub fn new(fiscal_year: FiscalYear) -> Self {
        let zero = CostEstimate::zero(fiscal_year);
        Self {
            rdte: zero,
            tfu: zero,
            total: zero,
        }
    }

    /// Splits one CER result into RDTE and TFU by weight.
    ///
    /// Each slot stores `total * weight` with error `error * sqrt(weight)`.
    pub fn split(
        total: f64,
        error: f64,
        rdte_weight: f64,
        tfu_weight: f64,
        fiscal_year: FiscalYear,
    ) -> Self {
        let mut cost = Self::new(fiscal_year);
        cost.set_rdte(total, error, rdte_weight);
        cost.set_tfu(total, error, tfu_weight);
        cost
    }

    /// Builds a breakdown from separately estimated RDTE and TFU.
    pub fn from_parts(rdte: CostEstimate, tfu: CostEstimate, fiscal_year: FiscalYear) -> Self {
        let mut cost = Self::new(fiscal_year);
        cost.set_rdte(rdte.estimate, rdte.standard_error, 1.0);
        cost.set_tfu(tfu.estimate, tfu.standard_error, 1.0);
        cost
    }

    pub fn fiscal_year(&self) -> FiscalYear {
        self.total.fiscal_year
    }

    pub fn rdte(&self) -> &CostEstimate {
        &self.rdte
    }

    pub fn tfu(&self) -> &CostEstimate {
        &self.tfu
    }

    pub fn total(&self) -> &CostEstimate {
        &self.total
    }

    /// Stores a weighted RDTE estimate and refreshes the total.
    ///
    /// Weight scales variance, not probability: linear on the estimate,
    /// square root on the error.
    pub fn set_rdte(&mut self, estimate: f64, standard_error: f64, weight: f64) {
        self.rdte = Self::weighted(estimate, standard_error, weight, self.fiscal_year());
        self.recompute_total();
    }

    /// Stores a weighted TFU estimate and refreshes the total.
    pub fn set_tfu(&mut self, estimate: f64, standard_error: f64, weight: f64) {
        self.tfu = Self::weighted(estimate, standard_error, weight, self.fiscal_year());
        self.recompute_total();
    }

    /// Sums two independent estimates (quadrature on the error).
    pub fn apply_summation(a: &CostEstimate, b: &CostEstimate) -> CostEstimate {
        a.combine(b)
    }

    /// Slot-wise quadrature sum of several breakdowns.
    pub fn sum<'a, I>(parts: I, fiscal_year: FiscalYear) -> Self
    where
        I: IntoIterator<Item = &'a CostBreakdown>,
    {
        let zero = CostEstimate::zero(fiscal_year);
        let (rdte, tfu) = parts.into_iter().fold((zero, zero), |(rdte, tfu), part| {
            (
                Self::apply_summation(&rdte, part.rdte()),
                Self::apply_summation(&tfu, part.tfu()),
            )
        });
        Self::from_parts(rdte, tfu, fiscal_year)
    }

    /// Slot-wise sum of two breakdowns.
    pub fn plus(&self, other: &CostBreakdown) -> Self {
        Self::sum([self, other], self.fiscal_year())
    }

    fn weighted(estimate: f64, standard_error: f64, weight: f64, fiscal_year: FiscalYear) -> CostEstimate {
        CostEstimate::new(estimate * weight, standard_error * weight.sqrt(), fiscal_year)
    }

    fn recompute_total(&mut self) {
        self.total = Self::apply_summation(&self.rdte, &self.tfu);
    }
}

impl Default for CostBreakdown {
    fn default() -> Self {
        Self::new(FiscalYear::BASE)
    }
}

/// One alternative cost estimating relationship evaluated for a spacecraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CerCandidate {
    /// Value of the driving parameter.
    pub parameter: f64,
    pub total: f64,
    pub standard_error: f64,
    /// Calibration range of the driving parameter.
    pub range_begin: f64,
    pub range_end: f64,
}

impl CerCandidate {
    pub fn new(parameter: f64, total: f64, standard_error: f64, range_begin: f64, range_end: f64) -> Self {
        Self {
            parameter,
            total,
            standard_error,
            range_begin,
            range_end,
        }
    }

    /// True unless the parameter falls outside the buffered range.
    ///
    /// A NaN parameter is never "outside".
    pub fn is_in_range(&self) -> bool {
        let buffer = CER_RANGE_BUFFER * (self.range_end - self.range_begin);
        let begin = self.range_begin - buffer;
        let end = self.range_end + buffer;
        !(self.parameter < begin || self.parameter > end)
    }

    fn result(&self) -> (f64, f64) {
        (self.total, self.standard_error)
    }
}

/// Picks the best-supported of three alternative CERs.
///
/// With at most one candidate in its buffered range, a fixed table keyed by
/// the out-of-range pattern decides (no candidate in range picks case 0).
/// Otherwise the in-range candidate with the largest total wins and ties
/// keep the lowest index. Returns `(total, standard_error)`.
pub fn choose_cer_three_case(candidates: &[CerCandidate; 3]) -> (f64, f64) {
    let out_of_range = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_in_range())
        .fold(0u8, |bits, (i, _)| bits | (1 << i));
    let in_range = 3 - out_of_range.count_ones();

    let choice = if in_range <= 1 {
        match out_of_range {
            0b111 => 0,
            0b110 => 0,
            0b101 => 1,
            0b011 => 2,
            _ => 0,
        }
    } else {
        let mut best: Option<usize> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            if out_of_range & (1 << i) != 0 {
                continue;
            }
            let replaces = match best {
                None => true,
                Some(b) => candidate.total > candidates[b].total,
            };
            if replaces {
                best = Some(i);
            }
        }
        best.unwrap_or(0)
    };

    candidates[choice].result()
}

/// Picks between two CERs: case 1 only if its total is strictly higher.
pub fn choose_cer_two_param(case0: (f64, f64), case1: (f64, f64)) -> (f64, f64) {
    if case1.0 > case0.0 {
        case1
    } else {
        case0
    }
}
