//! Cost estimate value object: a point estimate with its standard error.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FiscalYear;

/// A cost in thousands of dollars with one-sigma uncertainty.
///
/// The fiscal year is carried along with the numbers and never recomputed
/// from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub estimate: f64,
    pub standard_error: f64,
    pub fiscal_year: FiscalYear,
}

impl CostEstimate {
    /// Creates a new estimate.
    pub fn new(estimate: f64, standard_error: f64, fiscal_year: FiscalYear) -> Self {
        Self {
            estimate,
            standard_error,
            fiscal_year,
        }
    }

    /// A zero cost with zero uncertainty.
    pub fn zero(fiscal_year: FiscalYear) -> Self {
        Self::new(0.0, 0.0, fiscal_year)
    }

    /// Sums two independent estimates: estimates add, errors add in quadrature.
    ///
    /// The fiscal year of `self` is kept.
    pub fn combine(&self, other: &CostEstimate) -> CostEstimate {
        CostEstimate {
            estimate: self.estimate + other.estimate,
            standard_error: (self.standard_error * self.standard_error
                + other.standard_error * other.standard_error)
                .sqrt(),
            fiscal_year: self.fiscal_year,
        }
    }

    /// Scales estimate and error by the same factor.
    pub fn scaled(&self, factor: f64) -> CostEstimate {
        CostEstimate {
            estimate: self.estimate * factor,
            standard_error: self.standard_error * factor,
            fiscal_year: self.fiscal_year,
        }
    }

}

impl Default for CostEstimate {
    fn default() -> Self {
        Self::zero(FiscalYear::BASE)
    }
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3} ± {:.3} k$ ({})",
            self.estimate, self.standard_error, self.fiscal_year
        )
    }
}
