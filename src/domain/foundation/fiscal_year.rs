//! Fiscal year value object and the inflation ratio table.
//!
//! All cost estimating relationships are calibrated in FY2000 thousands of
//! dollars. [`FiscalYear::inflation_ratio`] converts between FY2000 and any
//! other year: tabulated values cover FY1980 through FY2020, with linear
//! extension on either side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tabulated ratios against FY2000, indexed from FY1980.
const INFLATION_TABLE: [f64; 41] = [
    0.456, 0.510, 0.559, 0.610, 0.658, 0.681, 0.700, 0.719, 0.740, 0.771, // 1980-1989
    0.802, 0.837, 0.860, 0.883, 0.901, 0.918, 0.937, 0.958, 0.970, 0.984, // 1990-1999
    1.000, 1.017, 1.034, 1.052, 1.075, 1.099, 1.123, 1.148, 1.173, 1.199, // 2000-2009
    1.225, 1.252, 1.279, 1.308, 1.336, 1.366, 1.396, 1.427, 1.458, 1.490, // 2010-2019
    1.523, // 2020
];

const TABLE_FIRST_YEAR: i32 = 1980;
const TABLE_LAST_YEAR: i32 = 2020;

/// Earliest year the backward extension applies to. Earlier years would
/// extrapolate to non-positive ratios.
const EXTRAPOLATION_FLOOR_YEAR: i32 = 1972;

const BACKWARD_SLOPE: f64 = 0.054;
const FORWARD_SLOPE: f64 = 0.033;

/// Ratio returned for any year the table and the extensions do not cover.
const UNTABULATED_RATIO: f64 = 1.0;

/// A government fiscal year.
///
/// The default is year 0, which is what a request without a fiscal year
/// decodes to; its inflation ratio is the untabulated 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FiscalYear(i32);

impl FiscalYear {
    /// Year the cost estimating relationships are expressed in.
    pub const BASE: Self = Self(2000);

    /// Year the mission operations model is calibrated in.
    pub const OPERATIONS_REFERENCE: Self = Self(2013);

    /// Year the unmanned vehicle propulsion table is expressed in.
    pub const PROPULSION_REFERENCE: Self = Self(2012);

    /// Year the instrument cost model is expressed in.
    pub const INSTRUMENT_REFERENCE: Self = Self(2015);

    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// Returns the year as an integer.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Ratio of this year's dollars to FY2000 dollars.
    ///
    /// # Edge Cases
    /// - Before 1972: falls back to the table default (1.0), never extrapolates
    /// - 1972-1979: `0.054 * (fy - 1980) + 0.456`
    /// - After 2020: `0.033 * (fy - 2020) + 1.523`
    pub fn inflation_ratio(&self) -> f64 {
        let fy = self.0;
        if fy < EXTRAPOLATION_FLOOR_YEAR {
            return Self::tabulated_ratio(fy);
        }
        if fy < TABLE_FIRST_YEAR {
            return BACKWARD_SLOPE * f64::from(fy - TABLE_FIRST_YEAR)
                + INFLATION_TABLE[0];
        }
        if fy > TABLE_LAST_YEAR {
            return FORWARD_SLOPE * f64::from(fy - TABLE_LAST_YEAR)
                + INFLATION_TABLE[INFLATION_TABLE.len() - 1];
        }
        Self::tabulated_ratio(fy)
    }

    /// Converts an amount expressed in this year's dollars to FY2000 dollars.
    pub fn deflate_to_base(&self, amount: f64) -> f64 {
        amount / self.inflation_ratio()
    }

    fn tabulated_ratio(fy: i32) -> f64 {
        if !(TABLE_FIRST_YEAR..=TABLE_LAST_YEAR).contains(&fy) {
            return UNTABULATED_RATIO;
        }
        INFLATION_TABLE[(fy - TABLE_FIRST_YEAR) as usize]
    }
}

impl From<i32> for FiscalYear {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FY{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn base_year_ratio_is_exactly_one() {
        assert_eq!(FiscalYear::BASE.inflation_ratio(), 1.000);
    }

    #[test]
    fn tabulated_years_return_table_values() {
        assert_eq!(FiscalYear::new(1980).inflation_ratio(), 0.456);
        assert_eq!(FiscalYear::new(2012).inflation_ratio(), 1.279);
        assert_eq!(FiscalYear::new(2013).inflation_ratio(), 1.308);
        assert_eq!(FiscalYear::new(2015).inflation_ratio(), 1.366);
        assert_eq!(FiscalYear::new(2017).inflation_ratio(), 1.427);
        assert_eq!(FiscalYear::new(2020).inflation_ratio(), 1.523);
    }

    #[test]
    fn years_between_1972_and_1979_extrapolate_backward() {
        assert_relative_eq!(FiscalYear::new(1975).inflation_ratio(), 0.186, epsilon = 1e-12);
        assert_relative_eq!(
            FiscalYear::new(1972).inflation_ratio(),
            0.054 * -8.0 + 0.456,
            epsilon = 1e-12
        );
    }

    #[test]
    fn years_before_1972_fall_back_to_default() {
        assert_eq!(FiscalYear::new(1971).inflation_ratio(), 1.0);
        assert_eq!(FiscalYear::new(1970).inflation_ratio(), 1.0);
        assert_eq!(FiscalYear::new(0).inflation_ratio(), 1.0);
    }

    #[test]
    fn years_after_2020_extrapolate_forward() {
        assert_relative_eq!(FiscalYear::new(2025).inflation_ratio(), 1.688, epsilon = 1e-12);
        assert_relative_eq!(FiscalYear::new(2021).inflation_ratio(), 1.556, epsilon = 1e-12);
    }

    #[test]
    fn deflate_to_base_divides_by_ratio() {
        let fy = FiscalYear::INSTRUMENT_REFERENCE;
        assert_relative_eq!(fy.deflate_to_base(1366.0), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn fiscal_year_serializes_as_bare_integer() {
        let json = serde_json::to_string(&FiscalYear::new(2017)).unwrap();
        assert_eq!(json, "2017");
    }
}
