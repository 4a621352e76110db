//! Residual value of fixed assets at business closure.
//!
//! Straight-line depreciation over half-year VAT periods: buildings and
//! other fixed structures depreciate 5% per period, everything else 25%,
//! in both cases capped at 100% of the purchase price.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from period arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DepreciationError {
    #[error("Closing period cannot precede the purchase period")]
    ClosingBeforePurchase,
}

/// Half of a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    /// January through June (상반기).
    First,
    /// July through December (하반기).
    Second,
}

impl Half {
    /// User-facing label in the source locale.
    pub fn label(&self) -> &'static str {
        match self {
            Half::First => "상반기",
            Half::Second => "하반기",
        }
    }
}

/// One half-year VAT taxation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaxPeriod {
    pub year: u16,
    pub half: Half,
}

impl TaxPeriod {
    /// Creates a period.
    pub fn new(year: u16, half: Half) -> Self {
        Self { year, half }
    }

    /// Collapses year and half into a single monotonic index.
    pub fn index(&self) -> u32 {
        u32::from(self.year) * 2
            + match self.half {
                Half::First => 0,
                Half::Second => 1,
            }
    }
}

/// Asset class determining the per-period depreciation rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    /// Buildings and other fixed structures: 5% per period.
    FixedStructure,
    /// Everything else: 25% per period.
    Other,
}

impl AssetClass {
    /// Depreciation rate per taxation period.
    pub fn rate(&self) -> f64 {
        match self {
            AssetClass::FixedStructure => 0.05,
            AssetClass::Other => 0.25,
        }
    }

    /// Periods until the full price is depreciated.
    pub fn max_depreciation_periods(&self) -> u32 {
        (1.0 / self.rate()).ceil() as u32
    }
}

/// Number of taxation periods between purchase and closure.
///
/// With `include_purchase` the purchase period itself counts, matching the
/// default filing convention.
pub fn elapsed_periods(
    purchase: TaxPeriod,
    closing: TaxPeriod,
    include_purchase: bool,
) -> Result<u32, DepreciationError> {
    if closing.index() < purchase.index() {
        return Err(DepreciationError::ClosingBeforePurchase);
    }
    Ok(closing.index() - purchase.index() + u32::from(include_purchase))
}

/// Outcome of the residual-value computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualValue {
    /// Elapsed taxation periods as given.
    pub elapsed_periods: u32,
    /// Periods that actually depreciated (capped at 100% of the price).
    pub used_periods: u32,
    /// Total straight-line depreciation.
    pub total_depreciation: f64,
    /// Remaining value, never below zero.
    pub residual: f64,
}

/// Computes the residual value after straight-line depreciation.
pub fn residual_value(price: f64, class: AssetClass, elapsed: u32) -> ResidualValue {
    let used_periods = elapsed.min(class.max_depreciation_periods());
    let total_depreciation = price * class.rate() * f64::from(used_periods);
    ResidualValue {
        elapsed_periods: elapsed,
        used_periods,
        total_depreciation,
        residual: (price - total_depreciation).max(0.0),
    }
}

/// One row of the per-period depreciation schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based period number.
    pub period: u32,
    /// Depreciation booked in this period.
    pub depreciation: f64,
    /// Depreciation accumulated through this period.
    pub accumulated: f64,
    /// Value remaining at period end.
    pub remaining: f64,
}

/// Per-period schedule over the elapsed periods.
///
/// Each period books `price × rate`, except that the final partial period
/// books only what is left once the price is exhausted.
pub fn schedule(price: f64, class: AssetClass, elapsed: u32) -> Vec<ScheduleRow> {
    let per_period = price * class.rate();
    let mut remaining = price;
    let mut rows = Vec::with_capacity(elapsed as usize);

    for period in 1..=elapsed {
        let depreciation = per_period.min(remaining);
        remaining = (remaining - depreciation).max(0.0);
        rows.push(ScheduleRow {
            period,
            depreciation,
            accumulated: price - remaining,
            remaining,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(year: u16, half: Half) -> TaxPeriod {
        TaxPeriod::new(year, half)
    }

    mod periods {
        use super::*;

        #[test]
        fn index_is_monotonic_over_halves() {
            assert!(p(2025, Half::First).index() < p(2025, Half::Second).index());
            assert!(p(2025, Half::Second).index() < p(2026, Half::First).index());
        }

        #[test]
        fn same_period_counts_once_when_inclusive() {
            let period = p(2025, Half::First);
            assert_eq!(elapsed_periods(period, period, true).unwrap(), 1);
            assert_eq!(elapsed_periods(period, period, false).unwrap(), 0);
        }

        #[test]
        fn spans_across_years() {
            let purchase = p(2024, Half::First);
            let closing = p(2025, Half::Second);
            assert_eq!(elapsed_periods(purchase, closing, true).unwrap(), 4);
            assert_eq!(elapsed_periods(purchase, closing, false).unwrap(), 3);
        }

        #[test]
        fn closing_before_purchase_is_rejected() {
            let purchase = p(2025, Half::Second);
            let closing = p(2025, Half::First);
            assert_eq!(
                elapsed_periods(purchase, closing, true),
                Err(DepreciationError::ClosingBeforePurchase)
            );
        }
    }

    mod rates {
        use super::*;

        #[test]
        fn fixed_structures_take_twenty_periods_to_write_off() {
            assert_eq!(AssetClass::FixedStructure.max_depreciation_periods(), 20);
        }

        #[test]
        fn other_assets_take_four_periods_to_write_off() {
            assert_eq!(AssetClass::Other.max_depreciation_periods(), 4);
        }
    }

    mod residual {
        use super::*;

        #[test]
        fn partial_depreciation_leaves_a_residual() {
            let result = residual_value(10_000_000.0, AssetClass::Other, 2);
            assert_eq!(result.used_periods, 2);
            assert_eq!(result.total_depreciation, 5_000_000.0);
            assert_eq!(result.residual, 5_000_000.0);
        }

        #[test]
        fn depreciation_is_capped_at_the_full_price() {
            let result = residual_value(10_000_000.0, AssetClass::Other, 10);
            assert_eq!(result.used_periods, 4);
            assert_eq!(result.total_depreciation, 10_000_000.0);
            assert_eq!(result.residual, 0.0);
        }

        #[test]
        fn fixed_structure_depreciates_slowly() {
            let result = residual_value(100_000_000.0, AssetClass::FixedStructure, 3);
            assert_eq!(result.total_depreciation, 15_000_000.0);
            assert_eq!(result.residual, 85_000_000.0);
        }

        #[test]
        fn zero_elapsed_periods_keep_the_full_value() {
            let result = residual_value(5_000_000.0, AssetClass::Other, 0);
            assert_eq!(result.residual, 5_000_000.0);
            assert_eq!(result.total_depreciation, 0.0);
        }
    }

    mod schedule_rows {
        use super::*;

        #[test]
        fn rows_accumulate_to_the_residual_computation() {
            let price = 10_000_000.0;
            let rows = schedule(price, AssetClass::Other, 3);
            let summary = residual_value(price, AssetClass::Other, 3);

            assert_eq!(rows.len(), 3);
            let last = rows.last().unwrap();
            assert_eq!(last.accumulated, summary.total_depreciation);
            assert_eq!(last.remaining, summary.residual);
        }

        #[test]
        fn periods_after_write_off_book_nothing() {
            let rows = schedule(1_000_000.0, AssetClass::Other, 6);
            assert_eq!(rows[3].remaining, 0.0);
            assert_eq!(rows[4].depreciation, 0.0);
            assert_eq!(rows[5].depreciation, 0.0);
        }

        #[test]
        fn each_full_period_books_the_flat_amount() {
            let rows = schedule(8_000_000.0, AssetClass::Other, 2);
            assert_eq!(rows[0].depreciation, 2_000_000.0);
            assert_eq!(rows[1].depreciation, 2_000_000.0);
            assert_eq!(rows[1].accumulated, 4_000_000.0);
        }
    }
}
