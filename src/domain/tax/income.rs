//! Income-tax band estimator.
//!
//! Flat-rate bands over annual income in KRW.

use serde::{Deserialize, Serialize};

/// Annual income from which the high band applies.
pub const HIGH_INCOME_THRESHOLD_WON: u64 = 100_000_000;

/// Annual income from which the middle band applies.
pub const MIDDLE_INCOME_THRESHOLD_WON: u64 = 50_000_000;

/// Income band with its flat rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBand {
    /// ≥ 100,000,000 won, 30%.
    High,
    /// ≥ 50,000,000 won, 20%.
    Middle,
    /// Below 50,000,000 won, 10%.
    Low,
}

impl IncomeBand {
    /// The band an annual income falls into.
    pub fn for_income(income_won: u64) -> Self {
        if income_won >= HIGH_INCOME_THRESHOLD_WON {
            IncomeBand::High
        } else if income_won >= MIDDLE_INCOME_THRESHOLD_WON {
            IncomeBand::Middle
        } else {
            IncomeBand::Low
        }
    }

    /// Flat tax rate for the band.
    pub fn rate(&self) -> f64 {
        match self {
            IncomeBand::High => 0.30,
            IncomeBand::Middle => 0.20,
            IncomeBand::Low => 0.10,
        }
    }

    /// User-facing label in the source locale.
    pub fn label(&self) -> &'static str {
        match self {
            IncomeBand::High => "고소득자",
            IncomeBand::Middle => "중간소득자",
            IncomeBand::Low => "저소득자",
        }
    }
}

/// Result of estimating income tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxEstimate {
    /// Annual income, in won.
    pub income_won: u64,
    /// The band it falls into.
    pub band: IncomeBand,
    /// Estimated tax (income × band rate), rounded to whole won.
    pub tax_won: u64,
}

/// Estimates the tax on an annual income.
pub fn estimate(income_won: u64) -> IncomeTaxEstimate {
    let band = IncomeBand::for_income(income_won);
    let tax_won = (income_won as f64 * band.rate()).round() as u64;
    IncomeTaxEstimate {
        income_won,
        band,
        tax_won,
    }
}
