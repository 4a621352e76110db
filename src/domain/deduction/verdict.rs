//! Verdict and policy outcome types.

use serde::{Deserialize, Serialize};

/// Why a verdict came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DeductionReason {
    /// The industry uses vehicles directly (taxi, driving school, rental).
    IndustryDirectUse,
    /// The vehicle category is deductible by itself (light car, cargo).
    VehicleType,
    /// Decided by the rated seat capacity of a van or bus.
    SeatCount { seats: u32 },
    /// Ordinary passenger vehicle; the documented default.
    PassengerVehicleDefault,
}

impl DeductionReason {
    /// Stable reason code for logs and presentation.
    pub fn code(&self) -> &'static str {
        match self {
            DeductionReason::IndustryDirectUse => "industry-direct-use",
            DeductionReason::VehicleType => "vehicle-type",
            DeductionReason::SeatCount { .. } => "seat-count",
            DeductionReason::PassengerVehicleDefault => "passenger-vehicle-default",
        }
    }
}

/// Terminal deductibility decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    deductible: bool,
    reason: DeductionReason,
}

impl Verdict {
    /// A deductible verdict with the given reason.
    pub fn deductible(reason: DeductionReason) -> Self {
        Self {
            deductible: true,
            reason,
        }
    }

    /// A non-deductible verdict with the given reason.
    pub fn non_deductible(reason: DeductionReason) -> Self {
        Self {
            deductible: false,
            reason,
        }
    }

    /// Whether the input tax is deductible.
    pub fn is_deductible(&self) -> bool {
        self.deductible
    }

    /// The reason behind the decision.
    pub fn reason(&self) -> DeductionReason {
        self.reason
    }
}

/// Outcome of evaluating the deduction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyOutcome {
    /// Enough information; a terminal verdict.
    Decided(Verdict),
    /// A van/bus without a known seat count; ask before deciding.
    NeedsSeats,
}

impl PolicyOutcome {
    /// The verdict, when decided.
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            PolicyOutcome::Decided(v) => Some(*v),
            PolicyOutcome::NeedsSeats => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_codes_are_stable() {
        assert_eq!(
            DeductionReason::IndustryDirectUse.code(),
            "industry-direct-use"
        );
        assert_eq!(DeductionReason::VehicleType.code(), "vehicle-type");
        assert_eq!(DeductionReason::SeatCount { seats: 9 }.code(), "seat-count");
        assert_eq!(
            DeductionReason::PassengerVehicleDefault.code(),
            "passenger-vehicle-default"
        );
    }

    #[test]
    fn deductible_constructor_sets_flag() {
        let v = Verdict::deductible(DeductionReason::VehicleType);
        assert!(v.is_deductible());
        assert_eq!(v.reason(), DeductionReason::VehicleType);
    }

    #[test]
    fn non_deductible_constructor_clears_flag() {
        let v = Verdict::non_deductible(DeductionReason::PassengerVehicleDefault);
        assert!(!v.is_deductible());
    }

    #[test]
    fn seat_count_reason_carries_the_seats() {
        let v = Verdict::deductible(DeductionReason::SeatCount { seats: 11 });
        assert_eq!(v.reason(), DeductionReason::SeatCount { seats: 11 });
    }

    #[test]
    fn decided_outcome_exposes_verdict() {
        let v = Verdict::deductible(DeductionReason::IndustryDirectUse);
        assert_eq!(PolicyOutcome::Decided(v).verdict(), Some(v));
        assert_eq!(PolicyOutcome::NeedsSeats.verdict(), None);
    }

    #[test]
    fn verdict_serializes_with_tagged_reason() {
        let v = Verdict::deductible(DeductionReason::SeatCount { seats: 9 });
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["deductible"], true);
        assert_eq!(json["reason"]["kind"], "seat_count");
        assert_eq!(json["reason"]["seats"], 9);
    }
}
