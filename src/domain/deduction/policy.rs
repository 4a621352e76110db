//! The deduction decision rules.

use crate::domain::classification::VehicleTag;

use super::verdict::{DeductionReason, PolicyOutcome, Verdict};

/// Industries whose vehicle input tax is deductible outright.
pub const DEDUCTIBLE_INDUSTRIES: &[&str] = &["택시", "자동차학원", "자동차임대업"];

/// Vans and buses are deductible from this rated capacity upward
/// (strictly more than 8 seats).
pub const SEAT_DEDUCTION_MINIMUM: u32 = 9;

/// Returns true when the industry itself makes the deduction available.
///
/// Matched as substrings, so "택시 운송업" qualifies via "택시".
pub fn is_deductible_industry(industry: &str) -> bool {
    DEDUCTIBLE_INDUSTRIES
        .iter()
        .any(|candidate| industry.contains(candidate))
}

/// Verdict for a van/bus with a known rated seat capacity.
pub fn seat_count_verdict(seats: u32) -> Verdict {
    let reason = DeductionReason::SeatCount { seats };
    if seats >= SEAT_DEDUCTION_MINIMUM {
        Verdict::deductible(reason)
    } else {
        Verdict::non_deductible(reason)
    }
}

/// Decides deductibility from industry, vehicle tags, and seat count.
///
/// Rules are evaluated in order; the first match wins:
///
/// 1. Deductible industry → deductible.
/// 2. Light car or cargo among the tags → deductible.
/// 3. Van or bus among the tags → by seat count, or ask for it.
/// 4. Anything else → non-deductible. Unrecognized vehicles land here on
///    purpose; this is the documented default, not an error.
///
/// Total and pure: never fails, no side effects.
pub fn decide(
    industry: &str,
    tags: &[VehicleTag],
    seats_detected: Option<u32>,
) -> PolicyOutcome {
    if is_deductible_industry(industry) {
        return PolicyOutcome::Decided(Verdict::deductible(DeductionReason::IndustryDirectUse));
    }

    if tags.iter().any(VehicleTag::is_always_deductible) {
        return PolicyOutcome::Decided(Verdict::deductible(DeductionReason::VehicleType));
    }

    if tags.iter().any(VehicleTag::is_capacity_dependent) {
        return match seats_detected {
            Some(seats) => PolicyOutcome::Decided(seat_count_verdict(seats)),
            None => PolicyOutcome::NeedsSeats,
        };
    }

    PolicyOutcome::Decided(Verdict::non_deductible(
        DeductionReason::PassengerVehicleDefault,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod industry_rule {
        use super::*;

        #[test]
        fn taxi_industry_is_deductible_regardless_of_vehicle() {
            let outcome = decide("택시 운송업", &[VehicleTag::Sedan], None);
            let verdict = outcome.verdict().unwrap();
            assert!(verdict.is_deductible());
            assert_eq!(verdict.reason(), DeductionReason::IndustryDirectUse);
        }

        #[test]
        fn driving_school_and_rental_match_as_substrings() {
            assert!(is_deductible_industry("자동차학원 운영"));
            assert!(is_deductible_industry("자동차임대업(렌터카)"));
        }

        #[test]
        fn manufacturing_is_not_a_deductible_industry() {
            assert!(!is_deductible_industry("제조업"));
            assert!(!is_deductible_industry(""));
        }
    }

    mod vehicle_type_rule {
        use super::*;

        #[test]
        fn cargo_tag_is_deductible_for_plain_industry() {
            let outcome = decide("제조업", &[VehicleTag::Cargo], None);
            let verdict = outcome.verdict().unwrap();
            assert!(verdict.is_deductible());
            assert_eq!(verdict.reason(), DeductionReason::VehicleType);
        }

        #[test]
        fn light_car_tag_is_deductible_for_plain_industry() {
            let outcome = decide("도소매업", &[VehicleTag::LightCar], None);
            assert!(outcome.verdict().unwrap().is_deductible());
        }

        #[test]
        fn cargo_wins_over_capacity_rule_when_both_present() {
            // Rule 2 is evaluated before rule 3.
            let outcome = decide("제조업", &[VehicleTag::Cargo, VehicleTag::Van], None);
            let verdict = outcome.verdict().unwrap();
            assert_eq!(verdict.reason(), DeductionReason::VehicleType);
        }
    }

    mod seat_count_rule {
        use super::*;

        #[test]
        fn van_without_seats_needs_more_information() {
            assert_eq!(decide("제조업", &[VehicleTag::Van], None), PolicyOutcome::NeedsSeats);
        }

        #[test]
        fn bus_without_seats_needs_more_information() {
            assert_eq!(decide("제조업", &[VehicleTag::Bus], None), PolicyOutcome::NeedsSeats);
        }

        #[test]
        fn nine_seats_is_deductible() {
            let outcome = decide("제조업", &[VehicleTag::Van], Some(9));
            let verdict = outcome.verdict().unwrap();
            assert!(verdict.is_deductible());
            assert_eq!(verdict.reason(), DeductionReason::SeatCount { seats: 9 });
        }

        #[test]
        fn exactly_eight_seats_is_not_deductible() {
            let outcome = decide("제조업", &[VehicleTag::Van], Some(8));
            let verdict = outcome.verdict().unwrap();
            assert!(!verdict.is_deductible());
            assert_eq!(verdict.reason(), DeductionReason::SeatCount { seats: 8 });
        }

        #[test]
        fn seat_count_verdict_boundary_matches_decide() {
            assert!(!seat_count_verdict(8).is_deductible());
            assert!(seat_count_verdict(9).is_deductible());
            assert!(seat_count_verdict(45).is_deductible());
            assert!(!seat_count_verdict(0).is_deductible());
        }
    }

    mod default_rule {
        use super::*;

        #[test]
        fn sedan_falls_through_to_the_default() {
            let outcome = decide("제조업", &[VehicleTag::Sedan], None);
            let verdict = outcome.verdict().unwrap();
            assert!(!verdict.is_deductible());
            assert_eq!(verdict.reason(), DeductionReason::PassengerVehicleDefault);
        }

        #[test]
        fn empty_tags_fall_through_to_the_default() {
            let outcome = decide("제조업", &[], None);
            assert!(!outcome.verdict().unwrap().is_deductible());
        }

        #[test]
        fn suv_and_coupe_are_not_deductible() {
            for tag in [VehicleTag::Suv, VehicleTag::Coupe, VehicleTag::Wagon] {
                let outcome = decide("서비스업", &[tag], Some(5));
                assert!(!outcome.verdict().unwrap().is_deductible());
            }
        }
    }

    proptest! {
        #[test]
        fn any_industry_containing_taxi_is_deductible(
            prefix in ".{0,10}",
            suffix in ".{0,10}",
        ) {
            let industry = format!("{}택시{}", prefix, suffix);
            let outcome = decide(&industry, &[VehicleTag::Sedan], None);
            prop_assert!(outcome.verdict().unwrap().is_deductible());
        }

        #[test]
        fn decide_is_total_over_arbitrary_industry_strings(industry in ".{0,30}") {
            // Must produce an outcome for every input; vans without seats
            // are the only non-terminal case.
            let outcome = decide(&industry, &[VehicleTag::Van], None);
            prop_assert!(matches!(
                outcome,
                PolicyOutcome::NeedsSeats | PolicyOutcome::Decided(_)
            ));
        }

        #[test]
        fn seat_verdict_is_deductible_exactly_above_eight(seats in 0u32..100) {
            prop_assert_eq!(seat_count_verdict(seats).is_deductible(), seats > 8);
        }
    }
}
