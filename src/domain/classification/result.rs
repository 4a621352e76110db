//! Classification result value.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

use super::tag::VehicleTag;

/// Score assigned to the single category reported by an external provider.
pub(crate) const PROVIDER_TAG_WEIGHT: u32 = 5;

/// Score assigned to the fallback category when a provider fails.
const FALLBACK_TAG_WEIGHT: u32 = 1;

/// Outcome of classifying a vehicle description.
///
/// # Invariants
///
/// - `tags` holds exactly the tags with a positive score, ordered by
///   descending score, ties broken by the fixed tag priority.
/// - The ordering is fully determined by `scores`; two classifications with
///   equal scores are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    tags: Vec<VehicleTag>,
    scores: BTreeMap<VehicleTag, u32>,
    seats_detected: Option<u32>,
    rationale: Option<String>,
}

impl Classification {
    /// Builds a classification from accumulated scores.
    ///
    /// Tags are derived here so every construction path yields the same
    /// deterministic ordering.
    pub fn from_scores(
        scores: BTreeMap<VehicleTag, u32>,
        seats_detected: Option<u32>,
        rationale: Option<String>,
    ) -> Self {
        let mut tags: Vec<VehicleTag> = scores
            .iter()
            .filter(|(_, score)| **score > 0)
            .map(|(tag, _)| *tag)
            .collect();
        tags.sort_by_key(|tag| (Reverse(scores[tag]), *tag));

        Self {
            tags,
            scores,
            seats_detected,
            rationale,
        }
    }

    /// Classification of a single provider-reported category.
    pub fn from_provider(
        tag: VehicleTag,
        seats_detected: Option<u32>,
        rationale: impl Into<String>,
    ) -> Self {
        let mut scores = BTreeMap::new();
        scores.insert(tag, PROVIDER_TAG_WEIGHT);
        Self::from_scores(scores, seats_detected, Some(rationale.into()))
    }

    /// The safe default used when a classification provider fails.
    ///
    /// Degrades to the non-deductible passenger category with unknown
    /// seats; the note surfaces as a lower-confidence rationale.
    pub fn fallback(note: impl Into<String>) -> Self {
        let mut scores = BTreeMap::new();
        scores.insert(VehicleTag::Sedan, FALLBACK_TAG_WEIGHT);
        Self::from_scores(scores, None, Some(note.into()))
    }

    /// Classification with no recognized category.
    pub fn empty() -> Self {
        Self::from_scores(BTreeMap::new(), None, None)
    }

    /// Ranked tags, highest-confidence first.
    pub fn tags(&self) -> &[VehicleTag] {
        &self.tags
    }

    /// Full accumulated score map.
    pub fn scores(&self) -> &BTreeMap<VehicleTag, u32> {
        &self.scores
    }

    /// Seat count embedded in the source text, if any.
    pub fn seats_detected(&self) -> Option<u32> {
        self.seats_detected
    }

    /// Provider or fallback rationale, if any.
    pub fn rationale(&self) -> Option<&str> {
        self.rationale.as_deref()
    }

    /// Highest-ranked tag, if any category was recognized.
    pub fn top_tag(&self) -> Option<VehicleTag> {
        self.tags.first().copied()
    }

    /// Returns true when no category was recognized.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(VehicleTag, u32)]) -> BTreeMap<VehicleTag, u32> {
        entries.iter().copied().collect()
    }

    #[test]
    fn tags_are_ordered_by_descending_score() {
        let c = Classification::from_scores(
            scores(&[(VehicleTag::Sedan, 9), (VehicleTag::Van, 4)]),
            None,
            None,
        );
        assert_eq!(c.tags(), &[VehicleTag::Sedan, VehicleTag::Van]);
        assert_eq!(c.top_tag(), Some(VehicleTag::Sedan));
    }

    #[test]
    fn score_ties_break_by_tag_priority() {
        let c = Classification::from_scores(
            scores(&[(VehicleTag::Sedan, 5), (VehicleTag::Cargo, 5)]),
            None,
            None,
        );
        // Cargo precedes Sedan in the fixed priority order.
        assert_eq!(c.tags(), &[VehicleTag::Cargo, VehicleTag::Sedan]);
    }

    #[test]
    fn zero_scores_are_excluded_from_tags() {
        let c = Classification::from_scores(
            scores(&[(VehicleTag::Van, 0), (VehicleTag::Bus, 3)]),
            None,
            None,
        );
        assert_eq!(c.tags(), &[VehicleTag::Bus]);
        // The full map still carries the zero entry.
        assert_eq!(c.scores().get(&VehicleTag::Van), Some(&0));
    }

    #[test]
    fn empty_classification_has_no_tags() {
        let c = Classification::empty();
        assert!(c.is_empty());
        assert_eq!(c.top_tag(), None);
        assert_eq!(c.seats_detected(), None);
    }

    #[test]
    fn fallback_is_the_non_deductible_default() {
        let c = Classification::fallback("API 오류: timeout");
        assert_eq!(c.tags(), &[VehicleTag::Sedan]);
        assert_eq!(c.seats_detected(), None);
        assert_eq!(c.rationale(), Some("API 오류: timeout"));
    }

    #[test]
    fn from_provider_carries_seats_and_rationale() {
        let c = Classification::from_provider(VehicleTag::Van, Some(9), "모델명 스타렉스");
        assert_eq!(c.tags(), &[VehicleTag::Van]);
        assert_eq!(c.seats_detected(), Some(9));
        assert_eq!(c.rationale(), Some("모델명 스타렉스"));
    }

    #[test]
    fn equal_scores_produce_equal_classifications() {
        let a = Classification::from_scores(
            scores(&[(VehicleTag::Van, 8), (VehicleTag::Suv, 4)]),
            Some(9),
            None,
        );
        let b = Classification::from_scores(
            scores(&[(VehicleTag::Van, 8), (VehicleTag::Suv, 4)]),
            Some(9),
            None,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn serde_round_trip_preserves_ordering() {
        let c = Classification::from_scores(
            scores(&[(VehicleTag::Van, 8), (VehicleTag::LightCar, 5)]),
            Some(11),
            Some("keyword match".to_string()),
        );
        let json = serde_json::to_string(&c).unwrap();
        let back: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
