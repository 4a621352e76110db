//! Keyword and model-name lexicon for the rule-based classifier.
//!
//! The tables and weights are fixed business constants carried over from the
//! advisory rules: keyword substrings score their category, near-matches
//! against known model names add a fixed bonus, and an embedded seat count
//! nudges the van category.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::result::Classification;
use super::tag::VehicleTag;

/// Weight added per close model-name match.
pub const FUZZY_MATCH_WEIGHT: u32 = 4;

/// Minimum similarity for a model-name match to count.
pub const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.6;

/// At most this many model-name matches contribute.
pub const FUZZY_MATCH_LIMIT: usize = 3;

/// Bonus added to the van category when a large seat count is embedded.
pub const LARGE_VAN_SEAT_BONUS: u32 = 3;

/// Seat count from which the van bonus applies.
pub const LARGE_VAN_SEAT_THRESHOLD: u32 = 9;

/// Matches an embedded seat count such as "9인승" or "12 인승".
static SEAT_COUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*인승").expect("valid seat count pattern"));

/// Substring keyword table: keyword, category, weight.
///
/// Each keyword present in the input contributes its weight once; distinct
/// keywords for the same category accumulate.
static KEYWORD_WEIGHTS: &[(&str, VehicleTag, u32)] = &[
    ("경차", VehicleTag::LightCar, 5),
    ("화물", VehicleTag::Cargo, 5),
    ("트럭", VehicleTag::Cargo, 4),
    ("덤프", VehicleTag::Cargo, 4),
    ("승합", VehicleTag::Van, 5),
    ("미니밴", VehicleTag::Van, 5),
    ("밴", VehicleTag::Van, 4),
    ("버스", VehicleTag::Bus, 5),
    ("픽업", VehicleTag::Pickup, 5),
    ("suv", VehicleTag::Suv, 5),
    ("세단", VehicleTag::Sedan, 5),
    ("승용", VehicleTag::Sedan, 3),
    ("쿠페", VehicleTag::Coupe, 5),
    ("왜건", VehicleTag::Wagon, 5),
];

/// Model-name lexicon for approximate matching.
static MODEL_LEXICON: &[(&str, VehicleTag)] = &[
    ("소나타", VehicleTag::Sedan),
    ("아반떼", VehicleTag::Sedan),
    ("그랜저", VehicleTag::Sedan),
    ("제네시스", VehicleTag::Sedan),
    ("k5", VehicleTag::Sedan),
    ("스타렉스", VehicleTag::Van),
    ("카니발", VehicleTag::Van),
    ("스타리아", VehicleTag::Van),
    ("쏠라티", VehicleTag::Van),
    ("봉고", VehicleTag::Cargo),
    ("포터", VehicleTag::Cargo),
    ("모닝", VehicleTag::LightCar),
    ("스파크", VehicleTag::LightCar),
    ("레이", VehicleTag::LightCar),
    ("캐스퍼", VehicleTag::LightCar),
    ("쏘렌토", VehicleTag::Suv),
    ("투싼", VehicleTag::Suv),
    ("싼타페", VehicleTag::Suv),
    ("팰리세이드", VehicleTag::Suv),
    ("렉스턴 스포츠", VehicleTag::Pickup),
    ("콜로라도", VehicleTag::Pickup),
];

/// Extracts an explicit seat count from the text, if present.
pub fn extract_seat_count(text: &str) -> Option<u32> {
    SEAT_COUNT_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Normalized similarity between two strings in `[0.0, 1.0]`.
///
/// `1.0 - levenshtein / max_len`, computed over characters so multi-byte
/// Korean text compares by syllable. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Closest model-name matches above the similarity threshold, best first,
/// capped at [`FUZZY_MATCH_LIMIT`].
fn close_model_matches(text: &str) -> Vec<(VehicleTag, f64)> {
    let mut matches: Vec<(VehicleTag, f64)> = MODEL_LEXICON
        .iter()
        .map(|(model, tag)| (*tag, similarity(text, model)))
        .filter(|(_, score)| *score >= FUZZY_SIMILARITY_THRESHOLD)
        .collect();
    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    matches.truncate(FUZZY_MATCH_LIMIT);
    matches
}

/// Classifies a free-text vehicle description with the local rules.
///
/// Pure and deterministic; empty input yields an empty classification,
/// never an error.
pub fn classify_text(text: &str) -> Classification {
    let trimmed = text.trim().to_lowercase();
    let seats = extract_seat_count(&trimmed);

    let mut scores: BTreeMap<VehicleTag, u32> = BTreeMap::new();
    for (keyword, tag, weight) in KEYWORD_WEIGHTS {
        if trimmed.contains(keyword) {
            *scores.entry(*tag).or_insert(0) += weight;
        }
    }

    for (tag, _) in close_model_matches(&trimmed) {
        *scores.entry(tag).or_insert(0) += FUZZY_MATCH_WEIGHT;
    }

    if seats.is_some_and(|n| n >= LARGE_VAN_SEAT_THRESHOLD) {
        *scores.entry(VehicleTag::Van).or_insert(0) += LARGE_VAN_SEAT_BONUS;
    }

    Classification::from_scores(scores, seats, None)
}
