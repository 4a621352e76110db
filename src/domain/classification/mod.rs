//! Vehicle classification domain.
//!
//! Maps free-text vehicle descriptions to ranked category tags and an
//! optional seat count. The rule-based scoring lives here; adapters only
//! wrap it (locally) or coerce provider payloads into the same shape.

mod lexicon;
mod result;
mod tag;

pub use lexicon::{
    classify_text, extract_seat_count, similarity, FUZZY_MATCH_LIMIT, FUZZY_MATCH_WEIGHT,
    FUZZY_SIMILARITY_THRESHOLD, LARGE_VAN_SEAT_BONUS, LARGE_VAN_SEAT_THRESHOLD,
};
pub use result::Classification;
pub use tag::VehicleTag;
