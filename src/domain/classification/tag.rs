//! Vehicle category tags.

use serde::{Deserialize, Serialize};

/// Coarse vehicle category used by the deduction policy.
///
/// Declaration order doubles as the tie-break priority when two tags end up
/// with the same classification score: deduction-relevant categories first,
/// ordinary passenger categories last. The derived `Ord` relies on this.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VehicleTag {
    /// Light/mini car (경차).
    LightCar,
    /// Cargo or freight vehicle, including trucks (화물).
    Cargo,
    /// Van or minibus (승합).
    Van,
    /// Bus (버스).
    Bus,
    /// Pickup (픽업).
    Pickup,
    /// Sport utility vehicle.
    Suv,
    /// Ordinary sedan (세단).
    Sedan,
    /// Coupe (쿠페).
    Coupe,
    /// Station wagon (왜건).
    Wagon,
}

impl VehicleTag {
    /// All tags, in priority order.
    pub const ALL: [VehicleTag; 9] = [
        VehicleTag::LightCar,
        VehicleTag::Cargo,
        VehicleTag::Van,
        VehicleTag::Bus,
        VehicleTag::Pickup,
        VehicleTag::Suv,
        VehicleTag::Sedan,
        VehicleTag::Coupe,
        VehicleTag::Wagon,
    ];

    /// User-facing label in the source locale.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleTag::LightCar => "경차",
            VehicleTag::Cargo => "화물",
            VehicleTag::Van => "승합",
            VehicleTag::Bus => "버스",
            VehicleTag::Pickup => "픽업",
            VehicleTag::Suv => "SUV",
            VehicleTag::Sedan => "세단",
            VehicleTag::Coupe => "쿠페",
            VehicleTag::Wagon => "왜건",
        }
    }

    /// Resolves a provider-reported category label to a tag.
    ///
    /// Accepts the labels of the extraction schema, which is wider than the
    /// tag set: freight spellings collapse into `Cargo`, van spellings into
    /// `Van`, so provider categories line up with the policy's rules.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "경차" => Some(VehicleTag::LightCar),
            "화물" | "트럭" => Some(VehicleTag::Cargo),
            "승합" | "밴" => Some(VehicleTag::Van),
            "버스" => Some(VehicleTag::Bus),
            "픽업" => Some(VehicleTag::Pickup),
            "SUV" | "suv" => Some(VehicleTag::Suv),
            "세단" => Some(VehicleTag::Sedan),
            "쿠페" => Some(VehicleTag::Coupe),
            "왜건" => Some(VehicleTag::Wagon),
            _ => None,
        }
    }

    /// Returns true for categories deductible by vehicle type alone.
    pub fn is_always_deductible(&self) -> bool {
        matches!(self, VehicleTag::LightCar | VehicleTag::Cargo)
    }

    /// Returns true for categories whose deductibility depends on seats.
    pub fn is_capacity_dependent(&self) -> bool {
        matches!(self, VehicleTag::Van | VehicleTag::Bus)
    }
}
