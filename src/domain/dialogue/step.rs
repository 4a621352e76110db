//! Dialogue step lifecycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the conversation currently stands.
///
/// Steps only ever move forward:
/// `AwaitIndustry` → `AwaitVehicle` → `AwaitSeats` → `Done`, with shortcuts
/// straight to `Done` whenever a verdict is reached early. The only way
/// back is replacing the whole session via reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueStep {
    /// Waiting for the user's industry.
    AwaitIndustry,
    /// Waiting for the vehicle description.
    AwaitVehicle,
    /// Waiting for the seat count of a van/bus.
    AwaitSeats,
    /// Verdict delivered; conversation finished.
    Done,
}

impl DialogueStep {
    /// Short label for snapshots and logs.
    pub fn label(&self) -> &'static str {
        match self {
            DialogueStep::AwaitIndustry => "awaiting industry",
            DialogueStep::AwaitVehicle => "awaiting vehicle",
            DialogueStep::AwaitSeats => "awaiting seat count",
            DialogueStep::Done => "done",
        }
    }

    /// Returns true once the conversation has delivered its verdict.
    pub fn is_done(&self) -> bool {
        matches!(self, DialogueStep::Done)
    }
}

impl StateMachine for DialogueStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (DialogueStep::AwaitIndustry, DialogueStep::AwaitVehicle)
                | (DialogueStep::AwaitIndustry, DialogueStep::Done)
                | (DialogueStep::AwaitVehicle, DialogueStep::AwaitSeats)
                | (DialogueStep::AwaitVehicle, DialogueStep::Done)
                | (DialogueStep::AwaitSeats, DialogueStep::Done)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            DialogueStep::AwaitIndustry => vec![DialogueStep::AwaitVehicle, DialogueStep::Done],
            DialogueStep::AwaitVehicle => vec![DialogueStep::AwaitSeats, DialogueStep::Done],
            DialogueStep::AwaitSeats => vec![DialogueStep::Done],
            DialogueStep::Done => vec![],
        }
    }
}

impl Default for DialogueStep {
    fn default() -> Self {
        DialogueStep::AwaitIndustry
    }
}
