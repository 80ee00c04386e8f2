//! Energy ledger
//!
//! Every gated player action costs a fixed amount of energy. The ledger is
//! a pure affordability check: it never mutates anything and never clamps.
//! An action the learner cannot afford is rejected outright.

use crate::config::EconomyConfig;
use crate::error::ActionError;

/// The energy-gated action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    TravelToPlanet,
    TravelToSystem,
    AcceptChallenge,
    EnrollTutorial,
    CompleteLecture,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TravelToPlanet => "travel_to_planet",
            Self::TravelToSystem => "travel_to_system",
            Self::AcceptChallenge => "accept_challenge",
            Self::EnrollTutorial => "enroll_tutorial",
            Self::CompleteLecture => "complete_lecture",
        }
    }

    /// Energy cost of this action under the given economy.
    pub fn cost(&self, config: &EconomyConfig) -> u32 {
        match self {
            Self::TravelToPlanet => config.planet_energy,
            Self::TravelToSystem => config.star_system_energy,
            Self::AcceptChallenge => config.challenge_energy,
            Self::EnrollTutorial => config.tutorial_energy,
            Self::CompleteLecture => config.lecture_energy,
        }
    }
}

/// `Some(new_balance)` if the learner can afford `cost`, `None` otherwise.
/// A balance of exactly `cost` is affordable and leaves zero energy.
pub fn try_deplete(current: u32, cost: u32) -> Option<u32> {
    current.checked_sub(cost)
}

/// [`try_deplete`] with the cost looked up per action and the shortfall
/// reported as a user-facing rejection.
pub fn deplete_for(
    current: u32,
    action: ActionKind,
    config: &EconomyConfig,
) -> Result<u32, ActionError> {
    let cost = action.cost(config);
    try_deplete(current, cost).ok_or(ActionError::NotEnoughEnergy {
        required: cost,
        available: current,
    })
}
