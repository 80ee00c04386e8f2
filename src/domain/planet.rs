//! Per-learner planet mining progress

use serde::{Deserialize, Serialize};

use crate::catalog::PlanetId;

/// Mining progress of one learner on one planet.
///
/// `mined_knowledge` only ever grows, capped at the configured planet
/// total; `completed` flips false -> true exactly once, when the cap is
/// reached. A completed planet never transitions back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetProgress {
    pub planet: PlanetId,
    pub mined_knowledge: u32,
    pub completed: bool,
}

impl PlanetProgress {
    /// Progress record for a first visit.
    pub fn begin(planet: PlanetId) -> Self {
        Self {
            planet,
            mined_knowledge: 0,
            completed: false,
        }
    }

    /// Advance mining by `amount` toward `total`. Returns the new progress
    /// and whether this advance finished the planet.
    ///
    /// Callers must have rejected already-completed planets beforehand;
    /// the returned flag is only true on the capping transition.
    pub fn advance(&self, amount: u32, total: u32) -> (Self, bool) {
        let mined = self.mined_knowledge.saturating_add(amount).min(total);
        let completed_now = !self.completed && mined == total;

        let next = Self {
            planet: self.planet.clone(),
            mined_knowledge: mined,
            completed: self.completed || completed_now,
        };
        (next, completed_now)
    }
}
