//! Core domain types: per-learner state and the deltas that mutate it

mod card;
mod challenge;
mod cohort;
mod delta;
mod learner;
mod planet;

pub use card::{CardState, MAX_REPEAT};
pub use challenge::{ChallengeState, ChallengeStatus};
pub use cohort::{CohortId, CohortStatus, TutorialCohort};
pub use delta::{CohortPlacement, LearnerDelta};
pub use learner::{LearnerId, LearnerSnapshot};
pub use planet::PlanetProgress;
