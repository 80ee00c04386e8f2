//! Progression engine
//!
//! Everything that moves a learner forward: lecture completion, the
//! challenge lifecycle with its tutorial-unlock cascade, tutorial
//! enrollment, and travel through the mining game world.

mod challenges;
mod lectures;
mod mining;
mod tutorials;

pub use challenges::{accept_challenge, complete_challenge, ChallengeCompletion};
pub use lectures::{complete_lecture, recommended_lectures, LectureCompletion};
pub use mining::{travel_to_planet, travel_to_system};
pub use tutorials::{enroll_tutorial, Enrollment};
