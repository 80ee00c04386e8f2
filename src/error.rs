//! Error taxonomy for the decision core
//!
//! Every operation returns `Result<_, ActionError>`. Rejections carry a
//! stable machine-readable code so the transport layer can map them without
//! string matching. On any error return no partial state change has been
//! emitted: deltas are built in full or not at all.

use thiserror::Error;

/// Why an operation was refused or failed.
#[derive(Debug, Error)]
pub enum ActionError {
    // Validation: rejected before any state is touched
    #[error("missing or empty {0} identifier")]
    MissingId(&'static str),

    #[error("unknown lecture: {0}")]
    UnknownLecture(String),

    #[error("unknown planet: {0}")]
    UnknownPlanet(String),

    #[error("unknown star system: {0}")]
    UnknownSystem(String),

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    // Precondition violations: the action is not available in the
    // learner's current state; nothing was mutated
    #[error("not enough energy: need {required}, have {available}")]
    NotEnoughEnergy { required: u32, available: u32 },

    #[error("challenge is not unlocked")]
    ChallengeNotUnlocked,

    #[error("challenge is not in progress")]
    ChallengeNotInProgress,

    #[error("challenge already completed")]
    ChallengeAlreadyCompleted,

    #[error("current planet is already fully mined")]
    PlanetAlreadyMined,

    #[error("daily review already completed")]
    ReviewAlreadyCompleted,

    #[error("lecture already completed")]
    LectureAlreadyCompleted,

    #[error("tutorial is not unlocked")]
    TutorialNotUnlocked,

    #[error("planet is not nearby")]
    PlanetNotNearby,

    #[error("star system is not nearby")]
    SystemNotNearby,

    // Data-integrity faults: the hydrated snapshot or catalog broke an
    // exactly-one expectation; distinct from bad user input
    #[error("data integrity fault: {0}")]
    Consistency(String),

    // Collaborator failures, propagated untransformed
    #[error("conflicting concurrent write, reload and retry")]
    Conflict,

    #[error("record store failure")]
    Store(#[from] anyhow::Error),
}

impl ActionError {
    /// Stable reason code for transport-layer mapping.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingId(_) => "missing_id",
            Self::UnknownLecture(_) => "unknown_lecture",
            Self::UnknownPlanet(_) => "unknown_planet",
            Self::UnknownSystem(_) => "unknown_system",
            Self::UnknownTimezone(_) => "unknown_timezone",
            Self::NotEnoughEnergy { .. } => "not_enough_energy",
            Self::ChallengeNotUnlocked => "challenge_not_unlocked",
            Self::ChallengeNotInProgress => "challenge_not_in_progress",
            Self::ChallengeAlreadyCompleted => "challenge_already_completed",
            Self::PlanetAlreadyMined => "planet_already_mined",
            Self::ReviewAlreadyCompleted => "review_already_completed",
            Self::LectureAlreadyCompleted => "lecture_already_completed",
            Self::TutorialNotUnlocked => "tutorial_not_unlocked",
            Self::PlanetNotNearby => "planet_not_nearby",
            Self::SystemNotNearby => "system_not_nearby",
            Self::Consistency(_) => "consistency",
            Self::Conflict => "conflict",
            Self::Store(_) => "store",
        }
    }

    /// True for faults the user cannot fix by changing their request
    /// (integrity violations and collaborator failures).
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Consistency(_) | Self::Conflict | Self::Store(_))
    }
}
