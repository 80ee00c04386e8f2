//! Per-learner challenge state

use serde::{Deserialize, Serialize};

use crate::catalog::ChallengeId;

/// Status of one challenge for one learner. Transitions are strictly
/// forward: Unlocked -> InProgress -> Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeStatus {
    #[serde(rename = "UNLOCKED")]
    Unlocked,
    #[serde(rename = "INPROGRESS")]
    InProgress,
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl ChallengeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unlocked => "UNLOCKED",
            Self::InProgress => "INPROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "UNLOCKED" => Some(Self::Unlocked),
            "INPROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// One learner's standing on one challenge. Created at `Unlocked` once all
/// of the challenge's prerequisite lectures are completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeState {
    pub challenge: ChallengeId,
    pub status: ChallengeStatus,
}

impl ChallengeState {
    pub fn unlocked(challenge: ChallengeId) -> Self {
        Self {
            challenge,
            status: ChallengeStatus::Unlocked,
        }
    }
}
