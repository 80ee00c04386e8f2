//! Tutorial cohorts
//!
//! Cohorts are the one piece of cross-learner state in the system: a group
//! of learners taking a tutorial together. Enrollment fills existing open
//! cohorts before opening new ones.

use serde::{Deserialize, Serialize};

use crate::catalog::TutorialId;
use crate::domain::LearnerId;

pub type CohortId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CohortStatus {
    #[serde(rename = "FILLING")]
    Filling,
    #[serde(rename = "FILLED")]
    Filled,
}

impl CohortStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filling => "FILLING",
            Self::Filled => "FILLED",
        }
    }
}

/// A group of learners enrolled in one tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialCohort {
    pub id: CohortId,
    pub tutorial: TutorialId,
    pub status: CohortStatus,
    pub members: Vec<LearnerId>,
}

impl TutorialCohort {
    pub fn is_open(&self) -> bool {
        self.status == CohortStatus::Filling
    }
}
