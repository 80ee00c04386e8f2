//! Learner record store collaborator
//!
//! The core performs no storage I/O itself. It consumes this trait: load a
//! fully-hydrated snapshot, then commit one [`LearnerDelta`] atomically.
//! Commits are versioned: a writer racing against a stale snapshot gets a
//! conflict, never a partial or double application. Retrying on conflict
//! is the caller's policy, not the core's.

mod memory;

pub use memory::MemoryStore;

use anyhow::Result;
use thiserror::Error;

use crate::catalog::TutorialId;
use crate::domain::{LearnerDelta, LearnerId, LearnerSnapshot, TutorialCohort};
use crate::error::ActionError;

/// Why a commit did not apply.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The snapshot the delta was computed from is stale
    #[error("version conflict")]
    Conflict,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl From<CommitError> for ActionError {
    fn from(err: CommitError) -> Self {
        match err {
            CommitError::Conflict => ActionError::Conflict,
            CommitError::Store(err) => ActionError::Store(err),
        }
    }
}

/// The persistence seam of the decision core.
///
/// Implementations must provide read-your-own-writes and all-or-nothing
/// commits; `commit` must reject any `expected_version` that is not the
/// record's current version.
pub trait LearnerStore: Send + Sync {
    /// Load one learner's hydrated snapshot, or `None` if the learner does
    /// not exist.
    fn load(&self, learner: &LearnerId) -> Result<Option<LearnerSnapshot>>;

    /// Cohorts still filling for a tutorial, oldest first.
    fn open_cohorts(&self, tutorial: &TutorialId) -> Result<Vec<TutorialCohort>>;

    /// Apply a delta to the learner record (and its cohort placement, if
    /// any) as one atomic unit.
    fn commit(
        &self,
        learner: &LearnerId,
        expected_version: u64,
        delta: &LearnerDelta,
    ) -> std::result::Result<(), CommitError>;
}
