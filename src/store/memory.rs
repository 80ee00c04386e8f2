//! In-memory learner store
//!
//! Reference implementation of [`LearnerStore`]: a mutex-guarded map with
//! versioned commits. Used by the test suites and as the executable
//! documentation of the commit contract.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;

use crate::catalog::TutorialId;
use crate::domain::{
    CohortPlacement, CohortStatus, LearnerDelta, LearnerId, LearnerSnapshot, TutorialCohort,
};

use super::{CommitError, LearnerStore};

#[derive(Default)]
struct Inner {
    learners: HashMap<LearnerId, LearnerSnapshot>,
    cohorts: Vec<TutorialCohort>,
    next_cohort: u64,
}

/// Mutex-guarded in-memory store.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a learner record. The stored version starts at the snapshot's
    /// own version.
    pub fn insert(&self, learner: LearnerSnapshot) {
        let mut inner = self.inner.lock().expect("lock");
        inner.learners.insert(learner.id.clone(), learner);
    }

    /// Current cohort records, for test inspection.
    pub fn cohorts(&self) -> Vec<TutorialCohort> {
        self.inner.lock().expect("lock").cohorts.clone()
    }
}

impl LearnerStore for MemoryStore {
    fn load(&self, learner: &LearnerId) -> Result<Option<LearnerSnapshot>> {
        let inner = self.inner.lock().expect("lock");
        Ok(inner.learners.get(learner).cloned())
    }

    fn open_cohorts(&self, tutorial: &TutorialId) -> Result<Vec<TutorialCohort>> {
        let inner = self.inner.lock().expect("lock");
        Ok(inner
            .cohorts
            .iter()
            .filter(|c| &c.tutorial == tutorial && c.is_open())
            .cloned()
            .collect())
    }

    fn commit(
        &self,
        learner: &LearnerId,
        expected_version: u64,
        delta: &LearnerDelta,
    ) -> std::result::Result<(), CommitError> {
        let mut inner = self.inner.lock().expect("lock");

        let record = inner
            .learners
            .get_mut(learner)
            .ok_or_else(|| CommitError::Store(anyhow::anyhow!("unknown learner {learner}")))?;

        if record.version != expected_version {
            return Err(CommitError::Conflict);
        }

        delta.apply(record);
        record.version += 1;

        if let Some(placement) = &delta.cohort {
            let learner = learner.clone();
            match placement {
                CohortPlacement::Join { cohort, filled } => {
                    let Some(record) = inner.cohorts.iter_mut().find(|c| &c.id == cohort) else {
                        return Err(CommitError::Store(anyhow::anyhow!(
                            "unknown cohort {cohort}"
                        )));
                    };
                    record.members.push(learner);
                    if *filled {
                        record.status = CohortStatus::Filled;
                    }
                }
                CohortPlacement::Open { tutorial } => {
                    inner.next_cohort += 1;
                    let id = format!("cohort-{}", inner.next_cohort);
                    inner.cohorts.push(TutorialCohort {
                        id,
                        tutorial: tutorial.clone(),
                        status: CohortStatus::Filling,
                        members: vec![learner],
                    });
                }
            }
        }

        Ok(())
    }
}
