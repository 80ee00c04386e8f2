//! Operation orchestration
//!
//! [`LearnerService`] is the seam the transport layer calls: one method per
//! player action. Each method loads the learner's snapshot, runs the pure
//! decision function, commits the resulting delta under the snapshot's
//! version, and returns the response payload. Conflicts and store failures
//! propagate untransformed; the service never retries.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::catalog::{Catalog, Lecture, TutorialId};
use crate::config::EconomyConfig;
use crate::domain::LearnerSnapshot;
use crate::error::ActionError;
use crate::progression::{
    accept_challenge, complete_challenge, complete_lecture, enroll_tutorial,
    recommended_lectures, travel_to_planet, travel_to_system, Enrollment, LectureCompletion,
};
use crate::review::{complete_review, fail_card, pass_card, plan_daily_review, ReviewEntry};
use crate::store::LearnerStore;

/// Entry point for all player actions.
pub struct LearnerService<S> {
    store: S,
    catalog: Catalog,
    config: EconomyConfig,
}

impl<S: LearnerStore> LearnerService<S> {
    pub fn new(store: S, catalog: Catalog, config: EconomyConfig) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load(&self, learner: &str) -> Result<LearnerSnapshot, ActionError> {
        if learner.is_empty() {
            return Err(ActionError::MissingId("learner"));
        }
        self.store
            .load(&learner.to_string())?
            .ok_or_else(|| ActionError::Consistency(format!("no record for learner {learner}")))
    }

    /// Fetch (and on the first call of the day, assemble) the daily review.
    pub fn daily_review(
        &self,
        learner: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<ReviewEntry>, ActionError> {
        let snapshot = self.load(learner)?;
        let mut rng = rand::thread_rng();
        let plan = plan_daily_review(&snapshot, &self.config, now, &mut rng)?;

        // Resolve card content first so a catalog fault rejects the whole
        // operation before anything is pinned
        let entries: Vec<ReviewEntry> = plan
            .cards
            .iter()
            .map(|state| {
                let card = self.catalog.card(&state.card).ok_or_else(|| {
                    ActionError::Consistency(format!("card {} missing from catalog", state.card))
                })?;
                Ok(ReviewEntry {
                    card: card.clone(),
                    repeat: state.repeat,
                    selected: state.selected,
                })
            })
            .collect::<Result<_, ActionError>>()?;

        if !plan.delta.is_empty() {
            self.store.commit(&snapshot.id, snapshot.version, &plan.delta)?;
            debug!("Pinned daily review for {}: {} cards", learner, entries.len());
        }
        Ok(entries)
    }

    /// Correct answer on a review card.
    pub fn pass_card(&self, learner: &str, card: &str) -> Result<(), ActionError> {
        let snapshot = self.load(learner)?;
        let delta = pass_card(&snapshot, card)?;
        self.store.commit(&snapshot.id, snapshot.version, &delta)?;
        Ok(())
    }

    /// Wrong answer on a review card.
    pub fn fail_card(&self, learner: &str, card: &str) -> Result<(), ActionError> {
        let snapshot = self.load(learner)?;
        let delta = fail_card(&snapshot, card)?;
        self.store.commit(&snapshot.id, snapshot.version, &delta)?;
        Ok(())
    }

    /// Mark the daily review finished. External streak tracking keys off
    /// this event.
    pub fn complete_review(&self, learner: &str, now: DateTime<Utc>) -> Result<(), ActionError> {
        let snapshot = self.load(learner)?;
        let delta = complete_review(&snapshot, now)?;
        self.store.commit(&snapshot.id, snapshot.version, &delta)?;
        info!("Daily review completed by {}", learner);
        Ok(())
    }

    /// Accept an unlocked challenge.
    pub fn accept_challenge(&self, learner: &str, challenge: &str) -> Result<(), ActionError> {
        let snapshot = self.load(learner)?;
        let delta = accept_challenge(&snapshot, challenge, &self.config)?;
        self.store.commit(&snapshot.id, snapshot.version, &delta)?;
        debug!("Challenge {} accepted by {}", challenge, learner);
        Ok(())
    }

    /// Complete an in-progress challenge. Returns the tutorials this
    /// completion unlocked.
    pub fn complete_challenge(
        &self,
        learner: &str,
        challenge: &str,
    ) -> Result<Vec<TutorialId>, ActionError> {
        let snapshot = self.load(learner)?;
        let completion = complete_challenge(&snapshot, &self.catalog, challenge, &self.config)?;
        self.store
            .commit(&snapshot.id, snapshot.version, &completion.delta)?;

        if completion.planet_completed {
            info!("{} fully mined their current planet", learner);
        }
        debug!(
            "Challenge {} completed by {}, {} tutorial(s) unlocked",
            challenge,
            learner,
            completion.unlocked_tutorials.len()
        );
        Ok(completion.unlocked_tutorials)
    }

    /// Complete a lecture. Returns the granted cards and newly unlocked
    /// challenges.
    pub fn complete_lecture(
        &self,
        learner: &str,
        lecture: &str,
    ) -> Result<LectureCompletion, ActionError> {
        let snapshot = self.load(learner)?;
        let completion = complete_lecture(&snapshot, &self.catalog, lecture, &self.config)?;
        self.store
            .commit(&snapshot.id, snapshot.version, &completion.delta)?;
        debug!(
            "Lecture {} completed by {}: {} card(s), {} challenge(s)",
            lecture,
            learner,
            completion.granted_cards.len(),
            completion.unlocked_challenges.len()
        );
        Ok(completion)
    }

    /// Lectures worth suggesting next.
    pub fn recommended_lectures(&self, learner: &str) -> Result<Vec<Lecture>, ActionError> {
        let snapshot = self.load(learner)?;
        let recommended = recommended_lectures(&snapshot, &self.catalog)?;
        Ok(recommended.into_iter().cloned().collect())
    }

    /// Enroll in an unlocked tutorial.
    pub fn enroll_tutorial(&self, learner: &str, tutorial: &str) -> Result<Enrollment, ActionError> {
        let snapshot = self.load(learner)?;
        let open = self.store.open_cohorts(&tutorial.to_string())?;
        let enrollment = enroll_tutorial(&snapshot, tutorial, &open, &self.config)?;
        self.store
            .commit(&snapshot.id, snapshot.version, &enrollment.delta)?;
        debug!("{} enrolled in tutorial {}", learner, tutorial);
        Ok(enrollment)
    }

    /// Travel to a planet in the current star system.
    pub fn travel_to_planet(&self, learner: &str, planet: &str) -> Result<(), ActionError> {
        let snapshot = self.load(learner)?;
        let delta = travel_to_planet(&snapshot, &self.catalog, planet, &self.config)?;
        self.store.commit(&snapshot.id, snapshot.version, &delta)?;
        debug!("{} travelled to planet {}", learner, planet);
        Ok(())
    }

    /// Travel to a planet in a nearby star system.
    pub fn travel_to_system(
        &self,
        learner: &str,
        system: &str,
        planet: &str,
    ) -> Result<(), ActionError> {
        let snapshot = self.load(learner)?;
        let delta = travel_to_system(&snapshot, &self.catalog, system, planet, &self.config)?;
        self.store.commit(&snapshot.id, snapshot.version, &delta)?;
        debug!("{} jumped to system {}, planet {}", learner, system, planet);
        Ok(())
    }
}
