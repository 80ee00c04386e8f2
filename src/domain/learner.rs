//! The hydrated learner snapshot

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::catalog::{LectureId, PlanetId, TutorialId};
use crate::domain::{CardState, ChallengeState, PlanetProgress};
use crate::error::ActionError;

pub type LearnerId = String;

/// Everything the decision functions need to know about one learner,
/// assembled in a single read by the record store.
///
/// Decision functions never mutate a snapshot; they emit a
/// [`LearnerDelta`](crate::domain::LearnerDelta) for the store to apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerSnapshot {
    pub id: LearnerId,

    /// Store-side record version, checked on commit
    pub version: u64,

    pub energy: u32,
    pub coins: u32,

    /// IANA zone name the learner's review day is computed in
    pub timezone: String,

    /// Instant the learner last finished a daily review
    pub last_completed_review: Option<DateTime<Utc>>,

    pub cards: Vec<CardState>,
    pub challenges: Vec<ChallengeState>,
    pub completed_lectures: Vec<LectureId>,
    pub unlocked_tutorials: Vec<TutorialId>,

    /// Planet the learner is currently orbiting
    pub current_planet: Option<PlanetId>,
    /// Mining history, one record per visited planet; never reset
    pub planet_progress: Vec<PlanetProgress>,
}

impl LearnerSnapshot {
    /// Resolve the learner's zone and truncate `at` to a local date.
    pub fn local_date(&self, at: DateTime<Utc>) -> Result<NaiveDate, ActionError> {
        let tz: Tz = self
            .timezone
            .parse()
            .map_err(|_| ActionError::UnknownTimezone(self.timezone.clone()))?;
        Ok(at.with_timezone(&tz).date_naive())
    }

    /// Whether the daily review was already completed on the local date of
    /// `now`.
    pub fn reviewed_on(&self, now: DateTime<Utc>) -> Result<bool, ActionError> {
        let Some(last) = self.last_completed_review else {
            return Ok(false);
        };
        Ok(self.local_date(last)? == self.local_date(now)?)
    }

    /// The learner's state for one card. Zero or duplicate records break
    /// the hydration contract and surface as a consistency fault.
    pub fn card_state(&self, card: &str) -> Result<&CardState, ActionError> {
        let mut found = self.cards.iter().filter(|c| c.card == card);
        match (found.next(), found.next()) {
            (Some(state), None) => Ok(state),
            (None, _) => Err(ActionError::Consistency(format!(
                "no card state for {card}"
            ))),
            (Some(_), Some(_)) => Err(ActionError::Consistency(format!(
                "duplicate card state for {card}"
            ))),
        }
    }

    /// The learner's state for one challenge, with the same exactly-one
    /// contract as [`card_state`](Self::card_state).
    pub fn challenge_state(&self, challenge: &str) -> Result<&ChallengeState, ActionError> {
        let mut found = self.challenges.iter().filter(|c| c.challenge == challenge);
        match (found.next(), found.next()) {
            (Some(state), None) => Ok(state),
            (None, _) => Err(ActionError::Consistency(format!(
                "no challenge state for {challenge}"
            ))),
            (Some(_), Some(_)) => Err(ActionError::Consistency(format!(
                "duplicate challenge state for {challenge}"
            ))),
        }
    }

    pub fn has_challenge_state(&self, challenge: &str) -> bool {
        self.challenges.iter().any(|c| c.challenge == challenge)
    }

    pub fn has_completed_lecture(&self, lecture: &str) -> bool {
        self.completed_lectures.iter().any(|l| l == lecture)
    }

    pub fn has_unlocked_tutorial(&self, tutorial: &str) -> bool {
        self.unlocked_tutorials.iter().any(|t| t == tutorial)
    }

    pub fn owns_card(&self, card: &str) -> bool {
        self.cards.iter().any(|c| c.card == card)
    }

    /// Mining progress for one planet, if the learner ever visited it.
    pub fn progress_for(&self, planet: &str) -> Option<&PlanetProgress> {
        self.planet_progress.iter().find(|p| p.planet == planet)
    }

    /// Progress on the current planet. An active learner always has one;
    /// a snapshot without it is a hydration fault.
    pub fn current_progress(&self) -> Result<&PlanetProgress, ActionError> {
        let planet = self.current_planet.as_deref().ok_or_else(|| {
            ActionError::Consistency("learner has no current planet".to_string())
        })?;
        self.progress_for(planet).ok_or_else(|| {
            ActionError::Consistency(format!("no progress record for current planet {planet}"))
        })
    }
}
