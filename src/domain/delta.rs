//! Atomic learner deltas
//!
//! Decision functions compute against an immutable snapshot and describe
//! their full effect as one [`LearnerDelta`]. The store applies a delta
//! all-or-nothing; a rejected operation emits no delta at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{LectureId, PlanetId, TutorialId};
use crate::domain::cohort::CohortId;
use crate::domain::{CardState, ChallengeState, LearnerSnapshot, PlanetProgress};

/// How an enrollment changes cohort membership. Cohort records are shared
/// between learners, so the store applies this outside the learner record
/// (still within the same commit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CohortPlacement {
    /// Join an existing open cohort; `filled` marks that this member is the
    /// last seat.
    Join { cohort: CohortId, filled: bool },
    /// No open cohort existed; the store creates one with the learner as
    /// sole member.
    Open { tutorial: TutorialId },
}

/// The complete effect of one operation on one learner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearnerDelta {
    pub energy: Option<u32>,
    pub coins: Option<u32>,
    pub last_completed_review: Option<DateTime<Utc>>,

    /// Card states to upsert, keyed by card id
    pub cards: Vec<CardState>,
    /// Challenge states to upsert, keyed by challenge id
    pub challenges: Vec<ChallengeState>,

    /// Lectures newly marked completed
    pub completed_lectures: Vec<LectureId>,
    /// Tutorials newly unlocked
    pub unlocked_tutorials: Vec<TutorialId>,

    pub current_planet: Option<PlanetId>,
    /// Mining progress to upsert, keyed by planet id
    pub planet_progress: Option<PlanetProgress>,

    pub cohort: Option<CohortPlacement>,
}

impl LearnerDelta {
    pub fn is_empty(&self) -> bool {
        self.energy.is_none()
            && self.coins.is_none()
            && self.last_completed_review.is_none()
            && self.cards.is_empty()
            && self.challenges.is_empty()
            && self.completed_lectures.is_empty()
            && self.unlocked_tutorials.is_empty()
            && self.current_planet.is_none()
            && self.planet_progress.is_none()
            && self.cohort.is_none()
    }

    /// Fold the learner-record part of this delta into a snapshot. The
    /// cohort placement is store-level state and is not applied here.
    pub fn apply(&self, learner: &mut LearnerSnapshot) {
        if let Some(energy) = self.energy {
            learner.energy = energy;
        }
        if let Some(coins) = self.coins {
            learner.coins = coins;
        }
        if let Some(at) = self.last_completed_review {
            learner.last_completed_review = Some(at);
        }

        for update in &self.cards {
            match learner.cards.iter_mut().find(|c| c.card == update.card) {
                Some(existing) => *existing = update.clone(),
                None => learner.cards.push(update.clone()),
            }
        }

        for update in &self.challenges {
            match learner
                .challenges
                .iter_mut()
                .find(|c| c.challenge == update.challenge)
            {
                Some(existing) => *existing = update.clone(),
                None => learner.challenges.push(update.clone()),
            }
        }

        for lecture in &self.completed_lectures {
            if !learner.has_completed_lecture(lecture) {
                learner.completed_lectures.push(lecture.clone());
            }
        }

        for tutorial in &self.unlocked_tutorials {
            if !learner.has_unlocked_tutorial(tutorial) {
                learner.unlocked_tutorials.push(tutorial.clone());
            }
        }

        if let Some(planet) = &self.current_planet {
            learner.current_planet = Some(planet.clone());
        }

        if let Some(progress) = &self.planet_progress {
            match learner
                .planet_progress
                .iter_mut()
                .find(|p| p.planet == progress.planet)
            {
                Some(existing) => *existing = progress.clone(),
                None => learner.planet_progress.push(progress.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChallengeStatus;

    fn snapshot() -> LearnerSnapshot {
        LearnerSnapshot {
            id: "learner-1".into(),
            version: 3,
            energy: 500,
            coins: 10,
            timezone: "UTC".into(),
            last_completed_review: None,
            cards: vec![CardState::granted("c-1".into())],
            challenges: vec![ChallengeState::unlocked("ch-1".into())],
            completed_lectures: vec!["lec-1".into()],
            unlocked_tutorials: vec![],
            current_planet: Some("p-1".into()),
            planet_progress: vec![PlanetProgress::begin("p-1".into())],
        }
    }

    #[test]
    fn test_empty_delta_changes_nothing() {
        let mut learner = snapshot();
        let before = learner.clone();

        let delta = LearnerDelta::default();
        assert!(delta.is_empty());
        delta.apply(&mut learner);

        assert_eq!(learner.energy, before.energy);
        assert_eq!(learner.cards, before.cards);
        assert_eq!(learner.challenges, before.challenges);
    }

    #[test]
    fn test_upserts_replace_and_insert() {
        let mut learner = snapshot();

        let mut failed = CardState::granted("c-1".into());
        failed.repeat = 3;

        let delta = LearnerDelta {
            energy: Some(400),
            cards: vec![failed, CardState::granted("c-2".into())],
            challenges: vec![ChallengeState {
                challenge: "ch-1".into(),
                status: ChallengeStatus::InProgress,
            }],
            ..Default::default()
        };
        assert!(!delta.is_empty());
        delta.apply(&mut learner);

        assert_eq!(learner.energy, 400);
        assert_eq!(learner.cards.len(), 2);
        assert_eq!(learner.card_state("c-1").unwrap().repeat, 3);
        assert_eq!(
            learner.challenge_state("ch-1").unwrap().status,
            ChallengeStatus::InProgress
        );
    }

    #[test]
    fn test_additions_deduplicate() {
        let mut learner = snapshot();

        let delta = LearnerDelta {
            completed_lectures: vec!["lec-1".into(), "lec-2".into()],
            unlocked_tutorials: vec!["tut-1".into(), "tut-1".into()],
            ..Default::default()
        };
        delta.apply(&mut learner);

        assert_eq!(learner.completed_lectures, vec!["lec-1", "lec-2"]);
        assert_eq!(learner.unlocked_tutorials, vec!["tut-1"]);
    }
}
