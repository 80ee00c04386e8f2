//! Lecture completion and recommendation
//!
//! Completing a lecture is the entry point of the whole progression graph:
//! it grants the lecture's review cards and creates unlocked challenge
//! states once every required lecture of a challenge is done.

use std::collections::HashSet;

use crate::catalog::{Catalog, Lecture};
use crate::config::EconomyConfig;
use crate::domain::{CardState, ChallengeState, LearnerDelta, LearnerSnapshot};
use crate::energy::{deplete_for, ActionKind};
use crate::error::ActionError;

/// Result of a successful lecture completion.
#[derive(Debug, Clone)]
pub struct LectureCompletion {
    pub delta: LearnerDelta,
    /// Card states granted by this lecture
    pub granted_cards: Vec<CardState>,
    /// Challenges that became available through this lecture
    pub unlocked_challenges: Vec<ChallengeState>,
}

/// Complete a lecture: grant its cards, unlock whatever challenges are now
/// fully gated-through, mark it done, deplete energy.
pub fn complete_lecture(
    learner: &LearnerSnapshot,
    catalog: &Catalog,
    lecture: &str,
    config: &EconomyConfig,
) -> Result<LectureCompletion, ActionError> {
    if lecture.is_empty() {
        return Err(ActionError::MissingId("lecture"));
    }

    let definition = catalog
        .lecture(lecture)
        .ok_or_else(|| ActionError::UnknownLecture(lecture.to_string()))?;

    if learner.has_completed_lecture(lecture) {
        return Err(ActionError::LectureAlreadyCompleted);
    }

    let energy = deplete_for(learner.energy, ActionKind::CompleteLecture, config)?;

    // Cards attached to the lecture start mastered; a card already granted
    // through another lecture is not duplicated
    let granted_cards: Vec<CardState> = definition
        .cards
        .iter()
        .filter(|card| !learner.owns_card(card))
        .map(|card| CardState::granted(card.clone()))
        .collect();

    // A challenge opens up once all of its required lectures are completed,
    // counting this one
    let mut unlocked_challenges = Vec::new();
    for challenge_id in &definition.unlocks_challenges {
        if learner.has_challenge_state(challenge_id) {
            continue;
        }
        let challenge = catalog.challenge(challenge_id).ok_or_else(|| {
            ActionError::Consistency(format!("challenge {challenge_id} missing from catalog"))
        })?;

        let gated = challenge
            .required_lectures
            .iter()
            .all(|required| required == lecture || learner.has_completed_lecture(required));
        if gated {
            unlocked_challenges.push(ChallengeState::unlocked(challenge_id.clone()));
        }
    }

    let delta = LearnerDelta {
        energy: Some(energy),
        cards: granted_cards.clone(),
        challenges: unlocked_challenges.clone(),
        completed_lectures: vec![lecture.to_string()],
        ..Default::default()
    };

    Ok(LectureCompletion {
        delta,
        granted_cards,
        unlocked_challenges,
    })
}

/// Lectures worth suggesting next: direct pre- or post-requisites of the
/// learner's completed lectures that are not themselves completed.
pub fn recommended_lectures<'a>(
    learner: &LearnerSnapshot,
    catalog: &'a Catalog,
) -> Result<Vec<&'a Lecture>, ActionError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut recommended = Vec::new();

    for completed in &learner.completed_lectures {
        let lecture = catalog.lecture(completed).ok_or_else(|| {
            ActionError::Consistency(format!("completed lecture {completed} missing from catalog"))
        })?;

        for neighbour in lecture.pre_reqs.iter().chain(lecture.post_reqs.iter()) {
            if learner.has_completed_lecture(neighbour) || !seen.insert(neighbour.as_str()) {
                continue;
            }
            let definition = catalog.lecture(neighbour).ok_or_else(|| {
                ActionError::Consistency(format!("lecture {neighbour} missing from catalog"))
            })?;
            recommended.push(definition);
        }
    }

    Ok(recommended)
}
