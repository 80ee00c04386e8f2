//! Challenge lifecycle
//!
//! Accepting a challenge costs energy and moves it to in-progress.
//! Completing it is the heart of the progression engine: the status flips,
//! every tutorial the challenge counts toward is re-checked for unlock,
//! and the current planet's mining advances, possibly finishing the
//! planet and paying out its reward. All of it lands in one delta.

use std::collections::HashSet;

use crate::catalog::{Catalog, TutorialId};
use crate::config::EconomyConfig;
use crate::domain::{ChallengeState, ChallengeStatus, LearnerDelta, LearnerSnapshot};
use crate::energy::{deplete_for, ActionKind};
use crate::error::ActionError;

/// Result of a successful challenge completion.
#[derive(Debug, Clone)]
pub struct ChallengeCompletion {
    pub delta: LearnerDelta,
    /// Tutorials whose prerequisites became fully satisfied just now
    pub unlocked_tutorials: Vec<TutorialId>,
    /// Whether this completion finished mining the current planet
    pub planet_completed: bool,
}

/// Take on an unlocked challenge.
pub fn accept_challenge(
    learner: &LearnerSnapshot,
    challenge: &str,
    config: &EconomyConfig,
) -> Result<LearnerDelta, ActionError> {
    if challenge.is_empty() {
        return Err(ActionError::MissingId("challenge"));
    }

    let state = learner.challenge_state(challenge)?;
    if state.status != ChallengeStatus::Unlocked {
        return Err(ActionError::ChallengeNotUnlocked);
    }

    let energy = deplete_for(learner.energy, ActionKind::AcceptChallenge, config)?;

    Ok(LearnerDelta {
        energy: Some(energy),
        challenges: vec![ChallengeState {
            challenge: challenge.to_string(),
            status: ChallengeStatus::InProgress,
        }],
        ..Default::default()
    })
}

/// Finish an in-progress challenge.
///
/// Preconditions: the challenge must be exactly in-progress and the current
/// planet must still have knowledge left to mine. Re-completing is
/// rejected, which is also what makes the planet reward single-shot.
pub fn complete_challenge(
    learner: &LearnerSnapshot,
    catalog: &Catalog,
    challenge: &str,
    config: &EconomyConfig,
) -> Result<ChallengeCompletion, ActionError> {
    if challenge.is_empty() {
        return Err(ActionError::MissingId("challenge"));
    }

    let state = learner.challenge_state(challenge)?;
    match state.status {
        ChallengeStatus::Completed => return Err(ActionError::ChallengeAlreadyCompleted),
        ChallengeStatus::Unlocked => return Err(ActionError::ChallengeNotInProgress),
        ChallengeStatus::InProgress => {}
    }

    let progress = learner.current_progress()?;
    if progress.completed {
        return Err(ActionError::PlanetAlreadyMined);
    }

    let definition = catalog.challenge(challenge).ok_or_else(|| {
        ActionError::Consistency(format!("challenge {challenge} missing from catalog"))
    })?;

    // Completed set as of this action, including the challenge at hand
    let mut completed: HashSet<&str> = learner
        .challenges
        .iter()
        .filter(|c| c.status == ChallengeStatus::Completed)
        .map(|c| c.challenge.as_str())
        .collect();
    completed.insert(challenge);

    let mut unlocked_tutorials = Vec::new();
    for tutorial_id in &definition.unlocks_tutorials {
        if learner.has_unlocked_tutorial(tutorial_id) {
            continue;
        }
        let tutorial = catalog.tutorial(tutorial_id).ok_or_else(|| {
            ActionError::Consistency(format!("tutorial {tutorial_id} missing from catalog"))
        })?;

        let satisfied = tutorial
            .required_challenges
            .iter()
            .filter(|c| completed.contains(c.as_str()))
            .count();
        if satisfied == tutorial.required_challenges.len() {
            unlocked_tutorials.push(tutorial_id.clone());
        }
    }

    let (new_progress, planet_completed) =
        progress.advance(config.challenge_knowledge, config.planet_knowledge);

    let delta = LearnerDelta {
        coins: planet_completed.then(|| learner.coins + config.planet_reward),
        challenges: vec![ChallengeState {
            challenge: challenge.to_string(),
            status: ChallengeStatus::Completed,
        }],
        unlocked_tutorials: unlocked_tutorials.clone(),
        planet_progress: Some(new_progress),
        ..Default::default()
    };

    Ok(ChallengeCompletion {
        delta,
        unlocked_tutorials,
        planet_completed,
    })
}
