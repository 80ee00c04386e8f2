//! Tutorial enrollment
//!
//! Tutorials are unlocked by the challenge cascade (see
//! [`challenges`](super::challenges)); enrolling in one costs energy and
//! places the learner into a cohort. Open cohorts are filled before new
//! ones are created, and a cohort flips to filled exactly at capacity.

use crate::config::EconomyConfig;
use crate::domain::{CohortPlacement, LearnerDelta, LearnerSnapshot, TutorialCohort};
use crate::energy::{deplete_for, ActionKind};
use crate::error::ActionError;

/// Result of a successful enrollment.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub delta: LearnerDelta,
    pub placement: CohortPlacement,
}

/// Enroll the learner in an unlocked tutorial.
///
/// `open_cohorts` is the store's view of cohorts still filling for this
/// tutorial; the first one gets the learner, otherwise a new cohort is
/// opened.
pub fn enroll_tutorial(
    learner: &LearnerSnapshot,
    tutorial: &str,
    open_cohorts: &[TutorialCohort],
    config: &EconomyConfig,
) -> Result<Enrollment, ActionError> {
    if tutorial.is_empty() {
        return Err(ActionError::MissingId("tutorial"));
    }

    if !learner.has_unlocked_tutorial(tutorial) {
        return Err(ActionError::TutorialNotUnlocked);
    }

    let energy = deplete_for(learner.energy, ActionKind::EnrollTutorial, config)?;

    let placement = match open_cohorts
        .iter()
        .find(|c| c.tutorial == tutorial && c.is_open())
    {
        Some(cohort) => CohortPlacement::Join {
            cohort: cohort.id.clone(),
            filled: cohort.members.len() + 1 >= config.cohort_capacity,
        },
        None => CohortPlacement::Open {
            tutorial: tutorial.to_string(),
        },
    };

    let delta = LearnerDelta {
        energy: Some(energy),
        cohort: Some(placement.clone()),
        ..Default::default()
    };

    Ok(Enrollment { delta, placement })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CohortStatus;

    fn learner() -> LearnerSnapshot {
        LearnerSnapshot {
            id: "learner-1".into(),
            version: 0,
            energy: 150,
            coins: 0,
            timezone: "UTC".into(),
            last_completed_review: None,
            cards: vec![],
            challenges: vec![],
            completed_lectures: vec![],
            unlocked_tutorials: vec!["tut-1".into()],
            current_planet: None,
            planet_progress: vec![],
        }
    }

    fn cohort(id: &str, members: usize) -> TutorialCohort {
        TutorialCohort {
            id: id.into(),
            tutorial: "tut-1".into(),
            status: CohortStatus::Filling,
            members: (0..members).map(|i| format!("other-{i}")).collect(),
        }
    }

    #[test]
    fn test_locked_tutorial_rejected() {
        let config = EconomyConfig::default();
        let snapshot = learner();

        assert!(matches!(
            enroll_tutorial(&snapshot, "tut-secret", &[], &config),
            Err(ActionError::TutorialNotUnlocked)
        ));
    }

    #[test]
    fn test_no_open_cohort_opens_one() {
        let config = EconomyConfig::default();
        let snapshot = learner();

        let enrollment = enroll_tutorial(&snapshot, "tut-1", &[], &config).unwrap();
        assert_eq!(enrollment.delta.energy, Some(50));
        assert!(matches!(
            enrollment.placement,
            CohortPlacement::Open { ref tutorial } if tutorial == "tut-1"
        ));
    }

    #[test]
    fn test_open_cohort_is_joined_first() {
        let config = EconomyConfig::default();
        let snapshot = learner();
        let cohorts = vec![cohort("co-1", 1)];

        let enrollment = enroll_tutorial(&snapshot, "tut-1", &cohorts, &config).unwrap();
        assert!(matches!(
            enrollment.placement,
            CohortPlacement::Join { ref cohort, filled: false } if cohort == "co-1"
        ));
    }

    #[test]
    fn test_last_seat_fills_the_cohort() {
        let config = EconomyConfig::default();
        let snapshot = learner();
        let cohorts = vec![cohort("co-1", 2)];

        let enrollment = enroll_tutorial(&snapshot, "tut-1", &cohorts, &config).unwrap();
        assert!(matches!(
            enrollment.placement,
            CohortPlacement::Join { filled: true, .. }
        ));
    }

    #[test]
    fn test_enrollment_needs_energy() {
        let config = EconomyConfig::default();
        let mut snapshot = learner();
        snapshot.energy = 10;

        assert!(matches!(
            enroll_tutorial(&snapshot, "tut-1", &[], &config),
            Err(ActionError::NotEnoughEnergy { .. })
        ));
    }
}
