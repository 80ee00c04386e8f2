//! Daily spaced review
//!
//! The scheduler assembles one review session per learner per local day
//! (see [`scheduler`]); the transition functions here handle the learner's
//! answers and the end-of-review mark.

mod scheduler;

pub use scheduler::{plan_daily_review, ReviewPlan};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ReviewCard;
use crate::domain::{LearnerDelta, LearnerSnapshot};
use crate::error::ActionError;

/// One entry of the daily review as presented to the learner: the shared
/// card content joined with this learner's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub card: ReviewCard,
    pub repeat: u8,
    pub selected: Option<NaiveDate>,
}

/// The learner answered a card correctly: repeat count moves toward zero
/// and the card leaves today's session immediately.
pub fn pass_card(learner: &LearnerSnapshot, card: &str) -> Result<LearnerDelta, ActionError> {
    if card.is_empty() {
        return Err(ActionError::MissingId("card"));
    }

    let mut state = learner.card_state(card)?.clone();
    state.pass();

    Ok(LearnerDelta {
        cards: vec![state],
        ..Default::default()
    })
}

/// The learner answered a card incorrectly: back to the full repeat cycle.
pub fn fail_card(learner: &LearnerSnapshot, card: &str) -> Result<LearnerDelta, ActionError> {
    if card.is_empty() {
        return Err(ActionError::MissingId("card"));
    }

    let mut state = learner.card_state(card)?.clone();
    state.fail();

    Ok(LearnerDelta {
        cards: vec![state],
        ..Default::default()
    })
}

/// Mark today's review as finished. The second completion within one local
/// day is rejected; the day rolls over at local midnight.
pub fn complete_review(
    learner: &LearnerSnapshot,
    now: DateTime<Utc>,
) -> Result<LearnerDelta, ActionError> {
    if learner.reviewed_on(now)? {
        return Err(ActionError::ReviewAlreadyCompleted);
    }

    Ok(LearnerDelta {
        last_completed_review: Some(now),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::CardState;

    fn learner_with_card(repeat: u8) -> LearnerSnapshot {
        let mut card = CardState::granted("c-1".into());
        card.repeat = repeat;
        LearnerSnapshot {
            id: "learner-1".into(),
            version: 0,
            energy: 100,
            coins: 0,
            timezone: "UTC".into(),
            last_completed_review: None,
            cards: vec![card],
            challenges: vec![],
            completed_lectures: vec![],
            unlocked_tutorials: vec![],
            current_planet: None,
            planet_progress: vec![],
        }
    }

    #[test]
    fn test_pass_emits_decremented_card() {
        let learner = learner_with_card(2);
        let delta = pass_card(&learner, "c-1").unwrap();
        assert_eq!(delta.cards[0].repeat, 1);
        assert!(delta.cards[0].selected.is_none());
    }

    #[test]
    fn test_fail_emits_full_repeat() {
        let learner = learner_with_card(1);
        let delta = fail_card(&learner, "c-1").unwrap();
        assert_eq!(delta.cards[0].repeat, 3);
    }

    #[test]
    fn test_unknown_card_is_a_consistency_fault() {
        let learner = learner_with_card(0);
        assert!(matches!(
            pass_card(&learner, "c-404"),
            Err(ActionError::Consistency(_))
        ));
    }

    #[test]
    fn test_empty_card_id_rejected_first() {
        let learner = learner_with_card(0);
        assert!(matches!(
            fail_card(&learner, ""),
            Err(ActionError::MissingId("card"))
        ));
    }

    #[test]
    fn test_complete_review_once_per_day() {
        let mut learner = learner_with_card(0);
        let morning = Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap();

        let delta = complete_review(&learner, morning).unwrap();
        assert_eq!(delta.last_completed_review, Some(morning));

        learner.last_completed_review = Some(morning);
        let evening = Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap();
        assert!(matches!(
            complete_review(&learner, evening),
            Err(ActionError::ReviewAlreadyCompleted)
        ));

        // Next local day it opens up again
        let next_day = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        assert!(complete_review(&learner, next_day).is_ok());
    }
}
