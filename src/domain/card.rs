//! Per-learner review card state

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::CardId;

/// Repeat count a card is reset to when the learner fails it.
pub const MAX_REPEAT: u8 = 3;

/// The spaced-review state of one card for one learner.
///
/// `repeat == 0` means mastered: the card is only shown again when the
/// scheduler picks it as quota filler. `repeat > 0` means the card must be
/// re-presented until it has been passed down to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    pub card: CardId,

    pub repeat: u8,

    /// Local date this card was chosen for the daily review, if it is part
    /// of an in-progress session. Cleared when the card is answered.
    pub selected: Option<NaiveDate>,
}

impl CardState {
    /// State created when a lecture grants this card to the learner.
    pub fn granted(card: CardId) -> Self {
        Self {
            card,
            repeat: 0,
            selected: None,
        }
    }

    /// Card must be re-presented regardless of quota.
    pub fn is_due_repeat(&self) -> bool {
        self.repeat > 0
    }

    /// The learner answered correctly: work the repeat count toward zero
    /// and release the card from today's session.
    pub fn pass(&mut self) {
        self.repeat = self.repeat.saturating_sub(1);
        self.selected = None;
    }

    /// The learner answered incorrectly: back to the full repeat cycle.
    pub fn fail(&mut self) {
        self.repeat = MAX_REPEAT;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_decrements_to_floor() {
        let mut state = CardState::granted("c-1".into());
        state.repeat = 2;

        state.pass();
        assert_eq!(state.repeat, 1);
        state.pass();
        assert_eq!(state.repeat, 0);
        state.pass();
        assert_eq!(state.repeat, 0);
    }

    #[test]
    fn test_fail_resets_to_max_from_any_value() {
        let mut state = CardState::granted("c-1".into());
        state.fail();
        assert_eq!(state.repeat, MAX_REPEAT);

        state.repeat = 1;
        state.fail();
        assert_eq!(state.repeat, MAX_REPEAT);
    }

    #[test]
    fn test_answering_clears_selection() {
        let mut state = CardState::granted("c-1".into());
        state.selected = NaiveDate::from_ymd_opt(2024, 3, 9);

        state.pass();
        assert!(state.selected.is_none());

        state.selected = NaiveDate::from_ymd_opt(2024, 3, 9);
        state.fail();
        assert!(state.selected.is_none());
    }
}
