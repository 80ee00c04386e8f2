//! Daily review selection
//!
//! Builds the card set for one learner's daily review. The selection is
//! computed once per local day and pinned by marking the chosen cards'
//! `selected` date, so every fetch for the rest of the day returns the same
//! session instead of re-rolling the dice.

use chrono::{DateTime, NaiveDate, Utc};
use rand::seq::index::sample;
use rand::Rng;

use crate::config::EconomyConfig;
use crate::domain::{CardState, LearnerDelta, LearnerSnapshot};
use crate::error::ActionError;

/// Today's review session and the delta that pins it.
#[derive(Debug, Clone, Default)]
pub struct ReviewPlan {
    /// Cards to present; empty when the review is already done for today
    pub cards: Vec<CardState>,
    /// Selection marks to persist; empty when nothing was newly chosen
    pub delta: LearnerDelta,
}

/// Assemble the learner's review session for the local day of `now`.
///
/// Repeat cards (`repeat > 0`) are mandatory. Whatever quota room they
/// leave is filled with a uniform random sample of mastered cards; with
/// more repeat cards than quota, the session is a uniform sample of the
/// repeat set itself.
pub fn plan_daily_review(
    learner: &LearnerSnapshot,
    config: &EconomyConfig,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<ReviewPlan, ActionError> {
    // Already reviewed today: terminal until local midnight
    if learner.reviewed_on(now)? {
        return Ok(ReviewPlan::default());
    }

    let today = learner.local_date(now)?;

    // A selection pinned earlier today wins over re-rolling
    let pinned: Vec<CardState> = learner
        .cards
        .iter()
        .filter(|c| c.selected == Some(today))
        .cloned()
        .collect();
    if !pinned.is_empty() {
        return Ok(ReviewPlan {
            cards: pinned,
            delta: LearnerDelta::default(),
        });
    }

    let chosen = select_cards(&learner.cards, config.review_quota, today, rng);

    let delta = LearnerDelta {
        cards: chosen.clone(),
        ..Default::default()
    };
    Ok(ReviewPlan {
        cards: chosen,
        delta,
    })
}

/// The selection policy, separated from the day bookkeeping. Returns the
/// chosen cards already stamped with today's date.
fn select_cards(
    cards: &[CardState],
    quota: usize,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<CardState> {
    let repeat: Vec<&CardState> = cards.iter().filter(|c| c.is_due_repeat()).collect();
    let fresh: Vec<&CardState> = cards.iter().filter(|c| !c.is_due_repeat()).collect();

    let mut chosen: Vec<CardState> = Vec::new();

    if repeat.len() >= quota {
        // The backlog alone covers the quota: uniform sample of the repeat
        // set. Sample size is clamped so a quota-sized backlog is returned
        // whole rather than over-drawn.
        let amount = quota.min(repeat.len());
        for index in sample(rng, repeat.len(), amount) {
            chosen.push(repeat[index].clone());
        }
    } else {
        chosen.extend(repeat.iter().map(|c| (*c).clone()));

        let remaining = quota - repeat.len();
        if remaining >= fresh.len() {
            chosen.extend(fresh.iter().map(|c| (*c).clone()));
        } else {
            for index in sample(rng, fresh.len(), remaining) {
                chosen.push(fresh[index].clone());
            }
        }
    }

    for card in &mut chosen {
        card.selected = Some(today);
    }
    chosen
}
