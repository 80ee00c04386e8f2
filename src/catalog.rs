//! Immutable content catalog
//!
//! The learning content (lectures, review cards, challenges, tutorials,
//! planets and star systems) is authored outside this crate and hydrated
//! once by the data-access layer into a [`Catalog`]. Decision functions
//! only read from it; nothing in the catalog is per-learner.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type CardId = String;
pub type LectureId = String;
pub type ChallengeId = String;
pub type TutorialId = String;
pub type PlanetId = String;
pub type SystemId = String;

/// Shared flashcard content, immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCard {
    pub id: CardId,
    pub top_text: String,
    pub bottom_text: String,
}

/// A lecture, its attached review cards, and its place in the lecture graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecture {
    pub id: LectureId,
    pub title: String,
    /// Cards granted to the learner when this lecture is completed
    #[serde(default)]
    pub cards: Vec<CardId>,
    /// Challenges this lecture counts toward unlocking
    #[serde(default)]
    pub unlocks_challenges: Vec<ChallengeId>,
    #[serde(default)]
    pub pre_reqs: Vec<LectureId>,
    #[serde(default)]
    pub post_reqs: Vec<LectureId>,
}

/// A challenge definition: which lectures gate it, which tutorials it
/// counts toward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_lectures: Vec<LectureId>,
    #[serde(default)]
    pub unlocks_tutorials: Vec<TutorialId>,
}

/// A tutorial definition; unlocked when every required challenge is
/// completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: TutorialId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_challenges: Vec<ChallengeId>,
}

/// A planet; always belongs to exactly one star system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub system: SystemId,
}

/// A star system: its planets and which systems can be reached from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarSystem {
    pub id: SystemId,
    pub name: String,
    #[serde(default)]
    pub planets: Vec<PlanetId>,
    #[serde(default)]
    pub nearby_systems: Vec<SystemId>,
}

/// The full content graph, keyed for id lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    cards: HashMap<CardId, ReviewCard>,
    lectures: HashMap<LectureId, Lecture>,
    challenges: HashMap<ChallengeId, Challenge>,
    tutorials: HashMap<TutorialId, Tutorial>,
    planets: HashMap<PlanetId, Planet>,
    systems: HashMap<SystemId, StarSystem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, card: ReviewCard) {
        self.cards.insert(card.id.clone(), card);
    }

    pub fn add_lecture(&mut self, lecture: Lecture) {
        self.lectures.insert(lecture.id.clone(), lecture);
    }

    pub fn add_challenge(&mut self, challenge: Challenge) {
        self.challenges.insert(challenge.id.clone(), challenge);
    }

    pub fn add_tutorial(&mut self, tutorial: Tutorial) {
        self.tutorials.insert(tutorial.id.clone(), tutorial);
    }

    pub fn add_planet(&mut self, planet: Planet) {
        self.planets.insert(planet.id.clone(), planet);
    }

    pub fn add_system(&mut self, system: StarSystem) {
        self.systems.insert(system.id.clone(), system);
    }

    pub fn card(&self, id: &str) -> Option<&ReviewCard> {
        self.cards.get(id)
    }

    pub fn lecture(&self, id: &str) -> Option<&Lecture> {
        self.lectures.get(id)
    }

    pub fn challenge(&self, id: &str) -> Option<&Challenge> {
        self.challenges.get(id)
    }

    pub fn tutorial(&self, id: &str) -> Option<&Tutorial> {
        self.tutorials.get(id)
    }

    pub fn planet(&self, id: &str) -> Option<&Planet> {
        self.planets.get(id)
    }

    pub fn system(&self, id: &str) -> Option<&StarSystem> {
        self.systems.get(id)
    }

    /// The star system a planet belongs to.
    pub fn system_of(&self, planet: &str) -> Option<&StarSystem> {
        self.planet(planet).and_then(|p| self.system(&p.system))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_roundtrip() {
        let mut catalog = Catalog::new();
        catalog.add_system(StarSystem {
            id: "sys-1".into(),
            name: "Alpha".into(),
            planets: vec!["p-1".into()],
            nearby_systems: vec![],
        });
        catalog.add_planet(Planet {
            id: "p-1".into(),
            name: "Minerva".into(),
            system: "sys-1".into(),
        });

        assert_eq!(catalog.planet("p-1").unwrap().name, "Minerva");
        assert_eq!(catalog.system_of("p-1").unwrap().id, "sys-1");
        assert!(catalog.planet("p-404").is_none());
        assert!(catalog.system_of("p-404").is_none());
    }
}
