//! Shared fixtures for the integration suites
//!
//! A small galaxy and curriculum: two lectures gate one mining challenge,
//! which together with a free-standing survey challenge gates one
//! tutorial. Two star systems, three planets.

use starmind::catalog::{Catalog, Challenge, Lecture, Planet, ReviewCard, StarSystem, Tutorial};
use starmind::config::EconomyConfig;
use starmind::domain::{LearnerSnapshot, PlanetProgress};
use starmind::service::LearnerService;
use starmind::store::MemoryStore;

pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();

    for (id, top, bottom) in [
        ("card-thrust", "Thrust", "Force propelling a craft"),
        ("card-gravity", "Gravity well", "Region dominated by a body's pull"),
        ("card-fuel", "Delta-v", "Change in velocity a craft can achieve"),
    ] {
        catalog.add_card(ReviewCard {
            id: id.into(),
            top_text: top.into(),
            bottom_text: bottom.into(),
        });
    }

    catalog.add_lecture(Lecture {
        id: "lec-orbits".into(),
        title: "Orbital mechanics".into(),
        cards: vec!["card-thrust".into(), "card-gravity".into()],
        unlocks_challenges: vec!["ch-mining".into()],
        pre_reqs: vec![],
        post_reqs: vec!["lec-fuel".into()],
    });
    catalog.add_lecture(Lecture {
        id: "lec-fuel".into(),
        title: "Fuel budgeting".into(),
        cards: vec!["card-fuel".into()],
        unlocks_challenges: vec!["ch-mining".into()],
        pre_reqs: vec!["lec-orbits".into()],
        post_reqs: vec![],
    });

    catalog.add_challenge(Challenge {
        id: "ch-mining".into(),
        title: "First dig".into(),
        description: "Extract knowledge from the surface".into(),
        required_lectures: vec!["lec-orbits".into(), "lec-fuel".into()],
        unlocks_tutorials: vec!["tut-drill".into()],
    });
    catalog.add_challenge(Challenge {
        id: "ch-survey".into(),
        title: "Survey run".into(),
        description: "Chart the landing zone".into(),
        required_lectures: vec![],
        unlocks_tutorials: vec!["tut-drill".into()],
    });

    catalog.add_tutorial(Tutorial {
        id: "tut-drill".into(),
        title: "Deep drilling".into(),
        description: "Group expedition below the crust".into(),
        required_challenges: vec!["ch-mining".into(), "ch-survey".into()],
    });

    catalog.add_system(StarSystem {
        id: "sys-sol".into(),
        name: "Sol".into(),
        planets: vec!["terra".into(), "ares".into()],
        nearby_systems: vec!["sys-proxima".into()],
    });
    catalog.add_system(StarSystem {
        id: "sys-proxima".into(),
        name: "Proxima".into(),
        planets: vec!["centauri-b".into()],
        nearby_systems: vec!["sys-sol".into()],
    });
    for (id, name, system) in [
        ("terra", "Terra", "sys-sol"),
        ("ares", "Ares", "sys-sol"),
        ("centauri-b", "Centauri b", "sys-proxima"),
    ] {
        catalog.add_planet(Planet {
            id: id.into(),
            name: name.into(),
            system: system.into(),
        });
    }

    catalog
}

/// A learner orbiting Terra with plenty of energy and no history.
pub fn learner(id: &str) -> LearnerSnapshot {
    LearnerSnapshot {
        id: id.into(),
        version: 0,
        energy: 1000,
        coins: 0,
        timezone: "Europe/Madrid".into(),
        last_completed_review: None,
        cards: vec![],
        challenges: vec![],
        completed_lectures: vec![],
        unlocked_tutorials: vec![],
        current_planet: Some("terra".into()),
        planet_progress: vec![PlanetProgress::begin("terra".into())],
    }
}

pub fn service_with(learners: &[LearnerSnapshot]) -> LearnerService<MemoryStore> {
    let store = MemoryStore::new();
    for snapshot in learners {
        store.insert(snapshot.clone());
    }
    LearnerService::new(store, catalog(), EconomyConfig::default())
}
