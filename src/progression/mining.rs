//! Travel through the game world
//!
//! Moving the learner between planets and star systems. Travel consumes
//! energy, is restricted to nearby destinations, and either starts a fresh
//! mining record on a first visit or resumes the existing one; progress
//! on a partially mined planet is never reset.

use crate::catalog::Catalog;
use crate::config::EconomyConfig;
use crate::domain::{LearnerDelta, LearnerSnapshot, PlanetProgress};
use crate::energy::{deplete_for, ActionKind};
use crate::error::ActionError;

/// Travel to a planet inside the learner's current star system.
pub fn travel_to_planet(
    learner: &LearnerSnapshot,
    catalog: &Catalog,
    planet: &str,
    config: &EconomyConfig,
) -> Result<LearnerDelta, ActionError> {
    if planet.is_empty() {
        return Err(ActionError::MissingId("planet"));
    }
    if catalog.planet(planet).is_none() {
        return Err(ActionError::UnknownPlanet(planet.to_string()));
    }

    let energy = deplete_for(learner.energy, ActionKind::TravelToPlanet, config)?;

    let current = learner.current_planet.as_deref().ok_or_else(|| {
        ActionError::Consistency("learner has no current planet".to_string())
    })?;
    let system = catalog.system_of(current).ok_or_else(|| {
        ActionError::Consistency(format!("current planet {current} has no star system"))
    })?;

    if !system.planets.iter().any(|p| p == planet) {
        return Err(ActionError::PlanetNotNearby);
    }

    Ok(arrival_delta(learner, planet, energy))
}

/// Travel to a planet in a nearby star system.
pub fn travel_to_system(
    learner: &LearnerSnapshot,
    catalog: &Catalog,
    system: &str,
    planet: &str,
    config: &EconomyConfig,
) -> Result<LearnerDelta, ActionError> {
    if system.is_empty() {
        return Err(ActionError::MissingId("system"));
    }
    if planet.is_empty() {
        return Err(ActionError::MissingId("planet"));
    }

    let destination = catalog
        .system(system)
        .ok_or_else(|| ActionError::UnknownSystem(system.to_string()))?;
    if catalog.planet(planet).is_none() {
        return Err(ActionError::UnknownPlanet(planet.to_string()));
    }

    let energy = deplete_for(learner.energy, ActionKind::TravelToSystem, config)?;

    let current = learner.current_planet.as_deref().ok_or_else(|| {
        ActionError::Consistency("learner has no current planet".to_string())
    })?;
    let current_system = catalog.system_of(current).ok_or_else(|| {
        ActionError::Consistency(format!("current planet {current} has no star system"))
    })?;

    if !current_system.nearby_systems.iter().any(|s| s == system) {
        return Err(ActionError::SystemNotNearby);
    }
    if !destination.planets.iter().any(|p| p == planet) {
        return Err(ActionError::PlanetNotNearby);
    }

    Ok(arrival_delta(learner, planet, energy))
}

/// Point the learner at the destination and start or resume its mining
/// record.
fn arrival_delta(learner: &LearnerSnapshot, planet: &str, energy: u32) -> LearnerDelta {
    let progress = match learner.progress_for(planet) {
        // Revisit: the existing record stands, nothing to write
        Some(_) => None,
        None => Some(PlanetProgress::begin(planet.to_string())),
    };

    LearnerDelta {
        energy: Some(energy),
        current_planet: Some(planet.to_string()),
        planet_progress: progress,
        ..Default::default()
    }
}
