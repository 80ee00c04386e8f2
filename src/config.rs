//! Economy configuration
//!
//! All tunable numbers of the platform economy live here: energy costs per
//! action, planet knowledge totals and rewards, the daily review quota and
//! tutorial cohort capacity. Values can be loaded from a TOML file; missing
//! keys fall back to the platform defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tunables governing energy costs, rewards and quotas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Energy cost of travelling to a planet in the current star system
    #[serde(default = "default_action_energy")]
    pub planet_energy: u32,

    /// Energy cost of travelling to a nearby star system
    #[serde(default = "default_action_energy")]
    pub star_system_energy: u32,

    /// Energy cost of accepting a challenge
    #[serde(default = "default_action_energy")]
    pub challenge_energy: u32,

    /// Energy cost of enrolling in a tutorial
    #[serde(default = "default_action_energy")]
    pub tutorial_energy: u32,

    /// Energy cost of completing a lecture
    #[serde(default = "default_action_energy")]
    pub lecture_energy: u32,

    /// Coins granted when a planet becomes fully mined
    #[serde(default = "default_planet_reward")]
    pub planet_reward: u32,

    /// Total knowledge a planet holds
    #[serde(default = "default_planet_knowledge")]
    pub planet_knowledge: u32,

    /// Knowledge mined per completed challenge
    #[serde(default = "default_challenge_knowledge")]
    pub challenge_knowledge: u32,

    /// Number of cards presented in one daily review
    #[serde(default = "default_review_quota")]
    pub review_quota: usize,

    /// Learners per tutorial cohort
    #[serde(default = "default_cohort_capacity")]
    pub cohort_capacity: usize,
}

fn default_action_energy() -> u32 {
    100
}

fn default_planet_reward() -> u32 {
    100
}

fn default_planet_knowledge() -> u32 {
    100
}

fn default_challenge_knowledge() -> u32 {
    100
}

fn default_review_quota() -> usize {
    20
}

fn default_cohort_capacity() -> usize {
    3
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            planet_energy: default_action_energy(),
            star_system_energy: default_action_energy(),
            challenge_energy: default_action_energy(),
            tutorial_energy: default_action_energy(),
            lecture_energy: default_action_energy(),
            planet_reward: default_planet_reward(),
            planet_knowledge: default_planet_knowledge(),
            challenge_knowledge: default_challenge_knowledge(),
            review_quota: default_review_quota(),
            cohort_capacity: default_cohort_capacity(),
        }
    }
}

impl EconomyConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read economy config: {}", path.display()))?;

        let config: EconomyConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse economy config: {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EconomyConfig::default();
        assert_eq!(config.challenge_energy, 100);
        assert_eq!(config.planet_reward, 100);
        assert_eq!(config.review_quota, 20);
        assert_eq!(config.cohort_capacity, 3);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("economy.toml");
        std::fs::write(&path, "review_quota = 10\nchallenge_energy = 25\n").unwrap();

        let config = EconomyConfig::from_file(&path).unwrap();
        assert_eq!(config.review_quota, 10);
        assert_eq!(config.challenge_energy, 25);
        // Untouched keys keep their defaults
        assert_eq!(config.lecture_energy, 100);
        assert_eq!(config.planet_knowledge, 100);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("economy.toml");
        std::fs::write(&path, "review_quota = \"twenty\"\n").unwrap();

        assert!(EconomyConfig::from_file(&path).is_err());
    }
}
