//! Training configuration.

use crate::ConfigError;
use crate::agent::{DEFAULT_EXPLORATION, LearningAgent};
use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One learning agent in the roster.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, new)]
pub struct AgentSpec {
    /// Display name.
    name: String,
    /// Learning rate, in `(0, 1]`.
    alpha: f64,
}

/// Settings for a training run.
///
/// ```toml
/// self_play_games = 20000
/// exploration = 0.05
/// seed = 7
///
/// [[agents]]
/// name = "agent-1"
/// alpha = 0.4
///
/// [[agents]]
/// name = "agent-2"
/// alpha = 0.5
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TrainingConfig {
    /// Agents trained against each other; the first one faces the human.
    #[serde(default = "default_agents")]
    agents: Vec<AgentSpec>,

    /// Number of self-play matches before evaluation or human play.
    #[serde(default = "default_self_play_games")]
    self_play_games: usize,

    /// Number of evaluation matches in `train` mode.
    #[serde(default = "default_evaluation_games")]
    evaluation_games: usize,

    /// ε for the agents' exploration draw.
    #[serde(default = "default_exploration")]
    exploration: f64,

    /// Master seed; omitted means seeded from the OS.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_agents() -> Vec<AgentSpec> {
    vec![
        AgentSpec::new("agent-1".to_string(), 0.4),
        AgentSpec::new("agent-2".to_string(), 0.5),
    ]
}

fn default_self_play_games() -> usize {
    20_000
}

fn default_evaluation_games() -> usize {
    1_000
}

fn default_exploration() -> f64 {
    DEFAULT_EXPLORATION
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            agents: default_agents(),
            self_play_games: default_self_play_games(),
            evaluation_games: default_evaluation_games(),
            exploration: default_exploration(),
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(agents = config.agents.len(), games = config.self_play_games, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges and the roster size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agents.len() < 2 {
            return Err(ConfigError::new(format!(
                "Self-play needs at least two agents, got {}",
                self.agents.len()
            )));
        }
        if let Some(spec) = self
            .agents
            .iter()
            .find(|spec| !(spec.alpha > 0.0 && spec.alpha <= 1.0))
        {
            return Err(ConfigError::new(format!(
                "Agent {} has alpha {} outside (0, 1]",
                spec.name, spec.alpha
            )));
        }
        if !(0.0..=1.0).contains(&self.exploration) {
            return Err(ConfigError::new(format!(
                "Exploration {} outside [0, 1]",
                self.exploration
            )));
        }
        Ok(())
    }

    /// Builds the roster of untrained agents.
    ///
    /// With a seed, agent `i` gets seed `seed + i + 1` so runs repeat
    /// exactly; without one every agent is seeded from the OS.
    pub fn build_agents(&self) -> Vec<LearningAgent<StdRng>> {
        self.agents
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let agent = match self.seed {
                    Some(seed) => LearningAgent::seeded(
                        spec.name.clone(),
                        spec.alpha,
                        seed.wrapping_add(i as u64 + 1),
                    ),
                    None => LearningAgent::from_entropy(spec.name.clone(), spec.alpha),
                };
                agent.with_exploration(self.exploration)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Participant;

    #[test]
    fn test_defaults_match_reference_setup() {
        let config = TrainingConfig::default();
        assert_eq!(config.agents().len(), 2);
        assert_eq!(*config.agents()[0].alpha(), 0.4);
        assert_eq!(*config.agents()[1].alpha(), 0.5);
        assert_eq!(*config.self_play_games(), 20_000);
        assert_eq!(*config.exploration(), 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TrainingConfig::from_toml("").expect("defaults are valid");
        assert_eq!(config, TrainingConfig::default());
    }

    #[test]
    fn test_rejects_single_agent() {
        let err = TrainingConfig::from_toml("[[agents]]\nname = \"solo\"\nalpha = 0.5\n")
            .unwrap_err();
        assert!(err.message.contains("at least two agents"));
    }

    #[test]
    fn test_rejects_alpha_out_of_range() {
        let config = TrainingConfig::default().with_agents(vec![
            AgentSpec::new("a".into(), 0.0),
            AgentSpec::new("b".into(), 0.5),
        ]);
        assert!(config.validate().unwrap_err().message.contains("alpha"));
    }

    #[test]
    fn test_setters_override() {
        let config = TrainingConfig::default()
            .with_self_play_games(10)
            .with_seed(3);
        assert_eq!(*config.self_play_games(), 10);
        assert_eq!(*config.seed(), Some(3));
    }

    #[test]
    fn test_build_agents_applies_settings() {
        let config = TrainingConfig::default().with_exploration(0.2).with_seed(1);
        let agents = config.build_agents();
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].name(), "agent-1");
        assert_eq!(agents[1].alpha(), 0.5);
        assert!(agents.iter().all(|a| a.exploration() == 0.2));
    }
}
