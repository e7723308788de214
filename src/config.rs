use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

/// Location of the CSV tables loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_candidates_path")]
    pub candidates_path: String,
    #[serde(default = "default_interviews_path")]
    pub interviews_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            candidates_path: default_candidates_path(),
            interviews_path: default_interviews_path(),
        }
    }
}

fn default_candidates_path() -> String { "data/candidates.csv".to_string() }
fn default_interviews_path() -> String { "data/interview_schedule.csv".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_experience")]
    pub min_experience: f64,
    #[serde(default = "default_experience_cap_years")]
    pub experience_cap_years: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_experience: default_min_experience(),
            experience_cap_years: default_experience_cap_years(),
        }
    }
}

fn default_min_experience() -> f64 { 3.0 }
fn default_experience_cap_years() -> f64 { 10.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_cultural_fit_weight")]
    pub cultural_fit: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            experience: default_experience_weight(),
            cultural_fit: default_cultural_fit_weight(),
        }
    }
}

fn default_skills_weight() -> f64 { 0.5 }
fn default_experience_weight() -> f64 { 0.2 }
fn default_cultural_fit_weight() -> f64 { 0.3 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TALENT_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TALENT__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Scoring weights combined with the experience cap from the matching section
    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            skills: self.scoring.weights.skills,
            experience: self.scoring.weights.experience,
            cultural_fit: self.scoring.weights.cultural_fit,
            experience_cap_years: self.matching.experience_cap_years,
        }
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("TALENT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
