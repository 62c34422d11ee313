use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::models::{RankingConfig, ReasonThresholds, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_mentors_table")]
    pub mentors_table: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mentors_table() -> String { "mentor_profiles".to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_ttl() -> u64 { 60 }
fn default_cache_capacity() -> u64 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub default_min_score: u8,
    #[serde(default = "default_max_results")]
    pub default_max_results: usize,
    #[serde(default = "default_max_results_cap")]
    pub max_results_cap: usize,
    /// Upper bound on mentors fetched per request; unset fetches the whole pool
    #[serde(default)]
    pub candidate_pool_limit: Option<usize>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_min_score: 0,
            default_max_results: default_max_results(),
            max_results_cap: default_max_results_cap(),
            candidate_pool_limit: None,
        }
    }
}

impl MatchingSettings {
    pub fn ranking_defaults(&self) -> RankingConfig {
        RankingConfig {
            min_score: self.default_min_score.min(100),
            max_results: self.default_max_results,
        }
    }
}

fn default_max_results() -> usize { 10 }
fn default_max_results_cap() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_disclosure_threshold")]
    pub disclosure_threshold: u8,
    #[serde(default = "default_high_rating")]
    pub high_rating: f64,
    #[serde(default = "default_min_reviews_for_rating")]
    pub min_reviews_for_rating: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            disclosure_threshold: default_disclosure_threshold(),
            high_rating: default_high_rating(),
            min_reviews_for_rating: default_min_reviews_for_rating(),
        }
    }
}

impl ScoringSettings {
    pub fn reason_thresholds(&self) -> ReasonThresholds {
        ReasonThresholds {
            disclosure: self.disclosure_threshold,
            high_rating: self.high_rating,
            min_reviews_for_rating: self.min_reviews_for_rating,
        }
    }
}

fn default_disclosure_threshold() -> u8 { 70 }
fn default_high_rating() -> f64 { 4.5 }
fn default_min_reviews_for_rating() -> u32 { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_expertise_weight")]
    pub expertise: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            expertise: default_expertise_weight(),
            availability: default_availability_weight(),
            experience: default_experience_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        ScoringWeights {
            expertise: config.expertise,
            availability: config.availability,
            experience: config.experience,
        }
    }
}

fn default_expertise_weight() -> f64 { 0.5 }
fn default_availability_weight() -> f64 { 0.3 }
fn default_experience_weight() -> f64 { 0.2 }

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
    /// 4. Environment variables (prefixed with MENTOR_MATCH)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR_MATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MENTOR_MATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_backend_overrides(settings)?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the matcher cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        ScoringWeights::from(&self.scoring.weights)
            .validate()
            .map_err(|e| ConfigError::Message(format!("scoring.weights: {}", e)))?;

        if !(1..=100).contains(&self.scoring.disclosure_threshold) {
            return Err(ConfigError::Message(
                "scoring.disclosure_threshold must be between 1 and 100".to_string(),
            ));
        }

        if self.matching.max_results_cap == 0 {
            return Err(ConfigError::Message(
                "matching.max_results_cap must be at least 1".to_string(),
            ));
        }

        if self.matching.candidate_pool_limit == Some(0) {
            return Err(ConfigError::Message(
                "matching.candidate_pool_limit must be at least 1 when set".to_string(),
            ));
        }

        Ok(())
    }
}

/// Let the conventional BACKEND_URL / BACKEND_API_KEY variables win over
/// file values
fn apply_backend_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("BACKEND_URL") {
        builder = builder.set_override("backend.url", url)?;
    }
    if let Ok(api_key) = env::var("BACKEND_API_KEY") {
        builder = builder.set_override("backend.api_key", api_key)?;
    }

    builder.build()
}
