pub mod app_config;
pub mod config;
pub mod hospitals;
pub mod search;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use hospitals::{Candidate, HospitalRecord, UserQuery};
pub use search::{
    DatasetSummary, MapPoint, RankingMode, SearchOutcome, SearchParams, SearchReport,
    TypeCount, UrgencyResult, UrgencyTier,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid urgency tier: {0}; must be 1, 2, or 3")]
    InvalidTier(u8),
}
