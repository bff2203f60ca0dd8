use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Hospital dataset (CSV) read once per process and on explicit reload.
    pub dataset_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Strict upper bound on candidate distance, in kilometres.
    pub max_distance_km: f64,
    pub top_n: usize,
}
