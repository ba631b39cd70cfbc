mod parser;
use serde::{Deserialize, Serialize};

pub use parser::load_config;

use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_HARVEST_CREW_SIZE, DEFAULT_LEVEL_RANK};

/// Scheduling policy and storage settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScheduleConfig {
    /// Path to the SQLite database file; falls back to DATABASE_PATH, then the built-in default
    #[serde(default)]
    pub database_path: Option<String>,
    /// Distinct workers drawn for each harvest-shift task
    #[serde(default = "default_harvest_crew_size")]
    pub harvest_crew_size: usize,
    /// Rank given to a task whose room has no prior occurrence
    #[serde(default = "default_level_rank")]
    pub default_level: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            harvest_crew_size: default_harvest_crew_size(),
            default_level: default_level_rank(),
        }
    }
}

impl ScheduleConfig {
    /// Resolves the database path from the config file, the environment, or the default
    pub fn resolve_database_path(&self) -> String {
        self.database_path
            .clone()
            .or_else(|| std::env::var("DATABASE_PATH").ok())
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
    }
}

fn default_harvest_crew_size() -> usize {
    DEFAULT_HARVEST_CREW_SIZE
}

fn default_level_rank() -> String {
    DEFAULT_LEVEL_RANK.to_string()
}
