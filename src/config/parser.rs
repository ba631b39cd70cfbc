use super::ScheduleConfig;
use std::error::Error;
use std::fs;

use tracing::info;

/// Loads and parses a scheduler configuration from a YAML file
///
/// # Arguments
///
/// * `file_path` - Path to the YAML configuration file
///
/// # Returns
///
/// * `Result<ScheduleConfig, Box<dyn Error>>` - The parsed ScheduleConfig on success, or an error if loading/parsing fails
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into a ScheduleConfig
pub fn load_config(file_path: &str) -> Result<ScheduleConfig, Box<dyn Error>> {
    let yaml_str = fs::read_to_string(file_path)?;
    let config: ScheduleConfig = serde_yaml::from_str(&yaml_str)?;
    info!("Loaded scheduler configuration from {}", file_path);
    Ok(config)
}
