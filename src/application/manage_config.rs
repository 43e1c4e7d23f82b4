//! Config management use case

use crate::domain::parse_iso_date;
use crate::error::{Result, StorypageError};
use crate::infrastructure::{AlbumRepository, Config, FileSystemRepository};

/// Widest fan-out a single run may request
pub const MAX_VARIANTS: usize = 10;

/// Service for managing album configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "conception" => Ok(config.conception.to_string()),
            "delivery" => Ok(config.delivery.to_string()),
            "variants" => Ok(config.variants.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(StorypageError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: conception, delivery, variants, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "conception" => {
                config.conception = parse_config_date(value)?;
            }
            "delivery" => {
                config.delivery = parse_config_date(value)?;
            }
            "variants" => {
                let variants: usize = value.parse().map_err(|_| {
                    StorypageError::Config(format!("Invalid variant count: '{}'", value))
                })?;
                if !(1..=MAX_VARIANTS).contains(&variants) {
                    return Err(StorypageError::Config(format!(
                        "Variant count must be between 1 and {}",
                        MAX_VARIANTS
                    )));
                }
                config.variants = variants;
            }
            "created" => {
                return Err(StorypageError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(StorypageError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: conception, delivery, variants",
                    key
                )));
            }
        }

        if config.conception > config.delivery {
            return Err(StorypageError::Config(
                "Conception milestone must not be after delivery".to_string(),
            ));
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_config_date(value: &str) -> Result<chrono::NaiveDate> {
    parse_iso_date(value)
        .ok_or_else(|| StorypageError::Config(format!("Invalid date value: '{}'", value)))
}
