//! Configuration management

use crate::domain::Milestones;
use crate::error::{Result, StorypageError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default fan-out width for one generation run
pub const DEFAULT_VARIANTS: usize = 5;

fn default_variants() -> usize {
    DEFAULT_VARIANTS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub conception: NaiveDate,
    pub delivery: NaiveDate,
    #[serde(default = "default_variants")]
    pub variants: usize,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(milestones: Milestones) -> Self {
        Config {
            conception: milestones.conception,
            delivery: milestones.delivery,
            variants: DEFAULT_VARIANTS,
            created: Utc::now(),
        }
    }

    /// The album's milestone dates
    pub fn milestones(&self) -> Milestones {
        Milestones::new(self.conception, self.delivery)
    }

    /// Load config from .storypage/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".storypage").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorypageError::NotAlbumDirectory(path.to_path_buf())
            } else {
                StorypageError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| StorypageError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .storypage/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let storypage_dir = path.join(".storypage");
        let config_path = storypage_dir.join("config.toml");

        // Ensure .storypage directory exists
        if !storypage_dir.exists() {
            fs::create_dir(&storypage_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| StorypageError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
