//! Initialize album use case

use crate::domain::Milestones;
use crate::error::Result;
use crate::infrastructure::{AlbumRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new album at the specified path.
pub fn init(path: &Path, milestones: Milestones) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .storypage and pages directories
    repo.initialize()?;

    // Create default config with the chosen milestones
    let config = Config::new(milestones);
    repo.save_config(&config)?;

    println!("Initialized storypage album at {}", path.display());
    println!(
        "Milestones: conception {}, delivery {}",
        config.conception, config.delivery
    );

    Ok(())
}
