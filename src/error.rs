//! Error types for storypage

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the storypage application
#[derive(Debug, Error)]
pub enum StorypageError {
    #[error("Not a storypage album: {0}")]
    NotAlbumDirectory(PathBuf),

    #[error("Unsupported photo file: {0}")]
    UnsupportedPhoto(PathBuf),

    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid session transition: {0}")]
    Session(String),

    #[error("Page generation failed: {0}")]
    Generation(String),

    #[error("All {attempted} page variants failed: {last_error}")]
    AllVariantsFailed { attempted: usize, last_error: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl StorypageError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StorypageError::NotAlbumDirectory(_) => 2,
            StorypageError::UnsupportedPhoto(_) => 3,
            StorypageError::MissingApiKey => 4,
            StorypageError::AllVariantsFailed { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            StorypageError::NotAlbumDirectory(path) => {
                format!(
                    "Not a storypage album: {}\n\n\
                    Suggestions:\n\
                    • Run 'storypage init' in this directory to create a new album\n\
                    • Navigate to an existing album directory\n\
                    • Set STORYPAGE_ROOT environment variable to your album path",
                    path.display()
                )
            }
            StorypageError::UnsupportedPhoto(path) => {
                format!(
                    "Unsupported photo file: {}\n\n\
                    Supported formats: jpg, jpeg, png, webp, gif, heic\n\
                    Example: storypage generate photos/IMG_2024-05-20.jpg",
                    path.display()
                )
            }
            StorypageError::MissingApiKey => "GEMINI_API_KEY is not set\n\n\
                Suggestions:\n\
                • Get an API key from https://aistudio.google.com/apikey\n\
                • Export it before running: export GEMINI_API_KEY=your-key"
                .to_string(),
            StorypageError::Generation(msg) if msg.to_lowercase().contains("quota") => {
                format!(
                    "{}\n\n\
                    Our magical storybook machine is resting! The daily limit \
                    was reached. Please try again tomorrow.",
                    msg
                )
            }
            StorypageError::AllVariantsFailed {
                attempted,
                last_error,
            } => {
                if last_error.to_lowercase().contains("quota") {
                    format!(
                        "All {} page variants failed: {}\n\n\
                        Our magical storybook machine is resting! The daily limit \
                        was reached. Please try again tomorrow.",
                        attempted, last_error
                    )
                } else {
                    format!(
                        "All {} page variants failed: {}\n\n\
                        Suggestions:\n\
                        • Check your network connection and GEMINI_API_KEY\n\
                        • Try again with fewer variants: storypage generate --variants 1\n\
                        • Run with a different photo to rule out a rejected image",
                        attempted, last_error
                    )
                }
            }
            StorypageError::Config(msg) => {
                if msg.contains("Invalid date") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: storypage config delivery 2025-01-01",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using StorypageError
pub type Result<T> = std::result::Result<T, StorypageError>;
