//! Regenerate caption use case

use crate::domain::prompt::caption_prompt;
use crate::domain::{journey_context, parse_date_from_filename, PageRequest};
use crate::error::Result;
use crate::infrastructure::{AlbumRepository, EncodedPhoto, FileSystemRepository, PageGenerator};
use std::path::{Path, PathBuf};

/// Inputs for regenerating one saved page's caption
#[derive(Debug, Clone)]
pub struct CaptionOptions {
    /// Saved page image, relative to the album root
    pub page: String,
    /// The original photo the page was generated from
    pub photo: PathBuf,
    pub note: Option<String>,
}

/// Service for regenerating captions of saved pages
pub struct RegenerateCaptionService<'a, G> {
    repository: FileSystemRepository,
    generator: &'a G,
}

impl<'a, G: PageGenerator> RegenerateCaptionService<'a, G> {
    /// Create a new caption service
    pub fn new(repository: FileSystemRepository, generator: &'a G) -> Self {
        RegenerateCaptionService {
            repository,
            generator,
        }
    }

    /// Produce a fresh caption for a saved page and overwrite its sidecar.
    /// Returns the new caption.
    pub fn execute(&self, options: &CaptionOptions) -> Result<String> {
        let config = self.repository.load_config()?;
        let milestones = config.milestones();

        // Saved pages lead with their date; an unrecognizable name still
        // regenerates, just with a generic context phrase.
        let leaf = Path::new(&options.page)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(options.page.as_str());
        let iso_date = parse_date_from_filename(leaf)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let date_context = journey_context(&iso_date, &milestones);

        let photo = EncodedPhoto::load(&options.photo)?;
        let request = PageRequest {
            photo_base64: photo.base64,
            mime_type: photo.mime_type,
            prompt: caption_prompt(&date_context, options.note.as_deref()),
        };

        let caption = self.generator.generate_caption(&request)?;
        self.repository.write_caption(&options.page, &caption)?;

        Ok(caption)
    }
}
