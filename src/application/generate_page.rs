//! Generate storybook pages use case
//!
//! One run fans out N independent generation calls, one scoped thread per
//! variant, each with its own randomly drawn design theme. Successes are
//! collected in issue order and saved; the run as a whole fails only when
//! every variant failed.

use crate::application::manage_config::MAX_VARIANTS;
use crate::domain::prompt::{page_prompt, random_theme, PromptContext};
use crate::domain::{
    format_date_for_display, journey_context, parse_date_from_filename, parse_iso_date,
    GeneratedPage, PageRequest, Session,
};
use crate::error::{Result, StorypageError};
use crate::infrastructure::{AlbumRepository, EncodedPhoto, FileSystemRepository, PageGenerator};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::thread;

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub photo: PathBuf,
    /// Strict YYYY-MM-DD; parsed from the photo filename when absent
    pub date: Option<String>,
    pub note: Option<String>,
    pub heading: Option<String>,
    /// Overrides the configured fan-out width
    pub variants: Option<usize>,
}

/// One saved page variant
#[derive(Debug, Clone)]
pub struct SavedPage {
    pub filename: String,
    pub caption: String,
}

/// What a generation run produced
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub date: NaiveDate,
    pub context: String,
    pub attempted: usize,
    pub pages: Vec<SavedPage>,
    pub failures: Vec<String>,
}

/// Service for generating storybook pages
pub struct GeneratePageService<'a, G> {
    repository: FileSystemRepository,
    generator: &'a G,
}

impl<'a, G: PageGenerator + Sync> GeneratePageService<'a, G> {
    /// Create a new generate page service
    pub fn new(repository: FileSystemRepository, generator: &'a G) -> Self {
        GeneratePageService {
            repository,
            generator,
        }
    }

    pub fn execute(&self, options: &GenerateOptions) -> Result<GenerationOutcome> {
        // 1. Load config to get milestones and default fan-out width
        let config = self.repository.load_config()?;
        let milestones = config.milestones();

        // 2. Resolve the photo date and derive its views
        let photo_date = resolve_photo_date(options)?;
        let iso_date = photo_date.format("%Y-%m-%d").to_string();
        let date_context = journey_context(&iso_date, &milestones);
        let display_date = format_date_for_display(&iso_date);

        // 3. Load and encode the photo
        let photo = EncodedPhoto::load(&options.photo)?;

        let variants = options
            .variants
            .unwrap_or(config.variants)
            .clamp(1, MAX_VARIANTS);

        // 4. Run the fan-out under an explicit session lifecycle
        let mut session = Session::new();
        session.submit()?;

        let results = self.fan_out(&photo, &display_date, &date_context, options, variants);

        let mut pages = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(page) => pages.push(page),
                Err(e) => failures.push(e.to_string()),
            }
        }

        if pages.is_empty() {
            let last_error = failures
                .last()
                .cloned()
                .unwrap_or_else(|| "no variants produced".to_string());
            session.fail(last_error.clone())?;
            return Err(StorypageError::AllVariantsFailed {
                attempted: variants,
                last_error,
            });
        }

        // 5. Save every success, numbered after any earlier runs for this date
        let base_index = self.repository.next_page_index(photo_date)?;
        let mut saved = Vec::new();
        for (offset, page) in pages.iter().enumerate() {
            let filename = self
                .repository
                .save_page(photo_date, base_index + offset, page)?;
            saved.push(SavedPage {
                filename,
                caption: page.caption.clone(),
            });
        }

        session.complete(pages)?;

        Ok(GenerationOutcome {
            date: photo_date,
            context: date_context,
            attempted: variants,
            pages: saved,
            failures,
        })
    }

    /// Issue the variant requests concurrently and collect every result in
    /// issue order. A panicking worker counts as a failed variant.
    fn fan_out(
        &self,
        photo: &EncodedPhoto,
        display_date: &str,
        date_context: &str,
        options: &GenerateOptions,
        variants: usize,
    ) -> Vec<Result<GeneratedPage>> {
        let requests: Vec<PageRequest> = (0..variants)
            .map(|_| {
                let prompt = page_prompt(&PromptContext {
                    theme: random_theme(),
                    display_date,
                    date_context,
                    note: options.note.as_deref(),
                    heading: options.heading.as_deref(),
                });
                PageRequest {
                    photo_base64: photo.base64.clone(),
                    mime_type: photo.mime_type.clone(),
                    prompt,
                }
            })
            .collect();

        thread::scope(|scope| {
            let handles: Vec<_> = requests
                .iter()
                .map(|request| scope.spawn(move || self.generator.generate_page(request)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        Err(StorypageError::Generation(
                            "page variant worker panicked".to_string(),
                        ))
                    })
                })
                .collect()
        })
    }
}

fn resolve_photo_date(options: &GenerateOptions) -> Result<NaiveDate> {
    if let Some(value) = &options.date {
        return parse_iso_date(value)
            .ok_or_else(|| StorypageError::Config(format!("Invalid date value: '{}'", value)));
    }

    let file_name = options
        .photo
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    parse_date_from_filename(file_name).ok_or_else(|| {
        StorypageError::Config(
            "No photo date found: pass --date YYYY-MM-DD or use a filename containing a date"
                .to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::{Milestones, PageImage};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Fails the first `failures` calls that arrive, succeeds afterwards
    struct ScriptedGenerator {
        failures: usize,
        counter: AtomicUsize,
    }

    impl ScriptedGenerator {
        fn succeeding() -> Self {
            Self::failing_first(0)
        }

        fn failing_first(failures: usize) -> Self {
            ScriptedGenerator {
                failures,
                counter: AtomicUsize::new(0),
            }
        }
    }

    impl PageGenerator for ScriptedGenerator {
        fn generate_page(&self, _request: &PageRequest) -> Result<GeneratedPage> {
            let call = self.counter.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(StorypageError::Generation("stub failure".to_string()));
            }
            Ok(GeneratedPage {
                image: PageImage {
                    mime_type: "image/png".to_string(),
                    bytes: vec![0x42],
                },
                caption: "A stub caption.".to_string(),
            })
        }

        fn generate_caption(&self, _request: &PageRequest) -> Result<String> {
            Ok("A stub caption.".to_string())
        }
    }

    struct PanickingGenerator;

    impl PageGenerator for PanickingGenerator {
        fn generate_page(&self, _request: &PageRequest) -> Result<GeneratedPage> {
            panic!("worker exploded");
        }

        fn generate_caption(&self, _request: &PageRequest) -> Result<String> {
            panic!("worker exploded");
        }
    }

    fn album_with_photo() -> (TempDir, FileSystemRepository, PathBuf) {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Milestones::default()).unwrap();

        let photo = temp.path().join("IMG_2025-08-30.jpg");
        fs::write(&photo, b"jpeg bytes").unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, repo, photo)
    }

    fn options(photo: PathBuf, variants: usize) -> GenerateOptions {
        GenerateOptions {
            photo,
            date: None,
            note: Some("Our first day out".to_string()),
            heading: None,
            variants: Some(variants),
        }
    }

    #[test]
    fn test_generate_saves_all_variants() {
        let (temp, repo, photo) = album_with_photo();
        let generator = ScriptedGenerator::succeeding();
        let service = GeneratePageService::new(repo, &generator);

        let outcome = service.execute(&options(photo, 3)).unwrap();

        assert_eq!(outcome.attempted, 3);
        assert!(outcome.failures.is_empty());
        assert_eq!(
            outcome
                .pages
                .iter()
                .map(|p| p.filename.as_str())
                .collect::<Vec<_>>(),
            vec![
                "pages/2025-08-30-page-1.png",
                "pages/2025-08-30-page-2.png",
                "pages/2025-08-30-page-3.png",
            ]
        );

        for page in &outcome.pages {
            assert!(temp.path().join(&page.filename).is_file());
            assert_eq!(page.caption, "A stub caption.");
        }
        // Journey context was derived from the filename date
        assert_eq!(outcome.context, "when our little one was 7 months old");
    }

    #[test]
    fn test_generate_keeps_partial_successes() {
        let (_temp, repo, photo) = album_with_photo();
        let generator = ScriptedGenerator::failing_first(2);
        let service = GeneratePageService::new(repo, &generator);

        let outcome = service.execute(&options(photo, 5)).unwrap();

        assert_eq!(outcome.attempted, 5);
        assert_eq!(outcome.pages.len(), 3);
        assert_eq!(outcome.failures.len(), 2);
    }

    #[test]
    fn test_generate_fails_only_when_every_variant_fails() {
        let (temp, repo, photo) = album_with_photo();
        let generator = ScriptedGenerator::failing_first(usize::MAX);
        let service = GeneratePageService::new(repo, &generator);

        let err = service.execute(&options(photo, 3)).unwrap_err();
        assert!(matches!(
            err,
            StorypageError::AllVariantsFailed { attempted: 3, .. }
        ));

        // Nothing was saved
        let entries: Vec<_> = fs::read_dir(temp.path().join("pages")).unwrap().collect();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_generate_treats_panicking_worker_as_failure() {
        let (_temp, repo, photo) = album_with_photo();
        let generator = PanickingGenerator;
        let service = GeneratePageService::new(repo, &generator);

        let err = service.execute(&options(photo, 2)).unwrap_err();
        assert!(matches!(
            err,
            StorypageError::AllVariantsFailed { attempted: 2, .. }
        ));
    }

    #[test]
    fn test_generate_numbering_continues_across_runs() {
        let (_temp, repo, photo) = album_with_photo();
        let generator = ScriptedGenerator::succeeding();
        let service = GeneratePageService::new(repo.clone(), &generator);

        service.execute(&options(photo.clone(), 2)).unwrap();
        let outcome = service.execute(&options(photo, 1)).unwrap();

        assert_eq!(outcome.pages[0].filename, "pages/2025-08-30-page-3.png");
    }

    #[test]
    fn test_generate_explicit_date_beats_filename() {
        let (_temp, repo, photo) = album_with_photo();
        let generator = ScriptedGenerator::succeeding();
        let service = GeneratePageService::new(repo, &generator);

        let mut opts = options(photo, 1);
        opts.date = Some("2024-07-15".to_string());
        let outcome = service.execute(&opts).unwrap();

        assert_eq!(outcome.pages[0].filename, "pages/2024-07-15-page-1.png");
        assert!(outcome.context.contains("of your pregnancy"));
    }

    #[test]
    fn test_generate_rejects_invalid_date() {
        let (_temp, repo, photo) = album_with_photo();
        let generator = ScriptedGenerator::succeeding();
        let service = GeneratePageService::new(repo, &generator);

        let mut opts = options(photo, 1);
        opts.date = Some("15/07/2024".to_string());
        let err = service.execute(&opts).unwrap_err();
        assert!(err.to_string().contains("Invalid date value"));
    }

    #[test]
    fn test_generate_requires_some_date() {
        let (temp, repo, _photo) = album_with_photo();
        let undated = temp.path().join("vacation.jpg");
        fs::write(&undated, b"jpeg bytes").unwrap();

        let generator = ScriptedGenerator::succeeding();
        let service = GeneratePageService::new(repo, &generator);

        let err = service.execute(&options(undated, 1)).unwrap_err();
        assert!(err.to_string().contains("No photo date found"));
    }

    #[test]
    fn test_generate_rejects_unsupported_photo() {
        let (temp, repo, _photo) = album_with_photo();
        let document = temp.path().join("2025-08-30-scan.pdf");
        fs::write(&document, b"%PDF").unwrap();

        let generator = ScriptedGenerator::succeeding();
        let service = GeneratePageService::new(repo, &generator);

        let err = service.execute(&options(document, 1)).unwrap_err();
        assert!(matches!(err, StorypageError::UnsupportedPhoto(_)));
    }

    #[test]
    fn test_generate_clamps_variant_count() {
        let (_temp, repo, photo) = album_with_photo();
        let generator = ScriptedGenerator::succeeding();
        let service = GeneratePageService::new(repo, &generator);

        let outcome = service.execute(&options(photo, 50)).unwrap();
        assert_eq!(outcome.attempted, MAX_VARIANTS);
    }
}
