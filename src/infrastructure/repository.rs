//! File system album repository

use crate::domain::{parse_iso_date, GeneratedPage};
use crate::error::{Result, StorypageError};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory under the album root where generated pages are stored
pub const PAGES_DIR: &str = "pages";

/// Image extensions recognized as saved pages
const PAGE_EXTENSIONS: &[&str] = &["png", "jpg", "webp", "gif"];

/// A saved page image with its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub filename: String,
    pub date: NaiveDate,
}

impl PageEntry {
    pub fn new(filename: String, date: NaiveDate) -> Self {
        PageEntry { filename, date }
    }
}

/// Abstract repository for album operations
pub trait AlbumRepository {
    /// Get the root directory of this album
    fn root(&self) -> &Path;

    /// Load configuration from .storypage/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .storypage/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .storypage directory exists
    fn is_initialized(&self) -> bool;

    /// Create .storypage directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of AlbumRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover album root by walking up from current directory
    /// First checks STORYPAGE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check STORYPAGE_ROOT environment variable first
        if let Ok(root_path) = std::env::var("STORYPAGE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_storypage_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(StorypageError::Config(format!(
                    "STORYPAGE_ROOT is set to '{}' but no .storypage directory found. \
                    Run 'storypage init' in that directory or unset STORYPAGE_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover album root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_storypage_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .storypage
                    return Err(StorypageError::NotAlbumDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .storypage directory
    fn has_storypage_dir(path: &Path) -> bool {
        path.join(".storypage").is_dir()
    }
}

impl AlbumRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_storypage_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let storypage_dir = self.root.join(".storypage");

        if storypage_dir.exists() {
            return Err(StorypageError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&storypage_dir)?;
        fs::create_dir_all(self.root.join(PAGES_DIR))?;
        Ok(())
    }
}

// Page file operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// The next free variant index for a date, across previous runs
    pub fn next_page_index(&self, date: NaiveDate) -> Result<usize> {
        let prefix = format!("{}-page-", date.format("%Y-%m-%d"));
        let pages_dir = self.root.join(PAGES_DIR);

        let mut max_index = 0;
        if pages_dir.is_dir() {
            for entry in fs::read_dir(&pages_dir)? {
                let Ok(entry) = entry else {
                    continue;
                };
                let name = entry.file_name();
                let Some(name) = name.to_str() else {
                    continue;
                };
                let Some(rest) = name.strip_prefix(&prefix) else {
                    continue;
                };
                let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                if let Ok(index) = digits.parse::<usize>() {
                    max_index = max_index.max(index);
                }
            }
        }

        Ok(max_index + 1)
    }

    /// Save one generated page (image plus caption sidecar).
    /// Returns the image filename relative to the album root.
    pub fn save_page(
        &self,
        date: NaiveDate,
        index: usize,
        page: &GeneratedPage,
    ) -> Result<String> {
        let pages_dir = self.root.join(PAGES_DIR);
        if !pages_dir.exists() {
            fs::create_dir_all(&pages_dir)?;
        }

        let stem = format!("{}-page-{}", date.format("%Y-%m-%d"), index);
        let image_name = format!("{}.{}", stem, page.image.extension());

        fs::write(pages_dir.join(&image_name), &page.image.bytes)?;
        fs::write(pages_dir.join(format!("{}.txt", stem)), &page.caption)?;

        Ok(format!("{}/{}", PAGES_DIR, image_name))
    }

    /// Overwrite the caption sidecar of a saved page image
    pub fn write_caption(&self, image_filename: &str, caption: &str) -> Result<()> {
        let image_path = self.root.join(image_filename);
        if !image_path.is_file() {
            return Err(StorypageError::Config(format!(
                "No such page image: {}",
                image_path.display()
            )));
        }

        let caption_path = image_path.with_extension("txt");
        fs::write(caption_path, caption)?;
        Ok(())
    }

    /// Read the caption sidecar of a saved page image (empty if absent)
    pub fn read_caption(&self, image_filename: &str) -> Result<String> {
        let caption_path = self.root.join(image_filename).with_extension("txt");

        if !caption_path.exists() {
            return Ok(String::new());
        }

        fs::read_to_string(caption_path).map_err(StorypageError::Io)
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn page_entry_from_relative_path(rel: &Path) -> Option<PageEntry> {
        let filename = Self::normalize_relative_path(rel)?;
        let leaf = rel.file_name()?.to_str()?;

        let extension = leaf.rsplit('.').next()?;
        if !PAGE_EXTENSIONS.contains(&extension) {
            return None;
        }

        // Page filenames lead with their strict YYYY-MM-DD date
        let date = parse_iso_date(leaf.get(..10)?)?;
        Some(PageEntry::new(filename, date))
    }

    /// List saved pages, newest first, applying optional date range and limit
    pub fn list_pages(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<PageEntry>> {
        let pages_dir = self.root.join(PAGES_DIR);
        let mut pages = Vec::new();

        if pages_dir.is_dir() {
            let walker = WalkDir::new(&pages_dir).into_iter().filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                if !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

            for entry in walker {
                let Ok(entry) = entry else {
                    continue;
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                    continue;
                };
                if let Some(page) = Self::page_entry_from_relative_path(rel) {
                    pages.push(page);
                }
            }
        }

        // Apply date range filters
        if let Some(from_date) = from {
            pages.retain(|e| e.date >= from_date);
        }
        if let Some(to_date) = to {
            pages.retain(|e| e.date <= to_date);
        }

        // Sort by date descending (newest first); variants of a day stay in
        // filename order
        pages.sort_by(|a, b| b.date.cmp(&a.date).then(a.filename.cmp(&b.filename)));

        if let Some(n) = limit {
            pages.truncate(n);
        }

        Ok(pages)
    }
}
