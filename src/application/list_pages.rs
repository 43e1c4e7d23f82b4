//! List saved pages use case

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PageEntry};
use chrono::NaiveDate;

/// List saved pages with optional date range and limit.
pub fn list_pages(
    repository: &FileSystemRepository,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Result<Vec<PageEntry>> {
    repository.list_pages(from, to, limit)
}
