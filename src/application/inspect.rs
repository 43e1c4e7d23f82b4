//! Inspect use case - offline view of the core date derivations

use crate::domain::{
    format_date_for_display, journey_context, parse_date_from_filename, parse_iso_date, Milestones,
};
use std::path::Path;

/// Where the inspected date came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// The input itself was a strict YYYY-MM-DD date
    Argument,
    /// The date was extracted from the filename
    Filename,
    /// No date could be derived
    Unknown,
}

/// The derived views of one photo or date input
#[derive(Debug, Clone)]
pub struct Inspection {
    pub source: DateSource,
    /// Strict `YYYY-MM-DD` form, empty when no date was derived
    pub iso_date: String,
    /// Display form, empty when no date was derived
    pub display_date: String,
    /// Journey context phrase; always present
    pub context: String,
}

/// Service producing [`Inspection`]s against a set of milestones
pub struct InspectService {
    milestones: Milestones,
}

impl InspectService {
    pub fn new(milestones: Milestones) -> Self {
        InspectService { milestones }
    }

    /// Derive the date, display form, and context phrase for a date string
    /// or a photo path. Never fails: inputs without a usable date produce a
    /// generic context phrase and empty date fields.
    pub fn execute(&self, input: &str) -> Inspection {
        let (source, date) = match parse_iso_date(input) {
            Some(date) => (DateSource::Argument, Some(date)),
            None => {
                let file_name = Path::new(input)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(input);
                match parse_date_from_filename(file_name) {
                    Some(date) => (DateSource::Filename, Some(date)),
                    None => (DateSource::Unknown, None),
                }
            }
        };

        let iso_date = date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        Inspection {
            source,
            display_date: format_date_for_display(&iso_date),
            context: journey_context(&iso_date, &self.milestones),
            iso_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspect(input: &str) -> Inspection {
        InspectService::new(Milestones::default()).execute(input)
    }

    #[test]
    fn test_inspect_date_argument() {
        let inspection = inspect("2024-09-18");
        assert_eq!(inspection.source, DateSource::Argument);
        assert_eq!(inspection.iso_date, "2024-09-18");
        assert_eq!(inspection.display_date, "Sep 18, 2024");
        assert_eq!(inspection.context, "during week 21 of your pregnancy");
    }

    #[test]
    fn test_inspect_photo_filename() {
        let inspection = inspect("shots/PXL_20241213_103000.jpg");
        assert_eq!(inspection.source, DateSource::Filename);
        assert_eq!(inspection.iso_date, "2024-12-13");
        assert_eq!(inspection.display_date, "Dec 13, 2024");
        assert!(inspection.context.starts_with("during week"));
    }

    #[test]
    fn test_inspect_undated_input() {
        let inspection = inspect("vacation.jpg");
        assert_eq!(inspection.source, DateSource::Unknown);
        assert_eq!(inspection.iso_date, "");
        assert_eq!(inspection.display_date, "");
        assert_eq!(inspection.context, "on a special day");
    }

    #[test]
    fn test_inspect_honors_milestones() {
        let milestones = Milestones::new(
            chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2020, 10, 1).unwrap(),
        );
        let inspection = InspectService::new(milestones).execute("2020-10-02");
        assert_eq!(inspection.context, "when our little one was 2 days old");
    }
}
