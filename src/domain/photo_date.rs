//! Photo date extraction and display formatting

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for date-like runs in filenames: a four-digit year, an optional
/// separator, two-digit month, optional separator, two-digit day.
///
/// Separator consistency between the two positions is enforced by the caller;
/// the regex engine here has no backreferences.
fn date_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\d{4})([-_.]?)(\d{2})([-_.]?)(\d{2})").unwrap())
}

/// Try to extract a calendar date from a filename.
///
/// Recognizes runs like `2024-05-20`, `2024_05_20`, `2024.05.20`, or
/// `20240520` (common in phone photos such as `PXL_20241213_103000.jpg`).
/// The same separator must appear on both sides of the month; runs with
/// mismatched separators are skipped and the scan continues. The first
/// consistent run decides the outcome: if it is not a real calendar date
/// (e.g. `2024-02-30`), the whole lookup yields `None`.
///
/// This is a best-effort heuristic for pre-filling a date, so it never fails;
/// anything unusable simply comes back as `None`.
pub fn parse_date_from_filename(name: &str) -> Option<NaiveDate> {
    let mut search_from = 0;

    while let Some(caps) = date_run_regex().captures(&name[search_from..]) {
        if caps[2] != caps[4] {
            // Matches start on an ASCII digit, so +1 stays on a char boundary.
            search_from += caps.get(0)?.start() + 1;
            continue;
        }

        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[3].parse().ok()?;
        let day: u32 = caps[5].parse().ok()?;

        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

/// Parse the strict `YYYY-MM-DD` interchange form.
///
/// Fixed widths, digits only, literal splitting. No locale parsing and no
/// timezone reinterpretation; the same string yields the same date on every
/// host.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    if ![year, month, day]
        .iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Render a strict `YYYY-MM-DD` string in display form, e.g. `Aug 30, 2025`.
///
/// Empty or malformed input renders as an empty string rather than an error.
pub fn format_date_for_display(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_filename_dashes() {
        assert_eq!(
            parse_date_from_filename("IMG_2024-05-20_party.jpg"),
            Some(date(2024, 5, 20))
        );
    }

    #[test]
    fn test_parse_filename_underscores() {
        assert_eq!(
            parse_date_from_filename("photo_2024_05_20.jpg"),
            Some(date(2024, 5, 20))
        );
    }

    #[test]
    fn test_parse_filename_dots() {
        assert_eq!(
            parse_date_from_filename("scan.2024.05.20.png"),
            Some(date(2024, 5, 20))
        );
    }

    #[test]
    fn test_parse_filename_compact() {
        assert_eq!(
            parse_date_from_filename("PXL_20241213_103000.jpg"),
            Some(date(2024, 12, 13))
        );
    }

    #[test]
    fn test_parse_filename_mismatched_separators() {
        assert_eq!(parse_date_from_filename("photo_2024-05_20.jpg"), None);
    }

    #[test]
    fn test_parse_filename_mismatch_then_valid_run() {
        // The mismatched run is skipped; scanning continues to the next run.
        assert_eq!(
            parse_date_from_filename("2024-05_20_then_20241213.jpg"),
            Some(date(2024, 12, 13))
        );
    }

    #[test]
    fn test_parse_filename_no_date() {
        assert_eq!(parse_date_from_filename("vacation.jpg"), None);
        assert_eq!(parse_date_from_filename(""), None);
    }

    #[test]
    fn test_parse_filename_rejects_calendar_invalid() {
        assert_eq!(parse_date_from_filename("IMG_2024-02-30.jpg"), None);
        assert_eq!(parse_date_from_filename("IMG_2023-04-31.jpg"), None);
        // Not a leap year
        assert_eq!(parse_date_from_filename("IMG_2023-02-29.jpg"), None);
    }

    #[test]
    fn test_parse_filename_accepts_leap_day() {
        assert_eq!(
            parse_date_from_filename("IMG_2024-02-29.jpg"),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_parse_filename_rejects_out_of_range_parts() {
        assert_eq!(parse_date_from_filename("IMG_2024-13-01.jpg"), None);
        assert_eq!(parse_date_from_filename("IMG_2024-00-10.jpg"), None);
        assert_eq!(parse_date_from_filename("IMG_2024-05-00.jpg"), None);
        assert_eq!(parse_date_from_filename("IMG_2024-05-32.jpg"), None);
    }

    #[test]
    fn test_parse_filename_first_run_wins() {
        assert_eq!(
            parse_date_from_filename("2023-01-15_and_2024-06-20.jpg"),
            Some(date(2023, 1, 15))
        );
    }

    #[test]
    fn test_parse_filename_invalid_first_run_is_final() {
        // The first consistent run is authoritative even when a later run
        // would have parsed.
        assert_eq!(
            parse_date_from_filename("2024-02-30_retake_2024-03-01.jpg"),
            None
        );
    }

    #[test]
    fn test_parse_filename_handles_multibyte_names() {
        assert_eq!(
            parse_date_from_filename("día_de_campo_2024-05-20.jpg"),
            Some(date(2024, 5, 20))
        );
        assert_eq!(parse_date_from_filename("café_vacaciones.jpg"), None);
    }

    #[test]
    fn test_parse_iso_date_valid() {
        assert_eq!(parse_iso_date("2024-05-20"), Some(date(2024, 5, 20)));
        assert_eq!(parse_iso_date("2024-02-29"), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_parse_iso_date_rejects_loose_forms() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("2024-5-20"), None);
        assert_eq!(parse_iso_date("24-05-20"), None);
        assert_eq!(parse_iso_date("2024/05/20"), None);
        assert_eq!(parse_iso_date("20-05-2024"), None);
        assert_eq!(parse_iso_date("2024-05-20-01"), None);
        assert_eq!(parse_iso_date("2024-05-2a"), None);
        assert_eq!(parse_iso_date("+024-05-20"), None);
        assert_eq!(parse_iso_date("not-a-date"), None);
    }

    #[test]
    fn test_parse_iso_date_rejects_calendar_invalid() {
        assert_eq!(parse_iso_date("2024-02-30"), None);
        assert_eq!(parse_iso_date("2023-02-29"), None);
        assert_eq!(parse_iso_date("2024-13-01"), None);
    }

    #[test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2025-08-30"), "Aug 30, 2025");
        assert_eq!(format_date_for_display("2024-12-13"), "Dec 13, 2024");
    }

    #[test]
    fn test_format_date_day_is_unpadded() {
        assert_eq!(format_date_for_display("2025-08-05"), "Aug 5, 2025");
        assert_eq!(format_date_for_display("2024-01-01"), "Jan 1, 2024");
    }

    #[test]
    fn test_format_date_empty_and_invalid() {
        assert_eq!(format_date_for_display(""), "");
        assert_eq!(format_date_for_display("not-a-date"), "");
        assert_eq!(format_date_for_display("2024-02-30"), "");
    }

    #[test]
    fn test_parsed_filename_date_round_trips_to_display() {
        let names = [
            "IMG_2024-05-20_party.jpg",
            "PXL_20241213_103000.jpg",
            "scan.2024.02.29.png",
        ];

        for name in names {
            let parsed = parse_date_from_filename(name).unwrap();
            let iso = parsed.format("%Y-%m-%d").to_string();
            let display = format_date_for_display(&iso);
            assert!(!display.is_empty(), "no display form for {}", name);
        }
    }
}
