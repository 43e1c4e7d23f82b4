//! Journey context classification
//!
//! Maps a photo date onto a short descriptive phrase relative to the album's
//! milestone dates: before the journey, a pregnancy week, or a child age in
//! days, weeks, months, or years. The phrase is embedded verbatim into the
//! generation prompt.

use crate::domain::photo_date::parse_iso_date;
use crate::domain::Milestones;
use chrono::NaiveDate;

/// Average Gregorian month length used for child-age bucketing.
///
/// Deliberately approximate: dates near a birthday can land a day or two off,
/// and that drift is part of the phrase contract.
const DAYS_PER_MONTH: f64 = 30.44;

/// Exact whole-day difference between two calendar dates.
fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

fn unit(value: i64, singular: &'static str, plural: &'static str) -> &'static str {
    if value == 1 {
        singular
    } else {
        plural
    }
}

/// Classify a `YYYY-MM-DD` date string into its journey context phrase.
///
/// The bands partition the date line with no gaps: anything before
/// conception, the inclusive conception..delivery pregnancy window, then
/// child ages in days (under a week), weeks (under ~2 months), months
/// (under a year), and years beyond that. Exact-year ages become birthday
/// phrases ("first" for year one, a plain "{n}th" afterwards).
///
/// This function never fails: an empty input or anything that is not a
/// strict calendar date degrades to a generic phrase instead.
pub fn journey_context(date_str: &str, milestones: &Milestones) -> String {
    if date_str.is_empty() {
        return "on a special day".to_string();
    }

    let Some(photo_date) = parse_iso_date(date_str) else {
        return "on a memorable day".to_string();
    };

    if photo_date < milestones.conception {
        return "before our beautiful journey to parenthood began".to_string();
    }

    if photo_date <= milestones.delivery {
        let week = days_between(milestones.conception, photo_date) / 7 + 1;
        return format!("during week {} of your pregnancy", week);
    }

    let days = days_between(milestones.delivery, photo_date);

    if days < 7 {
        let age = days + 1;
        return format!(
            "when our little one was {} {} old",
            age,
            unit(age, "day", "days")
        );
    }

    if days < 60 {
        let weeks = days / 7;
        return format!(
            "when our little one was {} {} old",
            weeks,
            unit(weeks, "week", "weeks")
        );
    }

    let months = (days as f64 / DAYS_PER_MONTH).floor() as i64;
    if months < 12 {
        return format!(
            "when our little one was {} {} old",
            months,
            unit(months, "month", "months")
        );
    }

    let years = months / 12;
    let remaining = months % 12;
    if remaining == 0 {
        let ordinal = if years == 1 {
            "first".to_string()
        } else {
            format!("{}th", years)
        };
        return format!("on our little one's {} birthday", ordinal);
    }

    format!(
        "when our little one was {} {} and {} {} old",
        years,
        unit(years, "year", "years"),
        remaining,
        unit(remaining, "month", "months")
    )
}
