//! Journey milestone dates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two anchor dates every photo date is classified against.
///
/// Both dates are plain calendar dates with no timezone attached, so day
/// arithmetic against them is deterministic on every host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestones {
    /// Start of the pregnancy band
    pub conception: NaiveDate,
    /// End of the pregnancy band, start of the child-age bands
    pub delivery: NaiveDate,
}

impl Milestones {
    pub fn new(conception: NaiveDate, delivery: NaiveDate) -> Self {
        Milestones {
            conception,
            delivery,
        }
    }
}

impl Default for Milestones {
    fn default() -> Self {
        Milestones {
            conception: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid milestone date"),
            delivery: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid milestone date"),
        }
    }
}
