//! Output formatting utilities

use crate::application::{DateSource, GenerationOutcome, Inspection};
use crate::infrastructure::PageEntry;

/// Format a list of saved pages for display
pub fn format_page_list(pages: &[PageEntry]) -> String {
    if pages.is_empty() {
        return "No pages found".to_string();
    }

    let mut output = String::new();
    for entry in pages {
        output.push_str(&format!(
            "{}  {}\n",
            entry.date.format("%Y-%m-%d"),
            entry.filename
        ));
    }
    output
}

/// Format the derived views of one photo or date input
pub fn format_inspection(inspection: &Inspection) -> String {
    let mut output = String::new();

    match inspection.source {
        DateSource::Argument => {
            output.push_str(&format!("Date:     {}\n", inspection.iso_date));
        }
        DateSource::Filename => {
            output.push_str(&format!(
                "Date:     {} (from filename)\n",
                inspection.iso_date
            ));
        }
        DateSource::Unknown => {
            output.push_str("Date:     (none found)\n");
        }
    }

    if !inspection.display_date.is_empty() {
        output.push_str(&format!("Display:  {}\n", inspection.display_date));
    }
    output.push_str(&format!("Context:  {}\n", inspection.context));

    output
}

/// Format the result of one generation run
pub fn format_generation_outcome(outcome: &GenerationOutcome) -> String {
    let mut output = format!(
        "Saved {} of {} page variants for {} ({})\n",
        outcome.pages.len(),
        outcome.attempted,
        outcome.date.format("%Y-%m-%d"),
        outcome.context
    );

    for page in &outcome.pages {
        output.push('\n');
        output.push_str(&page.filename);
        output.push('\n');
        for line in page.caption.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    if !outcome.failures.is_empty() {
        output.push_str(&format!(
            "\n{} variant(s) failed; see above for what succeeded\n",
            outcome.failures.len()
        ));
    }

    output
}
