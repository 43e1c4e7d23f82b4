//! Domain layer - Business logic and domain models

pub mod journey;
pub mod milestones;
pub mod page;
pub mod photo_date;
pub mod prompt;
pub mod session;

pub use journey::journey_context;
pub use milestones::Milestones;
pub use page::{GeneratedPage, PageImage, PageRequest};
pub use photo_date::{format_date_for_display, parse_date_from_filename, parse_iso_date};
pub use session::{Session, SessionState};
