//! Application layer - Use cases and orchestration

pub mod generate_page;
pub mod init;
pub mod inspect;
pub mod list_pages;
pub mod manage_config;
pub mod regenerate_caption;

pub use generate_page::{GenerateOptions, GeneratePageService, GenerationOutcome, SavedPage};
pub use inspect::{DateSource, InspectService, Inspection};
pub use list_pages::list_pages;
pub use manage_config::ConfigService;
pub use regenerate_caption::{CaptionOptions, RegenerateCaptionService};
