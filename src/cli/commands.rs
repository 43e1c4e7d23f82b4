//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "storypage")]
#[command(about = "Terminal storybook page generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new album
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Conception milestone date (YYYY-MM-DD)
        #[arg(long)]
        conception: Option<String>,

        /// Delivery milestone date (YYYY-MM-DD)
        #[arg(long)]
        delivery: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show the date and journey context derived for a photo or date
    Inspect {
        /// Photo path/filename or a YYYY-MM-DD date
        input: String,
    },

    /// Generate storybook page variants for a photo
    Generate {
        /// The photo to build pages from
        photo: PathBuf,

        /// Photo date (YYYY-MM-DD); parsed from the filename when omitted
        #[arg(short, long)]
        date: Option<String>,

        /// A memory or note to guide the caption
        #[arg(short, long)]
        note: Option<String>,

        /// Heading to render verbatim on the page
        #[arg(long)]
        heading: Option<String>,

        /// Number of page variants to request
        #[arg(short, long)]
        variants: Option<usize>,
    },

    /// Regenerate the caption of a saved page
    Caption {
        /// Saved page image (e.g. pages/2025-08-30-page-1.png)
        page: String,

        /// The original photo the page was generated from
        #[arg(long)]
        photo: PathBuf,

        /// A memory or note to guide the caption
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List saved pages
    List {
        /// Only pages on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only pages on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Show at most this many pages
        #[arg(short, long)]
        limit: Option<usize>,
    },
}
