//! storypage - Terminal storybook page generator
//!
//! A command-line application that turns a photo plus a date into
//! AI-generated photo-book pages: it derives a journey context phrase from
//! the date, assembles a templated generation prompt, fans out independent
//! requests to the model, and stores every page that succeeds in an album
//! directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::StorypageError;
