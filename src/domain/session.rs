//! Generation run lifecycle
//!
//! One generation run moves through an explicit state machine instead of
//! ambient mutable flags: `Idle -> Submitting -> Success | Failed`. A new
//! submission is allowed from any settled state and clears previous results;
//! completing or failing is only legal while a run is in flight.

use crate::domain::GeneratedPage;
use crate::error::{Result, StorypageError};

/// State of a single generation run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Submitting,
    Success(Vec<GeneratedPage>),
    Failed(String),
}

/// Owns the lifecycle of one generation run
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Begin a run. Legal from any settled state; previous results and
    /// errors are discarded.
    pub fn submit(&mut self) -> Result<()> {
        if self.state == SessionState::Submitting {
            return Err(StorypageError::Session(
                "a generation run is already in flight".to_string(),
            ));
        }
        self.state = SessionState::Submitting;
        Ok(())
    }

    /// Settle the in-flight run with its successful pages
    pub fn complete(&mut self, pages: Vec<GeneratedPage>) -> Result<()> {
        if self.state != SessionState::Submitting {
            return Err(StorypageError::Session(
                "cannot complete: no generation run in flight".to_string(),
            ));
        }
        self.state = SessionState::Success(pages);
        Ok(())
    }

    /// Settle the in-flight run with a failure message
    pub fn fail(&mut self, message: String) -> Result<()> {
        if self.state != SessionState::Submitting {
            return Err(StorypageError::Session(
                "cannot fail: no generation run in flight".to_string(),
            ));
        }
        self.state = SessionState::Failed(message);
        Ok(())
    }
}
