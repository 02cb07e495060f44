//! Error types for the rescue shelter.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the menu's own "not found" outcomes.
///
/// Lookups that miss and an empty priority queue are not errors; they are
/// reported as `None` and rendered as messages.
#[derive(Debug, Error)]
pub enum RescueError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A roster file could not be opened or parsed.
    #[error("failed to read roster {path}: {source}")]
    Roster {
        /// The roster file
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// Priority text was not an integer.
    #[error("'{0}' is not a whole number")]
    InvalidPriority(String),
}

/// Convenience alias for results in this crate.
pub type Result<T, E = RescueError> = std::result::Result<T, E>;
