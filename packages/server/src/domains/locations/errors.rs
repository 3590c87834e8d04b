use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocationError {
    /// Shown in place of results by the location dropdowns.
    #[error("Failed to load locations from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse locations: {0}")]
    Parse(#[from] csv::Error),
}

impl LocationError {
    /// Message safe to show to users.
    pub fn display_message(&self) -> &'static str {
        "Failed to load locations"
    }
}
