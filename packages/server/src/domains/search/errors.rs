use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Unknown search form: {0}")]
    UnknownForm(String),

    #[error("Invalid distance range: {0}")]
    InvalidDistance(String),
}
