use thiserror::Error;

use super::deck::registry::SlideId;

/// Failures inside the deck core. Navigation non-events (boundary, empty
/// deck, unknown slide) are `NavOutcome` variants, not errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeckError {
    #[error("slide identifier already registered: {0}")]
    DuplicateSlide(SlideId),

    #[error("deck contains no slides")]
    EmptyDeck,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),

    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
