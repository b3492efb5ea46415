use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Word list not found: {}", .0.display())]
    InputMissing(PathBuf),

    #[error("Translation unavailable: {0}")]
    TranslationUnavailable(String),

    #[error("Malformed AnkiConnect response: {0}")]
    MalformedResponse(String),

    #[error("Cannot connect to AnkiConnect at {0}")]
    CannotConnect(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type DeckResult<T> = Result<T, DeckError>;
