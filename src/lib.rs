//! Translate a foreign-language word list, append the results to a plain-text
//! corpus and submit one Anki flashcard per word through AnkiConnect.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::pipeline::{Pipeline, PipelineSettings, WordState};
pub use domain::error::{DeckError, DeckResult};
pub use domain::model::{BatchOutcome, Language, TranslationResult, Word};
pub use domain::traits::{NoteSink, Translator};
