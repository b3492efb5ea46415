use crate::domain::error::DeckError;
use crate::domain::model::{NoteRequest, NoteResponse, SubmissionStatus, TranslationResult};
use async_trait::async_trait;

/// Trait for translation services
///
/// Implementations translate one word into the configured target language.
/// Transient backend failures are reported as `TranslationResult::Absent`
/// rather than as errors so a single word never aborts a batch.
#[async_trait]
pub trait Translator {
    async fn translate(&self, word: &str, source_language: &str) -> TranslationResult;
}

/// Trait for the flashcard note service
#[async_trait]
pub trait NoteSink {
    /// Submit one note.
    ///
    /// `Err` covers protocol and transport failures (`MalformedResponse`,
    /// `CannotConnect`); business errors come back inside `SubmissionStatus`.
    async fn add_note(
        &self,
        note: &NoteRequest,
    ) -> Result<(NoteResponse, SubmissionStatus), DeckError>;
}
