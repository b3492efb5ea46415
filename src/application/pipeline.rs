use crate::domain::error::DeckError;
use crate::domain::model::{
    BatchOutcome, CorpusLine, NoteRequest, SubmissionStatus, TranslationResult, Word,
};
use crate::domain::traits::{NoteSink, Translator};
use crate::infrastructure::storage::corpus;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{info, warn};

/// Where one word ended up after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordState {
    Success,
    Duplicate,
    SubmissionFailed(String),
    ConnectionFailed(String),
}

/// Fixed parameters of one batch run.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub source_language: String,
    pub deck_name: String,
    pub model_name: String,
    pub corpus_path: PathBuf,
    pub show_progress: bool,
}

/// Drives each word through translate → corpus → note submission → classification.
pub struct Pipeline<'a, T, N> {
    translator: &'a T,
    notes: &'a N,
    settings: PipelineSettings,
}

impl<'a, T, N> Pipeline<'a, T, N>
where
    T: Translator + Sync,
    N: NoteSink + Sync,
{
    pub fn new(translator: &'a T, notes: &'a N, settings: PipelineSettings) -> Self {
        Self {
            translator,
            notes,
            settings,
        }
    }

    /// Process every word strictly in order. Per-word failures are recorded,
    /// never propagated.
    pub async fn run(&self, words: &[Word]) -> BatchOutcome {
        let mut outcome = BatchOutcome::new();
        let pb = self.progress_bar(words.len());

        for word in words {
            pb.set_message(word.to_string());
            self.process_word(word, &mut outcome).await;
            pb.inc(1);
        }

        pb.finish_and_clear();
        outcome
    }

    pub async fn process_word(&self, word: &Word, outcome: &mut BatchOutcome) -> WordState {
        let translation = self
            .translator
            .translate(word.as_str(), &self.settings.source_language)
            .await;

        if translation.is_absent() {
            info!("The word: '{}' could not be translated :(", word);
            outcome.record_not_translated(word);
        }

        let line = CorpusLine::new(word.as_str(), &translation.display());
        match corpus::append_line(&self.settings.corpus_path, &line).await {
            Ok(()) => outcome.record_corpus_line(&line),
            Err(e) => warn!(
                "Failed to append '{}' to corpus '{}': {}",
                word,
                self.settings.corpus_path.display(),
                e
            ),
        }

        let note = NoteRequest::new(
            &self.settings.deck_name,
            &self.settings.model_name,
            word,
            &line,
        );

        let state = match self.notes.add_note(&note).await {
            Ok((_, SubmissionStatus::Success)) => WordState::Success,
            Ok((_, SubmissionStatus::Duplicate)) => WordState::Duplicate,
            Ok((_, SubmissionStatus::Failed(reason))) => WordState::SubmissionFailed(reason),
            Err(e @ DeckError::CannotConnect(_)) => WordState::ConnectionFailed(e.to_string()),
            Err(e) => WordState::SubmissionFailed(e.to_string()),
        };

        classify(word, &translation, &state, outcome);
        state
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.settings.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|s| s.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }
}

fn classify(
    word: &Word,
    translation: &TranslationResult,
    state: &WordState,
    outcome: &mut BatchOutcome,
) {
    match state {
        WordState::Success => {
            if !translation.is_absent() {
                info!("Added note for '{}'", word);
                outcome.record_translated(word);
            }
        }
        WordState::Duplicate => {
            info!("The word '{}' is already in the deck", word);
            outcome.record_duplicate(word);
        }
        WordState::SubmissionFailed(reason) => {
            warn!("Could not add note for '{}': {}", word, reason);
            outcome.record_submission_failed(word, reason.clone());
        }
        WordState::ConnectionFailed(reason) => {
            warn!("{}. Skipping '{}'.", reason, word);
            outcome.record_submission_failed(word, reason.clone());
        }
    }
}
