use serde::{Deserialize, Serialize};
use std::fmt;

// 源语言档案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    German,
    English,
}

impl Language {
    /// `German` selects the German profile, anything else falls back to English.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "German" {
            Language::German
        } else {
            Language::English
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::German => "German",
            Language::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single line of the word list, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join an ordered sequence of strings with `separator`.
///
/// Order and duplicates are preserved, and a single element comes back
/// unchanged with no trailing separator.
pub fn join_ordered<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(item.as_ref());
    }
    out
}

// 翻译结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationResult {
    /// One or more candidate senses, in provider order.
    Translated(Vec<String>),
    Absent,
}

impl TranslationResult {
    /// Blank candidates are dropped; nothing left means `Absent`.
    pub fn from_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kept: Vec<String> = candidates
            .into_iter()
            .map(Into::into)
            .filter(|c| !c.trim().is_empty())
            .collect();
        if kept.is_empty() {
            TranslationResult::Absent
        } else {
            TranslationResult::Translated(kept)
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, TranslationResult::Absent)
    }

    /// Candidates joined with `", "`; empty when absent.
    pub fn display(&self) -> String {
        match self {
            TranslationResult::Translated(candidates) => join_ordered(candidates, ", "),
            TranslationResult::Absent => String::new(),
        }
    }
}

/// `"<word> -- <translation>"`, the persisted corpus form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLine {
    pub word: String,
    pub translation: String,
}

impl CorpusLine {
    pub fn new(word: &str, translation: &str) -> Self {
        Self {
            word: word.trim().to_string(),
            translation: translation.trim().to_string(),
        }
    }
}

impl fmt::Display for CorpusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.word, self.translation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Back")]
    pub back: String,
}

// AnkiConnect addNote 的 note 参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    pub deck_name: String,
    pub model_name: String,
    pub fields: NoteFields,
}

impl NoteRequest {
    pub fn new(deck_name: &str, model_name: &str, word: &Word, line: &CorpusLine) -> Self {
        Self {
            deck_name: deck_name.to_string(),
            model_name: model_name.to_string(),
            fields: NoteFields {
                front: word.as_str().to_string(),
                back: line.to_string().trim().to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub result: serde_json::Value,
    pub error: Option<String>,
}

/// How the remote service treated one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Success,
    Duplicate,
    /// Any other business error reported by the service.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedSubmission {
    pub word: Word,
    pub reason: String,
}

/// Per-run classification of every processed word, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub translated: Vec<Word>,
    pub not_translated: Vec<Word>,
    pub duplicates: Vec<Word>,
    pub submission_failed: Vec<FailedSubmission>,
    /// Corpus lines written during the run.
    pub corpus_lines: Vec<String>,
}

impl BatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_translated(&mut self, word: &Word) {
        self.translated.push(word.clone());
    }

    pub fn record_not_translated(&mut self, word: &Word) {
        self.not_translated.push(word.clone());
    }

    pub fn record_duplicate(&mut self, word: &Word) {
        self.duplicates.push(word.clone());
    }

    pub fn record_submission_failed(&mut self, word: &Word, reason: impl Into<String>) {
        self.submission_failed.push(FailedSubmission {
            word: word.clone(),
            reason: reason.into(),
        });
    }

    pub fn record_corpus_line(&mut self, line: &CorpusLine) {
        self.corpus_lines.push(line.to_string());
    }
}
