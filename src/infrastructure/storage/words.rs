use crate::domain::error::DeckError;
use crate::domain::model::Word;
use std::io::ErrorKind;
use std::path::Path;
use tracing::error;

/// Load the word list, one word per line, in file order.
///
/// Lines are trimmed and blank lines skipped. Repeated words are kept.
pub async fn load_words(path: &Path) -> Result<Vec<Word>, DeckError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!("File '{}' could not be found.", path.display());
            return Err(DeckError::InputMissing(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(parse_words(&content))
}

pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Word::new)
        .collect()
}
