use crate::domain::error::DeckError;
use crate::domain::model::CorpusLine;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Append one `"<word> -- <translation>"` line to the corpus file.
///
/// The file is opened for this write only and created when missing. An empty
/// translation still produces a line so the gap stays visible in the corpus.
pub async fn append_line(path: &Path, line: &CorpusLine) -> Result<(), DeckError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("{}\n", line).as_bytes()).await?;
    file.flush().await?;

    Ok(())
}

pub async fn append(path: &Path, word: &str, translation: &str) -> Result<CorpusLine, DeckError> {
    let line = CorpusLine::new(word, translation);
    append_line(path, &line).await?;
    Ok(line)
}
