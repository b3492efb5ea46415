use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lexideck")]
#[command(about = "Translate a word list, keep a corpus and push flashcards to Anki.")]
#[command(version)]
pub struct Cli {
    /// Source language profile: German, or anything else for English
    #[arg(short = 'l', long = "lang", default_value = "German")]
    pub lang: String,

    /// Word list to read instead of the profile's input file
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Corpus file to append to instead of the profile's corpus
    #[arg(short = 'c', long)]
    pub corpus: Option<PathBuf>,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Print the batch outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,
}

/// Accept the single-dash `-lang` spelling by rewriting it to `--lang`.
///
/// Clap would otherwise read `-lang` as `-l ang`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            let rewritten = match arg.to_str() {
                Some("-lang") => Some(OsString::from("--lang")),
                Some(s) if s.starts_with("-lang=") => Some(OsString::from(format!("-{}", s))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

impl Cli {
    /// Parse the process arguments, `-lang` included.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        let cli = Cli::parse_from(["lexideck"]);
        assert_eq!(cli.lang, "German");
        assert!(cli.input.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "lexideck", "--lang", "English", "-i", "words.txt", "-c", "out.txt", "--json",
        ]);
        assert_eq!(cli.lang, "English");
        assert_eq!(cli.input, Some(PathBuf::from("words.txt")));
        assert_eq!(cli.corpus, Some(PathBuf::from("out.txt")));
        assert!(cli.json);
    }

    #[test]
    fn test_single_dash_lang() {
        let cli = Cli::try_parse_from(normalize_args(["lexideck", "-lang", "English"])).unwrap();
        assert_eq!(cli.lang, "English");

        let cli = Cli::try_parse_from(normalize_args(["lexideck", "-lang=German"])).unwrap();
        assert_eq!(cli.lang, "German");
    }

    #[test]
    fn test_lang_aliases_untouched() {
        let cli = Cli::try_parse_from(normalize_args(["lexideck", "-l", "English"])).unwrap();
        assert_eq!(cli.lang, "English");

        let cli = Cli::try_parse_from(normalize_args(["lexideck", "--lang=English"])).unwrap();
        assert_eq!(cli.lang, "English");
    }
}
