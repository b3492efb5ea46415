use crate::domain::model::{join_ordered, BatchOutcome, Language, Word};
use crate::presentation::theme::Theme;
use chrono::NaiveDate;
use std::fmt::Write;

/// Rendering knobs for the end-of-run report.
pub struct ReportStyle {
    pub theme: Theme,
    pub enable_emoji: bool,
    pub show_translations: bool,
    pub date: NaiveDate,
}

impl ReportStyle {
    pub fn today(theme: Theme, enable_emoji: bool, show_translations: bool) -> Self {
        Self {
            theme,
            enable_emoji,
            show_translations,
            date: chrono::Local::now().date_naive(),
        }
    }
}

pub fn word_noun(count: usize) -> &'static str {
    if count == 1 {
        "word"
    } else {
        "words"
    }
}

/// Render the batch summary. Sections appear only when non-empty and list
/// words in processing order.
pub fn render(
    outcome: &BatchOutcome,
    language: Language,
    target_language: &str,
    total_words: usize,
    style: &ReportStyle,
) -> String {
    let theme = &style.theme;
    let emoji = |icon: &'static str| if style.enable_emoji { icon } else { "" };
    let mut output = String::new();

    let header = format!(
        "{}Building Up the Translation Report on Day: '{}'.",
        emoji("📚  "),
        style.date
    );
    writeln!(output, "{}\n", (theme.header)(&header)).ok();
    writeln!(
        output,
        "{}We seek to translate {} {} from '{}' into '{}'.\n",
        emoji("🏟️  "),
        total_words,
        word_noun(total_words),
        language,
        target_language
    )
    .ok();

    let mut section = |icon: &'static str, title: &str, words: &[String]| {
        if words.is_empty() {
            return;
        }
        let heading = format!("{}{}", emoji(icon), title);
        writeln!(output, "{}", (theme.heading)(&heading)).ok();
        writeln!(output, " {}\n", (theme.words)(&join_ordered(words, ", "))).ok();
    };

    let names = |words: &[Word]| -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    };

    section(
        "✅ ",
        "Successfully Translated the Following Words:",
        &names(&outcome.translated),
    );
    section(
        "❌ ",
        "Could not translate the following words:",
        &names(&outcome.not_translated),
    );
    section(
        "🫶  ",
        "Certain Duplications seem to have been found:",
        &names(&outcome.duplicates),
    );
    section(
        "⚠️  ",
        "Could not add notes for the following words:",
        &outcome
            .submission_failed
            .iter()
            .map(|f| f.word.to_string())
            .collect::<Vec<_>>(),
    );

    if style.show_translations && !outcome.corpus_lines.is_empty() {
        writeln!(
            output,
            "{}Please find the expected translations below :)\n",
            emoji("🍒 ")
        )
        .ok();
        for line in &outcome.corpus_lines {
            writeln!(output, "{}", (theme.corpus)(line)).ok();
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CorpusLine;

    fn plain_style() -> ReportStyle {
        ReportStyle {
            theme: Theme::plain(),
            enable_emoji: false,
            show_translations: false,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_header_and_sections() {
        let mut outcome = BatchOutcome::new();
        outcome.record_translated(&Word::new("apple"));
        outcome.record_translated(&Word::new("banana"));

        let report = render(&outcome, Language::English, "sl", 2, &plain_style());
        assert!(report.contains("Day: '2024-03-01'"));
        assert!(report.contains("translate 2 words from 'English' into 'sl'"));
        assert!(report.contains("apple, banana\n"));
        assert!(!report.contains("apple, banana,"));
        assert!(!report.contains("Could not translate"));
        assert!(!report.contains("Duplications"));
        assert!(!report.contains("Could not add notes"));
    }

    #[test]
    fn test_singular_noun() {
        let report = render(&BatchOutcome::new(), Language::German, "sl", 1, &plain_style());
        assert!(report.contains("translate 1 word from 'German'"));
        assert_eq!(word_noun(0), "words");
    }

    #[test]
    fn test_section_order_and_failures() {
        let mut outcome = BatchOutcome::new();
        outcome.record_not_translated(&Word::new("Qwzx"));
        outcome.record_duplicate(&Word::new("Haus"));
        outcome.record_duplicate(&Word::new("Baum"));
        outcome.record_submission_failed(&Word::new("Tisch"), "Cannot connect");

        let report = render(&outcome, Language::German, "sl", 4, &plain_style());
        let not_translated = report.find("Could not translate").unwrap();
        let duplicates = report.find("Duplications").unwrap();
        let failed = report.find("Could not add notes").unwrap();
        assert!(not_translated < duplicates && duplicates < failed);
        assert!(report.contains(" Haus, Baum\n"));
        assert!(report.contains(" Tisch\n"));
    }

    #[test]
    fn test_expected_translations() {
        let mut outcome = BatchOutcome::new();
        outcome.record_corpus_line(&CorpusLine::new("Haus", "hiša"));
        let mut style = plain_style();
        style.show_translations = true;
        style.enable_emoji = true;

        let report = render(&outcome, Language::German, "sl", 1, &style);
        assert!(report.contains("🍒 Please find the expected translations below"));
        assert!(report.contains("Haus -- hiša\n"));
    }
}
