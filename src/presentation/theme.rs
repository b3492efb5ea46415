use colored::Colorize;

pub struct Theme {
    pub header: fn(&str) -> String,
    pub heading: fn(&str) -> String,
    pub words: fn(&str) -> String,
    pub corpus: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "canvas" => Self::canvas(),
            "plain" => Self::plain(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp()
            }
        }
    }

    fn temp() -> Self {
        Self {
            header: |s| s.bright_magenta().bold().to_string(),
            heading: |s| s.green().bold().to_string(),
            words: |s| s.white().to_string(),
            corpus: |s| s.bright_black().italic().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            header: |s| s.blue().bold().underline().to_string(),
            heading: |s| s.bright_cyan().bold().to_string(),
            words: |s| s.black().to_string(),
            corpus: |s| s.bright_blue().to_string(),
        }
    }

    /// No styling at all.
    pub fn plain() -> Self {
        Self {
            header: |s| s.to_string(),
            heading: |s| s.to_string(),
            words: |s| s.to_string(),
            corpus: |s| s.to_string(),
        }
    }
}
