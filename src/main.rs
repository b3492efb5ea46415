// Main entry point
use lexideck::application::pipeline::{Pipeline, PipelineSettings};
use lexideck::domain::model::Language;
use lexideck::infrastructure::config::{self, load_config, Logging};
use lexideck::infrastructure::storage::words::load_words;
use lexideck::interfaces::cli::Cli;
use lexideck::presentation::report::{self, ReportStyle};
use lexideck::presentation::theme::Theme;
use lexideck::state::AppState;
use std::io::IsTerminal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    let language = Language::from_flag(&cli.lang);
    let profile = config.profile(language).clone();
    let input = cli.input.clone().unwrap_or(profile.input);
    let corpus_path = cli.corpus.clone().unwrap_or(profile.corpus);

    // A missing word list is the only fatal error of a batch
    let words = load_words(&input).await?;
    info!(
        "Loaded {} words from '{}' ({})",
        words.len(),
        input.display(),
        language
    );

    let state = AppState::new(config)?;
    let settings = PipelineSettings {
        source_language: profile.source_language,
        deck_name: profile.deck_name,
        model_name: state.config.model_name.clone(),
        corpus_path,
        show_progress: !cli.json && std::io::stderr().is_terminal(),
    };
    let pipeline = Pipeline::new(&state.translator, &state.anki, settings);
    let outcome = pipeline.run(&words).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let theme_name = cli.theme.as_deref().unwrap_or("temp");
    let style = ReportStyle::today(
        Theme::from_name(theme_name),
        state.config.enable_emoji,
        state.config.show_translations,
    );
    print!(
        "{}",
        report::render(
            &outcome,
            language,
            &state.config.target_language,
            words.len(),
            &style
        )
    );

    Ok(())
}

fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
