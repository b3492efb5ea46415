use crate::domain::error::DeckError;
use crate::domain::model::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const ANKI_ENDPOINT_ENV: &str = "ANKI_CONNECT_URL";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_true")]
    pub enable_emoji: bool,
    #[serde(default = "default_true")]
    pub show_translations: bool,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub anki: AnkiConfig,
    #[serde(default)]
    pub translator: TranslatorConfig,
    #[serde(default = "default_german_profile")]
    pub german: LanguageProfile,
    #[serde(default = "default_english_profile")]
    pub english: LanguageProfile,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_true")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnkiConfig {
    #[serde(default = "default_anki_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    #[serde(default = "default_translator_url")]
    pub base_url: String,
}

/// Input list, corpus file and deck for one source language.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LanguageProfile {
    pub input: PathBuf,
    pub corpus: PathBuf,
    pub deck_name: String,
    pub source_language: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_anki_endpoint(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_translator_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
            model_name: default_model_name(),
            enable_emoji: true,
            show_translations: true,
            request_timeout_secs: default_request_timeout(),
            logging: Logging::default(),
            anki: AnkiConfig::default(),
            translator: TranslatorConfig::default(),
            german: default_german_profile(),
            english: default_english_profile(),
        }
    }
}

impl Config {
    pub fn profile(&self, language: Language) -> &LanguageProfile {
        match language {
            Language::German => &self.german,
            Language::English => &self.english,
        }
    }

    /// Apply process environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var(ANKI_ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                self.anki.endpoint = endpoint.trim().to_string();
            }
        }
        self
    }
}

// Defaults
fn default_target_language() -> String {
    "sl".to_string()
}
fn default_model_name() -> String {
    "Basic-fbf65".to_string()
}
fn default_true() -> bool {
    true
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_anki_endpoint() -> String {
    "http://127.0.0.1:8765".to_string()
}
fn default_translator_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}
fn default_german_profile() -> LanguageProfile {
    LanguageProfile {
        input: PathBuf::from("words/german.txt"),
        corpus: PathBuf::from("corpus/deutsch.txt"),
        deck_name: "german".to_string(),
        source_language: "de".to_string(),
    }
}
fn default_english_profile() -> LanguageProfile {
    LanguageProfile {
        input: PathBuf::from("words/english.txt"),
        corpus: PathBuf::from("corpus/english.txt"),
        deck_name: "english".to_string(),
        source_language: "en".to_string(),
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lexideck").join("config.toml"))
}

/// Parse a config document, falling back to defaults on malformed input.
pub fn parse_config(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Config::default()
        }
    }
}

pub fn load_config() -> Result<Config, DeckError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(parse_config(&content).with_env_overrides());
        }
    }

    Ok(Config::default().with_env_overrides())
}

pub fn generate_config_sample() -> Result<(), DeckError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| DeckError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| DeckError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(DeckError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
