use crate::domain::error::DeckError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::anki::AnkiConnectClient;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::network::translator::GoogleTranslator;

/// Process-wide collaborators built once from the configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: GoogleTranslator,
    pub anki: AnkiConnectClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, DeckError> {
        let http_client = create_client(config.request_timeout_secs)?;

        let translator = GoogleTranslator::new(
            http_client.clone(),
            &config.translator.base_url,
            &config.target_language,
        );
        let anki = AnkiConnectClient::new(http_client, &config.anki.endpoint);

        Ok(Self {
            config,
            translator,
            anki,
        })
    }
}
