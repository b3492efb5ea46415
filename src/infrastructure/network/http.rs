// HTTP client utilities
use crate::domain::error::DeckError;
use reqwest::Client;
use std::time::Duration;

/// Create the shared HTTP client used by the translator and the Anki RPC client.
pub fn create_client(timeout_secs: u64) -> Result<Client, DeckError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("lexideck/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
