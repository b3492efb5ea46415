use crate::domain::error::DeckError;
use crate::domain::model::{NoteRequest, NoteResponse, SubmissionStatus};
use crate::domain::traits::NoteSink;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub const ANKI_CONNECT_VERSION: u8 = 6;

/// Error string AnkiConnect returns when an equivalent note already exists.
pub const DUPLICATE_NOTE_ERROR: &str = "cannot create note because it is a duplicate ";

#[derive(Serialize, Debug)]
struct RpcRequest<'a, P: Serialize> {
    action: &'a str,
    params: P,
    version: u8,
}

#[derive(Serialize, Debug)]
struct AddNoteParams<'a> {
    note: &'a NoteRequest,
}

/// AnkiConnect JSON-RPC client
#[derive(Clone)]
pub struct AnkiConnectClient {
    client: Client,
    endpoint: String,
}

impl AnkiConnectClient {
    pub fn new(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn invoke<P: Serialize>(&self, action: &str, params: P) -> Result<Value, DeckError> {
        let body = RpcRequest {
            action,
            params,
            version: ANKI_CONNECT_VERSION,
        };

        debug!(action, endpoint = %self.endpoint, "invoking AnkiConnect");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    DeckError::CannotConnect(self.endpoint.clone())
                } else {
                    DeckError::Http(e)
                }
            })?;

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| DeckError::MalformedResponse(format!("response is not JSON: {}", e)))
    }
}

#[async_trait]
impl NoteSink for AnkiConnectClient {
    async fn add_note(
        &self,
        note: &NoteRequest,
    ) -> Result<(NoteResponse, SubmissionStatus), DeckError> {
        let raw = self.invoke("addNote", AddNoteParams { note }).await?;
        let response = validate_response(raw)?;
        let status = classify_response(&response);
        Ok((response, status))
    }
}

/// Enforce the `{result, error}` envelope: exactly those two fields, with
/// `error` either null or a string.
pub fn validate_response(raw: Value) -> Result<NoteResponse, DeckError> {
    let mut object = match raw {
        Value::Object(map) => map,
        other => {
            return Err(DeckError::MalformedResponse(format!(
                "expected an object, got {}",
                other
            )))
        }
    };

    if object.len() != 2 {
        return Err(DeckError::MalformedResponse(
            "response has an unexpected number of fields".to_string(),
        ));
    }
    let error = object.remove("error").ok_or_else(|| {
        DeckError::MalformedResponse("response is missing required error field".to_string())
    })?;
    let result = object.remove("result").ok_or_else(|| {
        DeckError::MalformedResponse("response is missing required result field".to_string())
    })?;

    let error = match error {
        Value::Null => None,
        Value::String(message) => Some(message),
        other => {
            return Err(DeckError::MalformedResponse(format!(
                "error field must be a string or null, got {}",
                other
            )))
        }
    };

    Ok(NoteResponse { result, error })
}

pub fn classify_response(response: &NoteResponse) -> SubmissionStatus {
    match response.error.as_deref() {
        None => SubmissionStatus::Success,
        Some(DUPLICATE_NOTE_ERROR) => SubmissionStatus::Duplicate,
        Some(other) => SubmissionStatus::Failed(other.to_string()),
    }
}
