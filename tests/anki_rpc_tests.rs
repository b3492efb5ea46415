//! AnkiConnect 协议测试

use lexideck::domain::model::{CorpusLine, NoteRequest, SubmissionStatus, Word};
use lexideck::infrastructure::network::anki::AnkiConnectClient;
use lexideck::{DeckError, NoteSink};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one HTTP request with `body` and hand back the request payload.
async fn serve_once(body: &'static str) -> (String, JoinHandle<Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length: usize = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        serde_json::from_slice(&buf[header_end..header_end + content_length]).unwrap()
    });

    (endpoint, handle)
}

fn haus_note() -> NoteRequest {
    let word = Word::new("Haus");
    let line = CorpusLine::new("Haus", "house");
    NoteRequest::new("german", "Basic-fbf65", &word, &line)
}

#[tokio::test]
async fn test_add_note_success() {
    let (endpoint, server) = serve_once(r#"{"result": 1234, "error": null}"#).await;
    let client = AnkiConnectClient::new(reqwest::Client::new(), &endpoint);

    let (response, status) = client.add_note(&haus_note()).await.unwrap();
    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(response.result, json!(1234));

    let request = server.await.unwrap();
    assert_eq!(
        request,
        json!({
            "action": "addNote",
            "params": {
                "note": {
                    "deckName": "german",
                    "modelName": "Basic-fbf65",
                    "fields": {"Front": "Haus", "Back": "Haus -- house"}
                }
            },
            "version": 6
        })
    );
}

#[tokio::test]
async fn test_add_note_duplicate() {
    let (endpoint, server) = serve_once(
        r#"{"result": null, "error": "cannot create note because it is a duplicate "}"#,
    )
    .await;
    let client = AnkiConnectClient::new(reqwest::Client::new(), &endpoint);

    let (_, status) = client.add_note(&haus_note()).await.unwrap();
    assert_eq!(status, SubmissionStatus::Duplicate);
    server.await.unwrap();
}

#[tokio::test]
async fn test_add_note_missing_error_field() {
    let (endpoint, server) = serve_once(r#"{"result": "ok"}"#).await;
    let client = AnkiConnectClient::new(reqwest::Client::new(), &endpoint);

    let result = client.add_note(&haus_note()).await;
    assert!(matches!(result, Err(DeckError::MalformedResponse(_))));
    server.await.unwrap();
}

#[tokio::test]
async fn test_add_note_non_json_body() {
    let (endpoint, server) = serve_once("AnkiConnect v.6").await;
    let client = AnkiConnectClient::new(reqwest::Client::new(), &endpoint);

    let result = client.add_note(&haus_note()).await;
    assert!(matches!(result, Err(DeckError::MalformedResponse(_))));
    server.await.unwrap();
}
