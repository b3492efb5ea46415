use crate::domain::error::DeckError;
use crate::domain::model::TranslationResult;
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Google Translate (public `gtx` endpoint) scoped to one target language.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
    target_language: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, base_url: &str, target_language: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            target_language: target_language.to_string(),
        }
    }

    async fn request_candidates(
        &self,
        word: &str,
        source_language: &str,
    ) -> Result<Vec<String>, DeckError> {
        let params = [
            ("client", "gtx"),
            ("sl", source_language),
            ("tl", self.target_language.as_str()),
            ("dt", "t"),
            ("dt", "bd"),
            ("q", word),
        ];

        debug!(word, source_language, "requesting translation");
        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| DeckError::TranslationUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeckError::TranslationUnavailable(format!(
                "backend returned {}",
                status
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DeckError::TranslationUnavailable(e.to_string()))?;

        parse_candidates(&body)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, word: &str, source_language: &str) -> TranslationResult {
        match self.request_candidates(word, source_language).await {
            Ok(candidates) => TranslationResult::from_candidates(candidates),
            Err(e) => {
                warn!("The word '{}' could not be translated: {}", word, e);
                TranslationResult::Absent
            }
        }
    }
}

/// Extract candidate translations from a `translate_a/single` payload.
///
/// With a dictionary block (`dt=bd`) present, every term of every part of
/// speech is a candidate, in the order the backend lists them, repeats
/// included. Otherwise the sentence segments of the plain translation are
/// concatenated into a single candidate.
pub fn parse_candidates(body: &Value) -> Result<Vec<String>, DeckError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            DeckError::TranslationUnavailable("missing translation segments".to_string())
        })?;

    if let Some(dictionary) = body.get(1).and_then(Value::as_array) {
        let senses: Vec<String> = dictionary
            .iter()
            .filter_map(|entry| entry.get(1).and_then(Value::as_array))
            .flatten()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        if !senses.is_empty() {
            return Ok(senses);
        }
    }

    let primary: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if primary.trim().is_empty() {
        Ok(Vec::new())
    } else {
        Ok(vec![primary])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_translation() {
        let body = json!([[["hiša", "Haus", null, null, 10]], null, "de"]);
        assert_eq!(parse_candidates(&body).unwrap(), vec!["hiša"]);
    }

    #[test]
    fn test_segments_are_concatenated() {
        let body = json!([[["dober ", "guten ", null], ["dan", "Tag", null]], null, "de"]);
        assert_eq!(parse_candidates(&body).unwrap(), vec!["dober dan"]);
    }

    #[test]
    fn test_dictionary_senses_keep_order() {
        let body = json!([
            [["banka", "Bank", null]],
            [
                ["samostalnik", ["banka", "klop"], []],
                ["glagol", ["položiti"], []]
            ],
            "de"
        ]);
        let candidates = parse_candidates(&body).unwrap();
        assert_eq!(candidates, vec!["banka", "klop", "položiti"]);
        assert_eq!(
            TranslationResult::from_candidates(candidates).display(),
            "banka, klop, položiti"
        );
    }

    #[test]
    fn test_dictionary_repeats_are_kept() {
        let body = json!([
            [["ključ", "Schlüssel", null]],
            [
                ["samostalnik", ["ključ", "šifra"], []],
                ["pridevnik", ["ključ"], []]
            ],
            "de"
        ]);
        assert_eq!(
            parse_candidates(&body).unwrap(),
            vec!["ključ", "šifra", "ključ"]
        );
    }

    #[test]
    fn test_empty_translation_is_absent() {
        let body = json!([[["", "xyz", null]], null, "de"]);
        assert!(TranslationResult::from_candidates(parse_candidates(&body).unwrap()).is_absent());
    }

    #[test]
    fn test_unexpected_shape_is_error() {
        let body = json!({"error": "quota"});
        assert!(matches!(
            parse_candidates(&body),
            Err(DeckError::TranslationUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_absent() {
        let translator = GoogleTranslator::new(Client::new(), "http://127.0.0.1:1/translate", "sl");
        assert!(translator.translate("Haus", "de").await.is_absent());
    }
}
