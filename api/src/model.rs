//! Wire schema for a successful generation response.
//!
//! The service answers `{ "message": "...", "flashcards": [{ "question",
//! "answer", "contextLinks"? }] }`. Anything else is a parse failure; the
//! payload is never trusted field by field.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_links: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub message: String,
    pub flashcards: Vec<CardPayload>,
}

/// Decode and validate a response body.
pub fn parse_generation(body: &str) -> Result<GenerationResponse, GenerateError> {
    let response: GenerationResponse = serde_json::from_str(body)?;

    if response.flashcards.is_empty() {
        return Err(GenerateError::Parse(
            "response contained no flashcards".to_string(),
        ));
    }

    for (index, card) in response.flashcards.iter().enumerate() {
        if card.question.trim().is_empty() || card.answer.trim().is_empty() {
            return Err(GenerateError::Parse(format!(
                "flashcard {} is missing a question or answer",
                index + 1
            )));
        }
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_response() {
        let body = r#"{"message":"ok","flashcards":[{"question":"Q1","answer":"A1"}]}"#;
        let parsed = parse_generation(body).unwrap();
        assert_eq!(parsed.message, "ok");
        assert_eq!(parsed.flashcards.len(), 1);
        assert_eq!(parsed.flashcards[0].context_links, None);
    }

    #[test]
    fn keeps_context_links() {
        let body = r#"{
            "message": "done",
            "flashcards": [
                {"question": "Q", "answer": "A", "contextLinks": ["https://example.org/a"]}
            ],
            "model": "ignored"
        }"#;
        let parsed = parse_generation(body).unwrap();
        assert_eq!(
            parsed.flashcards[0].context_links.as_deref(),
            Some(&["https://example.org/a".to_string()][..])
        );
    }

    #[test]
    fn missing_flashcards_is_parse_failure() {
        let err = parse_generation(r#"{"message":"ok"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::Parse(_)));
    }

    #[test]
    fn wrong_field_type_is_parse_failure() {
        let body = r#"{"message":"ok","flashcards":[{"question":1,"answer":"A"}]}"#;
        assert!(matches!(
            parse_generation(body),
            Err(GenerateError::Parse(_))
        ));
    }

    #[test]
    fn html_error_page_is_parse_failure() {
        assert!(matches!(
            parse_generation("<html>502 Bad Gateway</html>"),
            Err(GenerateError::Parse(_))
        ));
    }

    #[test]
    fn empty_deck_is_rejected() {
        let err = parse_generation(r#"{"message":"ok","flashcards":[]}"#).unwrap_err();
        assert_eq!(
            err,
            GenerateError::Parse("response contained no flashcards".to_string())
        );
    }

    #[test]
    fn blank_answer_is_rejected() {
        let body = r#"{"message":"ok","flashcards":[{"question":"Q","answer":"  "}]}"#;
        let err = parse_generation(body).unwrap_err();
        assert!(err.to_string().contains("flashcard 1"));
    }
}
