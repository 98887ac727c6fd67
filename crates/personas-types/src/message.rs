use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

entity_id! {
    /// Unique identifier for a chat message.
    MessageId
}

/// One turn in a conversation with a persona.
///
/// Also the response body of `POST /api/message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Id of the persona this message belongs to. Not checked against stored personas.
    pub persona_id: String,
    /// Who wrote the message, e.g. "user" or "persona".
    pub sender: String,
    pub text: String,
    /// Server-assigned at creation.
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/message`. Any client-supplied timestamp is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub persona_id: Option<String>,
    pub sender: Option<String>,
    pub text: Option<String>,
}

impl CreateMessageRequest {
    /// Names of required fields absent from the request.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("persona_id", self.persona_id.is_none()),
            ("sender", self.sender.is_none()),
            ("text", self.text.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_timestamp_is_not_part_of_request() {
        let request: CreateMessageRequest = serde_json::from_str(
            r#"{"persona_id":"p","sender":"user","text":"hi","timestamp":"1999-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_text() {
        let request: CreateMessageRequest =
            serde_json::from_str(r#"{"persona_id":"p","sender":"user"}"#).unwrap();
        assert_eq!(request.missing_fields(), vec!["text"]);
    }
}
