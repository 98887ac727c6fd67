//! Message service: append chat turns and read a persona's conversation.

use personas_types::error::{MessageError, ValidationError};
use personas_types::message::{CreateMessageRequest, Message, MessageId};
use personas_types::timestamp;

use crate::repository::message::MessageRepository;

/// Service for chat messages.
pub struct MessageService<R: MessageRepository> {
    repo: R,
}

impl<R: MessageRepository> MessageService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and store a message. The timestamp is assigned here.
    pub async fn create_message(
        &self,
        request: CreateMessageRequest,
    ) -> Result<Message, MessageError> {
        let missing = request.missing_fields();
        let CreateMessageRequest {
            persona_id: Some(persona_id),
            sender: Some(sender),
            text: Some(text),
        } = request
        else {
            return Err(ValidationError::MissingFields(missing).into());
        };

        let message = Message {
            id: MessageId::new(),
            persona_id,
            sender,
            text,
            timestamp: timestamp::now(),
        };

        self.repo
            .create(&message)
            .await
            .map_err(|e| MessageError::StorageError(e.to_string()))?;

        tracing::info!(
            message_id = %message.id,
            persona_id = %message.persona_id,
            sender = %message.sender,
            "message stored"
        );
        Ok(message)
    }

    /// A persona's messages in ascending timestamp order; empty if none.
    pub async fn get_messages(&self, persona_id: &str) -> Result<Vec<Message>, MessageError> {
        let messages = self
            .repo
            .list_for_persona(persona_id)
            .await
            .map_err(|e| MessageError::StorageError(e.to_string()))?;

        tracing::debug!(persona_id, count = messages.len(), "loaded messages");
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use personas_types::error::RepositoryError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryMessages {
        rows: Mutex<Vec<Message>>,
    }

    impl MessageRepository for InMemoryMessages {
        async fn create(&self, message: &Message) -> Result<(), RepositoryError> {
            self.rows.lock().unwrap().push(message.clone());
            Ok(())
        }

        async fn list_for_persona(&self, persona_id: &str) -> Result<Vec<Message>, RepositoryError> {
            let mut found: Vec<Message> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.persona_id == persona_id)
                .cloned()
                .collect();
            found.sort_by_key(|m| m.timestamp);
            Ok(found)
        }
    }

    fn say(persona_id: &str, sender: &str, text: &str) -> CreateMessageRequest {
        CreateMessageRequest {
            persona_id: Some(persona_id.to_string()),
            sender: Some(sender.to_string()),
            text: Some(text.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let service = MessageService::new(InMemoryMessages::default());
        let before = chrono::Utc::now();

        let message = service
            .create_message(say("p1", "user", "Hello"))
            .await
            .unwrap();

        assert_eq!(message.text, "Hello");
        assert!(message.timestamp <= chrono::Utc::now());
        assert!(message.timestamp >= before - chrono::Duration::milliseconds(1));
    }

    #[tokio::test]
    async fn test_get_messages_filters_by_persona() {
        let service = MessageService::new(InMemoryMessages::default());
        service.create_message(say("p1", "user", "a")).await.unwrap();
        service.create_message(say("p2", "user", "b")).await.unwrap();
        service.create_message(say("p1", "persona", "c")).await.unwrap();

        let messages = service.get_messages("p1").await.unwrap();
        let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_get_messages_for_unknown_persona_is_empty() {
        let service = MessageService::new(InMemoryMessages::default());
        assert!(service.get_messages("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_sender() {
        let service = MessageService::new(InMemoryMessages::default());
        let mut request = say("p1", "user", "hi");
        request.sender = None;

        let err = service.create_message(request).await.unwrap_err();
        assert_eq!(err.to_string(), "missing required field(s): sender");
    }
}
