//! Message repository trait definition.

use personas_types::error::RepositoryError;
use personas_types::message::Message;

/// Repository trait for chat message persistence.
pub trait MessageRepository: Send + Sync {
    /// Persist a new message.
    fn create(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// All messages for a persona, ordered by timestamp ASC (ties in insertion
    /// order). Empty when the persona has none.
    fn list_for_persona(
        &self,
        persona_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
