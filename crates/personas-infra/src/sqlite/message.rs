//! SQLite chat message repository implementation.

use personas_core::repository::message::MessageRepository;
use personas_types::error::RepositoryError;
use personas_types::message::{Message, MessageId};
use sqlx::Row;

use super::codec::{format_datetime, parse_datetime, storage_error};
use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn row_to_message(row: &sqlx::sqlite::SqliteRow) -> Result<Message, RepositoryError> {
    let get = |col: &str| -> Result<String, RepositoryError> {
        row.try_get(col)
            .map_err(storage_error)
    };

    let id = get("id")?
        .parse::<MessageId>()
        .map_err(|e| RepositoryError::Query(format!("invalid message id: {e}")))?;

    Ok(Message {
        id,
        persona_id: get("persona_id")?,
        sender: get("sender")?,
        text: get("text")?,
        timestamp: parse_datetime(&get("timestamp")?)?,
    })
}

impl MessageRepository for SqliteMessageRepository {
    async fn create(&self, message: &Message) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO messages (id, persona_id, sender, text, timestamp) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(message.id.to_string())
        .bind(&message.persona_id)
        .bind(&message.sender)
        .bind(&message.text)
        .bind(format_datetime(&message.timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn list_for_persona(&self, persona_id: &str) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM messages WHERE persona_id = ? ORDER BY timestamp ASC, rowid ASC",
        )
        .bind(persona_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(storage_error)?;

        rows.iter().map(row_to_message).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::{database_url_for, DatabasePool};
    use chrono::{Duration, TimeZone, Utc};

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url_for(&dir.path().join("test.db"));
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn message_at(persona_id: &str, text: &str, offset_secs: i64) -> Message {
        let base = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        Message {
            id: MessageId::new(),
            persona_id: persona_id.to_string(),
            sender: "user".to_string(),
            text: text.to_string(),
            timestamp: base + Duration::seconds(offset_secs),
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_timestamp_not_insertion() {
        let repo = SqliteMessageRepository::new(test_pool().await);

        // Inserted out of order
        for (text, offset) in [("third", 30), ("first", 5), ("fourth", 3600), ("second", 10)] {
            repo.create(&message_at("p1", text, offset)).await.unwrap();
        }

        let messages = repo.list_for_persona("p1").await.unwrap();
        let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third", "fourth"]);
        assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[tokio::test]
    async fn test_equal_timestamps_keep_insertion_order() {
        let repo = SqliteMessageRepository::new(test_pool().await);
        repo.create(&message_at("p1", "a", 0)).await.unwrap();
        repo.create(&message_at("p1", "b", 0)).await.unwrap();

        let texts: Vec<String> = repo
            .list_for_persona("p1")
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_persona() {
        let repo = SqliteMessageRepository::new(test_pool().await);
        repo.create(&message_at("p1", "mine", 0)).await.unwrap();
        repo.create(&message_at("p2", "theirs", 1)).await.unwrap();

        let messages = repo.list_for_persona("p1").await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "mine");
    }

    #[tokio::test]
    async fn test_list_for_unknown_persona_is_empty() {
        let repo = SqliteMessageRepository::new(test_pool().await);
        assert!(repo.list_for_persona("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_message_round_trip() {
        let repo = SqliteMessageRepository::new(test_pool().await);
        let message = message_at("p1", "Hello there", 42);
        repo.create(&message).await.unwrap();

        let found = repo.list_for_persona("p1").await.unwrap();
        assert_eq!(found, vec![message]);
    }
}
