//! `personas messages <persona_id>`.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

pub async fn list_messages(state: &AppState, persona_id: &str, json: bool) -> Result<()> {
    let messages = state.message_service.get_messages(persona_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    if messages.is_empty() {
        println!();
        println!("  {}", style(format!("No messages for persona {persona_id}")).dim());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Time").fg(Color::White),
        Cell::new("Sender").fg(Color::White),
        Cell::new("Text").fg(Color::White),
    ]);

    for message in &messages {
        let sender_color = if message.sender == "user" {
            Color::Cyan
        } else {
            Color::Magenta
        };
        table.add_row(vec![
            Cell::new(message.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::new(&message.sender).fg(sender_color),
            Cell::new(&message.text),
        ]);
    }

    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use personas_infra::sqlite::pool::{DatabasePool, database_url_for};
    use personas_types::config::ServiceConfig;
    use personas_types::message::CreateMessageRequest;

    #[tokio::test]
    async fn test_list_messages_empty_and_populated() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url_for(&dir.path().join("cli.db"));
        let pool = DatabasePool::new(&url).await.unwrap();
        let state = AppState::from_parts(
            pool,
            ServiceConfig::default(),
            dir.path().to_path_buf(),
            url,
        );

        list_messages(&state, "p1", false).await.unwrap();

        state
            .message_service
            .create_message(CreateMessageRequest {
                persona_id: Some("p1".to_string()),
                sender: Some("user".to_string()),
                text: Some("hello".to_string()),
            })
            .await
            .unwrap();

        list_messages(&state, "p1", true).await.unwrap();
        list_messages(&state, "p1", false).await.unwrap();
    }
}
