//! `chatline ask`: run one chat turn from the terminal.

use anyhow::{Context, Result};
use console::style;

use crate::state::AppState;

/// Send `message` through the chat service and print the reply.
pub async fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    let reply = state
        .chat_service
        .submit_turn(Some(message), &[])
        .await
        .context("Chat turn failed")?;

    if json {
        println!("{}", serde_json::json!({ "reply": reply }));
    } else {
        println!();
        println!("  {} {}", style("bot").magenta().bold(), reply.trim());
        println!();
    }

    Ok(())
}
