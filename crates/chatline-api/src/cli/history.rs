//! `chatline history`: print stored turns.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

/// Longest message shown in a table cell before truncation.
const CELL_LIMIT: usize = 60;

/// Print every stored turn as a table (or JSON with `--json`).
pub async fn print_history(state: &AppState, json: bool) -> Result<()> {
    let turns = state.chat_service.list_turns().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&turns)?);
        return Ok(());
    }

    if turns.is_empty() {
        println!();
        println!(
            "  {} No conversations yet. Start one with: {}",
            style("i").blue().bold(),
            style("chatline ask \"hello\"").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("When").fg(Color::White),
        Cell::new("You").fg(Color::White),
        Cell::new("Bot").fg(Color::White),
    ]);

    for turn in &turns {
        table.add_row(vec![
            Cell::new(turn.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()).fg(Color::DarkGrey),
            Cell::new(truncate(&turn.user, CELL_LIMIT)).fg(Color::Cyan),
            Cell::new(truncate(&turn.bot, CELL_LIMIT)).fg(Color::White),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} turn{}",
        style(turns.len()).bold(),
        if turns.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Shorten `text` to at most `limit` characters, ending in `...` when cut.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept: String = text.chars().take(limit.saturating_sub(3)).collect();
    format!("{kept}...")
}
