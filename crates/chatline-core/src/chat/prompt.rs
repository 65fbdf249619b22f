//! Prompt builder for a single chat turn.
//!
//! Renders the persona line, a bounded window of caller-supplied history, and
//! the generation cue into one plain-text completion prompt.
//!
//! Layout:
//! ```text
//! {persona}
//! User: {older message}
//! Assistant: {older reply}
//! User: {current message}
//! Assistant:
//! ```

use chatline_types::conversation::HistoryEntry;

/// Number of trailing history entries that reach the prompt. Older entries are
/// dropped, not summarized.
pub const HISTORY_WINDOW: usize = 5;

/// Builds completion prompts. Stateless.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the complete prompt for `message`.
    ///
    /// Only the last [`HISTORY_WINDOW`] entries of `history` are rendered, in
    /// their original order.
    pub fn build(persona: &str, history: &[HistoryEntry], message: &str) -> String {
        let window = &history[history.len().saturating_sub(HISTORY_WINDOW)..];

        let mut prompt = String::with_capacity(
            persona.len()
                + message.len()
                + window.iter().map(|e| e.text.len() + 12).sum::<usize>()
                + 24,
        );

        prompt.push_str(persona);
        prompt.push('\n');

        for entry in window {
            prompt.push_str(entry.role.prompt_label());
            prompt.push_str(": ");
            prompt.push_str(&entry.text);
            prompt.push('\n');
        }

        prompt.push_str("User: ");
        prompt.push_str(message);
        prompt.push_str("\nAssistant:");
        prompt
    }
}
