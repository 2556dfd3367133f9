//! Assistant conversation state.
//!
//! A question is shown immediately with a pending answer; the answer (or an
//! error rendered as markdown) fills in the last pending entry.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatEntry;

#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    pub entries: Vec<ChatEntry>,
    /// Let the assistant search the web for the next question.
    pub search: bool,
}

impl ChatLog {
    pub fn from_history(entries: Vec<ChatEntry>) -> Self {
        Self { entries, search: false }
    }

    /// Queue `question` with a pending answer. Returns the trimmed question,
    /// or `None` when it is blank or an answer is still pending.
    pub fn ask(&mut self, question: &str) -> Option<String> {
        let question = question.trim();
        if question.is_empty() || self.is_waiting() {
            return None;
        }
        self.entries.push(ChatEntry { question: question.to_owned(), response: None });
        Some(question.to_owned())
    }

    /// Fill the last pending entry with the answer or an error message.
    pub fn resolve(&mut self, answer: Result<String, String>) {
        let Some(last) = self.entries.last_mut().filter(|e| e.response.is_none()) else {
            return;
        };
        last.response = Some(match answer {
            Ok(text) => text,
            Err(message) => format!("**Error:** {message}"),
        });
    }

    pub fn is_waiting(&self) -> bool {
        self.entries.last().is_some_and(|e| e.response.is_none())
    }
}
