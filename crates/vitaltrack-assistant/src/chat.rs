//! Keyword responder and conversation transcript.

use serde::{Deserialize, Serialize};

use crate::responses::{FALLBACK_RESPONSE, GREETING, HEALTH_RESPONSES};

/// First-match keyword responder over an ordered table.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedResponder {
    table: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl Default for ScriptedResponder {
    fn default() -> Self {
        Self::new(HEALTH_RESPONSES, FALLBACK_RESPONSE)
    }
}

impl ScriptedResponder {
    /// Keywords in `table` must be lower-case.
    pub fn new(table: &'static [(&'static str, &'static str)], fallback: &'static str) -> Self {
        Self { table, fallback }
    }

    fn lookup(&self, input: &str) -> Option<&'static (&'static str, &'static str)> {
        let input = input.to_lowercase();
        self.table.iter().find(|(keyword, _)| input.contains(keyword))
    }

    /// The matched keyword, if any.
    ///
    /// Input is lower-cased and scanned for each keyword as a substring, in
    /// table order, so "sleepy" matches `sleep`.
    pub fn match_keyword(&self, input: &str) -> Option<&'static str> {
        self.lookup(input).map(|(keyword, _)| *keyword)
    }

    /// Response for the first matching keyword, or the fallback.
    pub fn respond(&self, input: &str) -> &'static str {
        self.lookup(input)
            .map(|(_, response)| *response)
            .unwrap_or(self.fallback)
    }
}

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
        }
    }
}

/// Chat transcript, opened with the greeting.
#[derive(Debug, Clone)]
pub struct Conversation {
    responder: ScriptedResponder,
    messages: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(ScriptedResponder::default())
    }
}

impl Conversation {
    pub fn new(responder: ScriptedResponder) -> Self {
        Self {
            responder,
            messages: vec![ChatMessage::bot(GREETING)],
        }
    }

    /// Record the user's message and the scripted reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn send(&mut self, input: &str) -> Option<&'static str> {
        if input.trim().is_empty() {
            return None;
        }
        let reply = self.responder.respond(input);
        tracing::debug!(
            keyword = self.responder.match_keyword(input).unwrap_or("<none>"),
            "chat reply selected"
        );
        self.messages.push(ChatMessage::user(input));
        self.messages.push(ChatMessage::bot(reply));
        Some(reply)
    }

    /// Append a user/bot exchange verbatim.
    pub fn push_exchange(&mut self, user: &str, bot: &str) {
        self.messages.push(ChatMessage::user(user));
        self.messages.push(ChatMessage::bot(bot));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
