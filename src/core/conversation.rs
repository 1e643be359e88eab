//! In-memory conversation log for a single chat session.

use crate::core::message::{Message, Role};

/// Ordered, append-only log of the messages exchanged in the active session.
///
/// Nothing is persisted and there is no size cap; the store lives exactly as
/// long as the session that owns it.
#[derive(Debug, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) -> &Message {
        self.messages.push(Message::new(role, content));
        &self.messages[self.messages.len() - 1]
    }

    /// Read-only view of every message in chronological order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Swap in a fresh, empty log. Any snapshot taken before the call keeps
    /// its own copy of the old messages.
    pub fn clear(&mut self) {
        self.messages = Vec::new();
    }
}
