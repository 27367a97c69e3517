use chrono::Utc;
use tracing::info;

use super::ids::IdSequence;
use super::models::{ChatMessage, Sender};

pub const GREETING: &str =
    "Hi! I'm here to help you track your pet's activities. How can I assist you today?";

/// Chat transcript. Never empty: it starts with, and resets to, the greeting.
#[derive(Debug)]
pub struct ChatStore {
    messages: Vec<ChatMessage>,
    ids: IdSequence,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    pub fn new() -> Self {
        let mut ids = IdSequence::new();
        let messages = vec![Self::greeting(&mut ids)];
        Self { messages, ids }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends a user message and the bot reply to it as one turn.
    pub fn record_turn(&mut self, user_text: String, reply: String) -> (ChatMessage, ChatMessage) {
        let user = self.message(Sender::User, user_text);
        let bot = self.message(Sender::Bot, reply);
        self.messages.push(user.clone());
        self.messages.push(bot.clone());
        (user, bot)
    }

    pub fn clear(&mut self) {
        self.messages = vec![Self::greeting(&mut self.ids)];
        info!("Chat history cleared");
    }

    fn message(&mut self, sender: Sender, text: String) -> ChatMessage {
        ChatMessage {
            id: self.ids.next_id(),
            sender,
            text,
            timestamp: Utc::now(),
        }
    }

    fn greeting(ids: &mut IdSequence) -> ChatMessage {
        ChatMessage {
            id: ids.next_id(),
            sender: Sender::Bot,
            text: GREETING.to_string(),
            timestamp: Utc::now(),
        }
    }
}
