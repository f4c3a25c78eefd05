//! In-memory chat sessions: the active conversation plus the chats saved
//! from it, keyed by a sequential id starting at 1.

use crate::types::{Message, SavedChat};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct ChatSession {
    conversation: Vec<Message>,
    saved: BTreeMap<u32, SavedChat>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.conversation
    }

    pub fn len(&self) -> usize {
        self.conversation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversation.is_empty()
    }

    pub fn append(&mut self, message: Message) {
        self.conversation.push(message);
    }

    /// Replace the text of the message at `index`, keeping its sender.
    ///
    /// Returns `false` without touching anything when `new_text` is blank or
    /// the index is out of range.
    pub fn edit(&mut self, index: usize, new_text: &str) -> bool {
        if new_text.trim().is_empty() {
            tracing::debug!("Ignoring edit of message {} with blank text", index);
            return false;
        }
        match self.conversation.get_mut(index) {
            Some(message) => {
                message.text = new_text.to_string();
                true
            }
            None => {
                tracing::debug!("Ignoring edit of missing message {}", index);
                false
            }
        }
    }

    /// Snapshot the active conversation into a new saved chat and clear it.
    /// Returns the new id, or `None` when there was nothing to save.
    pub fn save(&mut self) -> Option<u32> {
        if self.conversation.is_empty() {
            return None;
        }
        let id = self.saved.len() as u32 + 1;
        let messages = std::mem::take(&mut self.conversation);
        tracing::info!("Saved chat {} with {} messages", id, messages.len());
        self.saved.insert(id, SavedChat { id, messages });
        Some(id)
    }

    /// Load a copy of a saved chat into the active conversation. An unknown
    /// id leaves the conversation empty.
    pub fn select(&mut self, id: u32) {
        self.conversation = match self.saved.get(&id) {
            Some(chat) => {
                tracing::info!("Selected saved chat {}", id);
                chat.messages.clone()
            }
            None => {
                tracing::debug!("No saved chat with id {}", id);
                Vec::new()
            }
        };
    }

    pub fn saved_chat(&self, id: u32) -> Option<&SavedChat> {
        self.saved.get(&id)
    }

    /// Saved chats in creation order.
    pub fn saved_chats(&self) -> impl Iterator<Item = &SavedChat> {
        self.saved.values()
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }
}
