// src/registry.rs

use chrono::Utc;

use crate::constants::DEFAULT_CHAT_NAME;
use crate::errors::{ParleyError, ParleyResult};
use crate::models::{ChatState, Conversation, ConversationId, Message};

/// In-memory ordered collection of conversations plus the current selection.
///
/// All operations are synchronous and purely in-memory; persisting the state
/// after a mutation is the caller's concern.
#[derive(Debug, Default)]
pub struct ConversationRegistry {
    state: ChatState,
}

impl ConversationRegistry {
    pub fn new(state: ChatState) -> Self {
        ConversationRegistry { state }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.state.conversations
    }

    pub fn current_id(&self) -> Option<&ConversationId> {
        self.state.current_id.as_ref()
    }

    /// Returns the currently selected conversation, if any.
    pub fn current(&self) -> Option<&Conversation> {
        let id = self.state.current_id.as_ref()?;
        self.state.conversations.iter().find(|c| &c.id == id)
    }

    pub fn get(&self, id: &ConversationId) -> Option<&Conversation> {
        self.state.conversations.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &ConversationId) -> bool {
        self.get(id).is_some()
    }

    /// Creates a conversation at the front of the list and selects it.
    pub fn create(&mut self, name: impl Into<String>) -> &Conversation {
        let id = self.fresh_id();
        let conv = Conversation::new(id.clone(), name);
        self.state.conversations.insert(0, conv);
        self.state.current_id = Some(id);
        &self.state.conversations[0]
    }

    /// Ensures at least one conversation exists. Returns true if a default
    /// chat had to be created.
    pub fn seed_default(&mut self) -> bool {
        if self.state.conversations.is_empty() {
            self.create(DEFAULT_CHAT_NAME);
            true
        } else {
            false
        }
    }

    pub fn select(&mut self, id: &ConversationId) -> ParleyResult<()> {
        if !self.contains(id) {
            return Err(ParleyError::not_found(id.as_str()));
        }
        self.state.current_id = Some(id.clone());
        Ok(())
    }

    /// Renames a conversation. Blank names are ignored.
    pub fn rename(&mut self, id: &ConversationId, new_name: &str) -> ParleyResult<()> {
        let conv = self.get_mut(id)?;
        let trimmed = new_name.trim();
        if !trimmed.is_empty() {
            conv.name = trimmed.to_string();
        }
        Ok(())
    }

    /// Removes a conversation. If it was current, the selection falls back
    /// to the first remaining conversation, or is cleared if none remain.
    pub fn delete(&mut self, id: &ConversationId) -> ParleyResult<()> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| ParleyError::not_found(id.as_str()))?;
        self.state.conversations.remove(idx);
        if self.state.current_id.as_ref() == Some(id) {
            self.state.current_id = self.state.conversations.first().map(|c| c.id.clone());
        }
        Ok(())
    }

    pub fn clear_messages(&mut self, id: &ConversationId) -> ParleyResult<()> {
        self.get_mut(id)?.messages.clear();
        Ok(())
    }

    /// Removes every conversation and clears the selection.
    pub fn clear_all(&mut self) {
        self.state.conversations.clear();
        self.state.current_id = None;
    }

    pub fn append_message(&mut self, id: &ConversationId, message: Message) -> ParleyResult<()> {
        self.get_mut(id)?.messages.push(message);
        Ok(())
    }

    fn get_mut(&mut self, id: &ConversationId) -> ParleyResult<&mut Conversation> {
        self.state
            .conversations
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| ParleyError::not_found(id.as_str()))
    }

    fn index_of(&self, id: &ConversationId) -> Option<usize> {
        self.state.conversations.iter().position(|c| &c.id == id)
    }

    // Ids are derived from the creation time; two chats created within the
    // same millisecond would collide, so bump until free.
    fn fresh_id(&self) -> ConversationId {
        let mut ms = Utc::now().timestamp_millis();
        loop {
            let id = ConversationId::from_millis(ms);
            if !self.contains(&id) {
                return id;
            }
            ms += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;

    fn assert_selection_valid(registry: &ConversationRegistry) {
        match registry.current_id() {
            Some(id) => assert!(registry.contains(id), "current_id points at a missing conversation"),
            None => assert!(
                registry.conversations().is_empty(),
                "current_id absent while conversations exist"
            ),
        }
    }

    #[test]
    fn create_prepends_and_selects() {
        let mut registry = ConversationRegistry::default();
        registry.create("New Chat");

        assert_eq!(registry.conversations().len(), 1);
        let current = registry.current().expect("current conversation");
        assert_eq!(current.name, "New Chat");
        assert!(current.messages.is_empty());

        let first_id = current.id.clone();
        registry.create("Second");
        assert_eq!(registry.conversations()[0].name, "Second");
        assert_eq!(registry.conversations()[1].id, first_id);
        assert_eq!(registry.current().unwrap().name, "Second");
    }

    #[test]
    fn created_ids_are_unique() {
        let mut registry = ConversationRegistry::default();
        for _ in 0..5 {
            registry.create("chat");
        }
        let mut ids: Vec<_> = registry
            .conversations()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn append_message_to_current() {
        let mut registry = ConversationRegistry::default();
        registry.create("New Chat");
        let id = registry.current_id().unwrap().clone();

        let msg = Message::sent("hi");
        registry.append_message(&id, msg.clone()).unwrap();

        let current = registry.current().unwrap();
        assert_eq!(current.messages.len(), 1);
        assert_eq!(current.messages.last(), Some(&msg));
    }

    #[test]
    fn append_message_to_missing_id_fails() {
        let mut registry = ConversationRegistry::default();
        registry.create("New Chat");
        let missing = ConversationId::from_millis(1);
        let result = registry.append_message(&missing, Message::sent("hi"));
        assert!(matches!(result, Err(ParleyError::ConversationNotFound { .. })));
    }

    #[test]
    fn select_missing_id_fails_without_changing_selection() {
        let mut registry = ConversationRegistry::default();
        registry.create("New Chat");
        let current = registry.current_id().unwrap().clone();

        let missing = ConversationId::from_millis(1);
        assert!(registry.select(&missing).is_err());
        assert_eq!(registry.current_id(), Some(&current));
    }

    #[test]
    fn rename_replaces_name_and_ignores_blank() {
        let mut registry = ConversationRegistry::default();
        registry.create("New Chat");
        let id = registry.current_id().unwrap().clone();

        registry.rename(&id, "  Ideas  ").unwrap();
        assert_eq!(registry.current().unwrap().name, "Ideas");

        registry.rename(&id, "   ").unwrap();
        assert_eq!(registry.current().unwrap().name, "Ideas");
    }

    #[test]
    fn delete_only_conversation_empties_registry() {
        let mut registry = ConversationRegistry::default();
        registry.create("New Chat");
        let id = registry.current_id().unwrap().clone();

        registry.delete(&id).unwrap();
        assert!(registry.conversations().is_empty());
        assert!(registry.current_id().is_none());

        // The load path re-seeds a default conversation.
        assert!(registry.seed_default());
        assert_eq!(registry.conversations().len(), 1);
        assert_eq!(registry.current().unwrap().name, "New Chat");
    }

    #[test]
    fn delete_current_falls_back_to_first_remaining() {
        let mut registry = ConversationRegistry::default();
        registry.create("older");
        registry.create("newer");
        let newer = registry.current_id().unwrap().clone();

        registry.delete(&newer).unwrap();
        assert_eq!(registry.current().unwrap().name, "older");
        assert_selection_valid(&registry);
    }

    #[test]
    fn delete_non_current_keeps_selection() {
        let mut registry = ConversationRegistry::default();
        registry.create("older");
        let older = registry.current_id().unwrap().clone();
        registry.create("newer");
        let newer = registry.current_id().unwrap().clone();

        registry.delete(&older).unwrap();
        assert_eq!(registry.current_id(), Some(&newer));
        assert_selection_valid(&registry);
    }

    #[test]
    fn clear_messages_truncates() {
        let mut registry = ConversationRegistry::default();
        registry.create("New Chat");
        let id = registry.current_id().unwrap().clone();
        registry.append_message(&id, Message::sent("one")).unwrap();
        registry.append_message(&id, Message::received("two")).unwrap();

        registry.clear_messages(&id).unwrap();
        assert!(registry.current().unwrap().messages.is_empty());
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut registry = ConversationRegistry::default();
        registry.create("a");
        registry.create("b");

        registry.clear_all();
        assert!(registry.conversations().is_empty());
        assert!(registry.current_id().is_none());
        assert!(registry.seed_default());

        registry.clear_all();
        assert!(registry.conversations().is_empty());
        assert!(registry.current_id().is_none());
        assert!(registry.seed_default());

        assert_eq!(registry.conversations().len(), 1);
        assert_eq!(registry.current().unwrap().name, "New Chat");
        assert!(registry.current().unwrap().messages.is_empty());
    }

    #[test]
    fn selection_stays_valid_across_operation_sequence() {
        let mut registry = ConversationRegistry::default();
        registry.seed_default();
        assert_selection_valid(&registry);

        registry.create("work");
        assert_selection_valid(&registry);

        let work = registry.current_id().unwrap().clone();
        registry
            .append_message(&work, Message::new(Sender::Sent, "status?"))
            .unwrap();
        assert_selection_valid(&registry);

        registry.rename(&work, "standup").unwrap();
        assert_selection_valid(&registry);

        registry.delete(&work).unwrap();
        assert_selection_valid(&registry);

        registry.clear_all();
        assert_selection_valid(&registry);

        registry.seed_default();
        assert_selection_valid(&registry);
    }
}
