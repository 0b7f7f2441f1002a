// src/dialogs.rs

use crate::errors::{ParleyError, ParleyResult};
use crate::models::ConversationId;
use crate::registry::ConversationRegistry;

/// Capability interface for the yes/no and text prompts that gate
/// destructive operations, decoupling the registry's callers from how the
/// prompts are presented.
pub trait Dialogs {
    /// Presents a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Prompts for a line of text. `None` means the user cancelled.
    fn prompt_text(&mut self, message: &str, default: &str) -> Option<String>;
}

/// A pre-collected answer, for interfaces that gather the response before
/// invoking the guarded operation (the TUI modals work this way).
#[derive(Debug, Default)]
pub struct Answer {
    pub yes: bool,
    pub text: Option<String>,
}

impl Answer {
    pub fn yes() -> Self {
        Answer {
            yes: true,
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Answer {
            yes: true,
            text: Some(text.into()),
        }
    }
}

impl Dialogs for Answer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.yes
    }

    fn prompt_text(&mut self, _message: &str, _default: &str) -> Option<String> {
        self.text.take()
    }
}

/// Deletes `id` after confirmation and reseeds the registry so the
/// conversation list never stays empty. Returns whether anything happened.
pub fn delete_confirmed(
    registry: &mut ConversationRegistry,
    ui: &mut dyn Dialogs,
    id: &ConversationId,
) -> ParleyResult<bool> {
    if !ui.confirm("Delete this conversation?") {
        return Ok(false);
    }
    registry.delete(id)?;
    registry.seed_default();
    Ok(true)
}

/// Truncates the messages of `id` after confirmation.
pub fn clear_messages_confirmed(
    registry: &mut ConversationRegistry,
    ui: &mut dyn Dialogs,
    id: &ConversationId,
) -> ParleyResult<bool> {
    if !ui.confirm("Clear messages in this chat?") {
        return Ok(false);
    }
    registry.clear_messages(id)?;
    Ok(true)
}

/// Removes every conversation after confirmation, then reseeds.
pub fn clear_all_confirmed(registry: &mut ConversationRegistry, ui: &mut dyn Dialogs) -> bool {
    if !ui.confirm("Delete all chats?") {
        return false;
    }
    registry.clear_all();
    registry.seed_default();
    true
}

/// Renames `id` with a prompted name, defaulting to the current one.
/// Blank input leaves the name unchanged; cancelling does nothing.
pub fn rename_prompted(
    registry: &mut ConversationRegistry,
    ui: &mut dyn Dialogs,
    id: &ConversationId,
) -> ParleyResult<bool> {
    let current = registry
        .get(id)
        .map(|c| c.name.clone())
        .ok_or_else(|| ParleyError::not_found(id.as_str()))?;
    match ui.prompt_text("Rename chat:", &current) {
        Some(name) => {
            registry.rename(id, &name)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a scripted sequence of answers.
    struct Scripted {
        confirms: VecDeque<bool>,
        texts: VecDeque<Option<String>>,
    }

    impl Scripted {
        fn confirming(answers: &[bool]) -> Self {
            Scripted {
                confirms: answers.iter().copied().collect(),
                texts: VecDeque::new(),
            }
        }

        fn prompting(answers: &[Option<&str>]) -> Self {
            Scripted {
                confirms: VecDeque::new(),
                texts: answers.iter().map(|t| t.map(str::to_string)).collect(),
            }
        }
    }

    impl Dialogs for Scripted {
        fn confirm(&mut self, _message: &str) -> bool {
            self.confirms.pop_front().unwrap_or(false)
        }

        fn prompt_text(&mut self, _message: &str, _default: &str) -> Option<String> {
            self.texts.pop_front().flatten()
        }
    }

    fn seeded_registry() -> ConversationRegistry {
        let mut registry = ConversationRegistry::default();
        registry.seed_default();
        registry
    }

    #[test]
    fn declined_delete_leaves_the_conversation() {
        let mut registry = seeded_registry();
        let id = registry.current_id().unwrap().clone();
        let mut ui = Scripted::confirming(&[false]);

        let deleted = delete_confirmed(&mut registry, &mut ui, &id).unwrap();
        assert!(!deleted);
        assert!(registry.contains(&id));
    }

    #[test]
    fn confirmed_delete_removes_and_reseeds() {
        let mut registry = seeded_registry();
        let id = registry.current_id().unwrap().clone();
        let mut ui = Scripted::confirming(&[true]);

        let deleted = delete_confirmed(&mut registry, &mut ui, &id).unwrap();
        assert!(deleted);
        assert!(!registry.contains(&id));
        assert_eq!(registry.conversations().len(), 1);
        assert!(registry.current().is_some());
    }

    #[test]
    fn confirmed_clear_messages_truncates() {
        let mut registry = seeded_registry();
        let id = registry.current_id().unwrap().clone();
        registry
            .append_message(&id, crate::models::Message::sent("hi"))
            .unwrap();
        let mut ui = Scripted::confirming(&[true]);

        assert!(clear_messages_confirmed(&mut registry, &mut ui, &id).unwrap());
        assert!(registry.current().unwrap().messages.is_empty());
    }

    #[test]
    fn clear_all_reseeds_only_when_confirmed() {
        let mut registry = seeded_registry();
        registry.create("second");

        let mut ui = Scripted::confirming(&[false]);
        assert!(!clear_all_confirmed(&mut registry, &mut ui));
        assert_eq!(registry.conversations().len(), 2);

        let mut ui = Scripted::confirming(&[true]);
        assert!(clear_all_confirmed(&mut registry, &mut ui));
        assert_eq!(registry.conversations().len(), 1);
        assert_eq!(registry.current().unwrap().name, "New Chat");
    }

    #[test]
    fn rename_applies_prompted_name() {
        let mut registry = seeded_registry();
        let id = registry.current_id().unwrap().clone();
        let mut ui = Scripted::prompting(&[Some("Ideas")]);

        assert!(rename_prompted(&mut registry, &mut ui, &id).unwrap());
        assert_eq!(registry.current().unwrap().name, "Ideas");
    }

    #[test]
    fn cancelled_rename_changes_nothing() {
        let mut registry = seeded_registry();
        let id = registry.current_id().unwrap().clone();
        let mut ui = Scripted::prompting(&[None]);

        assert!(!rename_prompted(&mut registry, &mut ui, &id).unwrap());
        assert_eq!(registry.current().unwrap().name, "New Chat");
    }

    #[test]
    fn rename_on_missing_id_is_not_found() {
        let mut registry = seeded_registry();
        let missing = crate::models::ConversationId::from_millis(1);
        let mut ui = Scripted::prompting(&[Some("x")]);

        assert!(rename_prompted(&mut registry, &mut ui, &missing).is_err());
    }

    #[test]
    fn answer_replays_a_collected_response() {
        let mut registry = seeded_registry();
        let id = registry.current_id().unwrap().clone();

        let mut answer = Answer::text("Standup notes");
        assert!(rename_prompted(&mut registry, &mut answer, &id).unwrap());
        assert_eq!(registry.current().unwrap().name, "Standup notes");
    }
}
