use std::time::Instant;

use log::{debug, error, warn};

use crate::constants::{DEFAULT_CHAT_NAME, SPINNER_FRAME_MS};
use crate::dialogs::{self, Answer};
use crate::errors::ParleyResult;
use crate::models::{ConversationId, Message};
use crate::registry::ConversationRegistry;
use crate::reply::{IncomingReply, ReplyScheduler};
use crate::storage::StateStore;
use crate::theme::Theme;

/// A destructive operation waiting behind its confirmation gate.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingAction {
    DeleteConversation(ConversationId),
    ClearMessages(ConversationId),
    ClearAll,
}

impl PendingAction {
    pub fn message(&self) -> &'static str {
        match self {
            PendingAction::DeleteConversation(_) => "Delete this conversation?",
            PendingAction::ClearMessages(_) => "Clear messages in this chat?",
            PendingAction::ClearAll => "Delete all chats?",
        }
    }
}

/// What the keyboard is currently driving: the chat itself or one of the
/// modal overlays.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Chat,
    Confirm(PendingAction),
    Rename { id: ConversationId, buffer: String },
    QuitConfirm,
}

pub struct App {
    pub registry: ConversationRegistry,
    pub store: StateStore,
    pub scheduler: ReplyScheduler,
    pub theme: Theme,
    pub mode: Mode,
    pub input: String,
    pub chat_scroll: u16,
    pub should_quit: bool,
    pub spinner_frame: usize,
    last_frame_update: Instant,
}

impl App {
    /// Loads the persisted state, seeds a default conversation if none
    /// exists, and persists the seed immediately.
    pub fn new(store: StateStore, scheduler: ReplyScheduler) -> ParleyResult<Self> {
        let mut registry = ConversationRegistry::new(store.load_state());
        if registry.seed_default() {
            store.save_state(registry.state())?;
        }
        let theme = store.load_theme();

        Ok(App {
            registry,
            store,
            scheduler,
            theme,
            mode: Mode::Chat,
            input: String::new(),
            chat_scroll: 0,
            should_quit: false,
            spinner_frame: 0,
            last_frame_update: Instant::now(),
        })
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save_state(self.registry.state()) {
            error!("failed to persist chat state: {e}");
        }
    }

    /// Appends the input buffer as a sent message and schedules the
    /// simulated reply. Blank input is ignored.
    pub fn send_input(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        let Some(current) = self.registry.current_id().cloned() else {
            return;
        };
        self.input.clear();
        if let Err(e) = self.registry.append_message(&current, Message::sent(&text)) {
            warn!("dropping message for missing conversation: {e}");
            return;
        }
        self.persist();
        self.scheduler.schedule(current, &text);
        self.scroll_to_bottom();
    }

    /// Appends a delivered reply, unless its conversation was deleted while
    /// the reply was in flight.
    pub fn deliver_reply(&mut self, reply: IncomingReply) {
        if !self.registry.contains(&reply.conversation_id) {
            debug!(
                "dropping reply for deleted conversation {}",
                reply.conversation_id
            );
            return;
        }
        if let Err(e) = self
            .registry
            .append_message(&reply.conversation_id, Message::received(reply.text))
        {
            warn!("failed to append reply: {e}");
            return;
        }
        self.persist();
        if self.registry.current_id() == Some(&reply.conversation_id) {
            self.scroll_to_bottom();
        }
    }

    pub fn new_conversation(&mut self) {
        self.registry.create(DEFAULT_CHAT_NAME);
        self.persist();
        self.scroll_to_bottom();
    }

    /// Moves the sidebar selection by `delta` and persists it.
    pub fn move_selection(&mut self, delta: i32) {
        let conversations = self.registry.conversations();
        if conversations.is_empty() {
            return;
        }
        let current_idx = self
            .registry
            .current_id()
            .and_then(|id| conversations.iter().position(|c| &c.id == id))
            .unwrap_or(0);
        let next_idx = current_idx
            .saturating_add_signed(delta as isize)
            .min(conversations.len() - 1);
        let next_id = conversations[next_idx].id.clone();
        if self.registry.select(&next_id).is_ok() {
            self.persist();
            self.scroll_to_bottom();
        }
    }

    pub fn request_delete(&mut self) {
        if let Some(id) = self.registry.current_id().cloned() {
            self.mode = Mode::Confirm(PendingAction::DeleteConversation(id));
        }
    }

    pub fn request_clear_messages(&mut self) {
        if let Some(id) = self.registry.current_id().cloned() {
            self.mode = Mode::Confirm(PendingAction::ClearMessages(id));
        }
    }

    pub fn request_clear_all(&mut self) {
        self.mode = Mode::Confirm(PendingAction::ClearAll);
    }

    pub fn request_rename(&mut self) {
        if let Some(conv) = self.registry.current() {
            self.mode = Mode::Rename {
                id: conv.id.clone(),
                buffer: conv.name.clone(),
            };
        }
    }

    /// Executes the pending destructive action. Replies still in flight for
    /// a deleted conversation are cancelled so they can never land on a
    /// stale or reused id.
    pub fn confirm_pending(&mut self) {
        let Mode::Confirm(action) = std::mem::replace(&mut self.mode, Mode::Chat) else {
            return;
        };
        let mut answer = Answer::yes();
        let outcome = match &action {
            PendingAction::DeleteConversation(id) => {
                self.scheduler.cancel(id);
                dialogs::delete_confirmed(&mut self.registry, &mut answer, id)
            }
            PendingAction::ClearMessages(id) => {
                dialogs::clear_messages_confirmed(&mut self.registry, &mut answer, id)
            }
            PendingAction::ClearAll => {
                self.scheduler.cancel_all();
                Ok(dialogs::clear_all_confirmed(&mut self.registry, &mut answer))
            }
        };
        match outcome {
            Ok(true) => {
                self.persist();
                self.scroll_to_bottom();
            }
            Ok(false) => {}
            Err(e) => warn!("confirmed action failed: {e}"),
        }
    }

    pub fn cancel_modal(&mut self) {
        self.mode = Mode::Chat;
    }

    /// Applies the rename modal's buffer through the prompt capability.
    pub fn apply_rename(&mut self) {
        let Mode::Rename { id, buffer } = std::mem::replace(&mut self.mode, Mode::Chat) else {
            return;
        };
        let mut answer = Answer::text(buffer);
        match dialogs::rename_prompted(&mut self.registry, &mut answer, &id) {
            Ok(true) => self.persist(),
            Ok(false) => {}
            Err(e) => warn!("rename failed: {e}"),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.save_theme(self.theme) {
            error!("failed to persist theme: {e}");
        }
    }

    /// Whether a simulated reply is in flight for the current conversation.
    pub fn bot_typing(&mut self) -> bool {
        match self.registry.current_id().cloned() {
            Some(id) => self.scheduler.has_pending(&id),
            None => false,
        }
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    // The draw pass clamps this to the real bottom.
    pub fn scroll_to_bottom(&mut self) {
        self.chat_scroll = u16::MAX;
    }

    pub fn update_spinner(&mut self) {
        if self.last_frame_update.elapsed() >= std::time::Duration::from_millis(SPINNER_FRAME_MS) {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.last_frame_update = Instant::now();
        }
    }
}
