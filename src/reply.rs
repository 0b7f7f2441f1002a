// src/reply.rs

use std::collections::HashMap;
use std::time::Duration;

use chrono::Local;
use log::debug;
use once_cell::sync::Lazy;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::calc;
use crate::models::ConversationId;

pub const GREETING_REPLY: &str = "Hi there! 👋 How can I assist you today?";
pub const JOKE_REPLY: &str = "Why do programmers love dark mode? Because light attracts bugs!";
pub const CALC_HINT: &str = "I couldn't calculate that. Try 'calc 2+2'.";
pub const FALLBACK_REPLY: &str = "Interesting! Tell me more.";

struct Rule {
    keywords: &'static [&'static str],
    respond: fn(&str) -> String,
}

// Fixed ordered rule list; the first keyword match wins.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            keywords: &["hello", "hi"],
            respond: |_| GREETING_REPLY.to_string(),
        },
        Rule {
            keywords: &["time"],
            respond: |_| format!("The current time is {}", Local::now().format("%H:%M:%S")),
        },
        Rule {
            keywords: &["date"],
            respond: |_| format!("Today is {}", Local::now().format("%B %e, %Y")),
        },
        Rule {
            keywords: &["joke"],
            respond: |_| JOKE_REPLY.to_string(),
        },
        Rule {
            keywords: &["calc"],
            respond: calc_reply,
        },
    ]
});

/// Produces a canned response for the given input text. Matching is a
/// case-insensitive substring check per rule, in rule order.
pub fn generate_reply(input: &str) -> String {
    let lowered = input.to_lowercase();
    for rule in RULES.iter() {
        if rule.keywords.iter().any(|k| lowered.contains(k)) {
            return (rule.respond)(&lowered);
        }
    }
    FALLBACK_REPLY.to_string()
}

fn calc_reply(lowered: &str) -> String {
    let expr = lowered.replacen("calc", "", 1);
    match calc::evaluate(&expr) {
        Ok(value) => format!("Result: {}", calc::format_value(value)),
        Err(e) => {
            debug!("calc rejected {expr:?}: {e}");
            CALC_HINT.to_string()
        }
    }
}

/// A reply waiting out the simulated network delay.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingReply {
    pub conversation_id: ConversationId,
    pub text: String,
}

/// Spawns delayed reply tasks and cancels the ones scoped to a conversation
/// that no longer exists.
pub struct ReplyScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<IncomingReply>,
    pending: HashMap<ConversationId, Vec<JoinHandle<()>>>,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<IncomingReply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = ReplyScheduler {
            delay,
            tx,
            pending: HashMap::new(),
        };
        (scheduler, rx)
    }

    /// Generates the canned reply for `input` and delivers it on the channel
    /// after the configured delay.
    pub fn schedule(&mut self, conversation_id: ConversationId, input: &str) {
        let text = generate_reply(input);
        let tx = self.tx.clone();
        let delay = self.delay;
        let id = conversation_id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(IncomingReply {
                conversation_id: id,
                text,
            });
        });
        self.prune_finished();
        self.pending.entry(conversation_id).or_default().push(handle);
    }

    /// Drops every pending reply for the given conversation.
    pub fn cancel(&mut self, conversation_id: &ConversationId) {
        if let Some(handles) = self.pending.remove(conversation_id) {
            for handle in handles {
                handle.abort();
            }
        }
    }

    /// Drops every pending reply.
    pub fn cancel_all(&mut self) {
        for (_, handles) in self.pending.drain() {
            for handle in handles {
                handle.abort();
            }
        }
    }

    /// Whether a reply is still in flight for the given conversation.
    pub fn has_pending(&mut self, conversation_id: &ConversationId) -> bool {
        self.prune_finished();
        self.pending.contains_key(conversation_id)
    }

    fn prune_finished(&mut self) {
        self.pending.retain(|_, handles| {
            handles.retain(|h| !h.is_finished());
            !handles.is_empty()
        });
    }
}
