//! Chat session state: message history and the pending question queue.
//!
//! The session belongs to the chat shell, not the resolver; the resolver is
//! a pure function of (query, document) and never touches this state.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A quick topic: a menu label and the canned question it asks.
pub struct QuickTopic {
    pub label: &'static str,
    pub question: &'static str,
}

/// Menu of canned questions offered by the chat shell.
pub const QUICK_TOPICS: &[QuickTopic] = &[
    QuickTopic {
        label: "Pricing",
        question: "What does REAPER cost?",
    },
    QuickTopic {
        label: "Features",
        question: "What are REAPER's main features?",
    },
    QuickTopic {
        label: "Plugins",
        question: "What plugins come with REAPER?",
    },
    QuickTopic {
        label: "Extensions",
        question: "What extensions should I install?",
    },
    QuickTopic {
        label: "Live Looping",
        question: "How do I set up live looping?",
    },
    QuickTopic {
        label: "Shortcuts",
        question: "What are the essential shortcuts?",
    },
    QuickTopic {
        label: "Podcast",
        question: "How do I set up for podcast editing?",
    },
    QuickTopic {
        label: "Learning",
        question: "Where can I learn REAPER?",
    },
    QuickTopic {
        label: "Troubleshooting",
        question: "Help with common problems",
    },
];

/// An in-memory, append-only chat transcript plus a queue of questions
/// selected from the quick-topic menu but not yet resolved.
///
/// The queue replaces implicit "pending click" state: selecting a topic only
/// enqueues its question; the shell drains the queue at the top of each turn.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: VecDeque<String>,
}

impl ChatSession {
    /// Opening assistant message for a fresh session.
    pub const GREETING: &'static str = "Hey! I'm your REAPER knowledge assistant. Ask me anything about REAPER DAW - features, plugins, live looping setups, shortcuts, workflows, or troubleshooting. What would you like to know?";

    /// Create a session seeded with the greeting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Assistant,
                content: Self::GREETING.to_string(),
            }],
            pending: VecDeque::new(),
        }
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: content.into(),
        });
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: content.into(),
        });
    }

    /// The transcript so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Queue a question to be asked on the next turn.
    pub fn enqueue_question(&mut self, question: impl Into<String>) {
        self.pending.push_back(question.into());
    }

    /// Take the oldest queued question, if any.
    pub fn next_pending(&mut self) -> Option<String> {
        self.pending.pop_front()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, ChatSession::GREETING);
    }

    #[test]
    fn test_messages_append_in_order() {
        let mut session = ChatSession::new();
        session.push_user("what does it cost?");
        session.push_assistant("see pricing");

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[2].role, Role::Assistant);
    }

    #[test]
    fn test_pending_queue_is_fifo() {
        let mut session = ChatSession::new();
        session.enqueue_question("first");
        session.enqueue_question("second");

        assert_eq!(session.next_pending().as_deref(), Some("first"));
        assert_eq!(session.next_pending().as_deref(), Some("second"));
        assert!(session.next_pending().is_none());
    }

    #[test]
    fn test_message_role_serializes_lowercase() {
        let message = ChatMessage {
            role: Role::User,
            content: "hi".to_string(),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn test_quick_topics_have_questions() {
        assert!(!QUICK_TOPICS.is_empty());
        for topic in QUICK_TOPICS {
            assert!(!topic.label.is_empty());
            assert!(!topic.question.is_empty());
        }
    }
}
