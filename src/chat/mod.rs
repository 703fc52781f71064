//! Interactive chat shell over stdin.
//!
//! The shell owns the session state and drives the resolver; resolution
//! itself never sees the transcript or the topic queue.

use std::io;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::display;
use crate::kb::KnowledgeBaseService;
use crate::resolver::Resolver;
use crate::session::{ChatSession, QUICK_TOPICS};

/// Interactive chat loop bound to one knowledge base service.
pub struct ChatShell<'a> {
    service: &'a KnowledgeBaseService,
    resolver: Resolver,
    session: ChatSession,
}

impl<'a> ChatShell<'a> {
    /// Create a shell with a fresh session.
    #[must_use]
    pub fn new(service: &'a KnowledgeBaseService, resolver: Resolver) -> Self {
        Self {
            service,
            resolver,
            session: ChatSession::new(),
        }
    }

    /// Run the chat loop until `/quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin fails.
    pub async fn run(&mut self) -> io::Result<()> {
        display::print_banner();
        if let Some(greeting) = self.session.messages().first() {
            display::print_message(greeting);
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            // Queued quick-topic questions are answered before new input.
            while let Some(question) = self.session.next_pending() {
                self.turn(&question, true).await;
            }

            display::print_prompt();
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let input = line.trim();
            match input {
                "" => {}
                "/quit" | "/exit" => break,
                "/topics" => display::print_topics(QUICK_TOPICS),
                _ if input.starts_with("/topic") => self.select_topic(input),
                question => self.turn(question, false).await,
            }
        }
        tracing::info!(messages = self.session.messages().len(), "Chat ended");
        Ok(())
    }

    /// The transcript accumulated so far.
    #[must_use]
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Handle `/topic <n>`: enqueue the canned question for that entry.
    fn select_topic(&mut self, input: &str) {
        let choice = input
            .trim_start_matches("/topic")
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| QUICK_TOPICS.get(i));
        match choice {
            Some(topic) => self.session.enqueue_question(topic.question),
            None => display::print_error("Usage: /topic <number> (see /topics)"),
        }
    }

    /// One question-answer exchange. `echo_user` reprints the question,
    /// used for queued topics the user never typed.
    async fn turn(&mut self, question: &str, echo_user: bool) {
        self.session.push_user(question);
        if echo_user {
            if let Some(message) = self.session.messages().last() {
                display::print_message(message);
            }
        }

        let doc = self.service.document().await;
        let reply = self.resolver.resolve(question, doc);
        self.session.push_assistant(reply);
        if let Some(message) = self.session.messages().last() {
            display::print_message(message);
        }
    }
}
