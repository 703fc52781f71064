//! Colored CLI display utilities for the chat shell.

use std::io::{self, Write};

use chrono::Utc;
use owo_colors::OwoColorize;

use crate::session::{ChatMessage, QuickTopic, Role};

/// Get current timestamp in the same format as tracing.
fn timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Print the chat banner shown at session start.
pub fn print_banner() {
    println!("{}", "REAPER Knowledge Chat".cyan().bold());
    println!(
        "{}",
        "Ask anything about REAPER - /topics for the menu, /quit to leave.".dimmed()
    );
    let _ = io::stdout().flush();
}

/// Print a chat message with its role banner.
pub fn print_message(message: &ChatMessage) {
    let banner = match message.role {
        Role::User => "[YOU]".green().bold().to_string(),
        Role::Assistant => "[REAPER]".cyan().bold().to_string(),
    };
    println!("{} {}", timestamp().dimmed(), banner);
    println!("{}", message.content);
    println!();
    let _ = io::stdout().flush();
}

/// Print the quick-topic menu, numbered for `/topic <n>`.
pub fn print_topics(topics: &[QuickTopic]) {
    println!("{}", "Quick topics:".bold());
    for (i, topic) in topics.iter().enumerate() {
        println!(
            "  {} {} {}",
            format!("{}.", i + 1).dimmed(),
            topic.label.cyan(),
            format!("({})", topic.question).dimmed()
        );
    }
    let _ = io::stdout().flush();
}

/// Print the input prompt without a trailing newline.
pub fn print_prompt() {
    print!("{} ", "you>".green().bold());
    let _ = io::stdout().flush();
}

/// Print an error message.
pub fn print_error(message: &str) {
    println!("{} {}", "[ERROR]".red().bold(), message);
    let _ = io::stdout().flush();
}
