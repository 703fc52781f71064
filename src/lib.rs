//! REAPER Knowledge Chat - keyword-driven Q&A over a static knowledge base.

pub mod chat;
pub mod config;
pub mod display;
pub mod kb;
pub mod render;
pub mod resolver;
pub mod session;
