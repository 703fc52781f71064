//! Knowledge base layer.
//!
//! Loads the static REAPER knowledge base JSON from disk once per process
//! and exposes read-only access to its sections. The document itself is an
//! arbitrary tree of objects, arrays, and scalars; only the top-level
//! section names are fixed.

mod path;
mod service;

pub use path::*;
pub use service::*;
