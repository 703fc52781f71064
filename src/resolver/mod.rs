//! Query resolution: keyword-table matching first, recursive leaf search
//! as fallback, then a canned topic suggestion.

mod engine;
mod keywords;
mod search;

pub use engine::*;
pub use keywords::*;
pub use search::*;
