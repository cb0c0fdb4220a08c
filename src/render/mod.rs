//! Rendering surfaces for a `SpreadTable`.
//!
//! - `text`: Human-readable lines for the CLI
//! - `json`: View model a page binds its containers to

pub mod json;
pub mod text;
