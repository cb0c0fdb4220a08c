//! Random draws: single cards, unique multi-card draws and fan reveals.

pub mod engine;

pub use engine::{DrawEngine, DrawIndices, DrawStrategy};
