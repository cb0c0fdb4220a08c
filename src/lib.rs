//! # tarot-spread
//!
//! A tarot table engine: load a deck, draw cards, lay out spreads.
//!
//! ## Design Principles
//!
//! 1. **Explicit Deck**: The deck is an immutable value produced by loading
//!    and handed to the engine and the table. No global deck state.
//!
//! 2. **Pure Draws**: The draw engine never touches a display and takes its
//!    RNG by injection, so a seed reproduces a whole reading.
//!
//! 3. **Silent Empty Deck**: A deck that failed to load is empty, and every
//!    draw against it yields nothing instead of an error.
//!
//! ## Architecture
//!
//! - **Unique Draws**: Partial Fisher-Yates by default, with the classic
//!   draw-and-discard loop available for comparison.
//!
//! - **Two-Stage Fan**: Fan cards are laid out in deck order; only the
//!   orientation is random, rolled when a card is picked.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card definitions, drawn cards, the deck store
//! - `draw`: The draw engine
//! - `spread`: Spread kinds, layouts, slots and the table state machine
//! - `render`: Text and JSON renderings of a table

pub mod core;
pub mod cards;
pub mod draw;
pub mod spread;
pub mod render;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    DrawRng, DrawRngState,
    TableConfig, CARD_BACK_URL, DEFAULT_DECK_PATH,
    LoadError, ParseSpreadError,
};

pub use crate::cards::{CardDefinition, Deck, DrawnCard, Orientation};

pub use crate::draw::{DrawEngine, DrawIndices, DrawStrategy};

pub use crate::spread::{
    SpreadKind, ContainerDisplay,
    CardSlot, FanSlot,
    SpreadTable, Container, Slots, ClickOutcome,
};
