//! Card system: definitions, drawn cards and the deck store.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data from the deck file
//! - `Orientation`: Upright or Reversed
//! - `DrawnCard`: A definition plus the orientation rolled for it
//! - `Deck`: Immutable, ordered collection of definitions

pub mod deck;
pub mod definition;
pub mod drawn;

pub use deck::Deck;
pub use definition::CardDefinition;
pub use drawn::{DrawnCard, Orientation};
