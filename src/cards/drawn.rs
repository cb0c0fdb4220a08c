//! Drawn cards - a definition plus the orientation rolled for it.
//!
//! Orientation is decided once, at draw time. Everything displayed about
//! a drawn card (image, meaning, label) derives from it and never changes,
//! no matter how often the slot is flipped.

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;

/// Which way up a card came out of the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    #[must_use]
    pub const fn from_reversed(reversed: bool) -> Self {
        if reversed {
            Self::Reversed
        } else {
            Self::Upright
        }
    }

    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Reversed)
    }

    /// Display label: "Upright" or "Reversed".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upright => "Upright",
            Self::Reversed => "Reversed",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card as drawn: source position, definition and fixed orientation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// Position of the card in the deck it was drawn from.
    pub index: usize,

    /// The drawn definition.
    pub card: CardDefinition,

    /// Orientation rolled at draw time.
    pub orientation: Orientation,
}

impl DrawnCard {
    #[must_use]
    pub fn new(index: usize, card: CardDefinition, orientation: Orientation) -> Self {
        Self {
            index,
            card,
            orientation,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.orientation.is_reversed()
    }

    /// Image matching the drawn orientation.
    #[must_use]
    pub fn display_image(&self) -> &str {
        self.card.image(self.orientation)
    }

    /// Meaning matching the drawn orientation.
    #[must_use]
    pub fn display_meaning(&self) -> &str {
        self.card.meaning(self.orientation)
    }

    #[must_use]
    pub fn orientation_label(&self) -> &'static str {
        self.orientation.label()
    }
}
