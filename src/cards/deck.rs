//! The deck store.
//!
//! A `Deck` is loaded once and never mutated. It is backed by an
//! `im::Vector`, so handing clones to the engine and the table is O(1).

use std::io::Read;
use std::path::Path;

use im::Vector;
use serde::Serialize;

use super::definition::CardDefinition;
use crate::core::LoadError;

/// Ordered, immutable sequence of card definitions.
///
/// ## Example
///
/// ```
/// use tarot_spread::cards::Deck;
///
/// let deck = Deck::from_json_str(r#"[{
///     "name": "The Fool",
///     "uprightImage": "fool.png",
///     "reversedImage": "fool-r.png",
///     "uprightMeaning": "Beginnings",
///     "reversedMeaning": "Recklessness"
/// }]"#).unwrap();
///
/// assert_eq!(deck.len(), 1);
/// assert_eq!(deck.get(0).unwrap().name, "The Fool");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<CardDefinition>,
}

impl Deck {
    /// Build a deck from definitions, keeping their order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = CardDefinition>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// A deck with no cards. Every draw against it yields nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON array of card definitions.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        Self::validated(cards)
    }

    /// Parse and validate a JSON array from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let cards: Vec<CardDefinition> = serde_json::from_reader(reader)?;
        Self::validated(cards)
    }

    /// Load a deck file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| LoadError::io(path, e))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Load a deck file, falling back to an empty deck on failure.
    ///
    /// The failure is logged and not retried; an empty deck keeps every
    /// later draw a silent no-op.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(deck) => {
                tracing::info!(path = %path.display(), cards = deck.len(), "Deck loaded");
                deck
            }
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "Error loading deck");
                Self::empty()
            }
        }
    }

    fn validated(cards: Vec<CardDefinition>) -> Result<Self, LoadError> {
        for (index, card) in cards.iter().enumerate() {
            if let Some(field) = card.first_empty_field() {
                return Err(LoadError::EmptyField { index, field });
            }
        }
        Ok(Self::new(cards))
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a deck position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardDefinition> {
        self.cards.get(index)
    }

    /// Iterate in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// Serialize back to the deck file format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<CardDefinition> for Deck {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        Self::new(iter)
    }
}
