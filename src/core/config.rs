//! Table configuration.
//!
//! Everything a table needs besides the deck itself: where the deck lives,
//! the card-back image, fan geometry, the draw strategy and an optional seed.
//! Configs are plain serde structs so hosts can ship them as JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::LoadError;
use crate::draw::DrawStrategy;

/// Image shown on the back of every card.
pub const CARD_BACK_URL: &str =
    "https://static.wixstatic.com/media/e50044_51e5fb1f7c6d4e67afbf883dbbe77f6a~mv2.png";

/// Deck resource fetched at startup.
pub const DEFAULT_DECK_PATH: &str = "deck.json";

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Location of the deck JSON document.
    pub deck_path: PathBuf,

    /// Universal card-back image.
    pub card_back_url: String,

    /// Most cards the fan shows (default: 15).
    pub fan_max_cards: usize,

    /// Rotation of the outermost fan card in degrees (default: 40).
    pub fan_max_angle: f64,

    /// Random seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// How unique draws are sampled.
    pub draw_strategy: DrawStrategy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            deck_path: PathBuf::from(DEFAULT_DECK_PATH),
            card_back_url: CARD_BACK_URL.to_string(),
            fan_max_cards: 15,
            fan_max_angle: 40.0,
            seed: None,
            draw_strategy: DrawStrategy::default(),
        }
    }
}

impl TableConfig {
    /// Read a config from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Set the deck path.
    #[must_use]
    pub fn with_deck_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.deck_path = path.into();
        self
    }

    /// Set the card-back image.
    #[must_use]
    pub fn with_card_back(mut self, url: impl Into<String>) -> Self {
        self.card_back_url = url.into();
        self
    }

    /// Set a fixed seed for reproducible readings.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set fan geometry.
    #[must_use]
    pub fn with_fan(mut self, max_cards: usize, max_angle: f64) -> Self {
        self.fan_max_cards = max_cards;
        self.fan_max_angle = max_angle;
        self
    }

    /// Set the unique-draw sampling strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: DrawStrategy) -> Self {
        self.draw_strategy = strategy;
        self
    }
}
