//! The draw engine.
//!
//! Pure sampling over an injected `Deck` with an injected `DrawRng`.
//! Nothing here touches a display; identical seeds give identical readings.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Deck, DrawnCard, Orientation};
use crate::core::{DrawRng, DrawRngState};

/// Chosen deck positions. Spreads draw at most ten, so this stays inline.
pub type DrawIndices = SmallVec<[usize; 16]>;

/// How `draw_unique` picks distinct positions.
///
/// Both produce a uniformly random permutation of the deck truncated to
/// the requested count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawStrategy {
    /// Partial Fisher-Yates over a position pool. Linear time.
    #[default]
    PartialShuffle,
    /// Draw a position, discard it if already taken, repeat.
    /// Retries grow as the pool shrinks.
    Rejection,
}

/// Draws cards from a deck.
///
/// ## Example
///
/// ```
/// use tarot_spread::cards::{CardDefinition, Deck};
/// use tarot_spread::core::DrawRng;
/// use tarot_spread::draw::DrawEngine;
///
/// let deck: Deck = ["The Fool", "The Magician", "The Tower"]
///     .into_iter()
///     .map(|name| {
///         CardDefinition::new(name)
///             .with_images("up.png", "down.png")
///             .with_meanings("up", "down")
///     })
///     .collect();
///
/// let mut engine = DrawEngine::new(deck, DrawRng::new(42));
/// let drawn = engine.draw_unique(5);
///
/// // Saturates at the deck size
/// assert_eq!(drawn.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DrawEngine {
    deck: Deck,
    rng: DrawRng,
    strategy: DrawStrategy,
}

impl DrawEngine {
    /// Create an engine over a deck using the default strategy.
    #[must_use]
    pub fn new(deck: Deck, rng: DrawRng) -> Self {
        Self {
            deck,
            rng,
            strategy: DrawStrategy::default(),
        }
    }

    /// Use a different unique-draw strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: DrawStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn strategy(&self) -> DrawStrategy {
        self.strategy
    }

    /// Current RNG state; restoring it replays the following draws.
    #[must_use]
    pub fn rng_state(&self) -> DrawRngState {
        self.rng.state()
    }

    /// Draw one random card with a random orientation.
    ///
    /// Returns `None` on an empty deck.
    pub fn draw_one(&mut self) -> Option<DrawnCard> {
        if self.deck.is_empty() {
            tracing::debug!("draw_one on empty deck");
            return None;
        }
        let index = self.rng.gen_index(self.deck.len());
        self.reveal(index)
    }

    /// Draw up to `count` cards with pairwise-distinct deck positions.
    ///
    /// Saturates at the deck size. Cards come back in selection order,
    /// each with its own orientation.
    pub fn draw_unique(&mut self, count: usize) -> Vec<DrawnCard> {
        if self.deck.is_empty() {
            tracing::debug!(count, "draw_unique on empty deck");
            return Vec::new();
        }

        let indices = self.unique_indices(count);
        indices
            .into_iter()
            .filter_map(|index| self.reveal(index))
            .collect()
    }

    /// Roll an orientation for the card at a known position.
    ///
    /// Card identity is not random here; only orientation is.
    /// Returns `None` if `index` is past the end of the deck.
    pub fn reveal(&mut self, index: usize) -> Option<DrawnCard> {
        let card = self.deck.get(index)?.clone();
        let orientation = self.roll_orientation();
        Some(DrawnCard::new(index, card, orientation))
    }

    /// Distinct positions, in selection order.
    pub fn unique_indices(&mut self, count: usize) -> DrawIndices {
        let target = count.min(self.deck.len());
        match self.strategy {
            DrawStrategy::PartialShuffle => self.partial_shuffle(target),
            DrawStrategy::Rejection => self.rejection(target),
        }
    }

    fn roll_orientation(&mut self) -> Orientation {
        Orientation::from_reversed(self.rng.gen_bool(0.5))
    }

    fn partial_shuffle(&mut self, target: usize) -> DrawIndices {
        let len = self.deck.len();
        let mut pool: Vec<usize> = (0..len).collect();
        for i in 0..target {
            let j = self.rng.gen_range_usize(i..len);
            pool.swap(i, j);
        }
        DrawIndices::from_slice(&pool[..target])
    }

    fn rejection(&mut self, target: usize) -> DrawIndices {
        let len = self.deck.len();
        let mut chosen = DrawIndices::new();
        while chosen.len() < target {
            let index = self.rng.gen_index(len);
            if !chosen.contains(&index) {
                chosen.push(index);
            }
        }
        chosen
    }
}
