//! The spread table: four containers, at most one visible.
//!
//! Showing a spread hides every container, then populates and shows the
//! chosen one. Hidden containers are cleared, so the only slots that exist
//! are the ones on screen.

use rustc_hash::FxHashMap;

use super::kind::SpreadKind;
use super::layout;
use super::slot::{CardSlot, FanSlot};
use crate::cards::{Deck, DrawnCard};
use crate::core::{DrawRng, TableConfig};
use crate::draw::DrawEngine;

/// Contents of one container region.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Slots {
    #[default]
    Empty,
    Cards(Vec<CardSlot>),
    FaceDown(Vec<FanSlot>),
}

impl Slots {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Cards(cards) => cards.len(),
            Self::FaceDown(fan) => fan.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drawn card slots; empty for the fan.
    #[must_use]
    pub fn cards(&self) -> &[CardSlot] {
        match self {
            Self::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Face-down fan slots; empty for every other spread.
    #[must_use]
    pub fn fan(&self) -> &[FanSlot] {
        match self {
            Self::FaceDown(fan) => fan,
            _ => &[],
        }
    }
}

/// One named container region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container {
    pub visible: bool,
    pub slots: Slots,
}

/// Result of clicking a slot in the visible spread.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// A drawn card was turned; carries the new `face_up`.
    Flipped(bool),
    /// A fan card was picked and is now shown as the single card.
    Revealed(DrawnCard),
    /// Nothing at that position, or nothing visible.
    Ignored,
}

/// Spread renderer state.
///
/// ## Example
///
/// ```
/// use tarot_spread::cards::{CardDefinition, Deck};
/// use tarot_spread::core::TableConfig;
/// use tarot_spread::spread::{SpreadKind, SpreadTable};
///
/// let deck: Deck = (0..22)
///     .map(|i| {
///         CardDefinition::new(format!("Arcana {i}"))
///             .with_images("up.png", "down.png")
///             .with_meanings("up", "down")
///     })
///     .collect();
///
/// let mut table = SpreadTable::new(deck, TableConfig::default().with_seed(7));
/// table.show(SpreadKind::ThreeCard);
///
/// assert_eq!(table.visible(), Some(SpreadKind::ThreeCard));
/// assert_eq!(table.container(SpreadKind::ThreeCard).slots.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SpreadTable {
    engine: DrawEngine,
    config: TableConfig,
    containers: FxHashMap<SpreadKind, Container>,
    question_input: String,
    question_display: String,
}

impl SpreadTable {
    /// Create a table, seeding the engine from the config.
    #[must_use]
    pub fn new(deck: Deck, config: TableConfig) -> Self {
        let rng = config.seed.map_or_else(DrawRng::from_entropy, DrawRng::new);
        let engine = DrawEngine::new(deck, rng).with_strategy(config.draw_strategy);
        Self::with_engine(engine, config)
    }

    /// Create a table around an existing engine.
    #[must_use]
    pub fn with_engine(engine: DrawEngine, config: TableConfig) -> Self {
        let containers = SpreadKind::ALL
            .into_iter()
            .map(|kind| (kind, Container::default()))
            .collect();
        Self {
            engine,
            config,
            containers,
            question_input: String::new(),
            question_display: String::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.engine.deck()
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    /// The visible spread, if any.
    #[must_use]
    pub fn visible(&self) -> Option<SpreadKind> {
        SpreadKind::ALL
            .into_iter()
            .find(|kind| self.containers[kind].visible)
    }

    /// Container state for a spread.
    #[must_use]
    pub fn container(&self, kind: SpreadKind) -> &Container {
        &self.containers[&kind]
    }

    /// Text of the question field. Shown, never used for drawing.
    pub fn set_question_input(&mut self, text: impl Into<String>) {
        self.question_input = text.into();
    }

    /// "Question: ..." as last shown, or empty.
    #[must_use]
    pub fn question_display(&self) -> &str {
        &self.question_display
    }

    /// Press a spread control: refresh the question line, then show.
    pub fn press(&mut self, kind: SpreadKind) {
        let question = self.question_input.trim();
        self.question_display = if question.is_empty() {
            String::new()
        } else {
            format!("Question: {question}")
        };
        self.show(kind);
    }

    /// Hide everything, then populate and show exactly `kind`.
    pub fn show(&mut self, kind: SpreadKind) {
        let slots = match kind {
            SpreadKind::Single => Slots::Cards(Self::place(kind, self.engine.draw_one())),
            SpreadKind::ThreeCard | SpreadKind::CelticCross => {
                let count = kind.draw_count().unwrap_or_default();
                Slots::Cards(Self::place(kind, self.engine.draw_unique(count)))
            }
            SpreadKind::Fan => Slots::FaceDown(self.fan()),
        };

        tracing::debug!(spread = %kind, slots = slots.len(), "Showing spread");
        self.display(kind, slots);
    }

    /// Click the slot at zero-based `position` in the visible spread.
    pub fn click(&mut self, position: usize) -> ClickOutcome {
        let Some(kind) = self.visible() else {
            return ClickOutcome::Ignored;
        };

        let Some(container) = self.containers.get_mut(&kind) else {
            return ClickOutcome::Ignored;
        };

        let fan_index = match &mut container.slots {
            Slots::Cards(cards) => {
                return cards
                    .get_mut(position)
                    .map_or(ClickOutcome::Ignored, |slot| ClickOutcome::Flipped(slot.toggle()));
            }
            Slots::FaceDown(fan) => fan.get(position).map(|slot| slot.index),
            Slots::Empty => None,
        };

        match fan_index {
            Some(index) => self.reveal(index),
            None => ClickOutcome::Ignored,
        }
    }

    fn reveal(&mut self, index: usize) -> ClickOutcome {
        let Some(drawn) = self.engine.reveal(index) else {
            return ClickOutcome::Ignored;
        };

        tracing::debug!(
            index,
            card = %drawn.name(),
            orientation = %drawn.orientation,
            "Fan card revealed"
        );
        let slots = Slots::Cards(Self::place(SpreadKind::Single, Some(drawn.clone())));
        self.display(SpreadKind::Single, slots);
        ClickOutcome::Revealed(drawn)
    }

    fn place(kind: SpreadKind, drawn: impl IntoIterator<Item = DrawnCard>) -> Vec<CardSlot> {
        drawn
            .into_iter()
            .enumerate()
            .map(|(i, card)| {
                CardSlot::new(i + 1, card)
                    .with_id(layout::slot_id(kind, i))
                    .with_label(layout::position_label(kind, i))
            })
            .collect()
    }

    fn fan(&self) -> Vec<FanSlot> {
        let deck = self.engine.deck();
        let count = deck.len().min(self.config.fan_max_cards);
        let angles = layout::fan_angles(count, self.config.fan_max_angle);

        deck.iter()
            .zip(angles)
            .enumerate()
            .map(|(index, (card, angle))| FanSlot::new(index, card.clone(), angle))
            .collect()
    }

    fn display(&mut self, kind: SpreadKind, slots: Slots) {
        for (&k, container) in self.containers.iter_mut() {
            container.visible = k == kind;
            container.slots = Slots::Empty;
        }
        if let Some(container) = self.containers.get_mut(&kind) {
            container.slots = slots;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn deck(size: usize) -> Deck {
        (0..size)
            .map(|i| {
                CardDefinition::new(format!("Card {i}"))
                    .with_images(format!("{i}.png"), format!("{i}-r.png"))
                    .with_meanings("up", "down")
            })
            .collect()
    }

    fn table(size: usize) -> SpreadTable {
        SpreadTable::new(deck(size), TableConfig::default().with_seed(42))
    }

    #[test]
    fn test_starts_hidden() {
        let table = table(22);
        assert_eq!(table.visible(), None);
        for kind in SpreadKind::ALL {
            assert!(table.container(kind).slots.is_empty());
        }
    }

    #[test]
    fn test_slot_counts() {
        let mut table = table(22);

        table.show(SpreadKind::Single);
        assert_eq!(table.container(SpreadKind::Single).slots.len(), 1);

        table.show(SpreadKind::ThreeCard);
        assert_eq!(table.container(SpreadKind::ThreeCard).slots.len(), 3);

        table.show(SpreadKind::CelticCross);
        assert_eq!(table.container(SpreadKind::CelticCross).slots.len(), 10);

        table.show(SpreadKind::Fan);
        assert_eq!(table.container(SpreadKind::Fan).slots.len(), 15);
    }

    #[test]
    fn test_celtic_slots_are_labelled() {
        let mut table = table(22);
        table.show(SpreadKind::CelticCross);

        let cards = table.container(SpreadKind::CelticCross).slots.cards();
        for (i, slot) in cards.iter().enumerate() {
            assert_eq!(slot.position, i + 1);
            assert_eq!(slot.id, Some(format!("celtic-pos-{}", i + 1)));
            assert!(slot.label.is_some());
        }
    }

    #[test]
    fn test_fan_in_deck_order() {
        let mut table = table(5);
        table.show(SpreadKind::Fan);

        let fan = table.container(SpreadKind::Fan).slots.fan();
        let indices: Vec<_> = fan.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(fan[0].card.name, "Card 0");
        assert_eq!(fan[0].angle, -40.0);
    }

    #[test]
    fn test_click_flips() {
        let mut table = table(22);
        table.show(SpreadKind::ThreeCard);
        let before = table.container(SpreadKind::ThreeCard).slots.cards()[1].drawn.clone();

        assert_eq!(table.click(1), ClickOutcome::Flipped(true));
        assert_eq!(table.click(1), ClickOutcome::Flipped(false));
        assert_eq!(table.click(7), ClickOutcome::Ignored);

        let after = &table.container(SpreadKind::ThreeCard).slots.cards()[1].drawn;
        assert_eq!(&before, after);
    }

    #[test]
    fn test_click_with_nothing_visible() {
        let mut table = table(22);
        assert_eq!(table.click(0), ClickOutcome::Ignored);
    }

    #[test]
    fn test_fan_click_reveals_that_card() {
        let mut table = table(22);
        table.show(SpreadKind::Fan);

        let ClickOutcome::Revealed(drawn) = table.click(4) else {
            panic!("fan click should reveal");
        };
        assert_eq!(drawn.index, 4);
        assert_eq!(table.visible(), Some(SpreadKind::Single));

        let single = table.container(SpreadKind::Single).slots.cards();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].drawn, drawn);
        assert!(table.container(SpreadKind::Fan).slots.is_empty());
    }

    #[test]
    fn test_question_display() {
        let mut table = table(22);
        table.set_question_input("  Will it rain?  ");
        assert_eq!(table.question_display(), "");

        table.press(SpreadKind::Single);
        assert_eq!(table.question_display(), "Question: Will it rain?");

        table.set_question_input("   ");
        table.press(SpreadKind::Single);
        assert_eq!(table.question_display(), "");
    }

    #[test]
    fn test_empty_deck_shows_empty_container() {
        let mut table = table(0);
        for kind in SpreadKind::ALL {
            table.show(kind);
            assert_eq!(table.visible(), Some(kind));
            assert!(table.container(kind).slots.is_empty());
        }
        assert_eq!(table.click(0), ClickOutcome::Ignored);
    }
}
