//! Draw engine integration tests.
//!
//! Covers the sampling guarantees:
//! - Unique draws never repeat a deck position
//! - Unique draws saturate at the deck size
//! - Empty decks draw nothing
//! - Orientation is a fair coin, independent per draw
//! - Both strategies are uniform over positions

use proptest::prelude::*;
use tarot_spread::{CardDefinition, Deck, DrawEngine, DrawRng, DrawStrategy, Orientation};

fn card(name: &str) -> CardDefinition {
    CardDefinition::new(name)
        .with_images(format!("{name}.png"), format!("{name}-reversed.png"))
        .with_meanings(format!("{name} upright"), format!("{name} reversed"))
}

fn numbered_deck(size: usize) -> Deck {
    (0..size).map(|i| card(&format!("Card {i}"))).collect()
}

fn engine(deck: Deck, seed: u64, strategy: DrawStrategy) -> DrawEngine {
    DrawEngine::new(deck, DrawRng::new(seed)).with_strategy(strategy)
}

const STRATEGIES: [DrawStrategy; 2] = [DrawStrategy::PartialShuffle, DrawStrategy::Rejection];

// Chi-square critical values at p = 0.001
const CHI2_DF1: f64 = 10.828;
const CHI2_DF4: f64 = 18.467;

fn chi_square(observed: &[usize], expected: f64) -> f64 {
    observed
        .iter()
        .map(|&o| {
            let diff = o as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

// =============================================================================
// Spec Scenarios
// =============================================================================

/// Drawing three from a three-card deck returns each card exactly once.
#[test]
fn test_three_card_deck_draws_all() {
    let deck = Deck::new(["The Fool", "The Magician", "The Tower"].map(card));

    for strategy in STRATEGIES {
        let mut engine = engine(deck.clone(), 17, strategy);
        let drawn = engine.draw_unique(3);

        let mut names: Vec<_> = drawn.iter().map(|d| d.name().to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["The Fool", "The Magician", "The Tower"]);
    }
}

/// Asking for more cards than the deck holds returns the whole deck.
#[test]
fn test_three_card_deck_saturates_at_five() {
    let deck = Deck::new(["The Fool", "The Magician", "The Tower"].map(card));

    for strategy in STRATEGIES {
        let mut engine = engine(deck.clone(), 17, strategy);
        assert_eq!(engine.draw_unique(5).len(), 3);
    }
}

#[test]
fn test_empty_deck_is_silent() {
    for strategy in STRATEGIES {
        let mut engine = engine(Deck::empty(), 1, strategy);
        assert!(engine.draw_one().is_none());
        assert!(engine.draw_unique(10).is_empty());
    }
}

/// Display fields always match the rolled orientation.
#[test]
fn test_display_fields_match_orientation() {
    let mut engine = engine(numbered_deck(22), 5, DrawStrategy::PartialShuffle);

    for drawn in engine.draw_unique(22) {
        let base = &drawn.card;
        if drawn.is_reversed() {
            assert_eq!(drawn.display_image(), base.reversed_image);
            assert_eq!(drawn.display_meaning(), base.reversed_meaning);
            assert_eq!(drawn.orientation_label(), "Reversed");
        } else {
            assert_eq!(drawn.display_image(), base.upright_image);
            assert_eq!(drawn.display_meaning(), base.upright_meaning);
            assert_eq!(drawn.orientation_label(), "Upright");
        }
    }
}

// =============================================================================
// Distribution Tests
// =============================================================================

/// Reversed rate over 10,000 single draws is consistent with p = 0.5.
#[test]
fn test_orientation_is_fair_single_draws() {
    let mut engine = engine(numbered_deck(78), 2024, DrawStrategy::PartialShuffle);

    let trials = 10_000;
    let reversed = (0..trials)
        .filter(|_| engine.draw_one().unwrap().orientation == Orientation::Reversed)
        .count();

    let stat = chi_square(&[reversed, trials - reversed], trials as f64 / 2.0);
    assert!(stat < CHI2_DF1, "chi-square {stat} for {reversed} reversed of {trials}");
}

/// Orientation is independent of position within a unique draw.
#[test]
fn test_orientation_is_fair_per_position() {
    let mut engine = engine(numbered_deck(78), 99, DrawStrategy::PartialShuffle);

    let trials = 10_000;
    let mut reversed = [0usize; 3];
    for _ in 0..trials {
        for (pos, drawn) in engine.draw_unique(3).iter().enumerate() {
            if drawn.is_reversed() {
                reversed[pos] += 1;
            }
        }
    }

    for (pos, &r) in reversed.iter().enumerate() {
        let stat = chi_square(&[r, trials - r], trials as f64 / 2.0);
        assert!(stat < CHI2_DF1, "position {pos}: chi-square {stat}");
    }
}

/// Every deck position is equally likely to be drawn first.
#[test]
fn test_first_position_is_uniform() {
    let trials = 5_000;

    for strategy in STRATEGIES {
        let mut engine = engine(numbered_deck(5), 31, strategy);
        let mut counts = [0usize; 5];
        for _ in 0..trials {
            counts[engine.draw_unique(3)[0].index] += 1;
        }

        let stat = chi_square(&counts, trials as f64 / 5.0);
        assert!(stat < CHI2_DF4, "{strategy:?}: chi-square {stat} for {counts:?}");
    }
}

/// A fixed seed reproduces the exact reading.
#[test]
fn test_seeded_reading_is_reproducible() {
    for strategy in STRATEGIES {
        let mut a = engine(numbered_deck(78), 8, strategy);
        let mut b = engine(numbered_deck(78), 8, strategy);
        assert_eq!(a.draw_unique(10), b.draw_unique(10));
        assert_eq!(a.draw_one(), b.draw_one());
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_draw_has_distinct_indices(
        size in 1usize..80,
        count in 0usize..100,
        seed in any::<u64>(),
        rejection in any::<bool>(),
    ) {
        let strategy = if rejection { DrawStrategy::Rejection } else { DrawStrategy::PartialShuffle };
        let mut engine = engine(numbered_deck(size), seed, strategy);

        let drawn = engine.draw_unique(count);
        prop_assert_eq!(drawn.len(), count.min(size));

        let mut indices: Vec<_> = drawn.iter().map(|d| d.index).collect();
        indices.sort_unstable();
        indices.dedup();
        prop_assert_eq!(indices.len(), drawn.len());

        for d in &drawn {
            prop_assert!(d.index < size);
            prop_assert_eq!(d.name(), format!("Card {}", d.index));
        }
    }

    #[test]
    fn prop_draw_one_stays_in_deck(size in 1usize..80, seed in any::<u64>()) {
        let mut engine = engine(numbered_deck(size), seed, DrawStrategy::PartialShuffle);
        let drawn = engine.draw_one().unwrap();
        prop_assert!(drawn.index < size);
    }

    #[test]
    fn prop_reveal_never_changes_identity(size in 1usize..80, seed in any::<u64>(), pick in 0usize..80) {
        let mut engine = engine(numbered_deck(size), seed, DrawStrategy::PartialShuffle);
        match engine.reveal(pick) {
            Some(drawn) => {
                prop_assert!(pick < size);
                prop_assert_eq!(drawn.index, pick);
            }
            None => prop_assert!(pick >= size),
        }
    }
}
