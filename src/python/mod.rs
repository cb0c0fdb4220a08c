//! Python bindings for the tarot-spread engine.
//!
//! # Quick Start
//!
//! ```python
//! import tarot_spread as tarot
//!
//! deck = tarot.Deck.load("deck.json")
//!
//! table = tarot.SpreadTable(deck, seed=42)
//! table.set_question("What should I focus on?")
//! table.press("fan")
//!
//! # Pick the third fanned card; it becomes the single-card spread
//! card = table.click(2)
//! print(card.name, card.orientation, card.meaning)
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_table;

pub use py_cards::*;
pub use py_table::*;

/// tarot_spread: deck loading, unique draws and spread layouts.
#[pymodule]
fn tarot_spread(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Cards
    m.add_class::<PyCardDefinition>()?;
    m.add_class::<PyDrawnCard>()?;
    m.add_class::<PyDeck>()?;

    // Drawing and spreads
    m.add_class::<PyDrawEngine>()?;
    m.add_class::<PySpreadTable>()?;

    Ok(())
}
