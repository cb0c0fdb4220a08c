//! Engine and table bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{DrawRng, TableConfig};
use crate::draw::DrawEngine;
use crate::render;
use crate::spread::{ClickOutcome, SpreadKind, SpreadTable};

use super::py_cards::{PyDeck, PyDrawnCard};

fn rng(seed: Option<u64>) -> DrawRng {
    seed.map_or_else(DrawRng::from_entropy, DrawRng::new)
}

/// Python wrapper for DrawEngine.
#[pyclass(name = "DrawEngine")]
pub struct PyDrawEngine(pub DrawEngine);

#[pymethods]
impl PyDrawEngine {
    #[new]
    #[pyo3(signature = (deck, seed=None))]
    fn new(deck: PyRef<'_, PyDeck>, seed: Option<u64>) -> Self {
        Self(DrawEngine::new(deck.0.clone(), rng(seed)))
    }

    /// One random card, or None for an empty deck.
    fn draw_one(&mut self) -> Option<PyDrawnCard> {
        self.0.draw_one().map(PyDrawnCard)
    }

    /// Up to `count` cards with distinct deck positions.
    fn draw_unique(&mut self, count: usize) -> Vec<PyDrawnCard> {
        self.0.draw_unique(count).into_iter().map(PyDrawnCard).collect()
    }

    /// The card at `index` with a freshly rolled orientation.
    fn reveal(&mut self, index: usize) -> Option<PyDrawnCard> {
        self.0.reveal(index).map(PyDrawnCard)
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.rng_state().seed
    }
}

/// Python wrapper for SpreadTable.
#[pyclass(name = "SpreadTable")]
pub struct PySpreadTable(pub SpreadTable);

#[pymethods]
impl PySpreadTable {
    #[new]
    #[pyo3(signature = (deck, seed=None))]
    fn new(deck: PyRef<'_, PyDeck>, seed: Option<u64>) -> Self {
        let config = TableConfig {
            seed,
            ..TableConfig::default()
        };
        Self(SpreadTable::new(deck.0.clone(), config))
    }

    fn set_question(&mut self, text: String) {
        self.0.set_question_input(text);
    }

    /// Press a spread control: "one", "three", "celtic" or "fan".
    fn press(&mut self, spread: &str) -> PyResult<()> {
        let kind: SpreadKind = spread
            .parse()
            .map_err(|e: crate::core::ParseSpreadError| PyValueError::new_err(e.to_string()))?;
        self.0.press(kind);
        Ok(())
    }

    /// Click a slot of the visible spread.
    ///
    /// Returns the new face-up state for a flip, the revealed card for a
    /// fan pick, or None when the click did nothing.
    fn click(&mut self, py: Python<'_>, position: usize) -> PyObject {
        match self.0.click(position) {
            ClickOutcome::Flipped(face_up) => face_up.into_py(py),
            ClickOutcome::Revealed(drawn) => PyDrawnCard(drawn).into_py(py),
            ClickOutcome::Ignored => py.None(),
        }
    }

    /// Short key of the visible spread, if any.
    #[getter]
    fn visible(&self) -> Option<&'static str> {
        self.0.visible().map(SpreadKind::key)
    }

    #[getter]
    fn question(&self) -> &str {
        self.0.question_display()
    }

    fn to_json(&self) -> PyResult<String> {
        render::json::render_table(&self.0).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn to_text(&self) -> String {
        render::text::render_table(&self.0)
    }
}
