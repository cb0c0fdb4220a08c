//! Card and deck bindings for Python.

use pyo3::exceptions::{PyIOError, PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::cards::{CardDefinition, Deck, DrawnCard};
use crate::core::LoadError;

pub(crate) fn load_error(err: LoadError) -> PyErr {
    match err {
        LoadError::Io { .. } => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for CardDefinition.
#[pyclass(name = "CardDefinition")]
#[derive(Clone, Debug)]
pub struct PyCardDefinition(pub CardDefinition);

#[pymethods]
impl PyCardDefinition {
    #[new]
    fn new(
        name: String,
        upright_image: String,
        reversed_image: String,
        upright_meaning: String,
        reversed_meaning: String,
    ) -> Self {
        Self(
            CardDefinition::new(name)
                .with_images(upright_image, reversed_image)
                .with_meanings(upright_meaning, reversed_meaning),
        )
    }

    #[getter]
    fn name(&self) -> &str {
        &self.0.name
    }

    #[getter]
    fn upright_image(&self) -> &str {
        &self.0.upright_image
    }

    #[getter]
    fn reversed_image(&self) -> &str {
        &self.0.reversed_image
    }

    #[getter]
    fn upright_meaning(&self) -> &str {
        &self.0.upright_meaning
    }

    #[getter]
    fn reversed_meaning(&self) -> &str {
        &self.0.reversed_meaning
    }

    fn __repr__(&self) -> String {
        format!("CardDefinition({:?})", self.0.name)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for DrawnCard.
#[pyclass(name = "DrawnCard")]
#[derive(Clone, Debug)]
pub struct PyDrawnCard(pub DrawnCard);

#[pymethods]
impl PyDrawnCard {
    /// Deck position the card came from.
    #[getter]
    fn index(&self) -> usize {
        self.0.index
    }

    #[getter]
    fn name(&self) -> &str {
        self.0.name()
    }

    #[getter]
    fn card(&self) -> PyCardDefinition {
        PyCardDefinition(self.0.card.clone())
    }

    #[getter]
    fn is_reversed(&self) -> bool {
        self.0.is_reversed()
    }

    /// "Upright" or "Reversed".
    #[getter]
    fn orientation(&self) -> &'static str {
        self.0.orientation_label()
    }

    #[getter]
    fn image(&self) -> &str {
        self.0.display_image()
    }

    #[getter]
    fn meaning(&self) -> &str {
        self.0.display_meaning()
    }

    fn __repr__(&self) -> String {
        format!(
            "DrawnCard({:?}, {}, index={})",
            self.0.name(),
            self.0.orientation_label(),
            self.0.index
        )
    }
}

/// Python wrapper for Deck.
#[pyclass(name = "Deck")]
#[derive(Clone, Debug)]
pub struct PyDeck(pub Deck);

#[pymethods]
impl PyDeck {
    /// Build a deck from card definitions.
    #[new]
    #[pyo3(signature = (cards=Vec::new()))]
    fn new(cards: Vec<PyCardDefinition>) -> Self {
        Self(cards.into_iter().map(|c| c.0).collect())
    }

    /// Load and validate a deck file.
    #[staticmethod]
    fn load(path: &str) -> PyResult<Self> {
        Deck::load(path).map(Self).map_err(load_error)
    }

    /// Parse and validate a JSON array of cards.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        Deck::from_json_str(json).map(Self).map_err(load_error)
    }

    fn to_json(&self) -> PyResult<String> {
        self.0
            .to_json()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __getitem__(&self, index: usize) -> PyResult<PyCardDefinition> {
        self.0
            .get(index)
            .cloned()
            .map(PyCardDefinition)
            .ok_or_else(|| PyIndexError::new_err(format!("deck index {index} out of range")))
    }

    fn __repr__(&self) -> String {
        format!("Deck(len={})", self.0.len())
    }
}
