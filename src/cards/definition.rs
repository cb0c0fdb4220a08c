//! Card definitions - static card data.
//!
//! `CardDefinition` holds everything the deck file says about a card:
//! its name plus an image and a meaning for each orientation.
//! Which variant is shown is decided at draw time (see `DrawnCard`).

use serde::{Deserialize, Serialize};

use super::drawn::Orientation;

/// Static card definition, as stored in the deck file.
///
/// ## Example
///
/// ```
/// use tarot_spread::cards::{CardDefinition, Orientation};
///
/// let fool = CardDefinition::new("The Fool")
///     .with_images("fool.png", "fool-r.png")
///     .with_meanings("Beginnings", "Recklessness");
///
/// assert_eq!(fool.meaning(Orientation::Reversed), "Recklessness");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    /// Card name (e.g. "The Tower").
    pub name: String,

    /// Image shown when drawn upright.
    pub upright_image: String,

    /// Image shown when drawn reversed.
    pub reversed_image: String,

    /// Meaning shown when drawn upright.
    pub upright_meaning: String,

    /// Meaning shown when drawn reversed.
    pub reversed_meaning: String,
}

impl CardDefinition {
    /// Create a definition with only a name. Fill the rest with the builders.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upright_image: String::new(),
            reversed_image: String::new(),
            upright_meaning: String::new(),
            reversed_meaning: String::new(),
        }
    }

    /// Set both images (builder pattern).
    #[must_use]
    pub fn with_images(mut self, upright: impl Into<String>, reversed: impl Into<String>) -> Self {
        self.upright_image = upright.into();
        self.reversed_image = reversed.into();
        self
    }

    /// Set both meanings (builder pattern).
    #[must_use]
    pub fn with_meanings(
        mut self,
        upright: impl Into<String>,
        reversed: impl Into<String>,
    ) -> Self {
        self.upright_meaning = upright.into();
        self.reversed_meaning = reversed.into();
        self
    }

    /// Image for the given orientation.
    #[must_use]
    pub fn image(&self, orientation: Orientation) -> &str {
        match orientation {
            Orientation::Upright => &self.upright_image,
            Orientation::Reversed => &self.reversed_image,
        }
    }

    /// Meaning for the given orientation.
    #[must_use]
    pub fn meaning(&self, orientation: Orientation) -> &str {
        match orientation {
            Orientation::Upright => &self.upright_meaning,
            Orientation::Reversed => &self.reversed_meaning,
        }
    }

    /// First field (by its JSON name) that is empty or whitespace, if any.
    #[must_use]
    pub fn first_empty_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("uprightImage", &self.upright_image),
            ("reversedImage", &self.reversed_image),
            ("uprightMeaning", &self.upright_meaning),
            ("reversedMeaning", &self.reversed_meaning),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}
