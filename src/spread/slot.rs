//! Interactive card slots.

use serde::Serialize;

use crate::cards::{CardDefinition, DrawnCard};

/// A drawn card placed in a spread.
///
/// `face_up` is purely visual; toggling it never touches the drawn card.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSlot {
    /// One-based position in the spread.
    pub position: usize,

    /// Element id, for layouts that address slots individually.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Positional meaning ("Past", "Crown", ...), if the layout has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,

    pub drawn: DrawnCard,

    pub face_up: bool,
}

impl CardSlot {
    /// A face-down slot at one-based `position`.
    #[must_use]
    pub fn new(position: usize, drawn: DrawnCard) -> Self {
        Self {
            position,
            id: None,
            label: None,
            drawn,
            face_up: false,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: Option<&'static str>) -> Self {
        self.label = label;
        self
    }

    /// Flip the card over. Returns the new `face_up`.
    pub fn toggle(&mut self) -> bool {
        self.face_up = !self.face_up;
        self.face_up
    }
}

/// A face-down card in the fan, bound to a deck position.
///
/// The definition is known up front; orientation is only rolled when the
/// slot is picked.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FanSlot {
    /// Deck position this slot reveals.
    pub index: usize,

    pub card: CardDefinition,

    /// Rotation in degrees.
    pub angle: f64,
}

impl FanSlot {
    #[must_use]
    pub fn new(index: usize, card: CardDefinition, angle: f64) -> Self {
        Self { index, card, angle }
    }
}
