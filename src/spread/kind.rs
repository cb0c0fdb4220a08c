//! Spread kinds and the fixed identifiers the page binds to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ParseSpreadError;

/// A named spread layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpreadKind {
    Single,
    ThreeCard,
    CelticCross,
    Fan,
}

/// CSS display mode a container gets when shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerDisplay {
    Flex,
    Block,
}

impl SpreadKind {
    /// All spreads, in control order.
    pub const ALL: [SpreadKind; 4] = [
        SpreadKind::Single,
        SpreadKind::ThreeCard,
        SpreadKind::CelticCross,
        SpreadKind::Fan,
    ];

    /// Short key used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Single => "one",
            Self::ThreeCard => "three",
            Self::CelticCross => "celtic",
            Self::Fan => "fan",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Single => "One Card",
            Self::ThreeCard => "Three Card",
            Self::CelticCross => "Celtic Cross",
            Self::Fan => "Fan",
        }
    }

    /// Id of the container region this spread renders into.
    #[must_use]
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Single => "oneCardSpread",
            Self::ThreeCard => "threeCardSpread",
            Self::CelticCross => "celticSpread",
            Self::Fan => "fanSpread",
        }
    }

    /// Id of the control that selects this spread.
    #[must_use]
    pub const fn control_id(self) -> &'static str {
        match self {
            Self::Single => "btnOne",
            Self::ThreeCard => "btnThree",
            Self::CelticCross => "btnCeltic",
            Self::Fan => "btnFan",
        }
    }

    #[must_use]
    pub const fn display(self) -> ContainerDisplay {
        match self {
            Self::Single | Self::ThreeCard => ContainerDisplay::Flex,
            Self::CelticCross | Self::Fan => ContainerDisplay::Block,
        }
    }

    /// Cards drawn when shown. The fan draws nothing up front.
    #[must_use]
    pub const fn draw_count(self) -> Option<usize> {
        match self {
            Self::Single => Some(1),
            Self::ThreeCard => Some(3),
            Self::CelticCross => Some(10),
            Self::Fan => None,
        }
    }
}

impl std::fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SpreadKind {
    type Err = ParseSpreadError;

    /// Accepts the short key, the control id or the container id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                wanted.eq_ignore_ascii_case(kind.key())
                    || wanted == kind.control_id()
                    || wanted == kind.container_id()
            })
            .ok_or_else(|| ParseSpreadError(s.to_string()))
    }
}
