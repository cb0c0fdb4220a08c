//! Fixed layout templates: position labels and fan geometry.
//!
//! The engine assigns no meaning to draw order. These labels are purely
//! presentation, keyed by position.

use super::kind::SpreadKind;

/// Three-card positions, in draw order.
pub const THREE_CARD_POSITIONS: [&str; 3] = ["Past", "Present", "Future"];

/// Celtic Cross positions 1..=10, in draw order.
pub const CELTIC_CROSS_POSITIONS: [&str; 10] = [
    "Present",
    "Challenge",
    "Foundation",
    "Recent Past",
    "Crown",
    "Near Future",
    "Self",
    "Environment",
    "Hopes and Fears",
    "Outcome",
];

/// Presentation label for the slot at zero-based `position`.
#[must_use]
pub fn position_label(kind: SpreadKind, position: usize) -> Option<&'static str> {
    match kind {
        SpreadKind::ThreeCard => THREE_CARD_POSITIONS.get(position).copied(),
        SpreadKind::CelticCross => CELTIC_CROSS_POSITIONS.get(position).copied(),
        SpreadKind::Single | SpreadKind::Fan => None,
    }
}

/// Element id for the slot at zero-based `position`, if the layout names it.
#[must_use]
pub fn slot_id(kind: SpreadKind, position: usize) -> Option<String> {
    match kind {
        SpreadKind::CelticCross => Some(format!("celtic-pos-{}", position + 1)),
        _ => None,
    }
}

/// Rotation in degrees for each of `count` fanned cards.
///
/// Cards rotate about the card at `count / 2`; the first card sits at
/// `-max_angle`. A lone card is not rotated.
#[must_use]
pub fn fan_angles(count: usize, max_angle: f64) -> Vec<f64> {
    let center = count / 2;
    (0..count)
        .map(|i| {
            if center == 0 {
                0.0
            } else {
                (i as f64 - center as f64) / center as f64 * max_angle
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_labels() {
        assert_eq!(position_label(SpreadKind::ThreeCard, 0), Some("Past"));
        assert_eq!(position_label(SpreadKind::ThreeCard, 2), Some("Future"));
        assert_eq!(position_label(SpreadKind::ThreeCard, 3), None);
        assert_eq!(position_label(SpreadKind::CelticCross, 9), Some("Outcome"));
        assert_eq!(position_label(SpreadKind::Single, 0), None);
    }

    #[test]
    fn test_slot_ids() {
        assert_eq!(slot_id(SpreadKind::CelticCross, 0).as_deref(), Some("celtic-pos-1"));
        assert_eq!(slot_id(SpreadKind::CelticCross, 9).as_deref(), Some("celtic-pos-10"));
        assert_eq!(slot_id(SpreadKind::ThreeCard, 0), None);
    }

    #[test]
    fn test_fan_of_fifteen_is_symmetric() {
        let angles = fan_angles(15, 40.0);
        assert_eq!(angles.len(), 15);
        assert_eq!(angles[0], -40.0);
        assert_eq!(angles[7], 0.0);
        assert_eq!(angles[14], 40.0);
    }

    #[test]
    fn test_even_fan_leans_left() {
        // Center is count / 2, so an even fan stops one step short of +max.
        assert_eq!(fan_angles(4, 40.0), vec![-40.0, -20.0, 0.0, 20.0]);
    }

    #[test]
    fn test_small_fans() {
        assert!(fan_angles(0, 40.0).is_empty());
        assert_eq!(fan_angles(1, 40.0), vec![0.0]);
        assert_eq!(fan_angles(2, 40.0), vec![-40.0, 0.0]);
    }
}
