//! Plain-text rendering for terminals and logs.

use std::fmt::Write;

use crate::spread::{CardSlot, FanSlot, Slots, SpreadTable};

/// Render the question line and the visible spread.
#[must_use]
pub fn render_table(table: &SpreadTable) -> String {
    let mut out = String::new();

    if !table.question_display().is_empty() {
        let _ = writeln!(out, "{}", table.question_display());
    }

    let Some(kind) = table.visible() else {
        return out;
    };

    let _ = writeln!(out, "== {} ==", kind.title());
    match &table.container(kind).slots {
        slots if slots.is_empty() => out.push_str("(no cards)\n"),
        Slots::Cards(cards) => cards.iter().for_each(|slot| card_line(&mut out, slot)),
        Slots::FaceDown(fan) => fan.iter().for_each(|slot| fan_line(&mut out, slot)),
        Slots::Empty => {}
    }
    out
}

fn card_line(out: &mut String, slot: &CardSlot) {
    let drawn = &slot.drawn;
    let _ = write!(out, "[{}] ", slot.position);
    if let Some(label) = slot.label {
        let _ = write!(out, "{label}: ");
    }
    let face = if slot.face_up { "face up" } else { "face down" };
    let _ = writeln!(
        out,
        "{} ({}) - {} [{}]",
        drawn.name(),
        drawn.orientation_label(),
        drawn.display_meaning(),
        face
    );
}

fn fan_line(out: &mut String, slot: &FanSlot) {
    let _ = writeln!(out, "[{}] {:+.1} deg (card back)", slot.index, slot.angle);
}
