//! JSON view model for a browser front-end.
//!
//! Every container appears with its id, display mode and visibility, so the
//! page can bind to the same four regions it always had.

use serde::Serialize;

use crate::spread::{CardSlot, ContainerDisplay, FanSlot, Slots, SpreadKind, SpreadTable};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TableView<'a> {
    question: &'a str,
    visible: Option<&'static str>,
    card_back: &'a str,
    containers: Vec<ContainerView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContainerView<'a> {
    id: &'static str,
    control: &'static str,
    display: ContainerDisplay,
    visible: bool,
    slots: Vec<SlotView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum SlotView<'a> {
    #[serde(rename_all = "camelCase")]
    Card {
        position: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<&'static str>,
        name: &'a str,
        orientation: &'static str,
        image: &'a str,
        meaning: &'a str,
        face_up: bool,
    },
    #[serde(rename_all = "camelCase")]
    FaceDown { index: usize, angle: f64 },
}

impl<'a> From<&'a CardSlot> for SlotView<'a> {
    fn from(slot: &'a CardSlot) -> Self {
        Self::Card {
            position: slot.position,
            id: slot.id.as_deref(),
            label: slot.label,
            name: slot.drawn.name(),
            orientation: slot.drawn.orientation_label(),
            image: slot.drawn.display_image(),
            meaning: slot.drawn.display_meaning(),
            face_up: slot.face_up,
        }
    }
}

impl<'a> From<&'a FanSlot> for SlotView<'a> {
    fn from(slot: &'a FanSlot) -> Self {
        Self::FaceDown {
            index: slot.index,
            angle: slot.angle,
        }
    }
}

fn container_view(table: &SpreadTable, kind: SpreadKind) -> ContainerView<'_> {
    let container = table.container(kind);
    let slots = match &container.slots {
        Slots::Cards(cards) => cards.iter().map(SlotView::from).collect(),
        Slots::FaceDown(fan) => fan.iter().map(SlotView::from).collect(),
        Slots::Empty => Vec::new(),
    };
    ContainerView {
        id: kind.container_id(),
        control: kind.control_id(),
        display: kind.display(),
        visible: container.visible,
        slots,
    }
}

/// Serialize the whole table as a view model.
///
/// Face-down fan slots carry only their position and angle; the card
/// identity stays hidden until it is picked.
pub fn render_table(table: &SpreadTable) -> serde_json::Result<String> {
    let view = TableView {
        question: table.question_display(),
        visible: table.visible().map(SpreadKind::container_id),
        card_back: &table.config().card_back_url,
        containers: SpreadKind::ALL
            .into_iter()
            .map(|kind| container_view(table, kind))
            .collect(),
    };
    serde_json::to_string_pretty(&view)
}
