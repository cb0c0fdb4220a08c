//! Spread rendering: layouts, slots and the table state machine.
//!
//! ## Key Types
//!
//! - `SpreadKind`: Single, ThreeCard, CelticCross or Fan
//! - `CardSlot` / `FanSlot`: What a container holds
//! - `SpreadTable`: Shows one spread at a time and handles clicks

pub mod kind;
pub mod layout;
pub mod slot;
pub mod table;

pub use kind::{ContainerDisplay, SpreadKind};
pub use slot::{CardSlot, FanSlot};
pub use table::{ClickOutcome, Container, Slots, SpreadTable};
