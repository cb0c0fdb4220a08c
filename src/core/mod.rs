//! Core building blocks: RNG, configuration and errors.
//!
//! Nothing in here knows about spreads. The draw engine and the table
//! are built on top of these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{TableConfig, CARD_BACK_URL, DEFAULT_DECK_PATH};
pub use error::{LoadError, ParseSpreadError};
pub use rng::{DrawRng, DrawRngState};
