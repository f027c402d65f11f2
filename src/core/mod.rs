//! Core game-agnostic building blocks.
//!
//! - `card`: the per-cell state machine (face, matched, flip animation)
//! - `grid`: the dealt rows × cols container and dimension normalization
//! - `deck`: paired-face deck generation
//! - `design`: the face design pool the deck draws from
//! - `config`: grid defaults, timing knobs, menu presets
//! - `rng`: deterministic shuffling

pub mod card;
pub mod config;
pub mod deck;
pub mod design;
pub mod grid;
pub mod rng;

pub use card::{Card, CellId};
pub use config::{Difficulty, GameConfig, GridPreset};
pub use deck::build_deck;
pub use design::{DesignRegistry, FaceDesign, FaceId};
pub use grid::{normalize_dims, Grid};
pub use rng::GameRng;
