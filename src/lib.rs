//! # match-pairs
//!
//! A tile-matching memory card game engine: a grid of cards hidden
//! face-down, flipped by player interaction, matched in pairs, with
//! score/turn tracking and save/load.
//!
//! ## Design Principles
//!
//! 1. **Headless**: no rendering, no input capture, no audio device. The
//!    embedding presentation layer sends commands, drives `tick(dt)` once
//!    per frame, and drains notifications.
//!
//! 2. **Explicit injection**: the coordinator takes its design pool, save
//!    store, and audio sink as constructor arguments. No process-wide
//!    singletons.
//!
//! 3. **Single-threaded cooperative scheduling**: every suspended operation
//!    (flip animations, the initial reveal, the mismatch reversal, the
//!    audio pitch reset) is a value holding remaining time, advanced per
//!    tick.
//!
//! ## Modules
//!
//! - `core`: cards, grid, deck generation, face designs, configuration, RNG
//! - `session`: the Match Coordinator state machine, builder, timers
//! - `save`: flat save snapshot plus memory- and file-backed stores
//! - `audio`: fire-and-forget cue delivery with the pitched flip cue
//! - `events`: the drained core → presentation notification queue
//! - `error`: the error taxonomy

pub mod audio;
pub mod core;
pub mod error;
pub mod events;
pub mod save;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    build_deck, normalize_dims, Card, CellId, DesignRegistry, Difficulty, FaceDesign, FaceId,
    GameConfig, GameRng, Grid, GridPreset,
};

pub use crate::session::{Countdown, GameBuilder, GameClock, MatchCoordinator, Phase};

pub use crate::save::{FileStore, MemoryStore, SaveSnapshot, SaveStore};

pub use crate::audio::{AudioCue, AudioDirector, AudioSink, NullSink};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::error::{GameError, SaveError};
