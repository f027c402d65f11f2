//! Coordinator assembly.
//!
//! The coordinator takes every collaborator by injection; the builder wires
//! the common case (standard design pool, in-memory store, silent audio,
//! entropy seed).

use crate::audio::{AudioSink, NullSink};
use crate::core::{DesignRegistry, GameConfig, GameRng};
use crate::save::{MemoryStore, SaveStore};

use super::MatchCoordinator;

/// Builder for a [`MatchCoordinator`].
///
/// ## Example
///
/// ```
/// use match_pairs::session::GameBuilder;
///
/// let mut game = GameBuilder::new().seed(42).build();
/// game.start_new_game(2, 2).unwrap();
/// ```
pub struct GameBuilder {
    config: GameConfig,
    designs: DesignRegistry,
    store: Option<Box<dyn SaveStore>>,
    sink: Option<Box<dyn AudioSink>>,
    seed: Option<u64>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            designs: DesignRegistry::standard(),
            store: None,
            sink: None,
            seed: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific design pool instead of the standard one.
    pub fn designs(mut self, designs: DesignRegistry) -> Self {
        self.designs = designs;
        self
    }

    /// Use a specific save store (default: in-memory).
    pub fn store(mut self, store: Box<dyn SaveStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a specific audio sink (default: discard).
    pub fn sink(mut self, sink: Box<dyn AudioSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Fix the shuffle seed (default: OS entropy).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the coordinator.
    pub fn build(self) -> MatchCoordinator {
        MatchCoordinator::new(
            self.config,
            self.designs,
            self.store.unwrap_or_else(|| Box::new(MemoryStore::new())),
            self.sink.unwrap_or_else(|| Box::new(NullSink)),
            self.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy),
        )
    }
}
