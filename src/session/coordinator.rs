//! The Match Coordinator: the turn-resolution state machine.
//!
//! The coordinator owns the grid, the clock, the RNG, the save store, and
//! the audio director. It tracks which cards are face-up, compares pairs,
//! reverts mismatches after a delay, and detects game completion.
//!
//! ## Phases
//!
//! - `Dormant`: no grid dealt yet
//! - `Revealing`: initial all-cards-front preview, gate closed
//! - `Idle`: no unresolved cards face-up
//! - `OneRevealed`: one card face-up, awaiting the second
//! - `Resolving`: two cards revealed, mismatch reversal in flight, gate
//!   closed
//! - `Complete`: all pairs found, terminal
//!
//! The interaction gate is the sole backpressure mechanism: while closed,
//! player flip requests are dropped. A flip already animating when a
//! mismatch is detected lands mid-resolution; its completion is appended to
//! the face-up list without comparison and dropped wholesale when the
//! reversal fires.

use smallvec::SmallVec;

use crate::audio::{AudioDirector, AudioSink};
use crate::core::{
    build_deck, normalize_dims, Card, CellId, DesignRegistry, FaceId, GameConfig, GameRng, Grid,
};
use crate::error::{GameError, SaveError};
use crate::events::{EventQueue, GameEvent};
use crate::save::{SaveSnapshot, SaveStore};
use crate::session::{Countdown, GameClock};

/// Coordinator phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No grid dealt.
    Dormant,
    /// Initial temporary reveal.
    Revealing,
    /// No unresolved cards face-up.
    Idle,
    /// One card face-up.
    OneRevealed,
    /// Two cards revealed; mismatch reversal delay in flight.
    Resolving,
    /// All pairs found. Terminal.
    Complete,
}

impl Phase {
    /// Phases in which flip completions feed the matcher.
    ///
    /// Forced reveals (game start, load reconstruction) complete outside
    /// these and are never compared.
    fn is_live_play(self) -> bool {
        matches!(self, Phase::Idle | Phase::OneRevealed | Phase::Resolving)
    }
}

/// A scheduled mismatch reversal.
#[derive(Clone, Copy, Debug)]
struct PendingReversal {
    delay: Countdown,
    first: CellId,
    second: CellId,
}

/// The central game-logic component.
///
/// Constructed once (see [`GameBuilder`](crate::session::GameBuilder)) and
/// driven by the embedding loop: commands in, [`tick`](Self::tick) once per
/// frame, events drained out.
pub struct MatchCoordinator {
    config: GameConfig,
    designs: DesignRegistry,
    store: Box<dyn SaveStore>,
    audio: AudioDirector,
    rng: GameRng,

    grid: Option<Grid>,
    phase: Phase,
    face_up: SmallVec<[CellId; 2]>,

    turn_count: u32,
    found_pairs: u32,
    total_pairs: u32,

    clock: GameClock,
    reveal: Option<Countdown>,
    reversal: Option<PendingReversal>,
    can_interact: bool,

    events: EventQueue,
}

impl MatchCoordinator {
    /// Assemble a coordinator from its collaborators.
    #[must_use]
    pub fn new(
        config: GameConfig,
        designs: DesignRegistry,
        store: Box<dyn SaveStore>,
        sink: Box<dyn AudioSink>,
        rng: GameRng,
    ) -> Self {
        log::debug!("rng seed {}", rng.seed());
        let flip_cue_secs = config.flip_cue_secs;
        Self {
            config,
            designs,
            store,
            audio: AudioDirector::new(sink, flip_cue_secs),
            rng,
            grid: None,
            phase: Phase::Dormant,
            face_up: SmallVec::new(),
            turn_count: 0,
            found_pairs: 0,
            total_pairs: 0,
            clock: GameClock::new(),
            reveal: None,
            reversal: None,
            can_interact: false,
            events: EventQueue::new(),
        }
    }

    // ------------------------------------------------------------------
    // Commands (presentation → core)
    // ------------------------------------------------------------------

    /// Deal a new shuffled grid and start the initial reveal.
    ///
    /// Odd cell counts are normalized with a warning. Fails with
    /// [`GameError::InsufficientDesigns`] without touching the current game
    /// or the save slot; a successful start does not clear an existing save
    /// either.
    pub fn start_new_game(&mut self, rows: usize, cols: usize) -> Result<(), GameError> {
        let (rows, cols) = normalize_dims(rows, cols);
        let pairs = rows * cols / 2;
        let faces = build_deck(pairs, &self.designs, &mut self.rng)?;

        let mut grid = Grid::deal(rows, cols, faces);
        for (_, card) in grid.iter_mut() {
            card.force_show_front();
        }
        for (cell, _) in grid.iter() {
            self.events.push(GameEvent::FlipCompleted { cell, face_up: true });
        }
        self.grid = Some(grid);

        self.face_up.clear();
        self.reversal = None;
        self.turn_count = 0;
        self.found_pairs = 0;
        self.total_pairs = pairs as u32;
        self.can_interact = false;
        self.clock.reset();

        self.reveal = Some(Countdown::new(self.config.reveal_secs));
        self.phase = Phase::Revealing;
        self.emit_counters();
        log::info!("new game: {}x{} ({} pairs)", rows, cols, pairs);
        Ok(())
    }

    /// Reconstruct the game from the stored snapshot.
    ///
    /// Fails with [`GameError::NothingToLoad`] when the slot is empty,
    /// leaving all state unchanged. Matched cells come back face-up and
    /// locked; unmatched cells are restored to their saved orientation but
    /// not entered into the face-up list, reproducing the logical state at
    /// save time.
    pub fn load_game(&mut self) -> Result<(), GameError> {
        let snapshot = match self.store.read()? {
            Some(s) => s,
            None => {
                log::info!("no saved game found");
                return Err(GameError::NothingToLoad);
            }
        };
        if !snapshot.is_consistent() {
            return Err(GameError::Save(SaveError::Corrupted));
        }

        let faces = snapshot.card_faces.iter().map(|&f| FaceId::new(f)).collect();
        let mut grid = Grid::deal(snapshot.rows, snapshot.cols, faces);
        let mut hidden = 0usize;
        for (cell, card) in grid.iter_mut() {
            let i = cell.index();
            if snapshot.matched[i] {
                card.set_matched();
                card.force_show_front();
            } else if snapshot.face_up[i] {
                card.force_show_front();
            } else {
                card.force_show_back();
                hidden += 1;
            }
        }
        for (cell, card) in grid.iter() {
            self.events.push(GameEvent::FlipCompleted {
                cell,
                face_up: card.is_face_up(),
            });
        }
        self.grid = Some(grid);

        // Forced hides fire the flip cue, forced reveals stay silent
        for _ in 0..hidden {
            self.audio.play_flip();
        }

        self.face_up.clear();
        self.reversal = None;
        self.reveal = None;
        self.turn_count = snapshot.turn_count;
        self.found_pairs = snapshot.found_pairs;
        self.total_pairs = snapshot.total_pairs;
        self.can_interact = true;
        self.clock.resume_at(snapshot.saved_time);
        self.phase = Phase::Idle;
        self.emit_counters();
        log::info!("game loaded: {}x{}", snapshot.rows, snapshot.cols);
        Ok(())
    }

    /// Player asks to flip a cell.
    ///
    /// Dropped (returns `false`) while the gate is closed, for out-of-range
    /// cells, and for animating or matched cards. Flips toggle, so flipping
    /// a lone revealed card back down is legal.
    pub fn request_flip(&mut self, cell: CellId) -> bool {
        if !self.can_interact {
            return false;
        }
        let flip_secs = self.config.flip_secs;
        let started = match self.grid.as_mut().and_then(|g| g.card_mut(cell)) {
            Some(card) => card.begin_flip(flip_secs),
            None => false,
        };
        if !started {
            return false;
        }

        self.audio.play_flip();
        self.events.push(GameEvent::FlipRequested { cell });
        true
    }

    /// Advance the cooperative scheduler by `dt` seconds.
    ///
    /// Steps the clock, the audio pitch-reset task, every card animation
    /// (completions handled in cell order), the reveal countdown, and the
    /// mismatch reversal countdown.
    pub fn tick(&mut self, dt: f32) {
        self.clock.tick(dt);
        self.audio.tick(dt);

        let mut completions: SmallVec<[(CellId, bool); 4]> = SmallVec::new();
        if let Some(grid) = self.grid.as_mut() {
            for (cell, card) in grid.iter_mut() {
                if let Some(face_up) = card.advance(dt) {
                    completions.push((cell, face_up));
                }
            }
        }
        for (cell, face_up) in completions {
            self.events.push(GameEvent::FlipCompleted { cell, face_up });
            if self.phase.is_live_play() {
                self.on_flip_completed(cell, face_up);
            }
        }

        let reveal_fired = self.reveal.as_mut().is_some_and(|cd| cd.tick(dt));
        if reveal_fired {
            self.reveal = None;
            self.end_reveal();
        }

        let reversal_fired = self
            .reversal
            .as_mut()
            .and_then(|p| p.delay.tick(dt).then_some((p.first, p.second)));
        if let Some((first, second)) = reversal_fired {
            self.reversal = None;
            self.revert_mismatch(first, second);
        }
    }

    // ------------------------------------------------------------------
    // Read-only views (presentation ← core)
    // ------------------------------------------------------------------

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Is the interaction gate open?
    #[must_use]
    pub fn can_interact(&self) -> bool {
        self.can_interact
    }

    /// Pairs in the current grid.
    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.total_pairs
    }

    /// Pairs found so far.
    #[must_use]
    pub fn found_pairs(&self) -> u32 {
        self.found_pairs
    }

    /// Turns attempted so far.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// In-game elapsed seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Unresolved face-up cards currently tracked.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.face_up.len()
    }

    /// The current grid, if one is dealt.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// A card view for rendering.
    #[must_use]
    pub fn card(&self, cell: CellId) -> Option<&Card> {
        self.grid.as_ref().and_then(|g| g.card(cell))
    }

    /// The face design pool.
    #[must_use]
    pub fn designs(&self) -> &DesignRegistry {
        &self.designs
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Is a saved game available to load?
    #[must_use]
    pub fn has_save(&self) -> bool {
        self.store.has_save()
    }

    /// Any suspended operation still in flight (animations, reveal,
    /// reversal)? Frontends tick until this clears.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.reveal.is_some()
            || self.reversal.is_some()
            || self
                .grid
                .as_ref()
                .is_some_and(|g| g.iter().any(|(_, c)| c.is_animating()))
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // ------------------------------------------------------------------
    // Turn resolution
    // ------------------------------------------------------------------

    fn on_flip_completed(&mut self, cell: CellId, face_up: bool) {
        let card = match self.grid.as_ref().and_then(|g| g.card(cell)) {
            Some(c) => c,
            None => return,
        };
        if card.is_matched() {
            return;
        }

        if !face_up {
            // Asynchronous reversal of a previously mismatched card
            self.face_up.retain(|c| *c != cell);
            if self.face_up.is_empty() && self.phase == Phase::OneRevealed {
                self.phase = Phase::Idle;
            }
            return;
        }

        if self.phase == Phase::Resolving {
            // A flip already in flight when the mismatch was detected:
            // defer it, never compare it
            if !self.face_up.contains(&cell) {
                self.face_up.push(cell);
            }
            return;
        }

        if self.face_up.len() == 2 {
            // Stale/duplicate notification; the gate normally prevents this
            return;
        }
        if !self.face_up.contains(&cell) {
            self.face_up.push(cell);
        }
        if self.face_up.len() < 2 {
            self.phase = Phase::OneRevealed;
            return;
        }

        self.resolve_pair();
    }

    fn resolve_pair(&mut self) {
        let first = self.face_up[0];
        let second = self.face_up[1];

        self.turn_count += 1;
        log::debug!("turn {}", self.turn_count);

        let faces = {
            let grid = match self.grid.as_ref() {
                Some(g) => g,
                None => return,
            };
            match (grid.card(first), grid.card(second)) {
                (Some(a), Some(b)) => (a.face(), b.face()),
                _ => return,
            }
        };

        if faces.0 == faces.1 {
            self.audio.play_match();
            if let Some(grid) = self.grid.as_mut() {
                if let Some(card) = grid.card_mut(first) {
                    card.set_matched();
                }
                if let Some(card) = grid.card_mut(second) {
                    card.set_matched();
                }
            }
            self.found_pairs += 1;
            log::info!("pair found: {}/{}", self.found_pairs, self.total_pairs);
            self.face_up.clear();

            if self.found_pairs >= self.total_pairs {
                self.complete_game();
            } else {
                self.persist();
                self.phase = Phase::Idle;
            }
        } else {
            self.can_interact = false;
            self.reversal = Some(PendingReversal {
                delay: Countdown::new(self.config.mismatch_delay_secs),
                first,
                second,
            });
            self.phase = Phase::Resolving;
        }

        self.emit_counters();
    }

    fn end_reveal(&mut self) {
        let flip_secs = self.config.flip_secs;
        if let Some(grid) = self.grid.as_mut() {
            for (_, card) in grid.iter_mut() {
                card.begin_flip_to(false, flip_secs);
            }
        }
        log::info!("all cards hidden - game start");
        self.can_interact = true;
        self.clock.start();
        self.phase = Phase::Idle;
    }

    fn revert_mismatch(&mut self, first: CellId, second: CellId) {
        let flip_secs = self.config.flip_secs;
        for cell in [first, second] {
            // Only if still unmatched and still face-up
            let needs_flip = self
                .grid
                .as_ref()
                .and_then(|g| g.card(cell))
                .is_some_and(|c| !c.is_matched() && c.is_face_up());
            if needs_flip {
                self.audio.play_flip();
                self.events.push(GameEvent::FlipRequested { cell });
                if let Some(card) = self.grid.as_mut().and_then(|g| g.card_mut(cell)) {
                    card.begin_flip_to(false, flip_secs);
                }
            }
        }

        // Drops any third flip deferred during resolution
        self.face_up.clear();
        self.can_interact = true;
        self.phase = Phase::Idle;
    }

    fn complete_game(&mut self) {
        self.phase = Phase::Complete;
        self.can_interact = false;
        self.clock.stop();
        self.audio.play_game_over();
        self.grid = None;
        if let Err(e) = self.store.clear() {
            log::error!("failed to clear save: {e}");
        }
        self.events.push(GameEvent::GameCompleted {
            turn_count: self.turn_count,
            elapsed_secs: self.clock.elapsed(),
        });
        log::info!(
            "game completed in {} turns ({:.1}s)",
            self.turn_count,
            self.clock.elapsed()
        );
    }

    fn persist(&mut self) {
        let grid = match self.grid.as_ref() {
            Some(g) => g,
            None => return,
        };
        let snapshot = SaveSnapshot {
            rows: grid.rows(),
            cols: grid.cols(),
            card_faces: grid.iter().map(|(_, c)| c.face().raw()).collect(),
            matched: grid.iter().map(|(_, c)| c.is_matched()).collect(),
            face_up: grid.iter().map(|(_, c)| c.is_face_up()).collect(),
            turn_count: self.turn_count,
            found_pairs: self.found_pairs,
            total_pairs: self.total_pairs,
            saved_time: self.clock.elapsed(),
        };
        match self.store.write(&snapshot) {
            Ok(()) => log::info!("game saved"),
            Err(e) => log::error!("failed to save game: {e}"),
        }
    }

    fn emit_counters(&mut self) {
        self.events.push(GameEvent::CountersUpdated {
            total_pairs: self.total_pairs,
            found_pairs: self.found_pairs,
            turn_count: self.turn_count,
        });
    }
}
