//! Card cell state machine.
//!
//! A card is one grid cell: a face identifier, a face-up flag, a matched
//! flag, and at most one flip animation in flight. The animation swaps the
//! displayed face at its midpoint and reports completion to the caller, who
//! is responsible for emitting the "flip completed" notification.
//!
//! State transitions:
//!
//! - `Back` → `FrontAnimating` → `Front` via [`Card::begin_flip`]
//! - `Front` → `Back` the same way (flips toggle)
//! - forced [`Card::force_show_front`] / [`Card::force_show_back`] bypass
//!   animation (initial reveal, load reconstruction)
//! - `Matched` is terminal: further flip requests are rejected

use serde::{Deserialize, Serialize};

/// Grid cell identifier (row-major index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u16);

impl CellId {
    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The cell's index into the grid's card vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// A timed flip animation.
///
/// The displayed face swaps when `elapsed` crosses half of `duration`,
/// mirroring a scale-to-zero-and-back flip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct FlipAnimation {
    duration: f32,
    elapsed: f32,
    target_front: bool,
    swapped: bool,
}

impl FlipAnimation {
    fn new(target_front: bool, duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
            target_front,
            swapped: false,
        }
    }
}

/// A single grid cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    face: super::FaceId,
    face_up: bool,
    matched: bool,
    anim: Option<FlipAnimation>,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(face: super::FaceId) -> Self {
        Self {
            face,
            face_up: false,
            matched: false,
            anim: None,
        }
    }

    /// The face this card shows when revealed.
    #[must_use]
    pub fn face(&self) -> super::FaceId {
        self.face
    }

    /// Is the card currently showing its face?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Has this card been matched? Matched cards reject all flips.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Is a flip animation in flight?
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Lock this card as matched. Terminal.
    pub fn set_matched(&mut self) {
        self.matched = true;
    }

    /// Start a toggling flip animation.
    ///
    /// Rejected (returns `false`) while animating or matched.
    pub fn begin_flip(&mut self, duration: f32) -> bool {
        let target = !self.face_up;
        self.begin_flip_to(target, duration)
    }

    /// Start a flip animation toward a specific orientation.
    ///
    /// Used by the mismatch reversal and the post-reveal hide, which always
    /// target face-down. Rejected while animating or matched.
    pub fn begin_flip_to(&mut self, target_front: bool, duration: f32) -> bool {
        if self.anim.is_some() || self.matched {
            return false;
        }
        self.anim = Some(FlipAnimation::new(target_front, duration));
        true
    }

    /// Show the front immediately, cancelling any animation.
    pub fn force_show_front(&mut self) {
        self.anim = None;
        self.face_up = true;
    }

    /// Show the back immediately, cancelling any animation.
    pub fn force_show_back(&mut self) {
        self.anim = None;
        self.face_up = false;
    }

    /// Advance the flip animation by `dt` seconds.
    ///
    /// Returns `Some(face_up)` exactly once, when the animation completes.
    pub fn advance(&mut self, dt: f32) -> Option<bool> {
        let anim = self.anim.as_mut()?;
        anim.elapsed += dt;

        if !anim.swapped && anim.elapsed >= anim.duration / 2.0 {
            anim.swapped = true;
            self.face_up = anim.target_front;
        }

        if anim.elapsed >= anim.duration {
            self.face_up = anim.target_front;
            self.anim = None;
            return Some(self.face_up);
        }
        None
    }
}
